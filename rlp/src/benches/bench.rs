use criterion::criterion_main;

mod encode_flat;
mod encode_nested;

criterion_main!(encode_flat::benches, encode_nested::benches);
