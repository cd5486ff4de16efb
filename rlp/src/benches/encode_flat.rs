use bytes::Bytes;
use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::hint::black_box;
use tessera_rlp::Output;

fn bench_encode_flat(c: &mut Criterion) {
    for n in [100, 1_000, 10_000] {
        for size in [1, 32, 256] {
            // Generate random values
            let mut sampler = StdRng::seed_from_u64(0);
            let values: Vec<Bytes> = (0..n)
                .map(|_| {
                    let mut value = vec![0u8; size];
                    sampler.fill_bytes(&mut value);
                    Bytes::from(value)
                })
                .collect();

            c.bench_function(&format!("{}/items={} size={}", module_path!(), n, size), |b| {
                b.iter(|| {
                    let mut output = Output::new();
                    output.start_list().unwrap();
                    for value in &values {
                        output.write_element(value.clone()).unwrap();
                    }
                    output.end_list().unwrap();
                    black_box(output.encode().unwrap());
                })
            });
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_encode_flat
}
