use criterion::{criterion_group, Criterion};
use std::hint::black_box;
use tessera_rlp::{Config, Output};

fn bench_encode_nested(c: &mut Criterion) {
    for depth in [10, 100, 1_000] {
        for presized in [false, true] {
            c.bench_function(
                &format!("{}/depth={} presized={}", module_path!(), depth, presized),
                |b| {
                    b.iter(|| {
                        let mut output = if presized {
                            Output::with_config(Config {
                                items: 2 * depth,
                                lists: depth + 1,
                                depth: depth + 1,
                            })
                        } else {
                            Output::new()
                        };
                        for i in 0..depth {
                            output.start_list().unwrap();
                            output.write_u64(i as u64).unwrap();
                        }
                        for _ in 0..depth {
                            output.end_list().unwrap();
                        }
                        black_box(output.encode().unwrap());
                    })
                },
            );
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_encode_nested
}
