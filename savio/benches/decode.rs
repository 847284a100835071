use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use savio::{decode, serialize, FileHeader, VariableDefinition};

fn synthetic_file(variables: usize, rng: &mut impl Rng) -> Vec<u8> {
    let header = FileHeader {
        variable_count: variables as i32,
        case_count: -1,
        ..FileHeader::new()
    }
    .with_file_label("benchmark");
    let mut bytes = header.to_bytes_array().to_vec();
    for i in 0..variables {
        let variable = if rng.gen_bool(0.3) {
            VariableDefinition::string(format!("S{i}"), rng.gen_range(1..=255))
        } else {
            VariableDefinition::numeric(format!("N{i}"))
        };
        let variable = if rng.gen_bool(0.5) {
            let len = rng.gen_range(0..120);
            variable.with_label("x".repeat(len))
        } else {
            variable
        };
        bytes.extend_from_slice(&variable.to_bytes());
    }
    bytes.extend_from_slice(&999i32.to_le_bytes());
    bytes
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("decode");
    for variables in [10, 1_000, 50_000] {
        let bytes = synthetic_file(variables, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(variables), &bytes, |b, bytes| {
            b.iter(|| decode(black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let file = decode(&synthetic_file(1_000, &mut rng)).unwrap();
    c.bench_function("serialize_1000_variables", |b| {
        b.iter(|| serialize(black_box(&file)))
    });
}

criterion_group!(benches, bench_decode, bench_serialize);
criterion_main!(benches);
