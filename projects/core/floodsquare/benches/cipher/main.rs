use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use floodsquare::{decrypt, encrypt, FloodSquareSettings, Salt};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const KEY: &str = "e1f020c91178264867f3cb99f422cb37";

fn generate_data(num_bytes: usize) -> Vec<u8> {
    (0..num_bytes as u32)
        .map(|i| (i.wrapping_mul(0x9E37_79B9) >> 24) as u8)
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloodSquare Cipher");
    let settings = FloodSquareSettings::default().with_salt(Salt::DEFAULT);

    // 4 KiB up to 256 KiB. Each key digit is two full flood fills of the grid.
    for size in [4096, 65536, 262144] {
        let plaintext = generate_data(size);
        let ciphertext = encrypt(&plaintext, KEY, settings).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, input| {
            b.iter(|| encrypt(input, KEY, settings).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, input| {
            b.iter(|| decrypt(input, KEY, settings).unwrap())
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
