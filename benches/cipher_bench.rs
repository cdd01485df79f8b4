use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;

use symmetric_crypto::crypto::blowfish::Blowfish;
use symmetric_crypto::crypto::cipher_context::CipherContext;
use symmetric_crypto::crypto::cipher_traits::BlockCipher;
use symmetric_crypto::crypto::gost::Gost;
use symmetric_crypto::crypto::way3::Way3;

fn ciphers() -> Vec<(&'static str, Arc<dyn BlockCipher>)> {
    let mut rng = rand::rng();
    let mut bf_key = [0u8; 16];
    rng.fill_bytes(&mut bf_key);
    let mut gost_key = [0u8; 32];
    rng.fill_bytes(&mut gost_key);
    let mut w3_key = [0u8; 12];
    rng.fill_bytes(&mut w3_key);

    vec![
        ("blowfish", Arc::new(Blowfish::new(&bf_key).unwrap()) as Arc<dyn BlockCipher>),
        ("gost", Arc::new(Gost::new(&gost_key).unwrap())),
        ("3way", Arc::new(Way3::new(&w3_key).unwrap())),
    ]
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_block");
    for (name, cipher) in ciphers() {
        let mut block = vec![0u8; cipher.block_size()];
        group.throughput(Throughput::Bytes(block.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| cipher.encrypt_block(&mut block))
        });
    }
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = rand::rng();
    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("modes_64k");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for (name, cipher) in ciphers() {
        let ctx = CipherContext::new(cipher);
        group.bench_function(BenchmarkId::new("ecb", name), |b| {
            b.iter(|| ctx.encrypt_ecb(&data))
        });
        group.bench_function(BenchmarkId::new("cbc", name), |b| {
            b.iter(|| ctx.encrypt_cbc(&data, None).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);
