// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use parapet_digest::{Sha256, sha256};

fn benchmark_sha256_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_one_shot");

    for msg_len in [64usize, 256, 1024, 4096, 16384, 65536].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} byte message", msg_len), msg_len, |b, &msg_len| {
            let msg = vec![0xa5u8; msg_len];

            b.iter(|| sha256(black_box(&msg)));
        });
    }
    group.finish();
}

fn benchmark_sha256_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_streaming");

    // 64 KiB fed in 64-byte updates, the worst case for the block buffer
    let msg = vec![0xa5u8; 65536];
    group.throughput(Throughput::Bytes(msg.len() as u64));
    group.bench_function("64 byte updates", |b| {
        b.iter(|| {
            let mut state = Sha256::new();
            for chunk in msg.chunks(64) {
                state.update(black_box(chunk)).expect("update failed");
            }
            state.finalize().expect("finalize failed")
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_sha256_one_shot, benchmark_sha256_streaming);
criterion_main!(benches);
