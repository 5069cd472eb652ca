//! Benchmark workloads for growvec.
//!
//! - [`filled`]: an array of `n` sequential values at exact capacity.
//! - [`positions`]: deterministic pseudo-random indices for insert/erase churn.
//! - [`mixed_ops`]: a deterministic operation mix replayed through
//!   [`growvec_test_utils::model::apply`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::GrowableArray;
use growvec_test_utils::Op;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Array holding `0..n` with capacity exactly `n`.
pub fn filled(n: usize) -> GrowableArray<u64> {
    let mut array = GrowableArray::new();
    array.reserve(n);
    for v in 0..n as u64 {
        array.push_back(v);
    }
    array
}

/// `count` indices for churn against an array whose length starts at
/// `start_len` and grows by one per insert.
///
/// Index `k` is drawn uniformly from `0..=start_len + k`, so every index is
/// valid for the `k`-th insert.
pub fn positions(seed: u64, start_len: usize, count: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|k| (rng.next_u64() % (start_len + k + 1) as u64) as usize)
        .collect()
}

/// A deterministic mix of `count` operations, weighted towards appends so
/// the array keeps growing. Some indices are deliberately out of range.
pub fn mixed_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut approx_len: i64 = 0;
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let roll = rng.next_u32() % 10;
        let value = rng.next_u32() as i32;
        // Spread indices slightly past the end to exercise rejections.
        let index = (rng.next_u64() % (approx_len as u64 + 2)) as i64;
        let op = match roll {
            0..=3 => {
                approx_len += 1;
                Op::PushBack(value)
            }
            4 | 5 => {
                if index <= approx_len {
                    approx_len += 1;
                }
                Op::Insert(index, value)
            }
            6 => {
                if index < approx_len {
                    approx_len -= 1;
                }
                Op::Erase(index)
            }
            7 => {
                approx_len = (approx_len - 1).max(0);
                Op::PopBack
            }
            _ => Op::At(index),
        };
        ops.push(op);
    }
    ops
}
