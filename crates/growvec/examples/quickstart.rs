//! Quickstart: build arrays from options, mutate them, and handle errors.
//!
//! Run with `RUST_LOG=trace` to see each reallocation reported by the
//! library.

use growvec::options::{self, with_capacity, with_fill, with_values};
use growvec::{ArrayError, GrowableArray};
use log::info;

fn main() -> Result<(), ArrayError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Amortised growth: capacity doubles as elements are appended.
    let mut arr = GrowableArray::new();
    for v in [10, 20, 30] {
        arr.push_back(v);
        info!("pushed {v}: len={} capacity={}", arr.len(), arr.capacity());
    }

    arr.insert(1, 99)?;
    info!("after insert: {arr}");
    let removed = arr.erase(0)?;
    info!("erased {removed}: {arr}");
    arr.resize(5, 0);
    info!("after resize: {arr}");

    // Checked access reports errors instead of panicking.
    match arr.at(42) {
        Ok(v) => info!("at(42) = {v}"),
        Err(err) => info!("at(42) failed: {err}"),
    }

    let capacity = arr.capacity();
    arr.clear();
    info!("cleared: {arr}, capacity kept at {capacity}");
    if let Err(err) = arr.pop_back() {
        info!("pop_back on empty array: {err}");
    }

    // Options are applied in order; the last one decides the final state.
    let reserved = options::new_int([with_capacity(64)]);
    info!("reserved: len={} capacity={}", reserved.len(), reserved.capacity());
    let words = options::new_string([with_capacity(8), with_fill(3, "hi".to_string())]);
    info!("words: {words} (capacity {})", words.capacity());

    let mut a = GrowableArray::build([with_values([1, 2, 3])]);
    let mut b = GrowableArray::builder().values([9, 9]).build();
    a.swap(&mut b);
    info!("swapped: a={a} b={b}");

    Ok(())
}
