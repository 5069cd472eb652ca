//! End-to-end scenarios over the public API: the push/insert/erase/resize/
//! clear walkthrough, swap, bound and empty-container errors, and the
//! amortised cost of repeated appends.

use growvec::options::{from_slice, with_capacity, with_fill, with_size, with_values};
use growvec::{ArrayError, GrowableArray};
use growvec_test_utils::assert_invariants;

// ── Walkthrough ─────────────────────────────────────────────────────

#[test]
fn push_insert_erase_resize_clear_walkthrough() {
    let mut arr = GrowableArray::new();
    arr.push_back(10);
    arr.push_back(20);
    arr.push_back(30);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.at(1), Ok(&20));

    arr.insert(1, 99).unwrap();
    assert_eq!(arr, [10, 99, 20, 30]);
    assert_eq!(arr.len(), 4);

    assert_eq!(arr.erase(0), Ok(10));
    assert_eq!(arr, [99, 20, 30]);
    assert_eq!(arr.len(), 3);

    arr.resize(5, 0);
    assert_eq!(arr, [99, 20, 30, 0, 0]);
    assert_eq!(arr.len(), 5);

    let cap_before_clear = arr.capacity();
    arr.clear();
    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), cap_before_clear);
    assert_invariants(&arr);
}

#[test]
fn swap_exchanges_contents_and_capacity() {
    let mut a = GrowableArray::build([with_values([1, 2, 3])]);
    let mut b = GrowableArray::build([with_values([9, 9])]);
    a.reserve(8);
    let (cap_a, cap_b) = (a.capacity(), b.capacity());
    let (ptr_a, ptr_b) = (a.as_slice().as_ptr(), b.as_slice().as_ptr());

    a.swap(&mut b);

    assert_eq!(a, [9, 9]);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(a.capacity(), cap_b);
    assert_eq!(b.capacity(), cap_a);
    // Storage moved with the data rather than being copied.
    assert_eq!(a.as_slice().as_ptr(), ptr_b);
    assert_eq!(b.as_slice().as_ptr(), ptr_a);
}

// ── Errors ──────────────────────────────────────────────────────────

fn snapshot(arr: &GrowableArray<i32>) -> (usize, usize, Vec<i32>) {
    (arr.len(), arr.capacity(), arr.as_slice().to_vec())
}

#[test]
fn out_of_range_errors_leave_array_unchanged() {
    let mut arr = GrowableArray::build([with_capacity(8)]);
    arr.extend([1, 2, 3]);
    let before = snapshot(&arr);
    let size = arr.len() as i64;

    assert!(arr.at(-1).unwrap_err().is_out_of_range());
    assert!(arr.at(size).unwrap_err().is_out_of_range());
    assert!(arr.insert(-1, 0).unwrap_err().is_out_of_range());
    assert!(arr.insert(size + 1, 0).unwrap_err().is_out_of_range());
    assert!(arr.erase(-1).unwrap_err().is_out_of_range());
    assert!(arr.erase(size).unwrap_err().is_out_of_range());

    assert_eq!(snapshot(&arr), before);
    assert_invariants(&arr);
}

#[test]
fn out_of_range_error_carries_index_and_len() {
    let arr = GrowableArray::from([5, 6]);
    assert_eq!(
        arr.at(-7i16),
        Err(ArrayError::IndexOutOfRange { index: -7, len: 2 })
    );
}

#[test]
fn empty_errors_on_new_and_cleared_arrays() {
    let mut fresh = GrowableArray::<i32>::new();
    let mut cleared = GrowableArray::from([1, 2, 3]);
    cleared.clear();

    for arr in [&mut fresh, &mut cleared] {
        let before = snapshot(arr);
        assert_eq!(arr.front(), Err(ArrayError::ContainerEmpty));
        assert_eq!(arr.back(), Err(ArrayError::ContainerEmpty));
        assert_eq!(arr.pop_back(), Err(ArrayError::ContainerEmpty));
        assert_eq!(snapshot(arr), before);
    }
}

#[test]
fn errors_propagate_with_question_mark() {
    fn second_plus_last(arr: &GrowableArray<i32>) -> Result<i32, ArrayError> {
        Ok(arr.at(1)? + arr.back()?)
    }
    assert_eq!(second_plus_last(&GrowableArray::from([1, 2, 3])), Ok(5));
    assert!(second_plus_last(&GrowableArray::from([1])).is_err());
}

// ── Construction ────────────────────────────────────────────────────

#[test]
fn negative_counts_are_clamped_not_errors() {
    let arr = GrowableArray::build([with_size(-4, 'a')]);
    assert_eq!((arr.len(), arr.capacity()), (0, 0));

    let arr = GrowableArray::build([with_fill(-1isize, 'a')]);
    assert_eq!((arr.len(), arr.capacity()), (0, 0));

    let mut arr = GrowableArray::build([from_slice(&['x', 'y'])]);
    arr.resize(-2, 'z');
    arr.reserve(-9);
    assert_eq!(arr, ['x', 'y']);
    assert_eq!(arr.capacity(), 2);
}

// ── Growth ──────────────────────────────────────────────────────────

#[test]
fn capacity_follows_doubling_sequence() {
    let mut arr = GrowableArray::new();
    let mut capacities = vec![arr.capacity()];
    for i in 0..100u32 {
        arr.push_back(i);
        if arr.capacity() != *capacities.last().unwrap() {
            capacities.push(arr.capacity());
        }
    }
    assert_eq!(capacities, vec![0, 1, 2, 4, 8, 16, 32, 64, 128]);
}

#[test]
fn appends_cost_linear_total_moves() {
    // Each reallocation moves exactly the current size; summing those over
    // n appends must stay below 2n.
    const N: usize = 10_000;
    let mut arr = GrowableArray::new();
    let mut moved = 0usize;
    for i in 0..N {
        if arr.len() == arr.capacity() {
            moved += arr.len();
        }
        arr.push_back(i);
    }
    assert_eq!(arr.len(), N);
    assert!(moved < 2 * N, "moved {moved} elements for {N} appends");
}

#[test]
fn reserve_preserves_order_and_exact_capacity() {
    let mut arr: GrowableArray<_> = (0..5).collect();
    arr.reserve(100);
    assert_eq!(arr.capacity(), 100);
    assert_eq!(arr, [0, 1, 2, 3, 4]);
    arr.reserve(50);
    assert_eq!(arr.capacity(), 100);
}

#[test]
fn display_after_mutations() {
    let mut arr = GrowableArray::build([with_values([1, 2, 3])]);
    assert_eq!(arr.to_string(), "GrowableArray[1 2 3]");
    arr.erase(1).unwrap();
    arr.push_back(4);
    assert_eq!(arr.to_string(), "GrowableArray[1 3 4]");
    arr.clear();
    assert_eq!(arr.to_string(), "GrowableArray[]");
}
