//! Flat-array heap sort
//!
//! Shares its sift-down with the priority queue's repair procedure, but
//! oriented as a max-heap over a plain slice so the largest value can be
//! swapped to the end of the unsorted prefix on each pass.

use tracing::debug;

/// Sort `values` ascending and return them
pub fn heap_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    heap_sort_in_place(&mut values);
    values
}

/// Sort a slice ascending in place
pub fn heap_sort_in_place<T: Ord>(values: &mut [T]) {
    let len = values.len();
    debug!(len, "heap_sort_in_place: called");
    if len <= 1 {
        return;
    }

    for idx in (0..len / 2).rev() {
        sift_down(values, len, idx);
    }

    for end in (1..len).rev() {
        values.swap(0, end);
        sift_down(values, end, 0);
    }
}

/// Restore the max-heap property below `idx`, considering only `values[..len]`
fn sift_down<T: Ord>(values: &mut [T], len: usize, mut idx: usize) {
    loop {
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;
        let mut largest = idx;

        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }

        if largest == idx {
            break;
        }
        values.swap(idx, largest);
        idx = largest;
    }
}
