use crate::Element;

/// Merges the sorted runs `target[..mid]` and `target[mid..]` into `target`.
///
/// Output is built in `scratch[..target.len()]` and copied back afterwards,
/// since the left run lives at the front of `target` and would otherwise be
/// overwritten before it is read. Ties take the left element, which keeps the
/// merge stable.
pub(crate) fn merge_adjacent<T: Element>(target: &mut [T], mid: usize, scratch: &mut [T]) {
    let len = target.len();
    debug_assert!(mid <= len);
    debug_assert!(scratch.len() >= len);

    let out = &mut scratch[..len];
    let (left, right) = target.split_at(mid);

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        out[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        out[k..].copy_from_slice(&right[j..]);
    }

    target.copy_from_slice(out);
}
