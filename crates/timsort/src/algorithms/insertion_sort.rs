use crate::Element;

/// Stable in-place insertion sort. Only elements strictly greater than the
/// key are shifted, so equal elements never pass each other.
#[inline]
pub(crate) fn insertion_sort<T: Element>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}
