//! Ordering and lookup over solution lists
//!
//! Solution lists are small, so a recursive merge sort is run once per round
//! and every submission is checked with a binary search over the result.

/// Sort words in ascending lexicographic order with a stable merge sort.
pub fn merge_sort<T: AsRef<str> + Clone>(words: &[T]) -> Vec<T> {
    if words.len() <= 1 {
        return words.to_vec();
    }

    let mid = words.len() / 2;
    let left = merge_sort(&words[..mid]);
    let right = merge_sort(&words[mid..]);

    merge(left, right)
}

/// Merge two sorted runs. Ties take the left element first.
fn merge<T: AsRef<str>>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.as_ref() < l.as_ref(),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Binary search for `target` in a list sorted by [`merge_sort`].
pub fn contains<T: AsRef<str>>(sorted: &[T], target: &str) -> bool {
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let guess = sorted[mid].as_ref();

        if guess == target {
            return true;
        }
        if guess > target {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    false
}
