// src/core/select.rs
use std::collections::HashMap;

/// Rearranges `words` in place so the `top` highest-count words occupy
/// positions `[0, top)`.
///
/// One-sided quickselect: each pass partitions the active window around the
/// count of its first element, then continues into whichever side still
/// holds the cut at `top`. Nothing is sorted; the prefix is correct as a
/// set but carries no order, and words whose count ties the pivot may land
/// on either side of the cut. Expected linear time over the repeated
/// passes; the fixed first-element pivot makes adversarial count orders
/// quadratic, which is accepted.
///
/// When `top >= words.len()` the whole list already qualifies and the
/// function returns without partitioning anything. Callers only ever read
/// `min(top, len)` entries, so the untouched order is not observable.
///
/// Words missing from `counts` rank as if they appeared zero times.
pub fn partition_top_words(words: &mut [String], counts: &HashMap<String, u64>, top: usize) {
    if top >= words.len() {
        return;
    }

    // lo..hi is the active window. Words left of lo have been confirmed
    // into the prefix by earlier passes; the window always straddles the
    // cut, so lo <= top < hi holds throughout.
    let mut lo = 0;
    let mut hi = words.len();

    loop {
        let pass_lo = lo;
        let pass_hi = hi;

        let pivot = count_of(counts, &words[lo]);
        let mut left = lo;
        let mut right = hi - 1;

        // The pivot rides at `left`. Any word counted above it is swapped
        // into the run growing before the pivot; everything else is thrown
        // to the tail shrinking in from `right`.
        while left < right {
            let next = left + 1;
            if count_of(counts, &words[next]) > pivot {
                words.swap(left, next);
                left += 1;
            } else {
                words.swap(next, right);
                right -= 1;
            }
        }

        if left == top {
            return;
        }
        if left > top {
            // Too many words outrank this pivot; the cut lies among them.
            // Rescan from the same start with the right edge pulled in.
            lo = pass_lo;
            hi = pass_hi - 1;
        } else {
            // The pivot and everything before it are settled into the
            // prefix; keep partitioning what follows.
            lo = left + 1;
            hi = pass_hi;
        }
    }
}

fn count_of(counts: &HashMap<String, u64>, word: &str) -> u64 {
    counts.get(word).copied().unwrap_or(0)
}
