//! Shared byte-range helpers for chunking strategies.
//!
//! Binary search here always operates on byte offsets, snapped to the
//! nearest valid UTF-8 character boundary before any slice or tokenizer
//! call, per the crate's documented codepoint-safety requirement.

use crate::io::find_char_boundary;
use crate::tokenizer::Tokenizer;

/// Finds the largest `end` in `[start, hi]` such that
/// `tokenizer.count(text[start..end]) <= budget`, via binary search over
/// byte offsets snapped to character boundaries.
pub fn largest_end_within_budget(
    tokenizer: &dyn Tokenizer,
    text: &str,
    start: usize,
    hi: usize,
    budget: usize,
) -> usize {
    if start >= hi {
        return start;
    }

    let mut lo = start;
    let mut hi = hi;

    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        let end = find_char_boundary(text, mid);
        if end <= lo {
            hi = mid - 1;
            continue;
        }
        if tokenizer.count(&text[start..end]) <= budget {
            lo = end;
        } else {
            hi = mid - 1;
        }
    }

    lo
}

/// Walks `end` backward up to 100 bytes looking for a space or newline;
/// if found, returns that position (excluding the whitespace byte
/// itself). Otherwise returns `end` unchanged.
pub fn back_off_to_word_boundary(text: &str, start: usize, end: usize) -> usize {
    let search_floor = end.saturating_sub(100).max(start);
    let bytes = text.as_bytes();
    for pos in (search_floor..end).rev() {
        if bytes[pos] == b' ' || bytes[pos] == b'\n' {
            return pos;
        }
    }
    end
}

/// Splits `[start, end)` into two halves at the nearest character
/// boundary to the midpoint. Returns `None` if no progress is possible
/// (the range is a single byte or char).
pub fn midpoint_split(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let target = start + (end - start) / 2;
    let mid = find_char_boundary(text, target.max(start + 1).min(end));
    if mid <= start || mid >= end {
        None
    } else {
        Some((start, mid))
    }
}
