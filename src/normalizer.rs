//! Dot-segment removal per Section 5.2.4 of RFC 3986.

use alloc::{string::String, vec::Vec};

/// Removes `.` and `..` segments from a decoded segment list.
///
/// The list is rewritten as a fold into a fresh vector: `.` segments
/// contribute nothing, and `..` pops the nearest preceding segment.
/// A leading empty segment marks an absolute path and is never popped;
/// a `..` with nothing left to pop is dropped outright.
pub(crate) fn remove_dot_segments(segments: &mut Vec<String>) {
    let rooted = segments.first().map_or(false, |s| s.is_empty());
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments.drain(..) {
        match segment.as_str() {
            "." => {}
            ".." => {
                if out.len() > rooted as usize {
                    out.pop();
                }
            }
            _ => out.push(segment),
        }
    }
    *segments = out;
}
