//! Filesystem-safe note names.

/// Characters that cannot appear in a note filename on common filesystems.
pub const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replaces every forbidden character with `-`. Everything else, including
/// non-ASCII text and whitespace, passes through unchanged.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '-' } else { c })
        .collect()
}
