//! Dotted-path tokenization.
//!
//! Paths are split on `.` with no escaping and no validation: every segment,
//! including the empty string, is a legal trie key.

/// The sole segment delimiter in a policy path.
pub const PATH_DELIMITER: char = '.';

/// Split a path into its ordered segments.
///
/// An empty path yields a single empty segment, and `"a..b"` yields
/// `["a", "", "b"]`.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_DELIMITER)
}

/// Join segments back into a dotted path.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(PATH_DELIMITER);
        }
        out.push_str(segment.as_ref());
    }
    out
}
