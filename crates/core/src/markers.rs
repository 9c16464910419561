//! Line marker predicates shared by the script parser and the classifier.
//!
//! Each predicate inspects the raw line (no leading-whitespace trimming) and
//! returns the payload with the marker removed. Callers evaluate them in a
//! fixed priority order; see [`crate::script`] and [`crate::classify`].

use crate::ImageRef;

/// Text of a `# ` heading line.
pub fn primary_heading(line: &str) -> Option<&str> {
    line.strip_prefix("# ").map(str::trim)
}

/// Text of a `## ` heading line.
pub fn secondary_heading(line: &str) -> Option<&str> {
    line.strip_prefix("## ").map(str::trim)
}

/// Parse an `![alt](src)` image reference at the start of a line.
///
/// The alt text runs up to the first `](`, the source up to the next `)`.
/// Anything after the closing parenthesis is ignored.
pub fn image_reference(line: &str) -> Option<ImageRef> {
    let rest = line.strip_prefix("![")?;
    let (alt, rest) = rest.split_once("](")?;
    let (src, _) = rest.split_once(')')?;
    Some(ImageRef::new(alt, src))
}

/// Item text and `ordered` flag of a list-marked line.
///
/// Unordered markers are `- ` and `* `; ordered markers are an ASCII digit
/// run followed by `. `.
pub fn list_item(line: &str) -> Option<(&str, bool)> {
    if let Some(item) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return Some((item.trim(), false));
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .map(|item| (item.trim(), true))
}

/// Whether a line carries no visible content.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
