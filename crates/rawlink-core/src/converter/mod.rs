//! GitHub browser URL to raw URL conversion.
//!
//! A browser link such as `https://github.com/<owner>/<repo>/blob/<branch>/<path>`
//! is split into its reference tuple ([`FileRef`]) and re-assembled under
//! `raw.githubusercontent.com`. Everything here is pure; an input that does
//! not fit the shape is reported as `None`, not as an error.

mod pattern;
mod reference;

pub use pattern::{recognize, trim_input};
pub use reference::{FileRef, LinkKind, RAW_HOST};

/// Converts a GitHub browser URL into the matching raw content URL.
///
/// # Examples
///
/// - `convert("https://github.com/torvalds/linux/blob/master/README")`
///   → `Some("https://raw.githubusercontent.com/torvalds/linux/master/README")`
/// - `convert("https://github.com/a/b")` → `None`
pub fn convert(url: &str) -> Option<String> {
    let Some(file_ref) = recognize(url) else {
        tracing::debug!(input = url, "not a github browser url");
        return None;
    };
    let raw = file_ref.to_raw_url();
    tracing::debug!(kind = %file_ref.kind, raw = %raw, "converted browser url");
    Some(raw)
}
