//! Browser URL recognition.

use regex::Regex;
use std::sync::LazyLock;

use super::reference::{FileRef, LinkKind};

/// `http(s)://github.com/<owner>/<repo>/<blob|raw>/<branch>/<path...>`, anchored at both ends.
static BROWSER_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://github\.com/(?P<owner>[^/]+)/(?P<repo>[^/]+)/(?P<kind>blob|raw)/(?P<branch>[^/]+)/(?P<path>.+)$",
    )
    .expect("browser url pattern must compile")
});

/// Strips surrounding whitespace, counting the ASCII information separators
/// (U+001C..=U+001F) as whitespace too.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Splits a GitHub browser URL into its reference tuple.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a `github.com` blob/raw link with owner, repo, branch and path present.
pub fn recognize(url: &str) -> Option<FileRef> {
    let caps = BROWSER_URL.captures(trim_input(url))?;
    let kind = LinkKind::from_segment(&caps["kind"])?;
    Some(FileRef {
        owner: caps["owner"].to_string(),
        repo: caps["repo"].to_string(),
        branch: caps["branch"].to_string(),
        path: caps["path"].to_string(),
        kind,
    })
}
