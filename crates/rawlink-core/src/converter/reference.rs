//! The reference tuple pulled out of a browser URL, and the raw URL template.

use std::fmt;

/// Host serving file contents without the GitHub web UI around them.
pub const RAW_HOST: &str = "raw.githubusercontent.com";

/// Which browser path segment the link used. Both map to the same raw URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Blob,
    Raw,
}

impl LinkKind {
    pub(super) fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "blob" => Some(LinkKind::Blob),
            "raw" => Some(LinkKind::Raw),
            _ => None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Blob => write!(f, "blob"),
            LinkKind::Raw => write!(f, "raw"),
        }
    }
}

/// A file on GitHub: `owner/repo` at `branch`, located at `path`.
///
/// Only produced by [`recognize`](super::recognize), so every field is
/// non-empty and `owner`, `repo` and `branch` never contain `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Path inside the repository; may contain `/`.
    pub path: String,
    pub kind: LinkKind,
}

impl FileRef {
    /// Builds `https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path}`.
    ///
    /// Characters are copied verbatim; nothing is escaped or decoded.
    pub fn to_raw_url(&self) -> String {
        format!(
            "https://{}/{}/{}/{}/{}",
            RAW_HOST, self.owner, self.repo, self.branch, self.path
        )
    }
}
