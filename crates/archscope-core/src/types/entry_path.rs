//! Normalized archive path type.

use std::fmt;

use crate::InspectError;
use crate::Result;

/// A normalized path inside an archive, stored as a sequence of segments.
///
/// `EntryPath` never contains empty segments, `.` segments, `..` segments or
/// separators. The root of an archive is the empty sequence.
///
/// Ordering is lexicographic by segment, which is exactly the depth-first
/// pre-order of a tree whose children are sorted by name: a directory sorts
/// before everything underneath it.
///
/// # Examples
///
/// ```
/// use archscope_core::types::EntryPath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (path, trailing) = EntryPath::normalize("docs\\guide//intro.md")?;
/// assert_eq!(path.to_string(), "docs/guide/intro.md");
/// assert!(!trailing);
///
/// let (dir, trailing) = EntryPath::normalize("docs/")?;
/// assert_eq!(dir.segments(), ["docs"]);
/// assert!(trailing);
///
/// assert!(EntryPath::normalize("../etc/passwd").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    /// Returns the path of the archive root (no segments).
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from segments that are already known to be normalized.
    ///
    /// Segments are taken as-is; use [`EntryPath::normalize`] for raw input.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Normalizes a raw archive entry name.
    ///
    /// Both `/` and `\` are accepted as separators. Leading separators, empty
    /// segments and `.` segments are dropped. The returned flag is `true`
    /// when the raw name ended with a separator, which archives use to mark
    /// directory records.
    ///
    /// A name with no segments left (`""`, `"/"`, `"./"`) normalizes to the
    /// root; callers decide whether a record may name it.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::InvalidPath` if the name contains a `..`
    /// segment.
    pub fn normalize(raw: &str) -> Result<(Self, bool)> {
        let trailing = raw.ends_with(['/', '\\']);
        let mut segments = Vec::new();

        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    return Err(InspectError::InvalidPath {
                        path: raw.to_string(),
                        reason: "parent directory reference",
                    });
                }
                name => segments.push(name.to_string()),
            }
        }

        Ok((Self(segments), trailing))
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the archive root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment, or `None` for the root.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// Returns a new path with `name` appended.
    #[must_use]
    pub fn join(&self, name: &str) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(name.to_string());
        Self(segments)
    }

    /// Returns `true` if `prefix` is this path or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Iterates over every proper prefix, shortest first, excluding the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> + '_ {
        (1..self.0.len()).map(|len| Self(self.0[..len].to_vec()))
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        f.write_str(&self.0.join("/"))
    }
}
