//! Sub-path lookup inside a tree.

use crate::InspectError;
use crate::Result;
use crate::tree::Tree;
use crate::tree::TreeNode;
use crate::types::EntryPath;

/// Finds the node at `segments` in `tree`.
///
/// An empty segment list resolves to the root. Matching is exact and
/// case-sensitive; `.`, `..` and wildcards have no special meaning here.
///
/// # Errors
///
/// Returns `InspectError::NotFound` at the first segment that has no matching
/// child, carrying the longest matched prefix. Asking for a child of a file
/// fails the same way.
///
/// # Examples
///
/// ```
/// use archscope_core::InspectError;
/// use archscope_core::RawEntry;
/// use archscope_core::build_tree;
/// use archscope_core::resolve;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = build_tree(vec![RawEntry::file("docs/readme.txt", 100, 0xAA)])?;
///
/// let node = resolve(&tree, &["docs", "readme.txt"])?;
/// assert!(node.is_file());
///
/// match resolve(&tree, &["docs", "missing.txt"]) {
///     Err(InspectError::NotFound { matched, missing }) => {
///         assert_eq!(matched.segments(), ["docs"]);
///         assert_eq!(missing, "missing.txt");
///     }
///     _ => unreachable!(),
/// }
/// # Ok(())
/// # }
/// ```
pub fn resolve<'t, S: AsRef<str>>(tree: &'t Tree, segments: &[S]) -> Result<&'t TreeNode> {
    let mut node = tree.root();

    for (depth, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        node = node.child(segment).ok_or_else(|| InspectError::NotFound {
            matched: EntryPath::from_segments(segments[..depth].iter().map(|s| s.as_ref())),
            missing: segment.to_string(),
        })?;
    }

    Ok(node)
}

/// Splits a user-supplied sub-path into segments.
///
/// Uses the same separators as archive names (`/` and `\`) and drops empty
/// and `.` segments, so `""`, `"/"` and `"./"` all mean the root.
///
/// # Examples
///
/// ```
/// use archscope_core::split_subpath;
///
/// assert_eq!(split_subpath("docs/api/"), ["docs", "api"]);
/// assert!(split_subpath("/").is_empty());
/// ```
#[must_use]
pub fn split_subpath(raw: &str) -> Vec<String> {
    raw.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(str::to_string)
        .collect()
}
