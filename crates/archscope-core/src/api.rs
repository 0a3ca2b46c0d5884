//! High-level public API for archive inspection and comparison.

use std::path::Path;

use tracing::debug;

use crate::Catalog;
use crate::DiffEntry;
use crate::InspectError;
use crate::RawEntry;
use crate::ReaderConfig;
use crate::Result;
use crate::Tree;
use crate::inspection::list_entries;

/// Builds a tree from raw archive records.
///
/// Runs catalog validation and tree construction in one step. This is the
/// entry point for callers that read archive listings themselves.
///
/// # Errors
///
/// Returns an error if:
/// - A record name is invalid (an empty file name, or contains `..`)
/// - Two records share a normalized path and kind
/// - A path is used both as a file and as a directory
///
/// # Examples
///
/// ```
/// use archscope_core::RawEntry;
/// use archscope_core::build_tree;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = build_tree(vec![
///     RawEntry::directory("src/"),
///     RawEntry::file("src/main.rs", 120, 0x1234_5678),
/// ])?;
/// assert_eq!(tree.root().child_count(), 1);
/// # Ok(())
/// # }
/// ```
pub fn build_tree<I>(raw_entries: I) -> Result<Tree>
where
    I: IntoIterator<Item = RawEntry>,
{
    let catalog = Catalog::build(raw_entries)?;
    Tree::build(&catalog)
}

/// Reads an archive from disk and builds its tree.
///
/// The archive format is detected from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - Archive file cannot be opened or its format is unsupported
/// - Archive is corrupted or exceeds the configured quotas
/// - The listing does not form a valid tree
///
/// # Examples
///
/// ```no_run
/// use archscope_core::ReaderConfig;
/// use archscope_core::read_tree;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = read_tree("release.tar.gz", &ReaderConfig::default())?;
/// println!("{} files", tree.stats().files);
/// # Ok(())
/// # }
/// ```
pub fn read_tree<P: AsRef<Path>>(archive_path: P, config: &ReaderConfig) -> Result<Tree> {
    let archive_path = archive_path.as_ref();
    let entries = list_entries(archive_path, config)?;
    let tree = build_tree(entries)?;
    debug!(path = %archive_path.display(), "tree built");
    Ok(tree)
}

/// Reads two archives and compares their trees.
///
/// Both archives are read concurrently. If both fail, the left error is
/// reported.
///
/// # Errors
///
/// Returns the first error of [`read_tree`] on either side.
///
/// # Examples
///
/// ```no_run
/// use archscope_core::DiffSummary;
/// use archscope_core::ReaderConfig;
/// use archscope_core::diff_archives;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = diff_archives("v1.zip", "v2.zip", &ReaderConfig::default())?;
/// let summary = DiffSummary::from_entries(&entries);
/// println!("{} changes", summary.total_changes());
/// # Ok(())
/// # }
/// ```
pub fn diff_archives<L, R>(left: L, right: R, config: &ReaderConfig) -> Result<Vec<DiffEntry>>
where
    L: AsRef<Path> + Send,
    R: AsRef<Path> + Send,
{
    diff_archives_with(left, right, config, |err, _| err)
}

/// Reads two archives and compares their trees, mapping read errors through
/// `on_error` together with the path of the archive that failed.
///
/// Callers use this to attach the failing archive's name to the error. If
/// both sides fail, only the left error is mapped and returned.
///
/// # Errors
///
/// Returns `on_error` applied to the first [`read_tree`] error.
///
/// # Examples
///
/// ```no_run
/// use archscope_core::ReaderConfig;
/// use archscope_core::diff_archives_with;
///
/// let result = diff_archives_with("v1.zip", "v2.zip", &ReaderConfig::default(), |err, path| {
///     format!("{}: {err}", path.display())
/// });
/// if let Err(message) = result {
///     eprintln!("{message}");
/// }
/// ```
pub fn diff_archives_with<L, R, E, F>(
    left: L,
    right: R,
    config: &ReaderConfig,
    on_error: F,
) -> std::result::Result<Vec<DiffEntry>, E>
where
    L: AsRef<Path> + Send,
    R: AsRef<Path> + Send,
    F: Fn(InspectError, &Path) -> E,
{
    let (left, right) = (left.as_ref(), right.as_ref());
    let (left_tree, right_tree) = rayon::join(
        || read_tree(left, config),
        || read_tree(right, config),
    );
    let left_tree = left_tree.map_err(|e| on_error(e, left))?;
    let right_tree = right_tree.map_err(|e| on_error(e, right))?;
    Ok(crate::diff(&left_tree, &right_tree))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::DiffStatus;
    use crate::test_utils::TarTestBuilder;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::write_temp_archive;

    #[test]
    fn test_build_tree_rejects_conflict() {
        let result = build_tree(vec![RawEntry::file("a", 1, 1), RawEntry::file("a/b", 1, 1)]);
        assert!(matches!(result, Err(InspectError::PathKindConflict { .. })));
    }

    #[test]
    fn test_build_tree_rejects_duplicate_before_tree() {
        let result = build_tree(vec![RawEntry::file("a", 1, 1), RawEntry::file("./a", 2, 2)]);
        assert!(matches!(result, Err(InspectError::DuplicatePath { .. })));
    }

    #[test]
    fn test_build_tree_skips_current_dir_record() {
        let tree = build_tree(vec![
            RawEntry::directory("./"),
            RawEntry::file("./a.txt", 1, 1),
        ])
        .unwrap();
        let names: Vec<&str> = tree.root().children().map(|c| c.name()).collect();
        assert_eq!(names, ["a.txt"]);
        assert_eq!(tree.stats().directories, 0);
    }

    #[test]
    fn test_read_tree_from_tar_of_current_dir() {
        let data = TarTestBuilder::new()
            .add_directory("./")
            .add_file("a.txt", b"alpha")
            .build();
        let file = write_temp_archive(".tar", &data);

        let tree = read_tree(file.path(), &ReaderConfig::default()).unwrap();
        assert_eq!(tree.stats().files, 1);
        assert!(crate::resolve(&tree, &["a.txt"]).unwrap().is_file());
    }

    #[test]
    fn test_read_tree_from_tar() {
        let data = TarTestBuilder::new()
            .add_file("pkg/lib.rs", b"fn main() {}")
            .add_file("pkg/README", b"readme")
            .build();
        let file = write_temp_archive(".tar", &data);

        let tree = read_tree(file.path(), &ReaderConfig::default()).unwrap();
        let stats = tree.stats();
        assert_eq!(stats.files, 2);
        assert_eq!(stats.synthesized_directories, 1);
    }

    #[test]
    fn test_diff_archives_across_formats() {
        let left = write_temp_archive(
            ".zip",
            &ZipTestBuilder::new()
                .add_file("a.txt", b"same")
                .add_file("b.txt", b"old")
                .build(),
        );
        let right = write_temp_archive(
            ".tar",
            &TarTestBuilder::new()
                .add_file("a.txt", b"same")
                .add_file("b.txt", b"new!")
                .add_file("c.txt", b"added")
                .build(),
        );

        let entries = diff_archives(left.path(), right.path(), &ReaderConfig::default()).unwrap();
        let statuses: Vec<(String, DiffStatus)> = entries
            .iter()
            .map(|e| (e.path.to_string(), e.status))
            .collect();
        assert_eq!(
            statuses,
            [
                ("a.txt".to_string(), DiffStatus::Unchanged),
                ("b.txt".to_string(), DiffStatus::Modified),
                ("c.txt".to_string(), DiffStatus::Added),
            ]
        );
    }

    #[test]
    fn test_diff_archives_with_names_failing_side() {
        let left = write_temp_archive(".tar", &TarTestBuilder::new().add_file("a", b"x").build());
        let result = diff_archives_with(
            left.path(),
            "/nonexistent/right.tar",
            &ReaderConfig::default(),
            |err, path| (path.to_path_buf(), err),
        );
        let (path, err) = result.unwrap_err();
        assert_eq!(path, Path::new("/nonexistent/right.tar"));
        assert!(matches!(err, InspectError::Io(_)));
    }

    #[test]
    fn test_diff_archives_reports_left_error_first() {
        let left = write_temp_archive(".zip", b"garbage");
        let result = diff_archives(left.path(), "/nonexistent/right.rar", &ReaderConfig::default());
        assert!(matches!(result, Err(InspectError::InvalidArchive(_))));
    }
}
