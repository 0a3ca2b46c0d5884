//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use archscope_core::DiffEntry;
use archscope_core::DiffStatus;
use archscope_core::DiffSummary;
use archscope_core::DirListing;
use archscope_core::EntryMetadata;
use archscope_core::EntryPath;
use archscope_core::StatusCounts;
use archscope_core::Tree;
use archscope_core::TreeNode;
use archscope_core::WalkOptions;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn format_counts(counts: StatusCounts) -> String {
        format!(
            "{} files, {} directories",
            Self::format_number(counts.files),
            Self::format_number(counts.directories)
        )
    }

    /// Renders one `ls -l` style line for a node.
    fn long_line(path: &str, node: &TreeNode) -> String {
        let kind = if node.is_directory() { 'd' } else { '-' };
        node.metadata().map_or_else(
            || format!("{kind} {:>10} {:>8} {:<8} {:>16}  {path}", "-", "-", "-", "-"),
            |m| {
                format!(
                    "{kind} {:>10} {:08x} {:<8} {:>16}  {path}",
                    m.uncompressed_size,
                    m.checksum,
                    m.compression,
                    Self::format_modified(m)
                )
            },
        )
    }

    fn format_modified(metadata: &EntryMetadata) -> String {
        metadata
            .modified
            .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    fn display_path(path: &EntryPath, is_directory: bool) -> String {
        if is_directory && !path.is_root() {
            format!("{path}/")
        } else {
            path.to_string()
        }
    }

    fn diff_marker(&self, status: DiffStatus) -> String {
        let marker = match status {
            DiffStatus::Added => "+",
            DiffStatus::Removed => "-",
            DiffStatus::Modified => "M",
            DiffStatus::Unchanged => " ",
        };
        if !self.use_colors {
            return marker.to_string();
        }
        match status {
            DiffStatus::Added => style(marker).green().bold().to_string(),
            DiffStatus::Removed => style(marker).red().bold().to_string(),
            DiffStatus::Modified => style(marker).yellow().bold().to_string(),
            DiffStatus::Unchanged => marker.to_string(),
        }
    }

    /// Describes what changed between two file versions.
    fn describe_change(entry: &DiffEntry) -> Option<String> {
        let (left, right) = (entry.left.as_ref()?, entry.right.as_ref()?);
        if left.uncompressed_size == right.uncompressed_size {
            Some(format!("crc {:08x} -> {:08x}", left.checksum, right.checksum))
        } else {
            Some(format!(
                "size {} -> {}",
                left.uncompressed_size, right.uncompressed_size
            ))
        }
    }
}

/// Draws the children of `node` with box-drawing connectors. Returns the
/// number of directories and files drawn.
fn tree_lines(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    options: &WalkOptions,
    lines: &mut Vec<String>,
) -> (usize, usize) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return (0, 0);
    }

    let children: Vec<&TreeNode> = node
        .children()
        .filter(|c| !options.dirs_only || c.is_directory())
        .collect();
    let last = children.len().saturating_sub(1);

    let (mut dirs, mut files) = (0, 0);
    for (i, child) in children.into_iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        if child.is_directory() {
            lines.push(format!("{prefix}{branch}{}/", child.name()));
            let (d, f) = tree_lines(child, &format!("{prefix}{indent}"), depth + 1, options, lines);
            dirs += d + 1;
            files += f;
        } else {
            lines.push(format!("{prefix}{branch}{}", child.name()));
            files += 1;
        }
    }
    (dirs, files)
}

impl OutputFormatter for HumanFormatter {
    fn format_tree(&self, archive: &Path, tree: &Tree, options: &WalkOptions) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let name = archive.display().to_string();
        if self.use_colors {
            self.line(&style(name).bold().to_string());
        } else {
            self.line(&name);
        }

        let mut lines = Vec::new();
        let (dirs, files) = tree_lines(tree.root(), "", 0, options, &mut lines);
        for line in &lines {
            self.line(line);
        }

        self.line("");
        self.line(&format!(
            "{} directories, {} files",
            Self::format_number(dirs),
            Self::format_number(files)
        ));

        if self.verbose {
            let stats = tree.stats();
            self.line(&format!(
                "  Synthesized directories: {}",
                Self::format_number(stats.synthesized_directories)
            ));
            self.line(&format!(
                "  Total size: {}",
                Self::format_size(stats.total_size)
            ));
            self.line(&format!(
                "  Compressed size: {}",
                Self::format_size(stats.total_compressed_size)
            ));
        }

        Ok(())
    }

    fn format_content(
        &self,
        base: &EntryPath,
        entries: &[(EntryPath, &TreeNode)],
        long: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut files = 0;
        let mut directories = 0;
        let mut total_size = 0_u64;

        for (path, node) in entries {
            let shown = Self::display_path(path, node.is_directory());
            if node.is_directory() {
                directories += 1;
            } else {
                files += 1;
                total_size = total_size
                    .saturating_add(node.metadata().map_or(0, |m| m.uncompressed_size));
            }

            if long {
                self.line(&Self::long_line(&shown, node));
            } else {
                self.line(&shown);
            }
        }

        if long || self.verbose {
            self.line("");
            self.line(&format!(
                "Total under {base}: {} files, {} directories, {}",
                Self::format_number(files),
                Self::format_number(directories),
                Self::format_size(total_size)
            ));
        }

        Ok(())
    }

    fn format_diff(
        &self,
        entries: &[DiffEntry],
        summary: &DiffSummary,
        show_all: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in entries.iter().filter(|e| show_all || e.is_change()) {
            let mut text = format!(
                "{} {}",
                self.diff_marker(entry.status),
                Self::display_path(&entry.path, entry.kind.is_directory())
            );
            if self.verbose
                && entry.status == DiffStatus::Modified
                && entry.kind.is_file()
                && let Some(detail) = Self::describe_change(entry)
            {
                text.push_str(&format!("  ({detail})"));
            }
            self.line(&text);
        }

        if summary.is_identical() {
            if self.use_colors {
                self.line(&format!(
                    "{} Archives are identical",
                    style("✓").green().bold()
                ));
            } else {
                self.line("Archives are identical");
            }
            return Ok(());
        }

        self.line("");
        self.line(&format!("  Added:     {}", Self::format_counts(summary.added)));
        self.line(&format!("  Removed:   {}", Self::format_counts(summary.removed)));
        self.line(&format!("  Modified:  {}", Self::format_counts(summary.modified)));
        self.line(&format!("  Unchanged: {}", Self::format_counts(summary.unchanged)));

        Ok(())
    }

    fn format_walk(&self, listings: &[DirListing]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for listing in listings {
            let header = Self::display_path(&listing.path, true);
            if self.use_colors {
                self.line(&style(header).bold().to_string());
            } else {
                self.line(&header);
            }
            for dir in &listing.directories {
                self.line(&format!("  [dir]  {dir}"));
            }
            for file in &listing.files {
                self.line(&format!("  [file] {file}"));
            }
        }

        Ok(())
    }
}
