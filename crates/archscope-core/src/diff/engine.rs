//! Paired depth-first traversal producing diff entries.

use std::collections::BTreeSet;

use tracing::debug;

use super::DiffEntry;
use super::DiffStatus;
use crate::tree::Tree;
use crate::tree::TreeNode;
use crate::types::EntryPath;

/// Compares two trees and classifies every path found in either.
///
/// Output order is depth-first pre-order with children sorted by name, so a
/// directory always precedes its contents and the result does not depend on
/// the order of the original archive listings. The synthetic root is not
/// reported.
///
/// Files are equal when uncompressed size and checksum match. Compression
/// method, compressed size and timestamps do not take part. Directory
/// metadata never takes part; a directory present on both sides is Modified
/// exactly when something below it is not Unchanged.
///
/// A path that is a file on one side and a directory on the other is reported
/// as Removed (old kind, with its subtree) followed by Added (new kind, with
/// its subtree).
#[must_use]
pub fn diff(left: &Tree, right: &Tree) -> Vec<DiffEntry> {
    let mut out = Vec::new();
    diff_children(left.root(), right.root(), &EntryPath::root(), &mut out);

    debug!(
        entries = out.len(),
        changes = out.iter().filter(|e| e.is_change()).count(),
        "diff computed"
    );
    out
}

/// Emits entries for the union of both nodes' children. Returns `true` if any
/// emitted entry is a change.
fn diff_children(
    left: &TreeNode,
    right: &TreeNode,
    base: &EntryPath,
    out: &mut Vec<DiffEntry>,
) -> bool {
    let names: BTreeSet<&str> = left
        .children()
        .chain(right.children())
        .map(TreeNode::name)
        .collect();

    let mut changed = false;
    for name in names {
        let path = base.join(name);
        changed |= match (left.child(name), right.child(name)) {
            (Some(l), Some(r)) => diff_pair(l, r, path, out),
            (Some(l), None) => {
                emit_subtree(l, path, DiffStatus::Removed, out);
                true
            }
            (None, Some(r)) => {
                emit_subtree(r, path, DiffStatus::Added, out);
                true
            }
            (None, None) => false,
        };
    }
    changed
}

fn diff_pair(left: &TreeNode, right: &TreeNode, path: EntryPath, out: &mut Vec<DiffEntry>) -> bool {
    match (left.is_directory(), right.is_directory()) {
        (false, false) => {
            let same = match (left.metadata(), right.metadata()) {
                (Some(l), Some(r)) => l.same_content(r),
                _ => false,
            };
            let status = if same {
                DiffStatus::Unchanged
            } else {
                DiffStatus::Modified
            };
            out.push(DiffEntry {
                path,
                kind: left.kind(),
                status,
                left: left.metadata().cloned(),
                right: right.metadata().cloned(),
            });
            !same
        }
        (true, true) => {
            let slot = out.len();
            out.push(DiffEntry {
                path: path.clone(),
                kind: left.kind(),
                status: DiffStatus::Unchanged,
                left: left.metadata().cloned(),
                right: right.metadata().cloned(),
            });
            let changed = diff_children(left, right, &path, out);
            if changed {
                out[slot].status = DiffStatus::Modified;
            }
            changed
        }
        _ => {
            emit_subtree(left, path.clone(), DiffStatus::Removed, out);
            emit_subtree(right, path, DiffStatus::Added, out);
            true
        }
    }
}

/// Emits `node` and everything below it with one status. Metadata goes to
/// the side the subtree exists on.
fn emit_subtree(node: &TreeNode, path: EntryPath, status: DiffStatus, out: &mut Vec<DiffEntry>) {
    let metadata = node.metadata().cloned();
    let (left, right) = match status {
        DiffStatus::Removed => (metadata, None),
        _ => (None, metadata),
    };

    out.push(DiffEntry {
        path: path.clone(),
        kind: node.kind(),
        status,
        left,
        right,
    });

    for child in node.children() {
        emit_subtree(child, path.join(child.name()), status, out);
    }
}
