// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Revision resolution for source deep links.
//!
//! Uses git2 (libgit2) to avoid subprocess overhead.

use std::path::Path;

use anyhow::Context;
use git2::Repository;

/// Resolve the short hash of the currently checked-out revision.
///
/// Discovers the repository containing `root` (walking up as needed) and
/// returns the first 7 characters of HEAD's commit id. Failure is fatal:
/// deep links cannot be built without a revision.
pub fn resolve_revision(root: &Path) -> anyhow::Result<String> {
    let repo = Repository::discover(root)
        .with_context(|| format!("no repository found at {}", root.display()))?;
    let head = repo
        .head()
        .context("failed to resolve HEAD")?
        .target()
        .ok_or_else(|| anyhow::anyhow!("HEAD has no target"))?;
    Ok(head.to_string()[..7].to_string())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
