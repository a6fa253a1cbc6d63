//! Version selection: reduces a raw set of release tags to the subset
//! that gets a published documentation snapshot, in publish order.
//!
//! The selection is a pure function of the tag set. It keeps the latest
//! patch of each minor version line, windows the result to the most
//! recent lines, and leaves appending the in-development version to the
//! caller.

use semver::Version;

use crate::domain::MinorLine;
use crate::error::{DocsPublishError, Result};

/// How the publish set for a component is determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Derive the set from live repository tags: latest patch per minor
    /// line, windowed to the `window_size` most recent lines. The
    /// component's in-development version is appended afterwards.
    DerivedWindow { window_size: usize },

    /// Publish exactly the listed versions, oldest first with the
    /// current entry last. No tag filtering is applied.
    ExplicitList { versions: Vec<String> },
}

impl SelectionMode {
    /// Resolve the publishable versions for this mode from a raw tag list.
    ///
    /// The explicit list is taken verbatim; an empty list is as fatal as
    /// an empty filtered tag set, since it leaves nothing to publish.
    pub fn publishable_versions(&self, tags: &[String]) -> Result<Vec<String>> {
        match self {
            SelectionMode::DerivedWindow { window_size } => {
                select_publishable_versions(tags, *window_size)
            }
            SelectionMode::ExplicitList { versions } => {
                if versions.is_empty() {
                    return Err(DocsPublishError::invalid_version(
                        "explicit version list is empty",
                    ));
                }
                Ok(versions.clone())
            }
        }
    }
}

/// Returns true for tags that belong to a foreign naming lineage and must
/// never be published. Tags carrying a literal `v` prefix come from an
/// unrelated import history, not from this project's releases.
pub fn is_foreign_lineage_tag(tag: &str) -> bool {
    tag.starts_with('v')
}

/// Select the versions that get a published documentation snapshot.
///
/// Tags that fail semver parsing or belong to the foreign lineage are
/// silently dropped. The survivors are sorted ascending by semver
/// precedence, collapsed to the highest patch per minor line, and
/// windowed to the last `window_size` entries. The returned sequence is
/// strictly increasing and contains at most one entry per minor line.
///
/// Fails with `InvalidVersionFormat` when no eligible tag remains.
pub fn select_publishable_versions(tags: &[String], window_size: usize) -> Result<Vec<String>> {
    if window_size == 0 {
        return Err(DocsPublishError::config(
            "release window size must be at least 1",
        ));
    }

    let mut eligible: Vec<(Version, String)> = tags
        .iter()
        .filter(|tag| !is_foreign_lineage_tag(tag))
        .filter_map(|tag| {
            Version::parse(tag)
                .ok()
                .map(|version| (version, tag.clone()))
        })
        .collect();

    if eligible.is_empty() {
        return Err(DocsPublishError::invalid_version(format!(
            "no publishable semantic version among {} tag(s)",
            tags.len()
        )));
    }

    eligible.sort_by(|a, b| a.0.cmp(&b.0));

    // A tag survives if the next tag in sorted order opens a different
    // minor line. The last tag has no successor and is always kept.
    let collapsed: Vec<String> = eligible
        .iter()
        .enumerate()
        .filter(|(i, (version, _))| match eligible.get(i + 1) {
            Some((next, _)) => MinorLine::of(version) != MinorLine::of(next),
            None => true,
        })
        .map(|(_, (_, tag))| tag.clone())
        .collect();

    let start = collapsed.len().saturating_sub(window_size);
    Ok(collapsed[start..].to_vec())
}

/// Parse the single-line version declaration naming the in-development
/// version. This version is always published as the newest entry,
/// independent of the tag-based window.
///
/// Fails with `MalformedVersionFile` unless the contents hold exactly
/// one non-empty line.
pub fn resolve_current_development_version(contents: &str) -> Result<String> {
    let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());

    let version = lines
        .next()
        .ok_or_else(|| DocsPublishError::malformed_version_file("no version line found"))?;

    if let Some(extra) = lines.next() {
        return Err(DocsPublishError::malformed_version_file(format!(
            "expected a single version line, found additional line '{}'",
            extra
        )));
    }

    Ok(version.to_string())
}
