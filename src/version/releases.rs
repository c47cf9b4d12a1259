//! Helpers over collections of known releases
//!
//! Used by tooling that sorts, groups or ranges over server versions, e.g.
//! to tell whether a connected server is behind the newest point release.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::warn;

use crate::version::error::VersionError;
use crate::version::parser::VersionParser;
use crate::version::pg_version::PgVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
}

/// Result of parsing many version strings independently
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub versions: Vec<PgVersion>,
    /// Index of each rejected input alongside the reason
    pub failures: Vec<(usize, VersionError)>,
}

/// Parse every input, keeping going past malformed items.
pub fn parse_all<I, S>(parser: &VersionParser, inputs: I) -> ParsedBatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = ParsedBatch::default();

    for (index, input) in inputs.into_iter().enumerate() {
        match parser.parse(input.as_ref()) {
            Ok(version) => batch.versions.push(version),
            Err(e) => {
                warn!("Skipping version string #{}: {}", index, e);
                batch.failures.push((index, e));
            }
        }
    }

    batch
}

/// Sort oldest to newest. Versions that rank equal keep their input order.
pub fn sort_releases(versions: &mut [PgVersion]) {
    versions.sort_by_key(PgVersion::release_key);
}

/// Group versions by their `major.minor` series, in first-seen order.
pub fn group_by_series<I>(versions: I) -> IndexMap<String, Vec<PgVersion>>
where
    I: IntoIterator<Item = PgVersion>,
{
    let mut groups: IndexMap<String, Vec<PgVersion>> = IndexMap::new();
    for version in versions {
        groups.entry(version.major_minor()).or_default().push(version);
    }
    groups
}

/// Compare the current version to the latest known version
pub fn compare_to_latest(current: &PgVersion, latest: &PgVersion) -> CompareResult {
    match current.cmp_release(latest) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

/// Find the newest version within the same major.minor series
///
/// Returns the newest matching version if it ranks above `current`,
/// or None if `current` is already the newest of its series.
pub fn latest_in_series<'a>(
    current: &PgVersion,
    available: &'a [PgVersion],
) -> Option<&'a PgVersion> {
    newest_above(
        current,
        available
            .iter()
            .filter(|v| v.major() == current.major() && v.minor() == current.minor()),
    )
}

/// Find the newest version overall
///
/// Returns the newest version if it ranks above `current`,
/// or None if `current` is already the newest.
pub fn latest<'a>(current: &PgVersion, available: &'a [PgVersion]) -> Option<&'a PgVersion> {
    newest_above(current, available.iter())
}

fn newest_above<'a>(
    current: &PgVersion,
    candidates: impl Iterator<Item = &'a PgVersion>,
) -> Option<&'a PgVersion> {
    candidates
        .max_by(|a, b| a.cmp_release(b))
        .filter(|newest| newest.cmp_release(current) == Ordering::Greater)
}
