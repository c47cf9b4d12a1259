use std::cmp::Ordering;
use std::collections::BTreeMap;

use pg_version::version::releases::sort_releases;
use pg_version::{PgVersion, VersionError};

fn v(major: u32, minor: u32, patch: Option<&str>) -> PgVersion {
    PgVersion::with_patch(major, minor, patch).unwrap()
}

/// Every release shape in ascending order, spanning both numbering eras
fn ascending() -> Vec<PgVersion> {
    vec![
        v(8, 3, Some("alpha1")),
        v(8, 3, Some("alpha3")),
        v(8, 3, Some("beta1")),
        v(8, 3, Some("beta2")),
        v(8, 3, Some("rc1")),
        v(8, 3, Some("rc3")),
        v(8, 3, Some("0")),
        v(8, 3, Some("1")),
        v(8, 3, None),
        v(8, 14, Some("0")),
        v(9, 4, Some("0")),
        v(10, 0, Some("alpha1")),
        v(10, 0, Some("alpha3")),
        v(10, 0, Some("beta1")),
        v(10, 0, Some("beta2")),
        v(10, 0, Some("rc1")),
        v(10, 0, Some("rc3")),
        v(10, 0, Some("0")),
        v(10, 0, Some("2")),
        v(10, 0, Some("10")),
        v(10, 0, None),
    ]
}

#[test]
fn pairwise_comparison_matches_sequence_order() {
    let versions = ascending();

    for (i, left) in versions.iter().enumerate() {
        for (j, right) in versions.iter().enumerate() {
            assert_eq!(
                left.cmp_release(right),
                i.cmp(&j),
                "comparing {} to {}",
                left,
                right
            );
        }
    }
}

#[test]
fn comparison_is_transitive() {
    let versions = ascending();

    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a.cmp_release(b).is_le() && b.cmp_release(c).is_le() {
                    assert!(a.cmp_release(c).is_le(), "{} <= {} <= {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn sorting_reversed_sequence_restores_order() {
    let mut versions = ascending();
    versions.reverse();

    sort_releases(&mut versions);
    assert_eq!(versions, ascending());

    sort_releases(&mut versions);
    assert_eq!(versions, ascending());
}

#[test]
fn absent_point_ranks_highest_in_series() {
    assert_eq!(
        v(9, 4, None).cmp_release(&v(9, 4, Some("3"))),
        Ordering::Greater
    );
    assert_eq!(v(9, 4, None).cmp_release(&v(9, 4, None)), Ordering::Equal);
}

#[test]
fn descriptive_fields_never_change_rank() {
    let plain = v(9, 0, Some("0"));
    let built = plain
        .clone()
        .with_host("OS X")
        .with_compiler("ICC")
        .with_bit_depth(32);

    assert_eq!(plain.cmp_release(&built), Ordering::Equal);
    assert_ne!(plain, built);
}

#[test]
fn release_key_works_as_map_key() {
    let mut seen = BTreeMap::new();
    for version in [
        v(9, 6, Some("1")).with_host("a"),
        v(9, 6, Some("1")).with_host("b"),
        v(9, 5, None),
    ] {
        *seen.entry(version.release_key()).or_insert(0) += 1;
    }

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[&v(9, 6, Some("1")).release_key()], 2);
    assert_eq!(
        seen.keys().next().copied(),
        Some(v(9, 5, None).release_key())
    );
}

#[test]
fn bulk_parse_skips_malformed_entries() -> Result<(), VersionError> {
    let inputs = [
        "PostgreSQL 12.4 on host, compiled by cc, 64-bit",
        "PostgreSQL 9 on host, compiled by cc, 64-bit",
        "PostgreSQL 9.6.19 on host, compiled by cc, 64-bit",
    ];

    let mut parsed: Vec<PgVersion> = inputs.iter().filter_map(|s| s.parse().ok()).collect();
    sort_releases(&mut parsed);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0], PgVersion::parse(inputs[2])?);
    Ok(())
}
