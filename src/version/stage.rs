//! Lifecycle state of a release and the patch token sub-parser
//!
//! The patch field of a version string is either a point release (`8` in
//! `9.2.8`) or a prerelease token (`rc1` in `9.1rc1`). Which payload is
//! meaningful depends on the state, so both live in one tagged [`Stage`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::version::error::VersionError;

/// Maturity of a release, ordered `alpha < beta < rc < release`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseState {
    Alpha,
    Beta,
    Rc,
    Release,
}

impl ReleaseState {
    /// Prerelease tags in the order they are tried against a patch token
    const PRERELEASE: [ReleaseState; 3] =
        [ReleaseState::Alpha, ReleaseState::Beta, ReleaseState::Rc];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseState::Alpha => "alpha",
            ReleaseState::Beta => "beta",
            ReleaseState::Rc => "rc",
            ReleaseState::Release => "release",
        }
    }
}

impl fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(ReleaseState::Alpha),
            "beta" => Ok(ReleaseState::Beta),
            "rc" => Ok(ReleaseState::Rc),
            "release" => Ok(ReleaseState::Release),
            _ => Err(()),
        }
    }
}

/// Lifecycle state together with the number that is meaningful for it
///
/// Prerelease states carry a revision (`beta2` -> `Beta(2)`). The release
/// state carries an optional point release; `None` means no point release
/// has been named yet and ranks above every numbered point of the same
/// major.minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Alpha(u32),
    Beta(u32),
    Rc(u32),
    Release(Option<u32>),
}

impl Stage {
    pub fn state(&self) -> ReleaseState {
        match self {
            Stage::Alpha(_) => ReleaseState::Alpha,
            Stage::Beta(_) => ReleaseState::Beta,
            Stage::Rc(_) => ReleaseState::Rc,
            Stage::Release(_) => ReleaseState::Release,
        }
    }

    pub fn point(&self) -> Option<u32> {
        match self {
            Stage::Release(point) => *point,
            _ => None,
        }
    }

    pub fn revision(&self) -> Option<u32> {
        match self {
            Stage::Alpha(rev) | Stage::Beta(rev) | Stage::Rc(rev) => Some(*rev),
            Stage::Release(_) => None,
        }
    }

    fn prerelease(state: ReleaseState, revision: u32) -> Option<Stage> {
        match state {
            ReleaseState::Alpha => Some(Stage::Alpha(revision)),
            ReleaseState::Beta => Some(Stage::Beta(revision)),
            ReleaseState::Rc => Some(Stage::Rc(revision)),
            ReleaseState::Release => None,
        }
    }
}

impl Ord for Stage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.state()
            .cmp(&other.state())
            .then_with(|| match (self, other) {
                (Stage::Release(a), Stage::Release(b)) => match (a, b) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => a.cmp(b),
                },
                _ => self.revision().cmp(&other.revision()),
            })
    }
}

impl PartialOrd for Stage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders the patch suffix that follows `major.minor` in a version string
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Release(None) => Ok(()),
            Stage::Release(Some(point)) => write!(f, ".{}", point),
            Stage::Alpha(rev) | Stage::Beta(rev) | Stage::Rc(rev) => {
                write!(f, "{}{}", self.state(), rev)
            }
        }
    }
}

impl FromStr for Stage {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_patch_token(s)
    }
}

/// Classify a patch token as a point release or a prerelease token.
///
/// Accepted shapes:
/// - `8` -> `Release(Some(8))`
/// - `rc1` -> `Rc(1)`
/// - `beta12` -> `Beta(12)`
///
/// Anything else, including a tag without digits or digits that overflow,
/// is rejected with [`VersionError::MalformedPrereleaseToken`].
pub fn parse_patch_token(token: &str) -> Result<Stage, VersionError> {
    if is_numeral(token) {
        return token
            .parse::<u32>()
            .map(|point| Stage::Release(Some(point)))
            .map_err(|_| malformed(token));
    }

    parse_prerelease_token(token)
}

/// Parse a token that must be a lifecycle tag immediately followed by digits.
pub fn parse_prerelease_token(token: &str) -> Result<Stage, VersionError> {
    ReleaseState::PRERELEASE
        .iter()
        .find_map(|state| {
            let digits = token.strip_prefix(state.as_str())?;
            if !is_numeral(digits) {
                return None;
            }
            let revision = digits.parse::<u32>().ok()?;
            Stage::prerelease(*state, revision)
        })
        .ok_or_else(|| malformed(token))
}

fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn malformed(token: &str) -> VersionError {
    debug!("Rejected patch token '{}'", token);
    VersionError::MalformedPrereleaseToken(token.to_string())
}
