//! The PostgreSQL version value
//!
//! Breaking changes to the server interface happen with a change of
//! major.minor; point releases only carry data integrity and security fixes.
//! Since 10 the project numbers releases `major.point`, which still parses
//! here as `major.minor[.point]` without any era-specific rules.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::parser;
use crate::version::stage::{self, ReleaseState, Stage};

/// Product token that prefixes every version string
pub const PRODUCT_NAME: &str = "PostgreSQL";

/// A parsed release identifier
///
/// Equality is structural and includes the descriptive build metadata
/// (host, compiler, bit depth). Ordering ignores that metadata, so use
/// [`PgVersion::cmp_release`] or [`PgVersion::release_key`] to rank values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PgVersion {
    major: u32,
    minor: u32,
    stage: Stage,
    host: Option<String>,
    compiler: Option<String>,
    bit_depth: Option<u32>,
}

/// The fields of a [`PgVersion`] that take part in ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseKey {
    pub major: u32,
    pub minor: u32,
    pub stage: Stage,
}

impl PgVersion {
    /// Create a release. `None` means no point release has been named yet.
    pub fn new(major: u32, minor: u32, point: Option<u32>) -> Self {
        Self::from_stage(major, minor, Stage::Release(point))
    }

    /// Create a prerelease from a token such as `rc1` or `beta12`.
    pub fn prerelease(major: u32, minor: u32, token: &str) -> Result<Self, VersionError> {
        let stage = stage::parse_prerelease_token(token)?;
        Ok(Self::from_stage(major, minor, stage))
    }

    /// Create a version from an optional patch token: absent, a point
    /// number (`"3"`), or a prerelease token (`"rc1"`).
    pub fn with_patch(major: u32, minor: u32, patch: Option<&str>) -> Result<Self, VersionError> {
        let stage = match patch {
            None => Stage::Release(None),
            Some(token) => stage::parse_patch_token(token)?,
        };
        Ok(Self::from_stage(major, minor, stage))
    }

    pub fn from_stage(major: u32, minor: u32, stage: Stage) -> Self {
        Self {
            major,
            minor,
            stage,
            host: None,
            compiler: None,
            bit_depth: None,
        }
    }

    /// Parse the output of `SELECT version()` with the default grammar.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parser::default_parser().parse(text)
    }

    pub fn with_host(self, host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..self
        }
    }

    pub fn with_compiler(self, compiler: impl Into<String>) -> Self {
        Self {
            compiler: Some(compiler.into()),
            ..self
        }
    }

    pub fn with_bit_depth(self, bit_depth: u32) -> Self {
        Self {
            bit_depth: Some(bit_depth),
            ..self
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn state(&self) -> ReleaseState {
        self.stage.state()
    }

    /// Point release; always `None` outside the release state
    pub fn point(&self) -> Option<u32> {
        self.stage.point()
    }

    /// Revision within a prerelease state; always `None` for releases
    pub fn revision(&self) -> Option<u32> {
        self.stage.revision()
    }

    /// Host architecture the server binary was built for
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Compiler the server binary was built with
    pub fn compiler(&self) -> Option<&str> {
        self.compiler.as_deref()
    }

    pub fn bit_depth(&self) -> Option<u32> {
        self.bit_depth
    }

    pub fn is_release(&self) -> bool {
        self.state() == ReleaseState::Release
    }

    pub fn is_release_candidate(&self) -> bool {
        self.state() == ReleaseState::Rc
    }

    pub fn is_beta(&self) -> bool {
        self.state() == ReleaseState::Beta
    }

    pub fn is_alpha(&self) -> bool {
        self.state() == ReleaseState::Alpha
    }

    /// The major and minor components, omitting the patch
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn release_key(&self) -> ReleaseKey {
        ReleaseKey {
            major: self.major,
            minor: self.minor,
            stage: self.stage,
        }
    }

    /// Rank two versions by major, minor, lifecycle state, then point or
    /// revision. An unspecified point release ranks above every numbered
    /// point of the same major.minor.
    pub fn cmp_release(&self, other: &Self) -> Ordering {
        self.release_key().cmp(&other.release_key())
    }
}

impl fmt::Display for PgVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}{}",
            PRODUCT_NAME, self.major, self.minor, self.stage
        )?;
        if let Some(host) = &self.host {
            write!(f, " on {}", host)?;
        }
        if let Some(compiler) = &self.compiler {
            write!(f, ", compiled by {}", compiler)?;
        }
        if let Some(bit_depth) = self.bit_depth {
            write!(f, ", {}-bit", bit_depth)?;
        }
        Ok(())
    }
}

impl FromStr for PgVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
