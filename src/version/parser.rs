//! Grammar for the output of `SELECT version()`
//!
//! Format:
//! ```text
//! PostgreSQL <major>.<minor>[.<point>|<state><revision>] on <host>, compiled by <compiler>, <bits>-bit
//! ```
//!
//! Parsing runs in two steps. A regex matches the coarse shape and captures
//! the patch token as plain text, then [`parse_patch_token`] classifies that
//! token as a point release or a prerelease tag.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::config::GrammarConfig;
use crate::version::error::VersionError;
use crate::version::pg_version::{PRODUCT_NAME, PgVersion};
use crate::version::stage::{Stage, parse_patch_token};

static DEFAULT_PARSER: LazyLock<VersionParser> = LazyLock::new(VersionParser::new);

/// Parser with the default (strict, anchored) grammar
pub fn default_parser() -> &'static VersionParser {
    &DEFAULT_PARSER
}

/// Parser for PostgreSQL version strings
#[derive(Debug, Clone)]
pub struct VersionParser {
    grammar: Regex,
}

impl VersionParser {
    pub fn new() -> Self {
        // The grammar is assembled from fixed fragments and an escaped
        // product token, so it always compiles.
        Self::with_config(&GrammarConfig::default()).unwrap()
    }

    pub fn with_config(config: &GrammarConfig) -> Result<Self, VersionError> {
        Ok(Self {
            grammar: Regex::new(&grammar(config))?,
        })
    }

    pub fn parse(&self, text: &str) -> Result<PgVersion, VersionError> {
        let Some(caps) = self.grammar.captures(text.trim()) else {
            debug!("Version string did not match grammar: '{}'", text);
            return Err(malformed(text));
        };

        let major = number(&caps, "major", text)?;
        let minor = number(&caps, "minor", text)?;
        let stage = match caps.name("patch") {
            Some(patch) => parse_patch_token(patch.as_str())?,
            None => Stage::Release(None),
        };

        let mut version = PgVersion::from_stage(major, minor, stage);
        if let Some(host) = caps.name("host") {
            version = version.with_host(host.as_str());
        }
        if let Some(compiler) = caps.name("compiler") {
            version = version.with_compiler(compiler.as_str());
        }
        if caps.name("bits").is_some() {
            version = version.with_bit_depth(number(&caps, "bits", text)?);
        }

        Ok(version)
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn grammar(config: &GrammarConfig) -> String {
    let build_info = if config.require_build_info { "" } else { "?" };
    let body = format!(
        concat!(
            r"{product} (?P<major>\d+)\.(?P<minor>\d+)(?:\.?(?P<patch>[[:alnum:]]+))?",
            r"(?: on (?P<host>[^,]+)){opt}",
            r"(?:, compiled by (?P<compiler>[^,]+)){opt}",
            r"(?:, (?P<bits>\d+)-bit){opt}",
        ),
        product = regex::escape(PRODUCT_NAME),
        opt = build_info,
    );

    if config.allow_surrounding_text {
        body
    } else {
        format!("^{}$", body)
    }
}

fn number(caps: &Captures<'_>, name: &str, text: &str) -> Result<u32, VersionError> {
    caps.name(name)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| malformed(text))
}

fn malformed(text: &str) -> VersionError {
    VersionError::MalformedVersionString(text.to_string())
}
