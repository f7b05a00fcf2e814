use crate::{
    error::ParseError,
    module::ModuleVersion,
    strict::StrictVersion,
};
use core::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

/// A version grammar: how to parse a version string, render it canonically, and order it.
///
/// Implementors are zero-sized marker types ([`Strict`], [`Module`]); all methods are associated
/// functions, so they're called like `Strict::parse("v1.2.3")`.
pub trait Dialect: Sized {
    /// The structured value this dialect parses into.
    type Version: Display + Debug + Clone;

    /// Returns the name of the dialect for messages.
    fn name() -> &'static str;

    /// Parses a version string into its structured form, or returns the first [`ParseError`]
    /// found.
    fn parse(version_str: &str) -> Result<Self::Version, ParseError>;

    /// Compares two versions by this dialect's precedence rules.
    fn compare(a: &Self::Version, b: &Self::Version) -> Ordering;

    /// Returns true if `version_str` parses in this dialect.
    fn is_valid(version_str: &str) -> bool {
        Self::parse(version_str).is_ok()
    }

    /// Renders a version in canonical form. Same as its [`Display`] implementation.
    fn format(version: &Self::Version) -> String {
        version.to_string()
    }

    /// Parses both strings and compares them.
    ///
    /// An invalid version string is less than any valid one, and all invalid version strings
    /// are equal to each other.
    fn compare_str(a: &str, b: &str) -> Ordering {
        match (Self::parse(a), Self::parse(b)) {
            (Ok(a), Ok(b)) => Self::compare(&a, &b),
            (Err(_), Err(_)) => Ordering::Equal,
            (Err(_), Ok(_)) => Ordering::Less,
            (Ok(_), Err(_)) => Ordering::Greater,
        }
    }
}

/// SemVer 2.0.0 with a required leading `v`, like `v1.2.3-rc.1+build.5`. `vMAJOR` and
/// `vMAJOR.MINOR` are accepted as shorthands for `vMAJOR.0.0` and `vMAJOR.MINOR.0`.
///
/// See [`StrictVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strict;

impl Dialect for Strict {
    type Version = StrictVersion;

    fn name() -> &'static str {
        "strict"
    }

    fn parse(version_str: &str) -> Result<StrictVersion, ParseError> {
        StrictVersion::parse(version_str)
    }

    fn compare(a: &StrictVersion, b: &StrictVersion) -> Ordering {
        a.compare(b)
    }
}

/// Go-module style versions, with an optional leading `v`, an optional pre-release kind and an
/// optional pseudo-version suffix, like `v1.2.3-beta.2.0.20240717063648-d3b0c53281a1`.
///
/// See [`ModuleVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module;

impl Dialect for Module {
    type Version = ModuleVersion;

    fn name() -> &'static str {
        "module"
    }

    fn parse(version_str: &str) -> Result<ModuleVersion, ParseError> {
        ModuleVersion::parse(version_str)
    }

    fn compare(a: &ModuleVersion, b: &ModuleVersion) -> Ordering {
        a.compare(b)
    }
}
