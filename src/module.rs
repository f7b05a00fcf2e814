use crate::{decimal, error::ParseError, ident};
use chrono::NaiveDateTime;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A pre-release maturity label used by the [`Module`](crate::Module) dialect.
///
/// Kinds are ordered like their tokens: `alpha < beta < rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// `alpha`
    Alpha,
    /// `beta`
    Beta,
    /// `rc`, a release candidate
    Rc,
}

impl Kind {
    /// All kinds, in order.
    pub const ALL: [Kind; 3] = [Kind::Alpha, Kind::Beta, Kind::Rc];

    /// The token that denotes this kind in a version string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Alpha => "alpha",
            Kind::Beta => "beta",
            Kind::Rc => "rc",
        }
    }

    /// Returns a human readable list of kind tokens. Used for error messages.
    fn variants_string() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!("`{kind}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Splits a kind token off the front of `s`. The token must be followed by the end of `s` or
    /// a `.`, so `rc.1` matches but `rcx` doesn't.
    fn strip_from(s: &str) -> Result<(Kind, &str), ParseError> {
        Self::ALL
            .iter()
            .find_map(|&kind| {
                let tail = s.strip_prefix(kind.as_str())?;
                (tail.is_empty() || tail.starts_with('.')).then_some((kind, tail))
            })
            .ok_or_else(|| ParseError::InvalidKind {
                kind: s.split('.').next().unwrap_or(s).to_owned(),
                expected: Self::variants_string(),
            })
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::strip_from(s)? {
            (kind, "") => Ok(kind),
            _ => Err(ParseError::InvalidKind {
                kind: s.to_owned(),
                expected: Self::variants_string(),
            }),
        }
    }
}

/// A version parsed by the [`Module`](crate::Module) dialect.
///
/// The general form is
///
/// ```text
/// [v]MAJOR[.MINOR[.PATCH]][-SUFFIX]
/// ```
///
/// where SUFFIX is either a kind with an optional counter and an optional pseudo-version
/// (`rc`, `beta.2`, `beta.2.0.20240717063648-d3b0c53281a1`), or a pseudo-version on its own
/// (`0.20240717063648-d3b0c53281a1`, `20240717063648-d3b0c53281a1`). A pseudo-version is an
/// optional build counter followed by git info, which is kept verbatim.
///
/// Omitted minor and patch segments stay omitted: they read as `None` from
/// [`minor`](Self::minor) and [`patch`](Self::patch), and are only filled in with `0` when
/// formatting or comparing.
///
/// # Examples
///
/// ```
/// use vergram::prelude::*;
///
/// let version = Module::parse("v0.6.2-0.20240717063648-d3b0c53281a1").unwrap();
/// assert_eq!(Some("0"), version.build_metadata());
/// assert_eq!(Some("20240717063648-d3b0c53281a1"), version.git_info());
/// assert_eq!(Some("d3b0c53281a1"), version.revision());
///
/// let beta = ModuleVersion::parse("1.0-beta.2").unwrap();
/// assert_eq!(None, beta.patch());
/// assert_eq!(Some(Kind::Beta), beta.kind());
/// assert_eq!("1.0.0-beta.2", beta.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleVersion {
    major: String,
    minor: Option<String>,
    patch: Option<String>,
    kind: Option<Kind>,
    pre: Option<String>,
    build_metadata: Option<String>,
    git_info: Option<String>,
}

impl ModuleVersion {
    /// Parses a version string. See the [type-level documentation](ModuleVersion) for the
    /// grammar.
    ///
    /// # Errors
    ///
    /// - [`ParseError::TooManyMainSegments`] if there are more than three main segments.
    /// - [`ParseError::EmptyMainSegment`] if the major segment is empty.
    /// - [`ParseError::MalformedIdentifier`] if a main segment or the kind counter is not a
    ///   decimal number without leading zeros.
    /// - [`ParseError::InvalidKind`] if the suffix starts with a letter but not with a [`Kind`].
    /// - [`ParseError::InvalidGitInfo`] if a pseudo-version doesn't start with digits.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        let body = version_str.strip_prefix('v').unwrap_or(version_str);
        let (main, rest) = match body.split_once('-') {
            Some((main, rest)) => (main, Some(rest)),
            None => (body, None),
        };

        let count = main.split('.').count();
        if count > 3 {
            return Err(ParseError::TooManyMainSegments {
                count,
                version_string: version_str.to_owned(),
            });
        }

        let mut segments = main.split('.');
        let major = segments.next().unwrap_or_default();
        if major.is_empty() {
            return Err(ParseError::EmptyMainSegment {
                segment: "major",
                version_string: version_str.to_owned(),
            });
        }
        let minor = segments.next();
        let patch = segments.next();
        for segment in [Some(major), minor, patch].into_iter().flatten() {
            if !ident::is_numeric_ident(segment) {
                return Err(ParseError::MalformedIdentifier {
                    identifier: segment.to_owned(),
                    version_string: version_str.to_owned(),
                });
            }
        }

        let mut version = Self {
            major: major.to_owned(),
            minor: minor.map(str::to_owned),
            patch: patch.map(str::to_owned),
            kind: None,
            pre: None,
            build_metadata: None,
            git_info: None,
        };

        let Some(rest) = rest else {
            return Ok(version);
        };

        if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let (kind, tail) = Kind::strip_from(rest)?;
            version.kind = Some(kind);
            version.parse_kind_tail(tail, version_str)?;
        } else {
            version.parse_pseudo(rest)?;
        }

        Ok(version)
    }

    /// Parses what follows a kind token: nothing, or `.PRE`, or `.PSEUDO`, or `.PRE.PSEUDO`.
    fn parse_kind_tail(&mut self, tail: &str, version_str: &str) -> Result<(), ParseError> {
        let Some(after) = tail.strip_prefix('.') else {
            return Ok(());
        };

        let (digits, rest) = ident::split_digits(after);
        if digits.is_empty() {
            return Err(ParseError::InvalidGitInfo {
                suffix: after.to_owned(),
            });
        }
        if rest.starts_with('-') {
            // a timestamp, not a counter
            return self.parse_pseudo(after);
        }
        if !ident::is_numeric_ident(digits) {
            return Err(ParseError::MalformedIdentifier {
                identifier: digits.to_owned(),
                version_string: version_str.to_owned(),
            });
        }
        self.pre = Some(digits.to_owned());

        if rest.is_empty() {
            return Ok(());
        }
        match rest.strip_prefix('.') {
            Some(pseudo) => self.parse_pseudo(pseudo),
            None => Err(ParseError::InvalidGitInfo {
                suffix: rest.to_owned(),
            }),
        }
    }

    fn parse_pseudo(&mut self, suffix: &str) -> Result<(), ParseError> {
        let (digits, rest) = ident::split_digits(suffix);
        if digits.is_empty() {
            return Err(ParseError::InvalidGitInfo {
                suffix: suffix.to_owned(),
            });
        }

        if rest.starts_with('-') {
            self.git_info = Some(suffix.to_owned());
            return Ok(());
        }

        self.build_metadata = Some(digits.to_owned());
        let git_info = rest.strip_prefix('.').unwrap_or(rest);
        if !git_info.is_empty() {
            self.git_info = Some(git_info.to_owned());
        }
        Ok(())
    }

    /// The major segment.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// The minor segment, if present in the version string.
    pub fn minor(&self) -> Option<&str> {
        self.minor.as_deref()
    }

    /// The patch segment, if present in the version string.
    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    /// The pre-release kind.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// The counter after the kind, like `2` in `beta.2`.
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// The build counter in front of the git info, like `0` in `0.20240717063648-d3b0c53281a1`.
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// The git info, verbatim, like `20240717063648-d3b0c53281a1`.
    pub fn git_info(&self) -> Option<&str> {
        self.git_info.as_deref()
    }

    /// Returns true if this is a pseudo-version, i.e. it carries git info.
    pub fn is_pseudo(&self) -> bool {
        self.git_info.is_some()
    }

    /// The commit time encoded at the start of the git info as `YYYYMMDDhhmmss` (UTC).
    ///
    /// Returns `None` if there is no git info or it doesn't start with a valid timestamp.
    pub fn commit_time(&self) -> Option<NaiveDateTime> {
        let (timestamp, _) = self.split_git_info()?;
        NaiveDateTime::parse_from_str(timestamp, "%Y%m%d%H%M%S").ok()
    }

    /// The commit revision following the timestamp in the git info, like `d3b0c53281a1`.
    ///
    /// Returns `None` if the git info doesn't start with a 14-digit timestamp and a `-`.
    pub fn revision(&self) -> Option<&str> {
        let (_, revision) = self.split_git_info()?;
        revision
    }

    /// Splits the git info into its 14-digit timestamp and the revision after the first `-`.
    fn split_git_info(&self) -> Option<(&str, Option<&str>)> {
        let git_info = self.git_info.as_deref()?;
        let (timestamp, revision) = match git_info.split_once('-') {
            Some((timestamp, revision)) => (timestamp, Some(revision)),
            None => (git_info, None),
        };
        if timestamp.len() != 14 || !ident::is_num(timestamp) {
            return None;
        }
        Some((timestamp, revision))
    }

    /// Compares two versions by precedence.
    ///
    /// Main segments are compared numerically, with omitted ones read as `0`. Then a version
    /// without a kind is greater than one with a kind, two kinds compare like [`Kind`], and
    /// finally the kind counters compare numerically, an absent counter being the lowest. Build
    /// metadata and git info are ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        decimal::cmp(&self.major, &other.major)
            .then_with(|| decimal::cmp(self.minor_or_zero(), other.minor_or_zero()))
            .then_with(|| decimal::cmp(self.patch_or_zero(), other.patch_or_zero()))
            .then_with(|| match (self.kind, other.kind) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
            .then_with(|| {
                decimal::cmp(
                    self.pre.as_deref().unwrap_or_default(),
                    other.pre.as_deref().unwrap_or_default(),
                )
            })
    }

    fn minor_or_zero(&self) -> &str {
        self.minor.as_deref().unwrap_or("0")
    }

    fn patch_or_zero(&self) -> &str {
        self.patch.as_deref().unwrap_or("0")
    }
}

impl FromStr for ModuleVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ModuleVersion {
    /// Renders the canonical form, without a leading `v` and with omitted main segments filled
    /// in with `0`. Build metadata is only rendered as part of a pseudo-version.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.major,
            self.minor_or_zero(),
            self.patch_or_zero()
        )?;

        if self.kind.is_some() || self.git_info.is_some() {
            f.write_str("-")?;
        }
        if let Some(kind) = self.kind {
            write!(f, "{kind}")?;
            if let Some(pre) = &self.pre {
                write!(f, ".{pre}")?;
            }
        }
        if let Some(git_info) = &self.git_info {
            if self.kind.is_some() {
                f.write_str(".")?;
            }
            if let Some(build_metadata) = &self.build_metadata {
                write!(f, "{build_metadata}.")?;
            }
            f.write_str(git_info)?;
        }
        Ok(())
    }
}
