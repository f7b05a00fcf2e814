use crate::{
    decimal,
    error::{BumpError, ParseError},
    ident,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A version parsed by the [`Strict`](crate::Strict) dialect: SemVer 2.0.0 with a required
/// leading `v`.
///
/// The accepted form is `vMAJOR[.MINOR[.PATCH[-PRERELEASE][+BUILD]]]`, where MAJOR, MINOR and
/// PATCH are decimal integers without superfluous leading zeros, and PRERELEASE and BUILD are
/// non-empty dot-separated identifiers over `[0-9A-Za-z-]`. Numeric pre-release identifiers must
/// not have leading zeros; build identifiers may.
///
/// The shorthands `vMAJOR` and `vMAJOR.MINOR` are filled in with zeros when parsed. A pre-release
/// or build suffix is only allowed after all three main segments.
///
/// Segments are kept as decimal text, so there is no upper bound on their values.
///
/// # Examples
///
/// ```
/// use vergram::prelude::*;
///
/// let version = StrictVersion::parse("v1.2").unwrap();
/// assert_eq!("1.2.0", version.to_string());
///
/// let rc = Strict::parse("v1.2.0-rc.1+build.7").unwrap();
/// assert_eq!(Some("-rc.1"), rc.prerelease());
/// assert_eq!(Some("+build.7"), rc.build());
/// assert!(rc.compare(&version).is_lt());
///
/// assert!(!Strict::is_valid("1.2.0"));     // missing `v`
/// assert!(!Strict::is_valid("v1.2-rc.1")); // pre-release needs all three main segments
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrictVersion {
    major: String,
    minor: String,
    patch: String,
    /// Includes the leading `-`.
    prerelease: Option<String>,
    /// Includes the leading `+`.
    build: Option<String>,
}

impl StrictVersion {
    /// Parses a version string. See the [type-level documentation](StrictVersion) for the
    /// grammar.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingPrefix`] if the string doesn't start with `v`.
    /// - [`ParseError::EmptyMainSegment`] if a main segment has no digits.
    /// - [`ParseError::MalformedIdentifier`] if a main segment or numeric pre-release identifier
    ///   has a leading zero, or a pre-release/build identifier is empty or has a character
    ///   outside of `[0-9A-Za-z-]`.
    /// - [`ParseError::TrailingGarbage`] if anything else follows.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        let rest = version_str
            .strip_prefix('v')
            .ok_or_else(|| ParseError::MissingPrefix {
                version_string: version_str.to_owned(),
            })?;

        let (major, rest) = main_segment(rest, "major", version_str)?;
        if rest.is_empty() {
            return Ok(Self::from_main(major, "0", "0"));
        }

        let rest = after_dot(rest, version_str)?;
        let (minor, rest) = main_segment(rest, "minor", version_str)?;
        if rest.is_empty() {
            return Ok(Self::from_main(major, minor, "0"));
        }

        let rest = after_dot(rest, version_str)?;
        let (patch, mut rest) = main_segment(rest, "patch", version_str)?;
        let mut version = Self::from_main(major, minor, patch);

        if rest.starts_with('-') {
            let end = rest.find('+').unwrap_or(rest.len());
            let (prerelease, tail) = rest.split_at(end);
            check_identifiers(&prerelease[1..], true, version_str)?;
            version.prerelease = Some(prerelease.to_owned());
            rest = tail;
        }

        if rest.starts_with('+') {
            check_identifiers(&rest[1..], false, version_str)?;
            version.build = Some(rest.to_owned());
            rest = "";
        }

        if !rest.is_empty() {
            return Err(ParseError::TrailingGarbage {
                rest: rest.to_owned(),
                version_string: version_str.to_owned(),
            });
        }

        Ok(version)
    }

    fn from_main(major: &str, minor: &str, patch: &str) -> Self {
        Self {
            major: major.to_owned(),
            minor: minor.to_owned(),
            patch: patch.to_owned(),
            prerelease: None,
            build: None,
        }
    }

    /// The major segment.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// The minor segment, `0` if it was omitted.
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// The patch segment, `0` if it was omitted.
    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// The pre-release suffix including its leading `-`, like `-rc.1`.
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// The build suffix including its leading `+`, like `+build.7`.
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Returns true if this version has a pre-release suffix.
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Returns true if this version has build metadata.
    pub fn is_build(&self) -> bool {
        self.build.is_some()
    }

    /// Compares two versions by SemVer 2.0.0 precedence.
    ///
    /// Main segments are compared numerically. When they are equal, a version without a
    /// pre-release is greater than one with a pre-release, and two pre-releases are compared
    /// identifier by identifier: numeric identifiers numerically, others in ASCII order, numeric
    /// ones always lower than others, and a longer list greater when all shared identifiers are
    /// equal. Build metadata is ignored, so this can return [`Ordering::Equal`] for versions
    /// that are not `==`.
    pub fn compare(&self, other: &Self) -> Ordering {
        decimal::cmp(&self.major, &other.major)
            .then_with(|| decimal::cmp(&self.minor, &other.minor))
            .then_with(|| decimal::cmp(&self.patch, &other.patch))
            .then_with(|| {
                compare_prerelease(self.prerelease.as_deref(), other.prerelease.as_deref())
            })
    }

    /// Returns a new version with each amount added to its main segment. The pre-release and
    /// build suffixes are kept, and segments are not reset when a higher one is bumped.
    ///
    /// ```
    /// use vergram::StrictVersion;
    ///
    /// let version = StrictVersion::parse("v1.2.3-rc.1").unwrap();
    /// let next = version.bump("0", "1", "10").unwrap();
    /// assert_eq!("1.3.13-rc.1", next.to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`BumpError::InvalidAmount`] if an amount other than `0` is not a decimal number
    ///   without leading zeros.
    pub fn bump(&self, major: &str, minor: &str, patch: &str) -> Result<Self, BumpError> {
        Ok(Self {
            major: bump_segment(&self.major, major)?,
            minor: bump_segment(&self.minor, minor)?,
            patch: bump_segment(&self.patch, patch)?,
            prerelease: self.prerelease.clone(),
            build: self.build.clone(),
        })
    }
}

fn bump_segment(segment: &str, amount: &str) -> Result<String, BumpError> {
    let next = decimal::add(segment, amount);
    // segments are always valid numbers, so an unchanged result means the amount was rejected
    if amount != "0" && next == segment {
        return Err(BumpError::InvalidAmount {
            amount: amount.to_owned(),
        });
    }
    Ok(next)
}

/// Splits off a leading main segment: a maximal run of digits without a superfluous leading zero.
fn main_segment<'a>(
    s: &'a str,
    segment: &'static str,
    version_str: &str,
) -> Result<(&'a str, &'a str), ParseError> {
    let (digits, rest) = ident::split_digits(s);
    if digits.is_empty() {
        return Err(ParseError::EmptyMainSegment {
            segment,
            version_string: version_str.to_owned(),
        });
    }
    if ident::is_bad_num(digits) {
        return Err(ParseError::MalformedIdentifier {
            identifier: digits.to_owned(),
            version_string: version_str.to_owned(),
        });
    }
    Ok((digits, rest))
}

fn after_dot<'a>(s: &'a str, version_str: &str) -> Result<&'a str, ParseError> {
    s.strip_prefix('.')
        .ok_or_else(|| ParseError::TrailingGarbage {
            rest: s.to_owned(),
            version_string: version_str.to_owned(),
        })
}

/// Validates dot-separated pre-release or build identifiers (without their leading marker).
fn check_identifiers(
    identifiers: &str,
    forbid_leading_zero: bool,
    version_str: &str,
) -> Result<(), ParseError> {
    for identifier in identifiers.split('.') {
        let malformed = identifier.is_empty()
            || !identifier.bytes().all(ident::is_ident_char)
            || (forbid_leading_zero && ident::is_bad_num(identifier));
        if malformed {
            return Err(ParseError::MalformedIdentifier {
                identifier: identifier.to_owned(),
                version_string: version_str.to_owned(),
            });
        }
    }
    Ok(())
}

fn compare_prerelease(a: Option<&str>, b: Option<&str>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => (a, b),
    };

    let mut a_idents = a.strip_prefix('-').unwrap_or(a).split('.');
    let mut b_idents = b.strip_prefix('-').unwrap_or(b).split('.');
    loop {
        match (a_idents.next(), b_idents.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_identifier(x, y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}

fn compare_identifier(x: &str, y: &str) -> Ordering {
    match (ident::is_num(x), ident::is_num(y)) {
        (true, true) => decimal::cmp(x, y),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.cmp(y),
    }
}

impl FromStr for StrictVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for StrictVersion {
    /// Renders the canonical form: `MAJOR.MINOR.PATCH` followed by the pre-release and build
    /// suffixes as they were parsed. There is no leading `v`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            f.write_str(prerelease)?;
        }
        if let Some(build) = &self.build {
            f.write_str(build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// (input, canonical form if valid)
    const CASES: &[(&str, Option<&str>)] = &[
        ("bad", None),
        ("v1-alpha.beta.gamma", None),
        ("v1-pre", None),
        ("v1+meta", None),
        ("v1-pre+meta", None),
        ("v1.2-pre", None),
        ("v1.2+meta", None),
        ("v1.2-pre+meta", None),
        ("v1.0.0-alpha", Some("1.0.0-alpha")),
        ("v1.0.0-alpha.1", Some("1.0.0-alpha.1")),
        ("v1.0.0-alpha.beta", Some("1.0.0-alpha.beta")),
        ("v1.0.0-beta", Some("1.0.0-beta")),
        ("v1.0.0-beta.2", Some("1.0.0-beta.2")),
        ("v1.0.0-beta.11", Some("1.0.0-beta.11")),
        ("v1.0.0-rc.1", Some("1.0.0-rc.1")),
        ("v1", Some("1.0.0")),
        ("v1.0", Some("1.0.0")),
        ("v1.0.0", Some("1.0.0")),
        ("v1.2", Some("1.2.0")),
        ("v1.2.0", Some("1.2.0")),
        ("v1.2.3-456", Some("1.2.3-456")),
        ("v1.2.3-456.789", Some("1.2.3-456.789")),
        ("v1.2.3-456-789", Some("1.2.3-456-789")),
        ("v1.2.3-456a", Some("1.2.3-456a")),
        ("v1.2.3-pre", Some("1.2.3-pre")),
        ("v1.2.3-pre+meta", Some("1.2.3-pre+meta")),
        ("v1.2.3-pre.1", Some("1.2.3-pre.1")),
        ("v1.2.3-zzz", Some("1.2.3-zzz")),
        ("v1.2.3", Some("1.2.3")),
        ("v1.2.3+meta", Some("1.2.3+meta")),
        ("v1.2.3+meta-pre", Some("1.2.3+meta-pre")),
        ("v1.2.3+meta-pre.sha.256a", Some("1.2.3+meta-pre.sha.256a")),
    ];

    #[test]
    fn test_parse_and_format() {
        for (input, expected) in CASES {
            let actual = StrictVersion::parse(input).map(|v| v.to_string()).ok();
            assert_eq!(expected.map(str::to_owned), actual, "input {input}");
        }
    }

    #[test]
    fn test_canonical_form_is_idempotent() {
        for (input, _) in CASES {
            let Ok(version) = StrictVersion::parse(input) else {
                continue;
            };
            let canonical = version.to_string();
            let reparsed = StrictVersion::parse(&format!("v{canonical}")).unwrap();
            assert_eq!(canonical, reparsed.to_string());
            assert_eq!(Ordering::Equal, version.compare(&reparsed));
        }
    }

    #[rstest]
    #[case("", ParseError::MissingPrefix { version_string: "".into() })]
    #[case("1.2.3", ParseError::MissingPrefix { version_string: "1.2.3".into() })]
    #[case("V1.2.3", ParseError::MissingPrefix { version_string: "V1.2.3".into() })]
    #[case("v", ParseError::EmptyMainSegment { segment: "major", version_string: "v".into() })]
    #[case("v1.", ParseError::EmptyMainSegment { segment: "minor", version_string: "v1.".into() })]
    #[case(
        "v1.2.x",
        ParseError::EmptyMainSegment { segment: "patch", version_string: "v1.2.x".into() }
    )]
    #[case(
        "v01.2.3",
        ParseError::MalformedIdentifier { identifier: "01".into(), version_string: "v01.2.3".into() }
    )]
    #[case(
        "v1.0.0-alpha.01",
        ParseError::MalformedIdentifier {
            identifier: "01".into(),
            version_string: "v1.0.0-alpha.01".into(),
        }
    )]
    #[case(
        "v1.0.0-alpha..1",
        ParseError::MalformedIdentifier {
            identifier: "".into(),
            version_string: "v1.0.0-alpha..1".into(),
        }
    )]
    #[case(
        "v1.0.0-",
        ParseError::MalformedIdentifier { identifier: "".into(), version_string: "v1.0.0-".into() }
    )]
    #[case(
        "v1.0.0+",
        ParseError::MalformedIdentifier { identifier: "".into(), version_string: "v1.0.0+".into() }
    )]
    #[case(
        "v1.0.0-al_pha",
        ParseError::MalformedIdentifier {
            identifier: "al_pha".into(),
            version_string: "v1.0.0-al_pha".into(),
        }
    )]
    #[case(
        "v1.0.0+a+b",
        ParseError::MalformedIdentifier { identifier: "a+b".into(), version_string: "v1.0.0+a+b".into() }
    )]
    #[case(
        "v1.2-pre",
        ParseError::TrailingGarbage { rest: "-pre".into(), version_string: "v1.2-pre".into() }
    )]
    #[case(
        "v1.2.3.4",
        ParseError::TrailingGarbage { rest: ".4".into(), version_string: "v1.2.3.4".into() }
    )]
    #[case(
        "v1x",
        ParseError::TrailingGarbage { rest: "x".into(), version_string: "v1x".into() }
    )]
    fn test_parse_errors(#[case] input: &str, #[case] expected: ParseError) {
        assert_eq!(Err(expected), StrictVersion::parse(input));
    }

    #[test]
    fn test_build_identifiers_may_have_leading_zeros() {
        let version = StrictVersion::parse("v1.0.0-1+001.0002").unwrap();
        assert_eq!(Some("+001.0002"), version.build());
        assert!(version.is_build());
        assert!(version.is_prerelease());
    }

    #[test]
    fn test_shorthand_fills_zeros() {
        let version = StrictVersion::parse("v7").unwrap();
        assert_eq!(("7", "0", "0"), (version.major(), version.minor(), version.patch()));
        assert!(!version.is_prerelease());
        assert!(!version.is_build());
    }

    #[test]
    fn test_sort_fixture() {
        let ordered = [
            "v1.0.0-alpha",
            "v1.0.0-alpha.1",
            "v1.0.0-alpha.beta",
            "v1.0.0-beta",
            "v1.0.0-beta.2",
            "v1.0.0-beta.11",
            "v1.0.0-rc.1",
            "v1.0.0",
        ];
        let mut versions = ordered
            .iter()
            .rev()
            .map(|s| StrictVersion::parse(s).unwrap())
            .collect::<Vec<_>>();
        versions.sort_by(StrictVersion::compare);

        let sorted = versions
            .iter()
            .map(|v| format!("v{v}"))
            .collect::<Vec<_>>();
        assert_eq!(ordered.to_vec(), sorted);

        for pair in versions.windows(2) {
            assert_eq!(Ordering::Less, pair[0].compare(&pair[1]));
        }
    }

    #[rstest]
    #[case("v1.0.0", "v1.0.0+build", Ordering::Equal)]
    #[case("v2.0.0", "v10.0.0", Ordering::Less)]
    #[case("v1.10.0", "v1.9.0", Ordering::Greater)]
    #[case("v1.0.0-1", "v1.0.0-a", Ordering::Less)]
    #[case("v1.0.0-9", "v1.0.0-10", Ordering::Less)]
    #[case("v1.0.0-a-b", "v1.0.0-a", Ordering::Greater)]
    #[case("v1.0.0--a", "v1.0.0-a", Ordering::Less)] // `-a` is an identifier
    #[case("v1.0.0-Z", "v1.0.0-a", Ordering::Less)] // ASCII, not locale
    #[case("v1.0.0-rc.1+x", "v1.0.0-rc.1+y", Ordering::Equal)]
    #[case(
        "v123456789012345678901234567890",
        "v123456789012345678901234567889.9.9",
        Ordering::Greater
    )]
    fn test_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        let a = StrictVersion::parse(a).unwrap();
        let b = StrictVersion::parse(b).unwrap();
        assert_eq!(expected, a.compare(&b));
        assert_eq!(expected.reverse(), b.compare(&a));
    }

    #[rstest]
    #[case("v1.2.3", ("0", "0", "0"), "1.2.3")]
    #[case("v1.2.3", ("1", "0", "0"), "2.2.3")]
    #[case("v1.2.3", ("1", "0", "2"), "2.2.5")]
    #[case("v1", ("0", "0", "1"), "1.0.1")]
    #[case("v9.99.999-rc.1+b", ("1", "1", "1"), "10.100.1000-rc.1+b")]
    fn test_bump(#[case] input: &str, #[case] amounts: (&str, &str, &str), #[case] expected: &str) {
        let (major, minor, patch) = amounts;
        let version = StrictVersion::parse(input).unwrap();
        let next = version.bump(major, minor, patch).unwrap();
        assert_eq!(expected, next.to_string());
        // the original is untouched
        assert_eq!(StrictVersion::parse(input).unwrap(), version);
    }

    #[rstest]
    #[case("x")]
    #[case("01")]
    #[case("-1")]
    #[case("")]
    fn test_bump_invalid_amount(#[case] amount: &str) {
        let version = StrictVersion::parse("v1.2.3").unwrap();
        assert_eq!(
            Err(BumpError::InvalidAmount {
                amount: amount.to_owned()
            }),
            version.bump("0", amount, "0")
        );
    }

    #[test]
    fn test_from_str() {
        let version: StrictVersion = "v1.2.3-rc.1".parse().unwrap();
        assert_eq!("1.2.3-rc.1", version.to_string());
        assert!("1.2.3".parse::<StrictVersion>().is_err());
    }
}
