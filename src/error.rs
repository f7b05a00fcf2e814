/// An error that occurs when parsing a version string with one of the dialects.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The dialect requires a leading `v` and the version string has none.
    #[error("Version string `{version_string}` should start with `v`")]
    MissingPrefix {
        /// The version string being parsed
        version_string: String,
    },

    /// A major, minor or patch segment has no digits.
    #[error("Version string `{version_string}` should have digits in its {segment} segment")]
    EmptyMainSegment {
        /// Which main segment is empty: `major`, `minor` or `patch`
        segment: &'static str,
        /// The version string being parsed
        version_string: String,
    },

    /// There are more than three dot-separated main segments.
    #[error("Version string `{version_string}` should have at most 3 main segments, found {count}")]
    TooManyMainSegments {
        /// Number of dot-separated segments found
        count: usize,
        /// The version string being parsed
        version_string: String,
    },

    /// A pre-release position holds an alphabetic token that is not a known kind.
    #[error("Pre-release kind `{kind}` should be one of {expected}")]
    InvalidKind {
        /// The unrecognized token
        kind: String,
        /// A human readable list of accepted kinds
        expected: String,
    },

    /// A pseudo-version suffix does not start with the required digit run.
    #[error("Pseudo-version suffix `{suffix}` should start with digits")]
    InvalidGitInfo {
        /// The suffix that failed to parse
        suffix: String,
    },

    /// An identifier is empty, contains a character outside of `[0-9A-Za-z-]`, or is numeric
    /// with a superfluous leading zero where that is not allowed.
    #[error("Identifier `{identifier}` in version string `{version_string}` is malformed")]
    MalformedIdentifier {
        /// The offending identifier (possibly empty)
        identifier: String,
        /// The version string being parsed
        version_string: String,
    },

    /// Input remains after the dialect's grammar is fully matched.
    #[error("Version string `{version_string}` has unexpected trailing text `{rest}`")]
    TrailingGarbage {
        /// The unconsumed text
        rest: String,
        /// The version string being parsed
        version_string: String,
    },
}

/// An error that occurs when bumping the segments of a version.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BumpError {
    /// The bump amount is not a decimal number without leading zeros, so adding it changed
    /// nothing.
    #[error("Bump amount `{amount}` should be a decimal number without leading zeros")]
    InvalidAmount {
        /// The rejected amount
        amount: String,
    },
}
