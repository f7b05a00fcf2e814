use clap::Parser;
use tracing::debug;
use vergram::{BumpError, ParseError, StrictVersion};

#[derive(thiserror::Error, Debug, PartialEq)]
enum CliError {
    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] ParseError),

    #[error("Invalid argument: {0}")]
    InvalidBump(#[from] BumpError),
}

/// Bumps the major, minor and patch segments of a `v`-prefixed SemVer version and prints the
/// result in canonical form.
///
/// Each amount is added to its segment as a decimal number of any size. Lower segments are not
/// reset, so `vbump v1.2.3 1` prints `2.2.3`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The version to bump, like `v1.2.3-rc.1`
    base: String,

    /// Amount to add to the major segment
    #[arg(default_value = "0")]
    major: String,

    /// Amount to add to the minor segment
    #[arg(default_value = "0")]
    minor: String,

    /// Amount to add to the patch segment
    #[arg(default_value = "0")]
    patch: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match do_work(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<String, CliError> {
    debug!(?cli, "bumping");

    let version = StrictVersion::parse(&cli.base)?;
    debug!(%version, "parsed base version");

    let next = version.bump(&cli.major, &cli.minor, &cli.patch)?;
    debug!(%next, "bumped");

    Ok(next.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("vbump").chain(args.iter().copied()))
            .unwrap();
        do_work(cli)
    }

    #[rstest]
    #[case(&["v1.2.3"], "1.2.3")]
    #[case(&["v1.2.3", "1"], "2.2.3")]
    #[case(&["v1.2.3", "1", "0", "2"], "2.2.5")]
    #[case(&["v1", "0", "0", "1"], "1.0.1")]
    #[case(&["v1.0.0-rc.1+build", "0", "0", "1"], "1.0.1-rc.1+build")]
    #[case(
        &["v99999999999999999999999999999", "1"],
        "100000000000000000000000000000.0.0"
    )]
    fn test_bump(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(Ok(expected.to_owned()), run(args));
    }

    #[test]
    fn test_invalid_version() {
        let err = run(&["1.2.3", "1"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidVersion(ParseError::MissingPrefix { .. })));
    }

    #[rstest]
    #[case(&["v1.2.3", "x"], "x")]
    #[case(&["v1.2.3", "0", "01"], "01")]
    #[case(&["v1.2.3", "0", "0", "1.5"], "1.5")]
    fn test_invalid_bump(#[case] args: &[&str], #[case] amount: &str) {
        assert_eq!(
            Err(CliError::InvalidBump(BumpError::InvalidAmount {
                amount: amount.to_owned()
            })),
            run(args)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = run(&["v1.2.3", "x"]).unwrap_err();
        assert_eq!(
            "Invalid argument: Bump amount `x` should be a decimal number without leading zeros",
            err.to_string()
        );

        let err = run(&["bad"]).unwrap_err();
        assert_eq!(
            "Invalid version: Version string `bad` should start with `v`",
            err.to_string()
        );
    }

    #[test]
    fn test_missing_base() {
        assert!(Cli::try_parse_from(["vbump"]).is_err());
        assert!(Cli::try_parse_from(["vbump", "v1", "1", "2", "3", "4"]).is_err());
    }
}
