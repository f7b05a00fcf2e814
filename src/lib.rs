//! # vergram
//!
//! A library for parsing, canonicalizing and comparing version strings.
//!
//! Versions are parsed by a [`Dialect`], which turns a string into a structured value (or a
//! [`ParseError`] saying why it can't), renders that value back to its canonical form, and
//! orders values by the dialect's precedence rules. Numeric segments are kept as decimal text,
//! so they have no upper bound.
//!
//! ## Examples
//!
//! Parse and canonicalize:
//!
//! ```
//! use vergram::prelude::*;
//!
//! let version = Strict::parse("v1.2").unwrap();
//! assert_eq!("1.2.0", version.to_string());
//!
//! let pseudo = Module::parse("v0.6.2-0.20240717063648-d3b0c53281a1").unwrap();
//! assert_eq!(Some("20240717063648-d3b0c53281a1"), pseudo.git_info());
//! ```
//!
//! Compare, either parsed values or strings directly:
//!
//! ```
//! use std::cmp::Ordering;
//! use vergram::prelude::*;
//!
//! let rc = Strict::parse("v1.0.0-rc.1").unwrap();
//! let release = Strict::parse("v1.0.0").unwrap();
//! assert_eq!(Ordering::Less, Strict::compare(&rc, &release));
//!
//! // invalid versions are less than valid ones
//! assert_eq!(Ordering::Less, Strict::compare_str("not a version", "v0.0.1"));
//! ```
//!
//! Bump segments with decimal-string arithmetic:
//!
//! ```
//! use vergram::decimal;
//! use vergram::prelude::*;
//!
//! assert_eq!("1000", decimal::add("999", "1"));
//!
//! let version = Strict::parse("v1.9.0").unwrap();
//! assert_eq!("1.10.0", version.bump("0", "1", "0").unwrap().to_string());
//! ```
//!
//! ## Dialects
//!
//! vergram defines two dialects:
//!
//! - [`Strict`]: [SemVer 2.0.0](https://semver.org/) with a required leading `v`. `vMAJOR` and
//!   `vMAJOR.MINOR` are accepted as shorthands for `vMAJOR.0.0` and `vMAJOR.MINOR.0`. Parses
//!   into [`StrictVersion`].
//! - [`Module`]: Go-module style versions with an optional leading `v`, an optional pre-release
//!   [`Kind`] (`alpha`, `beta` or `rc`) with a counter, and an optional pseudo-version suffix
//!   carrying a commit timestamp and revision. Parses into [`ModuleVersion`].
//!
//! | Input | Dialect | Canonical form |
//! |---|---|---|
//! | `v1` | Strict | `1.0.0` |
//! | `v1.0.0-alpha.1+build.7` | Strict | `1.0.0-alpha.1+build.7` |
//! | `v1.2-pre` | Strict | *invalid*: a pre-release needs all three main segments |
//! | `v1.0.0-alpha.01` | Strict | *invalid*: numeric identifier with a leading zero |
//! | `1.2` | Module | `1.2.0` |
//! | `v1.2.3-beta.2` | Module | `1.2.3-beta.2` |
//! | `v0.6.2-0.20240717063648-d3b0c53281a1` | Module | `0.6.2-0.20240717063648-d3b0c53281a1` |
//! | `v1.1.1.1` | Module | *invalid*: too many main segments |
//!
//! ## Prelude
//!
//! vergram provides a prelude module for convenience. It contains everything needed to interact
//! with the library, including the [`Dialect`] trait that the dialects' functions live on.
//!
//! Use it with:
//!
//! ```
//! use vergram::prelude::*;
//! ```
#![warn(missing_docs)]

pub mod decimal;
mod dialect;
mod error;
pub mod ident;
mod module;
mod strict;

pub use crate::dialect::{Dialect, Module, Strict};
pub use crate::error::{BumpError, ParseError};
pub use crate::module::{Kind, ModuleVersion};
pub use crate::strict::StrictVersion;

/// A convenience module appropriate for glob imports (`use vergram::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::BumpError;
    #[doc(no_inline)]
    pub use crate::Dialect;
    #[doc(no_inline)]
    pub use crate::Kind;
    #[doc(no_inline)]
    pub use crate::Module;
    #[doc(no_inline)]
    pub use crate::ModuleVersion;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Strict;
    #[doc(no_inline)]
    pub use crate::StrictVersion;
}
