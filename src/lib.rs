//! # `hashroute`
//!
//! An ordered, first-match router for URL hash fragments such as
//! `#/services/users/2/edit?tab=response`.
//!
//! ```rust
//! use hashroute::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.insert("#/services", "Service list")?;
//! router.insert("#/services/:name", "Service home")?;
//!
//! let matched = router.at("#/services/users")?;
//! assert_eq!(*matched.value, "Service home");
//! assert_eq!(matched.params.get("name"), Some("users"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Patterns
//!
//! Patterns and fragments are split on `/` and compared segment by segment.
//! A segment starting with `:` is a parameter; anything else must match
//! exactly, including the leading `#`.
//!
//! ```text
//! Syntax        Type
//! :name         named parameter
//! :name#num     named parameter, digits only
//! :name*        catch-all parameter
//! ```
//!
//! Named parameters match exactly one segment:
//!
//! ```text
//! Pattern: #/services/:name/:ix#num/:action
//!
//! #/services/users/2/edit     match: name="users", ix="2", action="edit"
//! #/services/users/two/edit   no match
//! #/services/users/2          no match
//! ```
//!
//! A catch-all parameter absorbs one or more segments. At most one is allowed
//! per pattern, and segments after it are matched from the end of the path:
//!
//! ```text
//! Pattern: #/files/:path*/raw
//!
//! #/files/a/b/c/raw           match: path="a/b/c"
//! #/files/a/raw               match: path="a"
//! #/files/raw                 no match
//! ```
//!
//! Parameter values are percent-decoded, so `%2Fetc` is captured as `/etc`.
//! Anything after the first `?` is ignored for matching; see [`fragment::Query`]
//! for reading it.
//!
//! ## Priority
//!
//! A fragment equal to a pattern with no parameters always resolves to that
//! pattern. Otherwise routes are tried in insertion order and the first match
//! wins:
//!
//! ```rust
//! # use hashroute::Router;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.insert("#/services/:name", "by name")?;
//! router.insert("#/services/:id#num", "by id")?;
//! router.insert("#/services/upload", "upload")?;
//!
//! assert_eq!(*router.at("#/services/upload")?.value, "upload");
//! assert_eq!(*router.at("#/services/42")?.value, "by name");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch
//!
//! A router of [`Handler`]s resolves the current fragment and calls the
//! matched handler with its parameters, typically on page load and on every
//! fragment change. Nothing is called if no route matches.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod decode;
mod error;
pub mod fragment;
mod handler;
mod params;
mod pattern;
mod router;

pub use decode::decode;
pub use error::{DecodeError, InsertError, MatchError};
pub use handler::{handler, BoxedHandler, Handler};
pub use params::{Params, ParamsIter};
pub use pattern::{Constraint, Pattern, Segment};
pub use router::{Dispatched, Match, Router};
