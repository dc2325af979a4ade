//! Helpers for splitting a location fragment into the path used for routing
//! and its query string.
//!
//! ```rust
//! use hashroute::fragment::{self, Query};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let current = "#/services/users?ix=3&action=edit";
//!
//! assert_eq!(fragment::path(current), "#/services/users");
//! assert_eq!(fragment::query(current), Some("ix=3&action=edit"));
//!
//! let query = Query::parse(current)?;
//! assert_eq!(query.get("ix"), Some("3"));
//! # Ok(())
//! # }
//! ```

use crate::decode::decode_form;
use crate::error::DecodeError;

use std::borrow::Cow;

/// Returns the fragment with any `?...` suffix removed.
pub fn path(fragment: &str) -> &str {
    split(fragment).0
}

/// Returns the raw text after the first `?`, if there is one.
pub fn query(fragment: &str) -> Option<&str> {
    split(fragment).1
}

/// Splits a fragment at its first `?`.
pub fn split(fragment: &str) -> (&str, Option<&str>) {
    match fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (fragment, None),
    }
}

/// The decoded `key=value` pairs of a fragment's query string.
///
/// Routing never looks at the query; this is for handlers that do.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query<'a> {
    pairs: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> Query<'a> {
    /// Parses the query string of a fragment.
    ///
    /// Pairs are separated by `&`, keys from values by the first `=`. A key
    /// with no `=` has an empty value and empty pairs are skipped. `+` decodes
    /// to a space.
    pub fn parse(fragment: &'a str) -> Result<Query<'a>, DecodeError> {
        let mut pairs = Vec::new();

        for pair in query(fragment).unwrap_or_default().split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            pairs.push((decode_form(key)?, decode_form(value)?));
        }

        Ok(Query { pairs })
    }

    /// Returns the first value registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();

        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns every value registered under the given key, in order.
    pub fn get_all<'q>(&'q self, key: &'q str) -> impl Iterator<Item = &'q str> + 'q {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns an iterator over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_query() {
        let tests = [
            ("#/services/foo?ix=3", "#/services/foo", Some("ix=3")),
            ("#/services/foo", "#/services/foo", None),
            ("#/services/foo?", "#/services/foo", Some("")),
            ("#/a?b?c", "#/a", Some("b?c")),
            ("?x=1", "", Some("x=1")),
            ("", "", None),
        ];

        for (fragment, path, query) in tests {
            assert_eq!(split(fragment), (path, query), "{fragment}");
        }
    }

    #[test]
    fn query_pairs() {
        let query = Query::parse("#/services/foo?ix=3&action=edit&flag&&ix=4").unwrap();
        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            vec![("ix", "3"), ("action", "edit"), ("flag", ""), ("ix", "4")]
        );
        assert_eq!(query.get("ix"), Some("3"));
        assert!(query.get_all("ix").eq(["3", "4"]));
        assert_eq!(query.get("missing"), None);
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn query_decoding() {
        let query = Query::parse("#/x?path=%2Fusers%2F1&q=a+b&eq=a=b").unwrap();
        assert_eq!(query.get("path"), Some("/users/1"));
        assert_eq!(query.get("q"), Some("a b"));
        assert_eq!(query.get("eq"), Some("a=b"));
    }

    #[test]
    fn no_query() {
        assert!(Query::parse("#/services").unwrap().is_empty());
        assert!(Query::parse("#/services?").unwrap().is_empty());
    }

    #[test]
    fn malformed_query() {
        assert_eq!(
            Query::parse("#/x?q=%zz"),
            Err(DecodeError::InvalidEscape {
                value: "%zz".to_owned()
            })
        );
    }
}
