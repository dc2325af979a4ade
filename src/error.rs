use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Error)]
pub enum InsertError {
    /// Attempted to insert a pattern that is already registered.
    #[error("insertion failed due to conflict with previously registered route: {with}")]
    Conflict {
        /// The existing route that the insertion is conflicting with.
        with: String,
    },
    /// Parameters must be registered with a name.
    #[error("parameters must be registered with a name")]
    UnnamedParam,
    /// A parameter segment carries a suffix other than `*` or `#num`.
    #[error("invalid parameter segment `{segment}`")]
    InvalidParam {
        /// The offending pattern segment.
        segment: String,
    },
    /// Only one catch-all parameter is allowed per route.
    #[error("only one catch-all parameter is allowed per route")]
    TooManyCatchAll,
    /// Parameter names must be unique within a route.
    #[error("parameter `{name}` is registered more than once")]
    DuplicateParam {
        /// The repeated parameter name.
        name: String,
    },
}

/// A captured value could not be percent-decoded.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum DecodeError {
    /// A `%` was not followed by two hex digits.
    #[error("malformed percent-escape in `{value}`")]
    InvalidEscape {
        /// The raw, undecoded value.
        value: String,
    },
    /// The decoded bytes are not valid UTF-8.
    #[error("percent-decoded `{value}` is not valid UTF-8")]
    InvalidUtf8 {
        /// The raw, undecoded value.
        value: String,
    },
}

/// A failed match attempt.
///
/// ```
/// use hashroute::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("#/home", "Welcome!")?;
/// router.insert("#/services/:name", "A service.")?;
///
/// // no routes match
/// if let Err(err) = router.at("#/settings") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MatchError {
    /// No matching route was found.
    #[error("matching route not found")]
    NotFound,
    /// A route matched but one of its parameters could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
