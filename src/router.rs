use crate::error::{DecodeError, InsertError, MatchError};
use crate::fragment;
use crate::handler::Handler;
use crate::params::Params;
use crate::pattern::Pattern;

use std::collections::HashMap;

/// An ordered table of fragment routes.
///
/// Routes are tried in insertion order and the first match wins, except that
/// a fragment equal to a parameter-free pattern always resolves to that
/// pattern.
///
/// ```rust
/// use hashroute::Router;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("#/services", "service list")?;
/// router.insert("#/services/:name", "service home")?;
/// router.insert("#/services/:name/:ix#num/:action", "resource")?;
///
/// let matched = router.at("#/services/users/2/edit?tab=response")?;
/// assert_eq!(*matched.value, "resource");
/// assert_eq!(matched.params.get("name"), Some("users"));
/// assert_eq!(matched.params.get("ix"), Some("2"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
    // Parameter-free patterns, by pattern string.
    exact: HashMap<String, usize>,
}

#[derive(Clone, Debug)]
struct Route<T> {
    pattern: Pattern,
    value: T,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            exact: HashMap::new(),
        }
    }
}

impl<T> Router<T> {
    /// Construct a new router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a router from `(pattern, value)` pairs, keeping their order.
    pub fn from_routes<I, P>(routes: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
    {
        let mut router = Self::new();
        for (pattern, value) in routes {
            router.insert(pattern, value)?;
        }

        Ok(router)
    }

    /// Appends a route to the end of the table.
    ///
    /// ```rust
    /// # use hashroute::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("#/settings", "Settings")?;
    /// router.insert("#/services/:name/ui", "Swagger UI")?;
    /// router.insert("#/files/:path*", "File browser")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, pattern: impl Into<String>, value: T) -> Result<(), InsertError> {
        let pattern = Pattern::new(pattern)?;

        self.check_conflict(&pattern)?;
        self.push(Route { pattern, value });
        Ok(())
    }

    /// Tries to match a fragment against the table.
    ///
    /// Any `?...` suffix is ignored. Returns [`MatchError::Decode`] if the
    /// first matching route captured a value that cannot be percent-decoded.
    pub fn at<'r, 'p>(&'r self, fragment: &'p str) -> Result<Match<'r, 'p, &'r T>, MatchError> {
        let (index, params, exact) = self.find(fragment)?;
        let route = &self.routes[index];

        Ok(Match {
            value: &route.value,
            params,
            route: route.pattern.as_str(),
            exact,
        })
    }

    /// Tries to match a fragment against the table, returning a mutable
    /// reference to the value.
    pub fn at_mut<'r, 'p>(
        &'r mut self,
        fragment: &'p str,
    ) -> Result<Match<'r, 'p, &'r mut T>, MatchError> {
        // the parameters borrow the table, so they are rebuilt against the
        // mutable borrow below
        let (index, params, exact) = {
            let (index, params, exact) = self.find(fragment)?;
            (index, params.to_vec(), exact)
        };

        let route = &mut self.routes[index];
        let mut owned = Params::new();
        let names = route.pattern.param_names();
        for (name, (_, value)) in names.zip(params) {
            owned.push(name, value.into());
        }

        Ok(Match {
            value: &mut route.value,
            params: owned,
            route: route.pattern.as_str(),
            exact,
        })
    }

    /// Merges another router's routes after this router's, in order.
    ///
    /// If any incoming pattern is already registered, nothing is merged and
    /// this router is left unchanged.
    pub fn merge(&mut self, other: Self) -> Result<(), InsertError> {
        for route in &other.routes {
            self.check_conflict(&route.pattern)?;
        }

        for route in other.routes {
            self.push(route);
        }

        Ok(())
    }

    /// Returns the registered patterns in table order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn check_conflict(&self, pattern: &Pattern) -> Result<(), InsertError> {
        if self.routes.iter().any(|r| r.pattern == *pattern) {
            return Err(InsertError::Conflict {
                with: pattern.as_str().to_owned(),
            });
        }

        Ok(())
    }

    fn push(&mut self, route: Route<T>) {
        trace!("inserting route `{}`", route.pattern.as_str());

        if route.pattern.is_static() {
            self.exact
                .insert(route.pattern.as_str().to_owned(), self.routes.len());
        }

        self.routes.push(route);
    }

    fn find<'r, 'p>(&'r self, fragment: &'p str) -> Result<(usize, Params<'r, 'p>, bool), MatchError> {
        let path = fragment::path(fragment);

        if let Some(&index) = self.exact.get(path) {
            return Ok((index, Params::new(), true));
        }

        for (index, route) in self.routes.iter().enumerate() {
            if let Some(captures) = route.pattern.capture(path) {
                return Ok((index, captures.decode()?, false));
            }
        }

        Err(MatchError::NotFound)
    }
}

impl<H: Handler> Router<H> {
    /// Resolves a fragment and invokes at most one handler.
    ///
    /// A fragment that matches nothing is not an error; it returns
    /// [`Dispatched::NotFound`] without calling anything. A malformed
    /// percent-escape in a matched value aborts before any handler runs.
    ///
    /// ```rust
    /// use hashroute::{handler, Dispatched, Router};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let router = Router::from_routes([
    ///     ("#/services/foo", handler(|_| {})),
    ///     ("#/services/:name", handler(|_| {})),
    /// ])?;
    ///
    /// assert_eq!(router.dispatch("#/services/foo")?, Dispatched::Exact("#/services/foo"));
    /// assert_eq!(router.dispatch("#/services/bar")?, Dispatched::Matched("#/services/:name"));
    /// assert_eq!(router.dispatch("#/settings")?, Dispatched::NotFound);
    /// # Ok(())
    /// # }
    /// ```
    pub fn dispatch(&self, fragment: &str) -> Result<Dispatched<'_>, DecodeError> {
        debug!("dispatching `{}`", fragment);

        match self.at(fragment) {
            Ok(matched) => {
                let dispatched = if matched.exact {
                    debug!("exact match `{}`", matched.route);
                    Dispatched::Exact(matched.route)
                } else {
                    debug!("matched by pattern `{}`: {:?}", matched.route, matched.params);
                    Dispatched::Matched(matched.route)
                };

                Handler::call(matched.value, &matched.params);
                Ok(dispatched)
            }
            Err(MatchError::NotFound) => {
                debug!("no route matched `{}`", fragment);
                Ok(Dispatched::NotFound)
            }
            Err(MatchError::Decode(err)) => {
                warn!("failed to dispatch `{}`: {}", fragment, err);
                Err(err)
            }
        }
    }
}

/// A successful match consisting of the registered value
/// and the decoded parameters of the matched route.
#[derive(Debug)]
pub struct Match<'k, 'v, V> {
    /// The value stored under the matched route.
    pub value: V,

    /// The route parameters. See [parameters](crate::Params) for more details.
    pub params: Params<'k, 'v>,

    /// The pattern string of the matched route.
    pub route: &'k str,

    exact: bool,
}

impl<V> Match<'_, '_, V> {
    /// Returns `true` if the fragment resolved through the exact-match path
    /// rather than by pattern.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

/// The outcome of [`Router::dispatch`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dispatched<'r> {
    /// The path equalled a parameter-free pattern, which was invoked.
    Exact(&'r str),
    /// The first matching pattern in table order was invoked.
    Matched(&'r str),
    /// Nothing matched and no handler was invoked.
    NotFound,
}

impl Dispatched<'_> {
    /// Returns the pattern of the invoked route, if any.
    pub fn route(&self) -> Option<&str> {
        match *self {
            Dispatched::Exact(route) | Dispatched::Matched(route) => Some(route),
            Dispatched::NotFound => None,
        }
    }
}
