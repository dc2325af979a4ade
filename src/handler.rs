use crate::params::Params;

/// A page handler invoked by [`Router::dispatch`](crate::Router::dispatch).
///
/// Implemented for any `Fn(&Params)`. Exact matches are called with an
/// empty parameter list.
pub trait Handler {
    /// Handles a resolved fragment.
    fn call(&self, params: &Params<'_, '_>);
}

impl<F> Handler for F
where
    F: Fn(&Params<'_, '_>),
{
    fn call(&self, params: &Params<'_, '_>) {
        (self)(params)
    }
}

/// A type-erased handler, for route tables mixing different closures.
pub type BoxedHandler = Box<dyn Fn(&Params<'_, '_>) + Send + Sync>;

/// Boxes a closure as a [`BoxedHandler`].
///
/// ```rust
/// use hashroute::{handler, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let router = Router::from_routes([
///     ("#/settings", handler(|_| println!("settings"))),
///     ("#/services/:name", handler(|p| println!("service {:?}", p.get("name")))),
/// ])?;
///
/// router.dispatch("#/services/users")?;
/// # Ok(())
/// # }
/// ```
pub fn handler<F>(f: F) -> BoxedHandler
where
    F: Fn(&Params<'_, '_>) + Send + Sync + 'static,
{
    Box::new(f)
}
