//! Host navigation capability

use intentkit_request::{Context, Request};

/// Anything able to start navigation for a request
///
/// Implemented by the host environment. The dispatcher only ever calls
/// [`Navigator::start`] and hands back whatever it returns.
pub trait Navigator: Context {
    /// Error the host reports when it cannot honour a request
    type Error: std::error::Error;

    /// Start navigation for `request`
    ///
    /// # Errors
    ///
    /// Host-defined; typically an unresolvable destination or a missing
    /// permission.
    fn start(&self, request: Request) -> Result<(), Self::Error>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    type Error = N::Error;

    fn start(&self, request: Request) -> Result<(), Self::Error> {
        (**self).start(request)
    }
}
