//! Dispatcher
//!
//! One stateless operation that turns a [`DispatchTarget`] into a request and
//! hands it to the source's [`Navigator::start`]. Host errors come back
//! untouched.

use crate::navigator::Navigator;
use intentkit_request::{Destination, DestinationDescriptor, Request, RequestBuilder};
use tracing::debug;

/// What to navigate to
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchTarget {
    /// A finished request, forwarded as is
    Request(Request),
    /// A bare destination; a minimal request is built for it
    Destination(DestinationDescriptor),
}

impl DispatchTarget {
    /// Target the type of a live destination instance
    #[inline]
    #[must_use]
    pub fn instance<D: Destination + ?Sized>(destination: &D) -> Self {
        Self::Destination(DestinationDescriptor::of_instance(destination))
    }

    /// Target destination type `D`
    #[inline]
    #[must_use]
    pub fn of<D: Destination>() -> Self {
        Self::Destination(D::descriptor())
    }

    fn into_request<N: Navigator + ?Sized>(self, source: &N) -> Request {
        match self {
            DispatchTarget::Request(request) => request,
            DispatchTarget::Destination(descriptor) => {
                RequestBuilder::for_destination(source, descriptor).build()
            }
        }
    }
}

impl From<Request> for DispatchTarget {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

impl From<DestinationDescriptor> for DispatchTarget {
    fn from(descriptor: DestinationDescriptor) -> Self {
        Self::Destination(descriptor)
    }
}

/// Stateless navigation helper
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Navigate from `source` to `target`
    ///
    /// A [`DispatchTarget::Request`] reaches [`Navigator::start`] exactly as
    /// given. A [`DispatchTarget::Destination`] is first resolved against the
    /// source's package into a request with no action, flags or extras.
    ///
    /// # Errors
    ///
    /// Whatever the source's [`Navigator::start`] returns.
    pub fn dispatch<N>(source: &N, target: impl Into<DispatchTarget>) -> Result<(), N::Error>
    where
        N: Navigator + ?Sized,
    {
        let request = target.into().into_request(source);
        debug!(
            source = source.package_name(),
            component = request.component().map(tracing::field::display),
            locator = request.locator().map(tracing::field::display),
            action = request.action(),
            flags = %request.flags(),
            extras = request.extras().len(),
            "dispatching request"
        );
        source.start(request)
    }

    /// Navigate to destination type `D`
    ///
    /// # Errors
    ///
    /// Whatever the source's [`Navigator::start`] returns.
    pub fn go<D, N>(source: &N) -> Result<(), N::Error>
    where
        D: Destination,
        N: Navigator + ?Sized,
    {
        Self::dispatch(source, DispatchTarget::of::<D>())
    }

    /// Navigate to the type of a live destination
    ///
    /// # Errors
    ///
    /// Whatever the source's [`Navigator::start`] returns.
    pub fn go_to<D, N>(source: &N, destination: &D) -> Result<(), N::Error>
    where
        D: Destination + ?Sized,
        N: Navigator + ?Sized,
    {
        Self::dispatch(source, DispatchTarget::instance(destination))
    }
}
