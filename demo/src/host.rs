//! Simulated host
//!
//! [`ScreenHost`] plays the platform: it owns a package, knows which screens
//! are registered, and keeps a back stack of the requests it has started.

use intentkit_dispatch::Navigator;
use intentkit_request::{
    ComponentName, Context, Destination, DestinationDescriptor, Flags, Request,
};
use parking_lot::Mutex;
use tracing::info;

/// Navigation failures reported by the host
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Request carried no component to resolve
    #[error("request names no destination")]
    NoDestination,

    /// Component is outside this host's package
    #[error("component {0} belongs to another package")]
    ForeignPackage(String),

    /// Component is not a registered screen
    #[error("no screen registered as {0}")]
    UnknownScreen(String),
}

/// In-memory host with a back stack
#[derive(Debug)]
pub struct ScreenHost {
    package: String,
    screens: Vec<DestinationDescriptor>,
    back_stack: Mutex<Vec<Request>>,
}

impl ScreenHost {
    /// Host for `package` with no screens registered
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            screens: Vec::new(),
            back_stack: Mutex::new(Vec::new()),
        }
    }

    /// Register destination type `D`
    #[must_use]
    pub fn register<D: Destination>(mut self) -> Self {
        self.screens.push(D::descriptor());
        self
    }

    /// Request currently on top of the back stack
    #[must_use]
    pub fn current(&self) -> Option<Request> {
        self.back_stack.lock().last().cloned()
    }

    /// Back stack depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.back_stack.lock().len()
    }

    /// Pop the top request, returning it
    pub fn back(&self) -> Option<Request> {
        self.back_stack.lock().pop()
    }

    fn resolve<'r>(&self, request: &'r Request) -> Result<&'r ComponentName, HostError> {
        let component = request.component().ok_or(HostError::NoDestination)?;
        if component.package() != self.package {
            return Err(HostError::ForeignPackage(component.to_string()));
        }
        if !self.screens.iter().any(|screen| component.matches(screen)) {
            return Err(HostError::UnknownScreen(component.class().to_owned()));
        }
        Ok(component)
    }
}

impl Context for ScreenHost {
    fn package_name(&self) -> &str {
        &self.package
    }
}

impl Navigator for ScreenHost {
    type Error = HostError;

    fn start(&self, request: Request) -> Result<(), HostError> {
        let component = self.resolve(&request)?.clone();
        let flags = request.flags();
        let mut stack = self.back_stack.lock();

        if flags.contains(Flags::CLEAR_TOP) {
            if let Some(pos) = stack.iter().position(|r| r.component() == Some(&component)) {
                stack.truncate(pos);
            }
        }
        if flags.contains(Flags::SINGLE_TOP) {
            if let Some(top) = stack.last_mut() {
                if top.component() == Some(&component) {
                    *top = request;
                    info!(%component, "delivered to existing top screen");
                    return Ok(());
                }
            }
        }

        info!(%component, depth = stack.len() + 1, "started screen");
        stack.push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentkit_dispatch::Dispatcher;
    use intentkit_request::RequestBuilder;

    struct Alpha;
    impl Destination for Alpha {
        fn descriptor() -> DestinationDescriptor {
            DestinationDescriptor::new("Alpha")
        }
    }

    struct Beta;
    impl Destination for Beta {
        fn descriptor() -> DestinationDescriptor {
            DestinationDescriptor::new("Beta")
        }
    }

    fn host() -> ScreenHost {
        ScreenHost::new("pkg").register::<Alpha>().register::<Beta>()
    }

    #[test]
    fn unregistered_and_unset_targets_fail() {
        struct Gamma;
        impl Destination for Gamma {}

        let host = host();
        assert_eq!(
            Dispatcher::go::<Gamma, _>(&host),
            Err(HostError::UnknownScreen(Gamma::descriptor().class_name().to_owned()))
        );
        assert_eq!(
            Dispatcher::dispatch(&host, RequestBuilder::new().build()),
            Err(HostError::NoDestination)
        );
        assert_eq!(host.depth(), 0);
    }

    #[test]
    fn foreign_package_is_rejected() {
        let host = host();
        let other = ScreenHost::new("elsewhere");
        let request = RequestBuilder::for_instance(&other, &Alpha).build();

        assert!(matches!(
            Dispatcher::dispatch(&host, request),
            Err(HostError::ForeignPackage(_))
        ));
    }

    #[test]
    fn clear_top_pops_back_to_existing_screen() {
        let host = host();
        Dispatcher::go::<Alpha, _>(&host).unwrap();
        Dispatcher::go::<Beta, _>(&host).unwrap();
        Dispatcher::go::<Beta, _>(&host).unwrap();
        assert_eq!(host.depth(), 3);

        let request = RequestBuilder::for_instance(&host, &Alpha)
            .with_flags(Flags::CLEAR_TOP)
            .build();
        Dispatcher::dispatch(&host, request).unwrap();

        assert_eq!(host.depth(), 1);
        assert!(host.current().unwrap().flags().contains(Flags::CLEAR_TOP));
    }

    #[test]
    fn single_top_replaces_top_request() {
        let host = host();
        Dispatcher::go::<Beta, _>(&host).unwrap();

        let request = RequestBuilder::for_instance(&host, &Beta)
            .with_extra("n", 2_i32)
            .with_flags(Flags::SINGLE_TOP)
            .build();
        Dispatcher::dispatch(&host, request).unwrap();

        assert_eq!(host.depth(), 1);
        assert_eq!(host.current().unwrap().extras().get_as::<i32>("n").unwrap(), Some(2));
        assert!(host.back().is_some());
        assert!(host.current().is_none());
    }
}
