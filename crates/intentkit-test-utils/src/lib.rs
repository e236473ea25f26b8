//! Testing utilities for intentkit workspace
//!
//! Shared navigator doubles and destination fixtures.

#![allow(missing_docs)]

use intentkit_dispatch::Navigator;
use intentkit_request::{Context, Destination, DestinationDescriptor, Request};
use parking_lot::Mutex;

pub const TEST_PACKAGE: &str = "com.example.intentkit";

/// Home screen fixture with a stable descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeScreen;

impl Destination for HomeScreen {
    fn descriptor() -> DestinationDescriptor {
        DestinationDescriptor::new("com.example.intentkit.HomeScreen")
    }
}

/// Detail screen fixture with a stable descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailScreen;

impl Destination for DetailScreen {
    fn descriptor() -> DestinationDescriptor {
        DestinationDescriptor::new("com.example.intentkit.DetailScreen")
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("no destination resolves for the request")]
    NoResolvableDestination,
    #[error("navigation not permitted: {0}")]
    NotPermitted(String),
}

/// Navigator double that records every request it is asked to start
#[derive(Debug)]
pub struct RecordingNavigator {
    package: String,
    started: Mutex<Vec<Request>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::with_package(TEST_PACKAGE)
    }

    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            started: Mutex::new(Vec::new()),
        }
    }

    pub fn started(&self) -> Vec<Request> {
        self.started.lock().clone()
    }

    pub fn last(&self) -> Option<Request> {
        self.started.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.started.lock().len()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for RecordingNavigator {
    fn package_name(&self) -> &str {
        &self.package
    }
}

impl Navigator for RecordingNavigator {
    type Error = HostError;

    fn start(&self, request: Request) -> Result<(), HostError> {
        self.started.lock().push(request);
        Ok(())
    }
}

/// Navigator double that behaves like a strict host
///
/// Requests without an explicit component are rejected, as are requests
/// naming a class listed as forbidden.
#[derive(Debug, Default)]
pub struct StrictNavigator {
    forbidden: Vec<String>,
    accepted: RecordingNavigator,
}

impl StrictNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forbid<D: Destination>(mut self) -> Self {
        self.forbidden.push(D::descriptor().class_name().to_owned());
        self
    }

    pub fn accepted(&self) -> Vec<Request> {
        self.accepted.started()
    }
}

impl Context for StrictNavigator {
    fn package_name(&self) -> &str {
        self.accepted.package_name()
    }
}

impl Navigator for StrictNavigator {
    type Error = HostError;

    fn start(&self, request: Request) -> Result<(), HostError> {
        let component = request
            .component()
            .ok_or(HostError::NoResolvableDestination)?;
        if self.forbidden.iter().any(|class| class == component.class()) {
            return Err(HostError::NotPermitted(component.class().to_owned()));
        }
        self.accepted.start(request)
    }
}
