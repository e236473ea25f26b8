//! The finished request value

use crate::extras::Extras;
use crate::flags::Flags;
use crate::target::{ComponentName, Locator, Target};
use serde::{Deserialize, Serialize};

/// Well-known action strings
pub mod actions {
    /// Entry point of an application
    pub const MAIN: &str = "MAIN";
    /// Display the data at the request's locator
    pub const VIEW: &str = "VIEW";
    /// Deliver the request's payload to someone else
    pub const SEND: &str = "SEND";
    /// Edit the data at the request's locator
    pub const EDIT: &str = "EDIT";
}

/// Immutable navigation request
///
/// Produced only by [`RequestBuilder::build`](crate::RequestBuilder::build).
/// Fields are private, so a built request cannot be altered afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub(crate) target: Target,
    pub(crate) action: Option<String>,
    pub(crate) mime_type: Option<String>,
    pub(crate) flags: Flags,
    pub(crate) extras: Extras,
}

impl Request {
    /// Destination identity
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Action string
    #[inline]
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// MIME type of the payload
    #[inline]
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Control flags
    #[inline]
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Typed payload
    #[inline]
    #[must_use]
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Check if the payload has an entry for `key`
    #[inline]
    #[must_use]
    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }

    /// Explicit component, if the target names one
    #[inline]
    #[must_use]
    pub fn component(&self) -> Option<&ComponentName> {
        self.target.component()
    }

    /// Resource locator, if the target carries one
    #[inline]
    #[must_use]
    pub fn locator(&self) -> Option<&Locator> {
        self.target.locator()
    }

    /// Take the payload out of the request
    #[inline]
    #[must_use]
    pub fn into_extras(self) -> Extras {
        self.extras
    }
}
