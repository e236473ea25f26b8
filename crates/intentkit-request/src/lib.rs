//! intentkit Request
//!
//! Typed navigation requests assembled through a fluent, single-use builder.
//!
//! # Core Concepts
//!
//! - [`RequestBuilder`]: fluent construction, consumed by `build`
//! - [`Request`]: immutable result (target, action, MIME type, flags, extras)
//! - [`Target`]: destination identity, fixed at construction
//! - [`Extras`]: insertion-ordered map of [`ExtraValue`]s, one per key
//! - [`Context`] / [`Destination`]: host hooks used to resolve destinations
//!
//! # Example
//!
//! ```rust
//! use intentkit_request::{Context, Destination, Flags, RequestBuilder};
//!
//! struct App;
//! impl Context for App {
//!     fn package_name(&self) -> &str {
//!         "com.example.app"
//!     }
//! }
//!
//! struct Detail;
//! impl Destination for Detail {}
//!
//! let request = RequestBuilder::for_instance(&App, &Detail)
//!     .with_extra("extra_text", "Hello")
//!     .with_flags(Flags::NEW_TASK)
//!     .build();
//!
//! assert_eq!(request.extras().get_str("extra_text"), Some("Hello"));
//! assert!(request.flags().contains(Flags::NEW_TASK));
//! ```

#![warn(unreachable_pub)]

mod builder;
mod error;
mod extra;
mod extras;
mod flags;
mod request;
mod target;

// Re-exports
pub use builder::RequestBuilder;
pub use error::ExtraError;
pub use extra::{CharSequence, ExtraKind, ExtraValue, FromExtra};
pub use extras::Extras;
pub use flags::Flags;
pub use request::{actions, Request};
pub use target::{
    ComponentName, Context, Destination, DestinationDescriptor, DestinationInstance, Locator,
    Target,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building requests
    pub use crate::{
        actions, CharSequence, Context, Destination, DestinationDescriptor, ExtraValue, Extras,
        Flags, Locator, Request, RequestBuilder, Target,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
