//! intentkit Dispatch
//!
//! Hands finished requests, or bare destinations, to a host [`Navigator`].
//!
//! The four classic call shapes (context or live source, request or
//! destination) collapse into one [`Dispatcher::dispatch`] over a
//! [`DispatchTarget`]. Both a context and a live screen are just values that
//! implement [`Navigator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use intentkit_dispatch::Dispatcher;
//! use intentkit_request::RequestBuilder;
//!
//! let request = RequestBuilder::for_instance(&host, &Detail)
//!     .with_extra("extra_text", "Hello")
//!     .build();
//! Dispatcher::dispatch(&host, request)?;
//! ```

#![warn(unreachable_pub)]

mod dispatcher;
mod navigator;

pub use dispatcher::{DispatchTarget, Dispatcher};
pub use navigator::Navigator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
