//! Access management: single-owner and role-based
//!
//! Both modules are meant to be embedded as a `SubModule` and checked through
//! their `assert_*` hooks, or deployed standalone.

pub mod ownable;
pub mod access_control;
pub mod errors;
pub mod events;

pub use ownable::Ownable;
pub use access_control::{AccessControl, Role, DEFAULT_ADMIN_ROLE};
pub use errors::{AccessControlError, OwnableError};
pub use events::*;
