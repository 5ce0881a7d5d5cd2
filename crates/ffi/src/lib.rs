//! C ABI for the physics toolkit.
//!
//! Every fallible function returns a [`error::PhysKitErrorCode`] and records
//! a diagnostic message retrievable with `physkit_get_last_error` on the
//! same thread.

pub mod environment;
pub mod error;
mod helpers;
pub mod text;
pub mod units;
