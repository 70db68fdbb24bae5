//! Test utilities
//!
//! Manual test doubles and fixtures for unit testing.
//!
//! Hand-written doubles instead of mockall: the repository port is two methods
//! and the doubles need shared call counters that outlive the `Arc` the
//! service takes ownership of.

pub mod fixtures;
pub mod logging;
pub mod mocks;

pub use fixtures::*;
pub use logging::*;
pub use mocks::*;
