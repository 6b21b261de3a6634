//! Test utilities for the portfolio crate.
//!
//! Tests are written in two phases. Phase 1 declares the mock data store with
//! [`TestBuilder`]: which collections answer with which rows, which fail, and which accept
//! inserts. Phase 2 runs the code under test against the [`TestContext`] returned by
//! `build()` and finally verifies every declared endpoint was hit as expected.

pub mod builder;
pub mod constant;
pub mod context;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;

pub mod prelude {
    pub use crate::{constant::TEST_STORE_KEY, fixtures::factory, TestBuilder, TestContext};
}
