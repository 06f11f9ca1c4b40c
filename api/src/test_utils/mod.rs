//! Test utilities
//!
//! Manual in-memory repository and test fixtures for unit testing.
//!
//! Why a manual repository instead of mockall?
//! - mockall has lifetime issues with async traits taking `&TenantId` parameters
//! - An in-memory store lets tests check what was actually persisted
//!
//! The `Clock` port has no such issues, so tests use mockall's `MockClock`
//! (see `fixed_clock`).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
