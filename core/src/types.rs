//! Shared primitive types used across the entire simulator.

/// A currency amount in rupees.
pub type Money = f64;

/// A data, voice or SMS allowance counter.
pub type Quota = u64;

/// Package name stored on an account with no subscription.
pub const NO_PACKAGE: &str = "None";
