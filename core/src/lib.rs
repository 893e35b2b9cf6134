//! telco-core: a single-customer prepaid telecom account simulator.
//!
//! Modules, bottom-up:
//!   - types, error, phone      primitives and validation
//!   - catalog, config          the package list and runtime settings
//!   - account, complaint       pure account and support-queue rules
//!   - store                    flat-file persistence per phone number
//!   - event                    record of every committed change
//!   - session                  one customer's state plus persistence
//!   - command, console         the text menu

pub mod account;
pub mod catalog;
pub mod command;
pub mod complaint;
pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod phone;
pub mod session;
pub mod store;
pub mod types;

pub use error::{TelcoError, TelcoResult};
