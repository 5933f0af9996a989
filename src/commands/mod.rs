//! Command implementations for the CLI
//!
//! - quote: price one job from flags
//! - session: interactive form
//! - catalog: price table and operating constants
//! - config: configuration display and validation

pub mod catalog;
pub mod config;
pub mod quote;
pub mod session;
