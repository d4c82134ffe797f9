//! Mergington Activities - extracurricular signup API
//!
//! Mergington High School students can:
//! - Browse the fixed set of activities and who has joined them
//! - Sign up for an activity with their school email
//! - Withdraw from an activity they joined
//!
//! State lives in memory for the lifetime of the server process.

pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use error::{Error, Result};
