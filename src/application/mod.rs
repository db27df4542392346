//! Application layer managing state and screen workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing application state, user interactions, and screen transitions.

pub mod state;

pub use state::*;
