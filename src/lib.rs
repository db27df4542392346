//! SCITUI - Terminal Calculator Suite Library
//!
//! A terminal suite bundling a scientific calculator, a product manager,
//! and a planet browser, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
