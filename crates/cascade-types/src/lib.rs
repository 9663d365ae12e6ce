//! Shared types, adapter traits, and error types for cascading settings.
//!
//! This crate contains the foundational types shared between the
//! resolution engine, the facade crate and every store adapter. Keeping them
//! in a separate crate lets adapter crates compile without pulling in the
//! engine.

pub mod deployment;
pub mod error;
pub mod prelude;
pub mod scope;
pub mod setting;
pub mod settings_store;
pub mod source;

// vim: ts=4
