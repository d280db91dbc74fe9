//! Core library components.
//!
//! This module contains the resolution logic: selector parsing, name
//! validation, directory lookup and value normalization. Nothing here knows
//! about the CLI or the host registry.

pub mod constants;
pub mod directory;
pub mod resolver;
pub mod retrieved;
pub mod selector;
pub mod validation;
