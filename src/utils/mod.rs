//! Utility modules for DOM access and cell formatting.

pub mod dom;
pub mod format;
