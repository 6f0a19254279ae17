//! Shared utilities for gitid

pub mod paths;
pub mod regex;
