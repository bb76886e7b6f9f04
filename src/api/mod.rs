//! API module
//!
//! Contains HTTP request handlers for the film catalog endpoints

pub mod films;
