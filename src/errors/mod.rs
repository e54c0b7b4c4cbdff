//! Error types and error reporting for the front end.
//!
//! This module defines the errors the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - The error variants for expectation mismatches, missing prefix handlers and bad integers
//! - Tips and caret-style rendering against the original source

pub mod errors;

#[cfg(test)]
mod tests;
