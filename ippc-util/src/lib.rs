//! # ippc
//!
//! Shared helpers for the IPPcode19 front end.

pub mod source;

#[cfg(test)]
mod tests;
