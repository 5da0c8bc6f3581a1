//! # CareerBot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Library half of the `careerbot` crate. The binary in `main.rs` is a thin
//! terminal front end over these modules; integration tests in `cli/tests/`
//! use them directly.
//!
//! - `chat`: catalogue, keyword matcher, responder and conversation state
//! - `core`: configuration and error types
//!
pub mod chat;
pub mod core;
