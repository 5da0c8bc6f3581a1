//! # CareerBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the library and the
//! `careerbot` binary:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use careerbot::core::config; // For loading configuration
//! use careerbot::core::error::{CareerbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
