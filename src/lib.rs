//! Demurrage Engine
//!
//! This crate computes demurrage (container storage overage) charges from a
//! tiered day-rate tariff, and exposes the calculation over HTTP and through
//! an interactive console prompt.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
