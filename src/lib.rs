//! Receipt Processor
//!
//! This crate accepts purchase receipts, validates them, stores them in
//! memory under generated identifiers, and awards each one points according
//! to a fixed set of scoring rules. Every award comes with a line-by-line
//! explanation.
//!
//! The crate is usable as a library ([`service::ReceiptService`]) or as an
//! HTTP service ([`api::create_router`], [`server::serve`]).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod validation;
