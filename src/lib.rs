// Bandstand - Instruments HTTP API
// Copyright (c) 2025 Bandstand Contributors
// Licensed under the MIT License

//! # Bandstand - Instruments HTTP API
//!
//! Bandstand is a small HTTP CRUD service exposing musical-instrument
//! records (name, category, group, retail price, manufacturer) stored in a
//! CouchDB-compatible document store.
//!
//! ## Overview
//!
//! The service is deliberately thin: it parses requests, runs a
//! required-field check and an allow-list projection over write bodies, and
//! forwards operations to the document store. Store failures are propagated
//! to callers with their upstream status and message intact; validation
//! failures are reported with a stable message enumerating the offending
//! fields.
//!
//! ## Architecture
//!
//! Bandstand follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`http`] - Routes, handlers, and the normalized error shape
//! - [`core`] - Validation and sanitization logic
//! - [`adapters`] - Document-store integrations (CouchDB, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bandstand::adapters::store::create_store;
//! use bandstand::config::load_config_or_default;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("bandstand.toml")?;
//!     let store = create_store(&config)?;
//!
//!     bandstand::http::serve(&config, store, std::future::pending()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All outward-facing failures share one JSON shape:
//!
//! ```json
//! { "status": 400, "message": "missing required field(s): category" }
//! ```
//!
//! Internally, fallible operations return [`domain::Result`] and store
//! calls complete with [`domain::StoreError`], keeping the upstream
//! `{status, message}` pair intact end to end.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod logging;
