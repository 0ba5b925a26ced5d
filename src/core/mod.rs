//! Core business logic for Bandstand.
//!
//! There is deliberately little of it: this service is routing-and-
//! validation glue around an external document store. What the service does
//! own lives here.
//!
//! # Modules
//!
//! - [`validation`] - Required-field checking and allow-list sanitization

pub mod validation;
