//! Cartline Core - Shared types library.
//!
//! This crate provides common types used across all Cartline components:
//! - `storefront` - Cart, delivery and address HTTP service
//! - `integration-tests` - End-to-end tests against a running storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money amounts, and statuses
//!
//! # Features
//!
//! - `openapi` - Derives `utoipa::ToSchema` for every type so it can appear in
//!   generated API documentation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
