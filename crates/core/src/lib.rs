//! PurpleShop Core - Domain library.
//!
//! This crate provides the data and logic shared by all PurpleShop components:
//! - `storefront` - Public-facing shop (home, product browser, product pages)
//! - `admin` - Dashboard for managing products and customer inquiries
//! - `cli` - Command-line tools for inspecting the sample data
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. Every operation is synchronous and deterministic, which keeps
//! it trivially testable and usable from any binary.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, categories, emails, and statuses
//! - [`catalog`] - Storefront catalog and the filter/sort pipeline
//! - [`admin`] - Admin record store (products, inquiries, validation)
//! - [`sample`] - Hard-coded sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod catalog;
pub mod sample;
pub mod types;

pub use types::*;
