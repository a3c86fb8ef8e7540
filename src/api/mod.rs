//! API Layer
//!
//! HTTP access to the visitor analytics endpoint.

pub mod client;

pub use client::fetch_visitors;
