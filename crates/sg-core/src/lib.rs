//! # sg-core
//!
//! Core types and error types for Skygate.
//!
//! This crate provides the foundational types shared across all Skygate crates:
//! - Wire request/response structs for the audit, consent, and checklist endpoints
//! - The validated [`BusinessId`](ids::BusinessId) every workflow is keyed on
//! - Priority buckets, render tones, and failure kinds
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use errors::CoreError;
pub use ids::BusinessId;
