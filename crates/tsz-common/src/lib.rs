//! Common types and utilities for the tsz JSDoc type expression parser.
//!
//! This crate provides foundational types used across all tsz crates:
//! - Source spans (`Span`, `TextRange`)
//! - Parser limits and thresholds
//! - Diagnostic model and the static message table

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::{Span, TextRange};

// Centralized limits and thresholds
pub mod limits;

// Diagnostics - message table and the Diagnostic value type
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message, get_message_template,
};

#[cfg(test)]
mod tests;
