//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft editing, debounced commits and view routing.
//! - Keep presentation/FFI layers decoupled from store details.

pub mod debounce;
pub mod draft_service;
pub mod session_service;
