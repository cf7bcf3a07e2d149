//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation and FFI layers decoupled from storage details.

pub mod person_service;
