//! core
//!
//! Core domain types for Girder.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ProjectName, ProjectRequest
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Validation happens at construction, before any side effect

pub mod types;
