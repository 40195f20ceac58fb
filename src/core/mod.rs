//! Core business logic layer
//!
//! The record tables and the linear scans that run over them.

pub mod data;
pub mod lookup;
