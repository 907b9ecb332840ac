//! Middleware del sistema
//!
//! Extractor de body JSON y capas HTTP compartidas por el router.

pub mod cors;
pub mod json_body;

pub use cors::*;
pub use json_body::*;
