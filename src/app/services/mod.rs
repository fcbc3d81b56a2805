//! Services layer - business operations.
//!
//! - Run formatting of skeleton lines
//! - The in-memory label store
//! - Document assembly

pub mod assembler;
pub mod formatter;
pub mod store;
