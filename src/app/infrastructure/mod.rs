//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The `.docx` zip container
//! - WordprocessingML body editing and inspection
//! - Placeholder substitution
//! - The built-in blank template
//! - Logging setup

pub mod blank_template;
pub mod docx;
pub mod logging;
pub mod substitution;
pub mod wordml;
