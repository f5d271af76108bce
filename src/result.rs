//! Error handling and result types for fastlane2json.
//!
//! This module provides a unified error handling approach using the
//! `color-eyre` crate, which offers enhanced error reporting with context
//! and colored output on stderr.
//!
//! All functions in fastlane2json that can fail should return the
//! `Result<T>` type defined in this module.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout fastlane2json.
///
/// A type alias for `color_eyre::eyre::Result<T>`. Contexts added via
/// `.wrap_err()` are rendered as a chain in the final report.
pub type Result<T> = EyreResult<T>;
