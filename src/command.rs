//! Command execution for fastlane2json.
//!
//! The binary has a single operation, implemented in the `convert` module:
//! resolve the version's changelog file, read it, and print one quoted,
//! comma-terminated line per input line to standard output.
//!
//! All commands use the unified error handling provided by the `result`
//! module, so failures terminate with a non-zero exit status and a report
//! on standard error.

/// Changelog-to-JSON-lines conversion.
pub mod convert;
