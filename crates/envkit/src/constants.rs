//! Centralized constants for envkit.
//!
//! This module contains the default values shared by the loader and the
//! conversion functions to avoid magic value duplication.

// =============================================================================
// Loader Defaults
// =============================================================================

/// Name of the file the loader always consults, implicitly or explicitly.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Character that introduces a comment line in an env file.
pub const COMMENT_PREFIX: char = '#';

/// Separator between a variable name and its value in an env file.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// Conversion Bounds
// =============================================================================

/// Lowest valid port number.
pub const PORT_MIN: i64 = 0;

/// Highest valid port number.
pub const PORT_MAX: i64 = 65535;
