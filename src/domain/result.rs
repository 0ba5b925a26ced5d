//! Result type alias for Bandstand
//!
//! This module provides a convenient Result type alias that uses
//! BandstandError as the error type.

use super::errors::BandstandError;

/// Result type alias for Bandstand operations
///
/// This is a convenience type alias that uses `BandstandError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use bandstand::domain::result::Result;
/// use bandstand::domain::errors::BandstandError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BandstandError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BandstandError>;
