//! Validation of names that end up on the filesystem.
//!
//! Output files are named after hit identifiers taken from hit tables, so an
//! identifier must never be able to escape the output directory.

/// Maximum length of an output file name
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Filename validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Filename too long: exceeds {MAX_FILENAME_LENGTH} characters")]
    FilenameTooLong,
    #[error("Invalid filename: contains path traversal or invalid characters")]
    InvalidFilename,
    #[error("Empty filename provided")]
    EmptyFilename,
}

/// Turn an identifier into a safe file name inside the output directory.
///
/// Validates and sanitizes by:
/// - Checking length limits
/// - Rejecting directory traversal (../, ..\\) and path separators
/// - Rejecting null bytes and control characters
/// - Dropping characters outside `[A-Za-z0-9._-]`
/// - Rejecting names that would be hidden files
///
/// # Errors
///
/// Returns `ValidationError::EmptyFilename` if the name is empty,
/// `ValidationError::FilenameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidFilename` if it contains invalid characters or
/// nothing usable remains after sanitization.
///
/// # Examples
///
/// ```
/// use hmmer_slicer::utils::validation::validate_filename;
///
/// assert_eq!(validate_filename("scaffold_12").unwrap(), "scaffold_12");
/// assert_eq!(validate_filename("NW_004.1|x").unwrap(), "NW_004.1x");
/// assert!(validate_filename("../escape").is_err());
/// ```
pub fn validate_filename(filename: &str) -> Result<String, ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::FilenameTooLong);
    }

    // Prevent directory traversal
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename);
    }

    if filename.contains('\0') || filename.chars().any(|c| ('\x01'..='\x1F').contains(&c)) {
        return Err(ValidationError::InvalidFilename);
    }

    let sanitized = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_')
        .collect::<String>();

    if sanitized.is_empty() || sanitized.starts_with('.') {
        return Err(ValidationError::InvalidFilename);
    }

    Ok(sanitized)
}
