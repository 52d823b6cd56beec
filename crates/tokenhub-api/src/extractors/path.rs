//! Path parameter helpers.

use tokenhub_core::error::AppError;
use tokenhub_core::result::AppResult;

/// Rejects empty or whitespace-only string path parameters.
pub fn require_non_empty(name: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "Path parameter '{name}' must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("email", "a@b.c").is_ok());
        assert!(require_non_empty("email", "").is_err());
        assert!(require_non_empty("email", "   ").is_err());
    }
}
