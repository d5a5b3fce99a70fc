//! Category labels
//!
//! Categories are plain strings kept in insertion order. One of them,
//! [`FALLBACK_CATEGORY`], receives the records of any deleted category and can
//! never be deleted itself.

use std::fmt;

/// Category that records are moved to when their category is deleted
pub const FALLBACK_CATEGORY: &str = "其他";

/// Categories a fresh ledger starts with
pub const DEFAULT_CATEGORIES: [&str; 7] = ["飲食", "交通", "購物", "娛樂", "醫療", "教育", "其他"];

/// Trim a user-supplied category name and reject empty names
pub fn normalize_category_name(name: &str) -> Result<String, CategoryValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Whether a name is the protected fallback category
pub fn is_fallback(name: &str) -> bool {
    name == FALLBACK_CATEGORY
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_category_name("  旅遊 ").unwrap(), "旅遊");
        assert_eq!(
            normalize_category_name("   "),
            Err(CategoryValidationError::EmptyName)
        );
    }

    #[test]
    fn test_defaults_contain_fallback() {
        assert!(DEFAULT_CATEGORIES.contains(&FALLBACK_CATEGORY));
        assert!(is_fallback("其他"));
        assert!(!is_fallback("飲食"));
    }
}
