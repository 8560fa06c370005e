//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Scope`] - Non-empty ordered list of CloudFormation scope identifiers
//!
//! # Validation
//!
//! These types enforce validity at construction time. An empty scope cannot
//! be represented, so a descriptor holding a `Scope` is always invocable.
//!
//! # Examples
//!
//! ```
//! use cfn2ts::core::types::Scope;
//!
//! let scope = Scope::new(vec!["AWS::IAM".to_string()]).unwrap();
//! assert_eq!(scope.as_slice(), ["AWS::IAM"]);
//!
//! assert!(Scope::new(Vec::new()).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid scope: {0}")]
    InvalidScope(String),
}

/// A validated, non-empty generation scope.
///
/// Entries keep the order they were given in. Duplicates are allowed; the
/// generator decides what to do with them.
///
/// # Example
///
/// ```
/// use cfn2ts::core::types::Scope;
///
/// let scope = Scope::single("AWS::S3");
/// assert_eq!(scope.len(), 1);
/// assert_eq!(scope.to_string(), "AWS::S3");
///
/// let many = Scope::new(vec!["AWS::IAM".into(), "AWS::S3".into()]).unwrap();
/// assert_eq!(many.to_string(), "AWS::IAM, AWS::S3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Scope(Vec<String>);

impl Scope {
    /// Create a new validated scope.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidScope` if `entries` is empty.
    pub fn new(entries: Vec<String>) -> Result<Self, TypeError> {
        if entries.is_empty() {
            return Err(TypeError::InvalidScope(
                "scope must contain at least one entry".into(),
            ));
        }
        Ok(Self(entries))
    }

    /// A scope with exactly one entry.
    pub fn single(entry: impl Into<String>) -> Self {
        Self(vec![entry.into()])
    }

    /// Borrow the scope entries.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<String>> for Scope {
    type Error = TypeError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Scope> for Vec<String> {
    fn from(scope: Scope) -> Self {
        scope.0
    }
}

impl AsRef<[String]> for Scope {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scope {
        use super::*;

        #[test]
        fn rejects_empty() {
            let err = Scope::new(Vec::new()).unwrap_err();
            assert!(matches!(err, TypeError::InvalidScope(_)));
        }

        #[test]
        fn keeps_order_and_duplicates() {
            let entries = vec![
                "AWS::S3".to_string(),
                "AWS::IAM".to_string(),
                "AWS::S3".to_string(),
            ];
            let scope = Scope::new(entries.clone()).unwrap();
            assert_eq!(scope.as_slice(), entries.as_slice());
            assert_eq!(scope.len(), 3);
        }

        #[test]
        fn deserialize_rejects_empty_array() {
            let result: Result<Scope, _> = serde_json::from_str("[]");
            assert!(result.is_err());
        }

        #[test]
        fn serializes_as_plain_array() {
            let scope = Scope::new(vec!["AWS::IAM".into(), "AWS::S3".into()]).unwrap();
            let json = serde_json::to_string(&scope).unwrap();
            assert_eq!(json, r#"["AWS::IAM","AWS::S3"]"#);
        }
    }
}
