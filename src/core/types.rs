//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ProjectName`] - Validated project name, used verbatim as the root directory
//! - [`ProjectRequest`] - Resolved input for one scaffolding run
//!
//! # Validation
//!
//! These types enforce validity at construction time. A [`ProjectName`]
//! that exists cannot escape its own directory: no path separators, no
//! `.`/`..`, no leading `-`.
//!
//! # Examples
//!
//! ```
//! use girder::core::types::ProjectName;
//!
//! let name = ProjectName::new("orders").unwrap();
//! assert_eq!(name.as_str(), "orders");
//!
//! assert!(ProjectName::new("").is_err());
//! assert!(ProjectName::new("../escape").is_err());
//! assert!(ProjectName::new("a/b").is_err());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors from input validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// No project name was supplied.
    #[error("missing service name parameter")]
    MissingName,

    /// The supplied name cannot be used as a directory name.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

/// A validated project name.
///
/// The name doubles as the root directory of the generated project and
/// as the working directory of every shell stage, so it must be a
/// single safe path component:
/// - Cannot be empty
/// - Cannot contain `/`, `\`, NUL, or whitespace
/// - Cannot be `.` or `..`
/// - Cannot start with `-` (would parse as a flag for the tools we invoke)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::MissingName`] for an empty name and
    /// [`TypeError::InvalidName`] for a name that is not a safe
    /// single path component.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::MissingName);
        }

        let invalid = |reason: &str| TypeError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name == "." || name == ".." {
            return Err(invalid("cannot be '.' or '..'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(invalid("cannot contain NUL"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("cannot contain whitespace"));
        }
        if name.starts_with('-') {
            return Err(invalid("cannot start with '-'"));
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The project root directory, resolved against `base`.
    pub fn root_under(&self, base: &Path) -> PathBuf {
        base.join(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved input for one scaffolding run.
///
/// Built once from CLI arguments, immutable thereafter. The module
/// identifier is what the generated `go.mod` declares; it defaults to
/// the project name when no `--module` flag was given.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequest {
    /// Project name, also the root directory of the generated tree.
    pub name: ProjectName,
    /// Go module identifier for the generated project.
    pub module: String,
}

impl ProjectRequest {
    /// Resolve raw invocation parameters into a request.
    ///
    /// # Errors
    ///
    /// Fails with [`TypeError`] when the name is absent or unsafe.
    /// No filesystem or shell side effect happens before this check.
    pub fn resolve(name: &str, module: Option<&str>) -> Result<Self, TypeError> {
        let name = ProjectName::new(name)?;
        let module = module
            .map(str::to_string)
            .unwrap_or_else(|| name.as_str().to_string());
        Ok(Self { name, module })
    }
}
