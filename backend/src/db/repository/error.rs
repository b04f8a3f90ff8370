//! Error types for dataset repository operations.
//!
//! Errors carry a structured [`ErrorContext`] so that a failed startup load
//! can be traced back to the file and row involved.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_dataset", "fetch_series")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "park", "camera", "record")
    pub entity: Option<String>,
    /// Source file, for load errors
    pub source_path: Option<String>,
    /// 1-based line in the source file
    pub line: Option<u64>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the source file path.
    pub fn with_source(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Set the source line.
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref path) = self.source_path {
            parts.push(format!("source={}", path));
        }
        if let Some(line) = self.line {
            parts.push(format!("line={}", line));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The input file could not be read or a row could not be decoded.
    #[error("Load error: {message} {context}")]
    LoadError {
        message: String,
        context: ErrorContext,
    },

    /// A decoded row violates the record invariants.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Create a load error with context.
    pub fn load_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::LoadError {
            message: message.into(),
            context,
        }
    }

    /// Create a validation error with context.
    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::LoadError { context, .. } => context,
            Self::ValidationError { context, .. } => context,
        }
    }

    /// Record the file the error came from.
    pub fn with_source(mut self, path: impl Into<String>) -> Self {
        match &mut self {
            Self::LoadError { context, .. } | Self::ValidationError { context, .. } => {
                context.source_path = Some(path.into());
            }
        }
        self
    }
}

impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        let mut context = ErrorContext::new("load_dataset");
        if let Some(position) = err.position() {
            context = context.with_line(position.line());
        }
        RepositoryError::load_with_context(err.to_string(), context)
    }
}
