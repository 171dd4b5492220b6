//! Core error types and traits for Alfred

use thiserror::Error;

/// Result type alias for Alfred operations
pub type AlfredResult<T> = Result<T, AlfredError>;

/// Unified error trait that all Alfred errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Whether the error aborts the current pipeline run
    fn is_fatal(&self) -> bool {
        true
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> AlfredResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> AlfredResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> AlfredResult<T> {
        self.map_err(|e| AlfredError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> AlfredResult<T> {
        self.map_err(|e| AlfredError::other(format!("{}: {}", f(), e)))
    }
}

/// Main error type for Alfred
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlfredError {
    /// An edge referenced a node that is not part of the node set
    #[error("Unknown node: '{node}' is referenced by an edge but is not a known node")]
    UnknownNode { node: String },

    /// Two skills were registered under the same name
    #[error("Duplicate skill: '{name}' is already registered")]
    DuplicateSkill { name: String },

    /// Several skills can run a task for a target and none is the default
    #[error(
        "Ambiguous default: skills [{}] all implement '{subcommand}' for {target} and none is marked as default",
        .candidates.join(", ")
    )]
    AmbiguousDefault {
        subcommand: String,
        target: String,
        candidates: Vec<String>,
    },

    /// A skill implements a per-target task but declares no `supports` matrix
    #[error("Skill '{skill}' must declare a 'supports' matrix because it implements '{task}'")]
    MissingSupports { skill: String, task: String },

    /// Two array entries share an identity but differ in value
    #[error("Merge conflict in '{field}': entries with identity '{identity}' differ")]
    MergeConflict { field: String, identity: String },

    /// A wrapped third-party tool reported failure
    #[error("{tool} failed: {message}")]
    ExternalTool {
        tool: String,
        message: String,
        exit_code: Option<i32>,
        output: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}
