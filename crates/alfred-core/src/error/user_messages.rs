//! User-friendly error messages and classification
//!
//! Turns an [`AlfredError`] into a title plus suggested actions for the CLI.

use super::types::AlfredError;

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed dependency graph handed to the sorter
    Structural,
    /// Skill registration failures
    Registration,
    /// No single skill could be chosen for a task
    Resolution,
    /// A wrapped linter, bundler or test runner failed
    ExternalTool,
    /// Project configuration issues
    Configuration,
    /// Invalid user input
    UserInput,
    /// File system related errors
    FileSystem,
    /// Resource not available
    ResourceUnavailable,
    /// Internal errors
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Structural => "Structural Error",
            Self::Registration => "Registration Error",
            Self::Resolution => "Resolution Error",
            Self::ExternalTool => "Tool Error",
            Self::Configuration => "Configuration Error",
            Self::UserInput => "Invalid Input",
            Self::FileSystem => "File System Error",
            Self::ResourceUnavailable => "Not Found",
            Self::Internal => "Internal Error",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// User-friendly title/summary
    pub title: String,
    /// Detailed user-friendly message
    pub message: String,
    /// Suggested actions to resolve the error
    pub suggestions: Vec<String>,
    /// Original technical error code
    pub error_code: String,
}

impl UserFriendlyError {
    /// Create a new user-friendly error
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            error_code: String::new(),
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the technical error code
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self
    }

    /// Format the error for display
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{}: {}\n\n{}",
            self.category.display_name(),
            self.title,
            self.message
        );

        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggested actions:");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        output
    }
}

impl AlfredError {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownNode { .. } => ErrorCategory::Structural,
            Self::DuplicateSkill { .. } => ErrorCategory::Registration,
            Self::AmbiguousDefault { .. } | Self::MissingSupports { .. } => {
                ErrorCategory::Resolution
            }
            Self::MergeConflict { .. } | Self::Config { .. } => ErrorCategory::Configuration,
            Self::ExternalTool { .. } => ErrorCategory::ExternalTool,
            Self::InvalidInput { .. } => ErrorCategory::UserInput,
            Self::Io { .. } => ErrorCategory::FileSystem,
            Self::NotFound { .. } => ErrorCategory::ResourceUnavailable,
            Self::Json { .. } | Self::Other { .. } => ErrorCategory::Internal,
        }
    }
}

impl From<&AlfredError> for UserFriendlyError {
    fn from(error: &AlfredError) -> Self {
        use super::types::UnifiedError;

        let code = error.error_code().to_string();
        let friendly = match error {
            AlfredError::UnknownNode { node } => UserFriendlyError::new(
                error.category(),
                "Unknown skill in dependency graph",
                error.to_string(),
            )
            .with_suggestion(format!(
                "Make sure '{}' is listed in the \"alfred.skills\" section of package.json",
                node
            )),

            AlfredError::DuplicateSkill { name } => UserFriendlyError::new(
                error.category(),
                format!("Skill '{}' is registered twice", name),
                error.to_string(),
            )
            .with_suggestion("Remove the duplicate entry from \"alfred.skills\""),

            AlfredError::AmbiguousDefault {
                subcommand,
                candidates,
                ..
            } => UserFriendlyError::new(
                error.category(),
                format!("Cannot choose a skill for '{}'", subcommand),
                error.to_string(),
            )
            .with_suggestion(format!(
                "Keep only one of [{}] in \"alfred.skills\"",
                candidates.join(", ")
            )),

            AlfredError::MissingSupports { skill, task } => UserFriendlyError::new(
                error.category(),
                format!("Skill '{}' is incomplete", skill),
                error.to_string(),
            )
            .with_suggestion(format!(
                "Declare which envs, platforms and project types '{}' supports for '{}'",
                skill, task
            )),

            AlfredError::ExternalTool { tool, .. } => UserFriendlyError::new(
                error.category(),
                format!("'{}' reported errors", tool),
                error.to_string(),
            )
            .with_suggestion("Fix the problems reported above and run the task again"),

            AlfredError::NotFound { resource_type, .. } => UserFriendlyError::new(
                error.category(),
                format!(
                    "{} not found",
                    resource_type.as_deref().unwrap_or("Resource")
                ),
                error.to_string(),
            )
            .with_suggestion("Run 'alfred skills' to list what is available"),

            AlfredError::Io { path, .. } => UserFriendlyError::new(
                error.category(),
                if path.is_some() {
                    "File operation failed"
                } else {
                    "I/O error"
                },
                error.to_string(),
            )
            .with_suggestion("Check file permissions and that the path exists"),

            AlfredError::Config { .. } | AlfredError::MergeConflict { .. } => {
                UserFriendlyError::new(error.category(), "Invalid configuration", error.to_string())
                    .with_suggestion("Review the \"alfred\" section of package.json")
            }

            _ => UserFriendlyError::new(error.category(), "Unexpected error", error.to_string()),
        };

        friendly.with_error_code(code)
    }
}
