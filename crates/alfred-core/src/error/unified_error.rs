//! UnifiedError trait implementation for AlfredError

use super::types::{AlfredError, UnifiedError};

impl UnifiedError for AlfredError {
    fn error_code(&self) -> &str {
        match self {
            Self::UnknownNode { .. } => "ALFRED_UNKNOWN_NODE",
            Self::DuplicateSkill { .. } => "ALFRED_DUPLICATE_SKILL",
            Self::AmbiguousDefault { .. } => "ALFRED_AMBIGUOUS_DEFAULT",
            Self::MissingSupports { .. } => "ALFRED_MISSING_SUPPORTS",
            Self::MergeConflict { .. } => "ALFRED_MERGE_CONFLICT",
            Self::ExternalTool { .. } => "ALFRED_EXTERNAL_TOOL",
            Self::Config { .. } => "ALFRED_CONFIG",
            Self::Io { .. } => "ALFRED_IO",
            Self::Json { .. } => "ALFRED_JSON",
            Self::InvalidInput { .. } => "ALFRED_INVALID_INPUT",
            Self::NotFound { .. } => "ALFRED_NOT_FOUND",
            Self::Other { .. } => "ALFRED_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::UnknownNode { node } => node,
            Self::DuplicateSkill { name } => name,
            Self::AmbiguousDefault { subcommand, .. } => subcommand,
            Self::MissingSupports { skill, .. } => skill,
            Self::MergeConflict { field, .. } => field,
            Self::ExternalTool { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Json { message, .. } => message,
            Self::InvalidInput { message, .. } => message,
            Self::NotFound { message, .. } => message,
            Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Json { context, .. } => context.as_deref(),
            Self::Other { context, .. } => context.as_deref(),
            Self::ExternalTool { output, .. } => output.as_deref(),
            _ => None,
        }
    }
}
