//! Constructor methods for AlfredError

use super::types::AlfredError;

impl AlfredError {
    /// Create an unknown-node error
    pub fn unknown_node(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// Create a duplicate-skill error
    pub fn duplicate_skill(name: impl Into<String>) -> Self {
        Self::DuplicateSkill { name: name.into() }
    }

    /// Create an ambiguous-default error
    pub fn ambiguous_default(
        subcommand: impl Into<String>,
        target: impl std::fmt::Display,
        candidates: Vec<String>,
    ) -> Self {
        Self::AmbiguousDefault {
            subcommand: subcommand.into(),
            target: target.to_string(),
            candidates,
        }
    }

    /// Create a missing-supports error
    pub fn missing_supports(skill: impl Into<String>, task: impl Into<String>) -> Self {
        Self::MissingSupports {
            skill: skill.into(),
            task: task.into(),
        }
    }

    /// Create a merge conflict error
    pub fn merge_conflict(field: impl Into<String>, identity: impl Into<String>) -> Self {
        Self::MergeConflict {
            field: field.into(),
            identity: identity.into(),
        }
    }

    /// Create an external tool error
    pub fn external_tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
            exit_code: None,
            output: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error for a specific field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: None,
        }
    }

    /// Create a not found error with resource type
    pub fn not_found_resource(
        message: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: Some(resource_type.into()),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// Attach the exit code of a failed external tool
    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        if let Self::ExternalTool { exit_code, .. } = &mut self {
            *exit_code = code;
        }
        self
    }

    /// Attach the captured diagnostics of a failed external tool
    pub fn with_output(mut self, captured: impl Into<String>) -> Self {
        if let Self::ExternalTool { output, .. } = &mut self {
            *output = Some(captured.into());
        }
        self
    }

    /// Add context to an existing error
    pub fn with_context(mut self, new_context: impl Into<String>) -> Self {
        let new_context = new_context.into();
        match &mut self {
            Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::Other { context, .. } => *context = Some(new_context),
            _ => {}
        }
        self
    }
}
