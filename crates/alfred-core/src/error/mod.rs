//! Error types for Alfred
//!
//! Every fallible operation in the engine returns [`AlfredResult`]. Errors fall
//! into a small taxonomy:
//! - structural: unknown nodes handed to the topological sorter
//! - registration: duplicate skill names
//! - resolution: missing capability matrices, ambiguous default skills
//! - external tool: a wrapped linter, bundler or test runner failed
//!
//! None of them are retried. Cycles in the skill graph are only warnings and
//! never surface here.

mod constructors;
mod conversions;
mod types;
mod unified_error;
mod user_messages;

pub use types::{AlfredError, AlfredResult, ResultExt, UnifiedError};
pub use user_messages::{ErrorCategory, UserFriendlyError};
