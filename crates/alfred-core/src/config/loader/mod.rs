//! Configuration loading
//!
//! Sources are applied in the order they were added, with later sources
//! overriding earlier ones field by field.

mod builder;
mod loading;
mod types;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use types::ConfigSource;
