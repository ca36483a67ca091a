//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod inject;

pub(crate) use build::BuildArgs;
pub(crate) use inject::InjectArgs;
