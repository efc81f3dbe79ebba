//! Runtime abstraction for system operations.
//!
//! The resolver and the command layer never touch the process environment or
//! the file system directly; they go through [`Runtime`] so tests can inject
//! a `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - Environment variables (desktop session, locale)
//! - `fs` - File reads (rules file, package snapshots)

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }
}
