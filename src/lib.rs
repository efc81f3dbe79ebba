pub mod backend;
pub mod commands;
pub mod locale;
pub mod pattern;
pub mod resolver;
pub mod rules;
pub mod runtime;

pub use resolver::{PackageSet, Resolver};
pub use rules::{RulesError, RulesIndex};
