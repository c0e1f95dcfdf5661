//! Services composing the ports into the bridge's operations.

pub mod completion;
pub mod resolver;

pub use completion::CompletionService;
pub use resolver::{ModelResolver, ResolveError, ResolvedModel};
