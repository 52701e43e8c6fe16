//! Shared-state abstraction for analyzed text and classification results.
//!
//! The classification pipeline reads its input from, and writes its output
//! back to, an external key-value collaborator. The [`SharedState`] trait is
//! the only seam the core depends on, so any storage or messaging fabric can
//! sit behind it; [`MemorySharedState`] is the in-process implementation used
//! by tests and the CLI.

pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use memory::MemorySharedState;
pub use traits::SharedState;
