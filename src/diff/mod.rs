//! Content comparison between a live file and its snapshot copy.
//!
//! Files are compared by SHA-512 digest of their full contents. A missing
//! snapshot copy is classified separately (see [`Comparison`]).

/// Digest-based file comparison
pub mod content;

pub use content::{Comparison, diff_file};
