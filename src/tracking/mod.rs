//! Change detection and manifest tracking.
//!
//! # Architecture
//!
//! - [`crate::tracking::Manifest`] - The persistent `INDEX` of original locations
//! - [`crate::tracking::Collector`] - Finds candidate files under home
//! - [`crate::tracking::filter_changed`] - Drops candidates already up to date
//!
//! # Usage
//!
//! ```no_run
//! use dotsync::config::CollectConfig;
//! use dotsync::tracking::{Manifest, collect_candidates, filter_changed};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let home = Path::new("/home/user");
//! let snapshot = Path::new("/home/user/dotfiles");
//!
//! let candidates = collect_candidates(home, &CollectConfig::default())?;
//! let changed = filter_changed(&candidates, snapshot)?;
//!
//! let mut manifest = Manifest::open(snapshot)?;
//! for path in &changed {
//!     manifest.update(path.strip_prefix(home)?)?;
//! }
//! manifest.close();
//! # Ok(())
//! # }
//! ```

pub mod changes;
pub mod manifest;
pub mod scanner;

pub use changes::filter_changed;
pub use manifest::Manifest;
pub use scanner::{Collector, collect_candidates, flat_walk};
