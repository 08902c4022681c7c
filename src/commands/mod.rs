//! Command entry points.
//!
//! Each command takes a [`crate::DotsyncContext`], drives the
//! [`crate::sync::SyncEngine`] and reports the outcome through
//! [`crate::output`].

pub mod install;
pub mod save;
