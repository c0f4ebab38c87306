// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the media records shown by the carousels and the
//! gallery, together with the criteria used to derive a view from them.

pub mod filter;
pub mod types;

// Re-export commonly used types
pub use filter::{GroupFilter, SortOrder};
pub use types::{GroupId, GroupRef, MediaId, MediaItem, MediaKind, MediaSource};
