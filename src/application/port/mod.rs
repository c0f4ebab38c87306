// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`collection`]: read-only access to the media collection and its groups
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no TOML records)
//! - The provider is read-only; nothing in the app writes back to it

pub mod collection;

pub use collection::MediaCollectionProvider;
