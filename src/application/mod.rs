// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Adapters such as the catalog implement application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use hackfolio::application::port::MediaCollectionProvider;
//! use hackfolio::application::query::view;
//! use hackfolio::catalog::Catalog;
//! use hackfolio::domain::media::{GroupFilter, SortOrder};
//!
//! let catalog = Catalog::embedded().expect("bundled dataset is valid");
//! let items = view(catalog.get_all_photos(), &GroupFilter::all(), SortOrder::Newest);
//! assert_eq!(items.len(), catalog.get_all_photos().len());
//! ```

pub mod port;
pub mod query;
