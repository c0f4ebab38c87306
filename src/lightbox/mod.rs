// SPDX-License-Identifier: MPL-2.0
//! Full-size viewing of gallery items.

pub mod controller;

pub use controller::{ClickTarget, Lightbox, LightboxKey, LightboxState, OpenState};
