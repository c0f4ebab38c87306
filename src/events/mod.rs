// SPDX-License-Identifier: MPL-2.0
//! Cross-widget events.
//!
//! Independent carousels coordinate through an [`EventBus`] instead of
//! holding references to each other. A bus is created once by the app and
//! handed to every widget that publishes or listens.

pub mod bus;

pub use bus::{EventBus, Subscription};

use crate::timing::WidgetId;
use std::borrow::Cow;
use std::fmt;

/// Named topic on which synchronized widgets talk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncChannel(Cow<'static, str>);

impl SyncChannel {
    /// Channel shared by the two hero carousels.
    pub const HERO: SyncChannel = SyncChannel::named("hero");

    /// Creates a channel from a static name.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a channel from a runtime name.
    #[must_use]
    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SyncChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Events carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// A carousel swapped its displayed index on its own schedule.
    RotationOccurred {
        source: WidgetId,
        channel: SyncChannel,
        index: usize,
    },
}

impl BusEvent {
    /// Topic the event is published on.
    #[must_use]
    pub fn channel(&self) -> &SyncChannel {
        match self {
            Self::RotationOccurred { channel, .. } => channel,
        }
    }

    /// Widget that published the event.
    #[must_use]
    pub fn source(&self) -> WidgetId {
        match self {
            Self::RotationOccurred { source, .. } => *source,
        }
    }
}
