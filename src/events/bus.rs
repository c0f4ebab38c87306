// SPDX-License-Identifier: MPL-2.0
//! Synchronous publish/subscribe bus.
//!
//! The bus is a cheap cloneable handle; every clone talks to the same
//! subscriber table. Publishing is synchronous: when [`EventBus::publish`]
//! returns, every subscriber that was registered when the call started has
//! run. Handlers receive a mutable context (`C`) supplied by the publisher,
//! which is how a subscriber reschedules its timers without the bus knowing
//! about the scheduler.

use super::{BusEvent, SyncChannel};
use crate::timing::WidgetId;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<C> = Rc<RefCell<dyn FnMut(&BusEvent, &mut C)>>;

struct Subscriber<C> {
    id: u64,
    channel: SyncChannel,
    owner: Option<WidgetId>,
    handler: Handler<C>,
}

struct BusInner<C> {
    next_id: u64,
    subscribers: Vec<Subscriber<C>>,
}

impl<C> BusInner<C> {
    fn is_live(&self, id: u64) -> bool {
        self.subscribers.iter().any(|subscriber| subscriber.id == id)
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }
}

/// Handle to the shared subscriber table.
pub struct EventBus<C> {
    inner: Rc<RefCell<BusInner<C>>>,
}

impl<C> Clone for EventBus<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<C> EventBus<C> {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Registers `handler` for events on `channel`.
    ///
    /// When `owner` is set, events whose source is that widget are not
    /// delivered to this handler. The returned guard unregisters the handler
    /// when dropped.
    pub fn subscribe<F>(
        &self,
        channel: SyncChannel,
        owner: Option<WidgetId>,
        handler: F,
    ) -> Subscription<C>
    where
        F: FnMut(&BusEvent, &mut C) + 'static,
        C: 'static,
    {
        let handler: Handler<C> = Rc::new(RefCell::new(handler));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        tracing::debug!(channel = %channel, ?owner, id, "bus subscription added");
        inner.subscribers.push(Subscriber {
            id,
            channel,
            owner,
            handler,
        });
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every matching subscriber and returns how many
    /// handlers ran.
    ///
    /// The recipient list is captured before the first handler runs, so a
    /// handler subscribing during delivery is not invoked for this event.
    /// A recipient unsubscribed during delivery is skipped, as is a handler
    /// that is already running further up the call stack.
    pub fn publish(&self, event: &BusEvent, ctx: &mut C) -> usize {
        let recipients: Vec<(u64, Handler<C>)> = {
            let inner = self.inner.borrow();
            inner
                .subscribers
                .iter()
                .filter(|subscriber| &subscriber.channel == event.channel())
                .filter(|subscriber| subscriber.owner != Some(event.source()))
                .map(|subscriber| (subscriber.id, Rc::clone(&subscriber.handler)))
                .collect()
        };

        let mut delivered = 0;
        for (id, handler) in recipients {
            if !self.inner.borrow().is_live(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (&mut *handler)(event, ctx);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::debug!(id, "skipping re-entrant bus handler");
                }
            }
        }
        delivered
    }

    /// Total number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Number of live subscriptions on `channel`.
    #[must_use]
    pub fn subscriber_count_on(&self, channel: &SyncChannel) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|subscriber| &subscriber.channel == channel)
            .count()
    }
}

/// Registration guard returned by [`EventBus::subscribe`].
///
/// Dropping it unregisters the handler. Outliving the bus is harmless.
pub struct Subscription<C> {
    id: u64,
    bus: Weak<RefCell<BusInner<C>>>,
}

impl<C> Subscription<C> {
    /// Unregisters now instead of at drop.
    pub fn unsubscribe(self) {}

    /// Returns `true` while the handler is registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|inner| inner.borrow().is_live(self.id))
    }
}

impl<C> fmt::Debug for Subscription<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl<C> Drop for Subscription<C> {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if inner.borrow_mut().remove(self.id) {
                tracing::debug!(id = self.id, "bus subscription dropped");
            }
        }
    }
}
