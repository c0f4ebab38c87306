// SPDX-License-Identifier: MPL-2.0
//! Carousel wired to the event bus.
//!
//! Every swap the engine performs on its own schedule is published on the
//! widget's channel; rotations published by peers on that channel trigger
//! [`CarouselEngine::on_external_advance`]. Peers never hold references to
//! each other, only to the shared bus.

use super::engine::{AdvanceOutcome, CarouselEngine};
use crate::domain::ui::RotationInterval;
use crate::events::{BusEvent, EventBus, Subscription, SyncChannel};
use crate::timing::{Fired, TimerKey, UiScheduler, WidgetId};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Engine plus its bus membership.
pub struct SyncedCarousel {
    id: WidgetId,
    engine: Rc<RefCell<CarouselEngine>>,
    bus: EventBus<UiScheduler>,
    channel: SyncChannel,
    subscription: Option<Subscription<UiScheduler>>,
}

impl std::fmt::Debug for SyncedCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncedCarousel")
            .field("id", &self.id)
            .field("channel", &self.channel)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl SyncedCarousel {
    /// Mounts `engine` on `channel`.
    pub fn mount(engine: CarouselEngine, bus: &EventBus<UiScheduler>, channel: SyncChannel) -> Self {
        let id = engine.id();
        let engine = Rc::new(RefCell::new(engine));
        let listener = Rc::downgrade(&engine);

        let subscription = bus.subscribe(channel.clone(), Some(id), move |_event, scheduler| {
            let Some(engine) = listener.upgrade() else {
                return;
            };
            let Ok(mut engine) = engine.try_borrow_mut() else {
                tracing::debug!(widget = %id, "peer rotation ignored: engine busy");
                return;
            };
            if let Some(index) = engine.on_external_advance(scheduler) {
                tracing::trace!(widget = %id, index, "followed peer rotation");
            }
        });

        Self {
            id,
            engine,
            bus: bus.clone(),
            channel,
            subscription: Some(subscription),
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn channel(&self) -> &SyncChannel {
        &self.channel
    }

    /// Read access to the engine for rendering and assertions.
    #[must_use]
    pub fn engine(&self) -> Ref<'_, CarouselEngine> {
        self.engine.borrow()
    }

    pub fn start(&self, interval: RotationInterval, scheduler: &mut UiScheduler) {
        self.engine.borrow_mut().start(interval, scheduler);
    }

    pub fn stop(&self, scheduler: &mut UiScheduler) {
        self.engine.borrow_mut().stop(scheduler);
    }

    /// Manual advance; the swap is published when it happens.
    pub fn advance(&self, scheduler: &mut UiScheduler) -> AdvanceOutcome {
        self.engine.borrow_mut().advance(scheduler)
    }

    /// Routes a fired task to the engine and publishes the resulting swap.
    ///
    /// Peers have already reacted when this returns.
    pub fn handle_timer(&self, fired: Fired<TimerKey>, scheduler: &mut UiScheduler) -> Option<usize> {
        let swapped = self.engine.borrow_mut().handle_timer(fired, scheduler);
        if let Some(index) = swapped {
            let event = BusEvent::RotationOccurred {
                source: self.id,
                channel: self.channel.clone(),
                index,
            };
            let notified = self.bus.publish(&event, scheduler);
            tracing::trace!(widget = %self.id, index, notified, "rotation published");
        }
        swapped
    }

    /// Cancels the engine's tasks and leaves the channel.
    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        self.subscription = None;
        self.engine.borrow_mut().unmount(scheduler);
    }

    /// Returns `true` while subscribed to the channel.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }
}
