// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Messages are stored as i18n keys and resolved at render time so a language
//! switch also translates toasts already on screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::SUCCESS_500,
            Severity::Warning => palette::GOLD_400,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Errors stay until dismissed.
    #[must_use]
    pub fn auto_dismiss(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss()
            .is_some_and(|ttl| now.saturating_duration_since(self.created_at) >= ttl)
    }

    fn resolve(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            i18n.tr(&self.key)
        } else {
            let args: Vec<(&str, &str)> = self
                .args
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(&self.key, &args)
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Visible toasts plus an overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id == id) {
            self.visible.remove(pos);
            if let Some(next) = self.queue.pop_front() {
                self.visible.push_back(next);
            }
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    #[must_use]
    pub fn has_pending_expiry(&self) -> bool {
        self.visible.iter().any(|n| n.severity.auto_dismiss().is_some())
    }
}

fn toast<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity.color();
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(text(notification.resolve(i18n)).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(
            button(text("×").size(typography::BODY_LG))
                .padding(spacing::XXS)
                .style(styles::button::link)
                .on_press(Message::Dismiss(notification.id)),
        );

    container(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Toast stack anchored bottom-right.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    let toasts = manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, n| {
            column.push(toast(n, i18n))
        });

    Container::new(toasts.align_x(alignment::Horizontal::Right))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::LIFTED,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}
