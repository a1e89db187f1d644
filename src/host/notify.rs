use std::collections::VecDeque;
use strum_macros::Display;

/// User-facing message severity, mapped onto the matching log channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
    Info,
    Alert,
    Critical,
}

/// A single fire-and-forget screen message.
#[derive(Debug, Clone)]
pub struct ScreenMessage {
    text: String,
    severity: Severity,
}

impl ScreenMessage {
    pub fn text(&self) -> &str { &self.text }

    pub fn severity(&self) -> Severity { self.severity }
}

/// Collecting sink for screen messages. Posting never blocks and never fails
/// the caller; consumers drain at their own pace.
#[derive(Debug, Default)]
pub struct Notifier {
    queue: VecDeque<ScreenMessage>,
}

impl Notifier {
    pub fn post(&mut self, text: impl Into<String>, severity: Severity) {
        let text = text.into();
        match severity {
            Severity::Info => crate::info!("{text}"),
            Severity::Alert => crate::warn!("{text}"),
            Severity::Critical => crate::error!("{text}"),
        }
        self.queue.push_back(ScreenMessage { text, severity });
    }

    /// Removes and returns all queued messages in posting order.
    pub fn drain(&mut self) -> Vec<ScreenMessage> {
        self.queue.drain(..).collect()
    }

    pub fn last(&self) -> Option<&ScreenMessage> { self.queue.back() }

    pub fn is_empty(&self) -> bool { self.queue.is_empty() }
}
