//! Fire-and-forget usage events.

use chrono::{DateTime, Utc};

/// What caused a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Explicit generate click.
    Manual,
    /// Auto-generate reacting to an input change.
    Auto,
    /// Recolor after a theme switch.
    Theme,
    /// Option change while a code was showing.
    Update,
    /// Re-render after "reset options".
    Reset,
}

impl TriggerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
            Self::Theme => "theme",
            Self::Update => "update",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Vec<(&'static str, String)>,
    pub at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            at: Utc::now(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Analytics sink. Delivery is best-effort and must never fail visibly.
pub trait Analytics {
    fn track(&self, event: &AnalyticsEvent);
}

/// Writes events to the log under the `simpleqr::analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        log::info!(
            target: "simpleqr::analytics",
            "{} at {}: {:?}",
            event.name,
            event.at.to_rfc3339(),
            event.params
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_params_are_flat_strings() {
        let event = AnalyticsEvent::new("qr_generated")
            .param("trigger", TriggerSource::Theme.as_str())
            .param("size", 256);
        assert_eq!(event.get("trigger"), Some("theme"));
        assert_eq!(event.get("size"), Some("256"));
        assert_eq!(event.get("missing"), None);
    }

    #[test]
    fn test_log_analytics_does_not_panic() {
        LogAnalytics.track(&AnalyticsEvent::new("qr_cleared"));
    }
}
