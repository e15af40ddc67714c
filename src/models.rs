// Data models for the webhook dashboard

use crate::display::format_duration;
use crate::record::{FieldValue, Record};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Webhook endpoint registered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: EndpointStatus,
    pub created_at: NaiveDate,
    pub events_today: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    Active,
    Inactive,
}

/// A single webhook delivery attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub event_id: String,
    pub endpoint: String,
    pub event_type: String,
    pub status: EventStatus,
    pub timestamp: NaiveDateTime,
    /// None while the delivery has not completed
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Success,
    Failed,
    Pending,
}

/// System log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub time: NaiveTime,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// API credential shown on the settings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key: String,
    pub created: NaiveDate,
}

impl EndpointStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointStatus::Active => "active",
            EndpointStatus::Inactive => "inactive",
        }
    }
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Success => "success",
            EventStatus::Failed => "failed",
            EventStatus::Pending => "pending",
        }
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Date format used across the dashboard, e.g. "Dec 5, 2024"
pub const DATE_FORMAT: &str = "%b %-d, %Y";

impl Event {
    /// Route of the event detail view
    pub fn detail_path(&self) -> String {
        format!("/dashboard/events/{}", self.event_id)
    }
}

impl Record for Endpoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "endpoints"
    }

    fn fields(&self) -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), self.id.as_str().into());
        fields.insert("name".to_string(), self.name.as_str().into());
        fields.insert("url".to_string(), self.url.as_str().into());
        fields.insert("status".to_string(), self.status.as_str().into());
        fields.insert(
            "created_at".to_string(),
            self.created_at.format(DATE_FORMAT).to_string().into(),
        );
        fields.insert("events_today".to_string(), self.events_today.into());
        fields
    }
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "events"
    }

    fn fields(&self) -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), self.id.as_str().into());
        fields.insert("event_id".to_string(), self.event_id.as_str().into());
        fields.insert("endpoint".to_string(), self.endpoint.as_str().into());
        fields.insert("event_type".to_string(), self.event_type.as_str().into());
        fields.insert("status".to_string(), self.status.as_str().into());
        fields.insert(
            "timestamp".to_string(),
            self.timestamp.format("%b %d, %Y %H:%M:%S").to_string().into(),
        );
        fields.insert("duration".to_string(), format_duration(self.duration_ms).into());
        fields
    }
}

impl Record for LogEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "logs"
    }

    fn fields(&self) -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), self.id.as_str().into());
        fields.insert("time".to_string(), self.time.format("%H:%M:%S%.3f").to_string().into());
        fields.insert("level".to_string(), self.level.as_str().into());
        fields.insert("message".to_string(), self.message.as_str().into());
        fields.insert("source".to_string(), self.source.as_str().into());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&EventStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");

        let json = serde_json::to_string(&EndpointStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");

        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn test_event_fields() {
        let event = Event {
            id: "3".to_string(),
            event_id: "evt_3c4d5e6f7g".to_string(),
            endpoint: "Order Updates".to_string(),
            event_type: "order.updated".to_string(),
            status: EventStatus::Failed,
            timestamp: NaiveDate::from_ymd_opt(2024, 12, 28)
                .unwrap()
                .and_hms_opt(14, 30, 18)
                .unwrap(),
            duration_ms: Some(1200),
        };

        assert_eq!(event.field("status"), Some(FieldValue::String("failed".to_string())));
        assert_eq!(
            event.field("timestamp"),
            Some(FieldValue::String("Dec 28, 2024 14:30:18".to_string()))
        );
        assert_eq!(event.field("duration"), Some(FieldValue::String("1.2s".to_string())));
        assert_eq!(event.detail_path(), "/dashboard/events/evt_3c4d5e6f7g");
    }

    #[test]
    fn test_endpoint_fields() {
        let endpoint = Endpoint {
            id: "ep_003".to_string(),
            name: "Order Updates".to_string(),
            url: "https://api.example.com/webhooks/orders".to_string(),
            status: EndpointStatus::Inactive,
            created_at: NaiveDate::from_ymd_opt(2024, 12, 5).unwrap(),
            events_today: 0,
        };

        assert_eq!(endpoint.field("created_at"), Some(FieldValue::String("Dec 5, 2024".to_string())));
        assert_eq!(endpoint.field("events_today"), Some(FieldValue::Int(0)));
    }

    #[test]
    fn test_log_entry_roundtrip() {
        let line = r#"{"id":"4","time":"14:30:18.456","level":"error","message":"Connection timeout","source":"delivery"}"#;
        let entry: LogEntry = serde_json::from_str(line).unwrap();

        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.field("time"), Some(FieldValue::String("14:30:18.456".to_string())));
    }
}
