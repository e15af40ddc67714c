// Built-in sample collections used when no fixture file is given

use crate::models::{Endpoint, EndpointStatus, Event, EventStatus, LogEntry, LogLevel};
use crate::session::User;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    date(2024, 12, 28).and_hms_opt(h, m, s).unwrap_or_default()
}

fn time(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap_or_default()
}

pub fn endpoints() -> Vec<Endpoint> {
    use EndpointStatus::*;

    let rows = [
        ("ep_001", "Stripe Payments", "stripe", Active, date(2024, 12, 15), 1247),
        ("ep_002", "User Signups", "users", Active, date(2024, 12, 10), 892),
        ("ep_003", "Order Updates", "orders", Inactive, date(2024, 12, 5), 0),
        ("ep_004", "Inventory Sync", "inventory", Active, date(2024, 11, 28), 456),
        ("ep_005", "Analytics Events", "analytics", Active, date(2024, 11, 20), 2341),
        ("ep_006", "Email Notifications", "email", Active, date(2024, 11, 15), 187),
        ("ep_007", "CRM Integration", "crm", Inactive, date(2024, 11, 10), 0),
        ("ep_008", "Slack Alerts", "slack", Active, date(2024, 11, 5), 89),
    ];

    rows.into_iter()
        .map(|(id, name, path, status, created_at, events_today)| Endpoint {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://api.example.com/webhooks/{}", path),
            status,
            created_at,
            events_today,
        })
        .collect()
}

pub fn events() -> Vec<Event> {
    use EventStatus::*;

    let rows = [
        ("evt_1a2b3c4d5e", "Stripe Payments", "payment.succeeded", Success, at(14, 32, 15), Some(45)),
        ("evt_2b3c4d5e6f", "User Signups", "user.created", Success, at(14, 31, 42), Some(32)),
        ("evt_3c4d5e6f7g", "Order Updates", "order.updated", Failed, at(14, 30, 18), Some(1200)),
        ("evt_4d5e6f7g8h", "Inventory Sync", "inventory.changed", Success, at(14, 28, 55), Some(67)),
        ("evt_5e6f7g8h9i", "Stripe Payments", "payment.refunded", Pending, at(14, 27, 33), None),
        ("evt_6f7g8h9i0j", "Analytics Events", "page.viewed", Success, at(14, 26, 12), Some(28)),
        ("evt_7g8h9i0j1k", "Email Notifications", "email.sent", Success, at(14, 25, 1), Some(156)),
        ("evt_8h9i0j1k2l", "CRM Integration", "contact.updated", Failed, at(14, 23, 44), Some(2100)),
        ("evt_9i0j1k2l3m", "Slack Alerts", "alert.triggered", Success, at(14, 22, 19), Some(89)),
        ("evt_0j1k2l3m4n", "User Signups", "user.verified", Success, at(14, 21, 5), Some(41)),
        ("evt_1k2l3m4n5o", "Stripe Payments", "payment.failed", Failed, at(14, 20, 0), Some(234)),
        ("evt_2l3m4n5o6p", "Order Updates", "order.shipped", Success, at(14, 18, 30), Some(52)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (event_id, endpoint, event_type, status, timestamp, duration_ms))| Event {
            id: (i + 1).to_string(),
            event_id: event_id.to_string(),
            endpoint: endpoint.to_string(),
            event_type: event_type.to_string(),
            status,
            timestamp,
            duration_ms,
        })
        .collect()
}

pub fn logs() -> Vec<LogEntry> {
    use LogLevel::*;

    let rows = [
        (time(14, 32, 15, 847), Info, "Webhook delivered successfully to Stripe Payments endpoint", "delivery"),
        (time(14, 32, 15, 802), Info, "Processing payment.succeeded event", "processor"),
        (time(14, 31, 42, 123), Info, "New user signup webhook triggered", "trigger"),
        (time(14, 30, 18, 456), Error, "Connection timeout after 30000ms to Order Updates endpoint", "delivery"),
        (time(14, 30, 18, 123), Warn, "Retry attempt 3/5 for event evt_3c4d5e6f7g", "retry"),
        (time(14, 28, 55, 789), Info, "Inventory sync completed successfully", "delivery"),
        (time(14, 27, 33, 456), Info, "Payment refund event queued for processing", "queue"),
        (time(14, 26, 12, 123), Info, "Page view analytics event processed", "processor"),
        (time(14, 25, 1, 789), Info, "Email notification sent successfully", "delivery"),
        (time(14, 23, 44, 456), Error, "Invalid response from CRM Integration: 502 Bad Gateway", "delivery"),
        (time(14, 23, 43, 123), Warn, "Slow response detected (2.1s) from CRM Integration", "monitor"),
        (time(14, 22, 19, 789), Info, "Slack alert triggered successfully", "delivery"),
        (time(14, 21, 5, 456), Info, "User verification webhook delivered", "delivery"),
        (time(14, 20, 33, 123), Info, "System health check passed", "health"),
        (time(14, 19, 12, 789), Warn, "High latency detected on analytics endpoint (>100ms)", "monitor"),
        (time(14, 18, 5, 456), Info, "Database backup completed", "system"),
        (time(14, 17, 33, 123), Error, "Failed to connect to external API", "delivery"),
        (time(14, 16, 22, 789), Info, "Cache cleared successfully", "system"),
        (time(14, 15, 11, 456), Warn, "Rate limit approaching for API endpoint", "monitor"),
        (time(14, 14, 0, 123), Info, "New endpoint configuration saved", "system"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (time, level, message, source))| LogEntry {
            id: (i + 1).to_string(),
            time,
            level,
            message: message.to_string(),
            source: source.to_string(),
        })
        .collect()
}

/// Account the demo session is signed in as
pub fn user() -> User {
    User {
        id: "user_demo".to_string(),
        email: Some("john@example.com".to_string()),
        display_name: Some("John Doe".to_string()),
    }
}
