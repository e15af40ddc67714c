// Dashboard overview numbers derived from endpoints and events

use crate::models::{Endpoint, EndpointStatus, Event, EventStatus};
use std::collections::HashMap;

/// Number of recent events shown on the overview
pub const RECENT_EVENTS: usize = 5;
/// Number of endpoints in the top list
pub const TOP_ENDPOINTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Overview<'a> {
    pub total_events: usize,
    pub active_endpoints: usize,
    /// Percentage of finished deliveries that succeeded; None when nothing finished
    pub success_rate: Option<f64>,
    /// Mean duration of finished deliveries in milliseconds
    pub avg_latency_ms: Option<u64>,
    /// Newest events first
    pub recent: Vec<&'a Event>,
    /// Endpoint names with their event counts, busiest first
    pub top_endpoints: Vec<(&'a str, usize)>,
}

impl<'a> Overview<'a> {
    pub fn compute(endpoints: &'a [Endpoint], events: &'a [Event]) -> Self {
        let active_endpoints = endpoints
            .iter()
            .filter(|e| e.status == EndpointStatus::Active)
            .count();

        let succeeded = events.iter().filter(|e| e.status == EventStatus::Success).count();
        let failed = events.iter().filter(|e| e.status == EventStatus::Failed).count();
        let finished = succeeded + failed;
        let success_rate = (finished > 0).then(|| succeeded as f64 * 100.0 / finished as f64);

        let durations: Vec<u64> = events.iter().filter_map(|e| e.duration_ms).collect();
        let avg_latency_ms = (!durations.is_empty()).then(|| durations.iter().sum::<u64>() / durations.len() as u64);

        let mut recent: Vec<&Event> = events.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(RECENT_EVENTS);

        Self {
            total_events: events.len(),
            active_endpoints,
            success_rate,
            avg_latency_ms,
            recent,
            top_endpoints: top_endpoints(events, TOP_ENDPOINTS),
        }
    }
}

/// Busiest endpoints by event count; ties keep first-seen order
fn top_endpoints(events: &[Event], limit: usize) -> Vec<(&str, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for event in events {
        let name = event.endpoint.as_str();
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|name| (name, counts[name])).collect();
    // Stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
