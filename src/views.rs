// Per-view query configuration for the dashboard lists

use crate::config::Config;
use crate::export::Column;
use crate::query::QueryEngine;
use crate::view::{ListView, WindowedView};
use std::num::NonZeroUsize;

/// The dashboard's list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    Endpoints,
    Events,
    Logs,
}

impl View {
    /// Name used in export file names
    pub fn name(self) -> &'static str {
        match self {
            View::Endpoints => "endpoints",
            View::Events => "events",
            View::Logs => "logs",
        }
    }

    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            View::Endpoints => &["name", "url"],
            View::Events => &["event_id", "endpoint", "event_type"],
            View::Logs => &["message", "source"],
        }
    }

    pub fn filter_fields(self) -> &'static [&'static str] {
        match self {
            View::Endpoints => &["status"],
            View::Events => &["endpoint", "status"],
            View::Logs => &["level", "source"],
        }
    }

    pub fn engine(self) -> QueryEngine {
        QueryEngine::new(self.search_fields().iter().copied(), self.filter_fields().iter().copied())
    }

    /// Page size (or load-more batch for logs) from config
    pub fn page_size(self, config: &Config) -> NonZeroUsize {
        match self {
            View::Endpoints => config.endpoints_page_size,
            View::Events => config.events_page_size,
            View::Logs => config.logs_batch_size,
        }
    }

    pub fn list_view(self, config: &Config) -> ListView {
        ListView::new(self.engine(), self.page_size(config))
    }

    /// Load-more state, as the logs view uses
    pub fn windowed_view(self, config: &Config) -> WindowedView {
        WindowedView::new(self.engine(), self.page_size(config))
    }

    /// Columns written by an export of this view
    pub fn columns(self) -> Vec<Column> {
        let pairs: &[(&str, &str)] = match self {
            View::Endpoints => &[
                ("name", "Name"),
                ("url", "Endpoint URL"),
                ("status", "Status"),
                ("events_today", "Events Today"),
                ("created_at", "Created"),
            ],
            View::Events => &[
                ("event_id", "Event ID"),
                ("endpoint", "Endpoint"),
                ("event_type", "Event Type"),
                ("status", "Status"),
                ("duration", "Duration"),
                ("timestamp", "Timestamp"),
            ],
            View::Logs => &[
                ("time", "Time"),
                ("level", "Level"),
                ("source", "Source"),
                ("message", "Message"),
            ],
        };
        pairs.iter().map(|(field, header)| Column::new(*field, *header)).collect()
    }
}
