// hookboard - Query, pagination and export engine for a webhook dashboard

pub mod config;
pub mod demo;
pub mod display;
pub mod endpoints;
pub mod export;
pub mod filter;
pub mod jsonl;
pub mod models;
pub mod overview;
pub mod paginate;
pub mod query;
pub mod record;
pub mod session;
pub mod settings;
pub mod source;
pub mod view;
pub mod views;

// Re-export main types for convenience
pub use config::Config;
pub use export::{Column, export_csv, export_filename};
pub use filter::FilterState;
pub use paginate::{Page, PageLink, PageState, Window, page_links, paginate};
pub use query::QueryEngine;
pub use record::{FieldValue, Record};
pub use source::RecordSource;
pub use view::{ListView, ViewSnapshot, WindowSnapshot, WindowedView};
pub use views::View;
