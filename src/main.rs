use chrono::Local;
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use eyre::{Context, Result, bail};
use hookboard::display::format_duration;
use hookboard::filter::parse_exact;
use hookboard::models::{DATE_FORMAT, Endpoint, Event, LogEntry};
use hookboard::overview::Overview;
use hookboard::session::{Access, IdentityProvider, LOGIN_PATH, Profile, StaticIdentity, gate};
use hookboard::settings::ApiKeyRing;
use hookboard::{Config, ListView, PageLink, Record, View, demo, export_csv, export_filename, page_links, source};
use std::fs;
use std::path::{Path, PathBuf};

/// Page-number buttons shown before eliding
const MAX_PAGE_LINKS: usize = 5;

#[derive(Parser)]
#[command(name = "hookboard")]
#[command(about = "hookboard CLI - Search, page through and export webhook dashboard data")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the config file (default: <config dir>/hookboard/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// JSONL file with the view's records (default: built-in demo data)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Free-text search, case-insensitive
    #[arg(short, long, default_value = "")]
    query: String,

    /// Exact filter as field=value; repeat for more
    #[arg(short, long = "filter", value_parser = parse_exact)]
    filters: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of a view
    List {
        view: View,

        #[command(flatten)]
        args: QueryArgs,

        /// Page number; endpoints and events only (default: 1)
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Number of batches to reveal; logs only (default: 1)
        #[arg(long)]
        batches: Option<usize>,
    },

    /// Write the filtered view to <view>-<date>.csv
    Export {
        view: View,

        #[command(flatten)]
        args: QueryArgs,

        /// Output directory (default: export_dir from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Dashboard overview stats
    Overview {
        /// Events JSONL file
        #[arg(long)]
        events: Option<PathBuf>,

        /// Endpoints JSONL file
        #[arg(long)]
        endpoints: Option<PathBuf>,
    },

    /// List API keys of the signed-in account
    Keys {
        /// Show keys in full
        #[arg(long)]
        reveal: bool,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List {
            view,
            args,
            page,
            batches,
        } => {
            check_list_flags(view, page, batches)?;
            let page = page.unwrap_or(1);
            match view {
                View::Endpoints => list(view, &config, &args, page, load(&args, demo::endpoints)?, endpoint_row),
                View::Events => list(view, &config, &args, page, load(&args, demo::events)?, event_row),
                View::Logs => list_logs(&config, &args, batches.unwrap_or(1), load(&args, demo::logs)?),
            }
        }
        Commands::Export { view, args, out } => {
            let dir = out.unwrap_or_else(|| config.export_dir());
            match view {
                View::Endpoints => export(view, &config, &args, &dir, load(&args, demo::endpoints)?),
                View::Events => export(view, &config, &args, &dir, load(&args, demo::events)?),
                View::Logs => export(view, &config, &args, &dir, load(&args, demo::logs)?),
            }
        }
        Commands::Overview { events, endpoints } => {
            let events = source::file_or(events.as_deref(), demo::events()).list_records()?;
            let endpoints = source::file_or(endpoints.as_deref(), demo::endpoints()).list_records()?;
            print_overview(&Overview::compute(&endpoints, &events));
            Ok(())
        }
        Commands::Keys { reveal } => keys(reveal),
    }
}

fn load<R: Record>(args: &QueryArgs, fallback: fn() -> Vec<R>) -> Result<Vec<R>> {
    source::file_or(args.file.as_deref(), fallback())
        .list_records()
        .with_context(|| format!("Failed to load {}", R::collection_name()))
}

/// `--page` pages endpoints and events; `--batches` grows logs
fn check_list_flags(view: View, page: Option<i64>, batches: Option<usize>) -> Result<()> {
    match view {
        View::Logs if page.is_some() => bail!("--page does not apply to logs, use --batches"),
        View::Endpoints | View::Events if batches.is_some() => {
            bail!("--batches only applies to logs, use --page for {}", view.name())
        }
        _ => Ok(()),
    }
}

fn warn_unfilterable(view: View, args: &QueryArgs) {
    let engine = view.engine();
    for (field, _) in &args.filters {
        if !engine.filter_fields().contains(field) {
            println!("{} '{}' is not filterable in {}, ignoring", "warning:".yellow(), field, view.name());
        }
    }
}

fn view_state(view: View, config: &Config, args: &QueryArgs) -> ListView {
    warn_unfilterable(view, args);
    let mut state = view.list_view(config);
    state.set_query(args.query.as_str());
    for (field, value) in &args.filters {
        state.set_filter(field.as_str(), value.as_str());
    }
    state
}

fn list<R: Record>(
    view: View,
    config: &Config,
    args: &QueryArgs,
    page: i64,
    records: Vec<R>,
    row: fn(&R) -> String,
) -> Result<()> {
    let mut state = view_state(view, config, args);
    state.go_to(page, usize::MAX);
    let snapshot = state.snapshot(&records);

    if state.filters().is_active() {
        println!("Showing {} of {} {}\n", snapshot.filtered.len(), snapshot.total, view.name());
    }

    if snapshot.visible().is_empty() {
        println!("No {} found matching your filters", view.name());
    }
    for record in snapshot.visible() {
        println!("{}", row(record));
    }

    let (first, last) = snapshot.item_range();
    println!(
        "\nShowing {}-{} of {} {}",
        first,
        last,
        snapshot.filtered.len(),
        view.name()
    );

    let links: Vec<String> = page_links(snapshot.total_pages, MAX_PAGE_LINKS)
        .into_iter()
        .map(|link| match link {
            PageLink::Number(n) if n == snapshot.page => format!("[{}]", n).bold().to_string(),
            PageLink::Number(n) => n.to_string(),
            PageLink::Gap => "...".to_string(),
        })
        .collect();
    println!("Pages: {}", links.join(" "));

    Ok(())
}

fn list_logs(config: &Config, args: &QueryArgs, batches: usize, records: Vec<LogEntry>) -> Result<()> {
    warn_unfilterable(View::Logs, args);
    let mut state = View::Logs.windowed_view(config);
    state.set_query(args.query.as_str());
    for (field, value) in &args.filters {
        state.set_filter(field.as_str(), value.as_str());
    }
    for _ in 1..batches.max(1) {
        state.load_more(&records);
    }
    let snapshot = state.snapshot(&records);

    if state.filters().is_active() {
        println!("Showing {} of {} logs\n", snapshot.filtered.len(), snapshot.total);
    }

    if snapshot.visible().is_empty() {
        println!("No logs found matching your filters");
    }
    for entry in snapshot.visible() {
        println!("{}", log_row(entry));
    }

    let remaining = snapshot.remaining();
    if remaining > 0 {
        println!(
            "\n{} ({} remaining, use --batches {})",
            "Load more logs".dimmed(),
            remaining,
            batches.max(1) + 1
        );
    }

    Ok(())
}

fn export<R: Record>(view: View, config: &Config, args: &QueryArgs, dir: &Path, records: Vec<R>) -> Result<()> {
    let state = view_state(view, config, args);
    let filtered = state.matching(&records);
    let csv = export_csv(filtered.iter().copied(), &view.columns())?;

    fs::create_dir_all(dir).with_context(|| format!("Failed to create export directory {:?}", dir))?;
    let path = dir.join(export_filename(view.name(), Local::now().date_naive()));
    fs::write(&path, csv).with_context(|| format!("Failed to write {:?}", path))?;

    println!("{} {} {} exported to {}", "✓".green(), filtered.len(), view.name(), path.display());
    Ok(())
}

fn keys(reveal: bool) -> Result<()> {
    let identity = StaticIdentity::signed_in(demo::user());
    let session = identity.session();
    if gate(&session) != Access::Granted {
        bail!("Sign in at {} to manage API keys", LOGIN_PATH);
    }

    if let Some(profile) = Profile::from_session(&session) {
        println!("{} ({}) <{}>\n", profile.full_name.bold(), profile.initials, profile.email);
    }

    let mut ring = ApiKeyRing::starter(Local::now().date_naive());
    if reveal {
        let ids: Vec<String> = ring.keys().iter().map(|k| k.id.clone()).collect();
        for id in &ids {
            ring.toggle_visibility(id);
        }
    }

    for key in ring.keys() {
        println!(
            "{:<18} {}  {}",
            key.name,
            ring.display(key),
            key.created.format(DATE_FORMAT).to_string().dimmed()
        );
    }
    Ok(())
}

fn print_overview(overview: &Overview<'_>) {
    println!("{}", "Overview".bold());
    println!("  Total events:      {}", overview.total_events);
    println!("  Active endpoints:  {}", overview.active_endpoints);
    match overview.success_rate {
        Some(rate) => println!("  Success rate:      {:.1}%", rate),
        None => println!("  Success rate:      -"),
    }
    println!("  Avg. latency:      {}", format_duration(overview.avg_latency_ms));

    println!("\n{}", "Recent events".bold());
    for event in &overview.recent {
        println!("  {}", event_row(event));
    }

    println!("\n{}", "Top endpoints".bold());
    for (rank, (name, count)) in overview.top_endpoints.iter().enumerate() {
        println!("  {}. {:<22} {} events", rank + 1, name, count);
    }
}

fn status(text: &str) -> ColoredString {
    let padded = format!("{:<8}", text);
    match text {
        "success" | "active" | "info" => padded.green(),
        "failed" | "inactive" | "error" => padded.red(),
        _ => padded.yellow(),
    }
}

fn endpoint_row(endpoint: &Endpoint) -> String {
    format!(
        "{:<20} {:<44} {} {:>6}  {}",
        endpoint.name,
        endpoint.url,
        status(endpoint.status.as_str()),
        endpoint.events_today,
        endpoint.created_at.format(DATE_FORMAT)
    )
}

fn event_row(event: &Event) -> String {
    format!(
        "{:<15} {:<20} {:<18} {} {:>6}  {}",
        event.event_id,
        event.endpoint,
        event.event_type,
        status(event.status.as_str()),
        format_duration(event.duration_ms),
        event.timestamp.format("%b %d, %Y %H:%M:%S")
    )
}

fn log_row(entry: &LogEntry) -> String {
    format!(
        "{} {} {:<10} {}",
        entry.time.format("%H:%M:%S%.3f").to_string().dimmed(),
        status(entry.level.as_str()),
        entry.source,
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_flag_rejected_for_logs() {
        assert!(check_list_flags(View::Logs, Some(2), None).is_err());
        assert!(check_list_flags(View::Logs, None, Some(2)).is_ok());
    }

    #[test]
    fn test_batches_flag_rejected_for_paged_views() {
        assert!(check_list_flags(View::Events, None, Some(2)).is_err());
        assert!(check_list_flags(View::Endpoints, None, Some(2)).is_err());
        assert!(check_list_flags(View::Events, Some(2), None).is_ok());
        assert!(check_list_flags(View::Endpoints, None, None).is_ok());
    }
}
