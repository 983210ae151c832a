use clap::{Parser, Subcommand, ValueEnum};
use conference_view_cli::application::{fetch_topics, run_countdown, CountdownOutcome};
use conference_view_cli::infrastructure::{load_context, load_flags, TopicClient};
use conference_view_cli::{LogConfig, Result};
use conference_view_core::domain::{is_mobile_width, join_label, Completion};
use conference_view_core::{
    can_join, ConferenceConfig, MainViewFrame, SessionContext, SessionCountdown, SessionFlags,
    TopicPoller,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "conference-cli")]
#[command(
    version,
    about = "Conference view CLI - view selection, session countdown and discussion topics"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "CONFERENCE_LOG_LEVEL")]
    log_level: Option<tracing::Level>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Debug logging with thread ids
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the main view and overlay layout for a session snapshot
    Select {
        /// SessionContext snapshot (JSON)
        #[arg(short = 'c', long)]
        context: PathBuf,

        /// Local-storage dump with the session flags (JSON object)
        #[arg(short = 'f', long)]
        flags: Option<PathBuf>,

        /// Use the small-screen layout
        #[arg(long)]
        mobile: bool,

        /// Viewport width in pixels; narrow widths get the small-screen layout
        #[arg(short = 'w', long)]
        width: Option<u32>,

        /// Widest viewport still treated as small-screen
        #[arg(long)]
        mobile_breakpoint: Option<u32>,
    },

    /// Run the session countdown until zero or Ctrl+C
    Countdown {
        /// End time as HH:MM (UTC); falls back to endTime in the flags file
        #[arg(short = 'e', long)]
        end_time: Option<String>,

        #[arg(short = 'f', long)]
        flags: Option<PathBuf>,

        /// Seconds at or below which the countdown is urgent
        #[arg(long)]
        urgent_threshold: Option<u32>,

        /// Tick period in milliseconds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        tick_ms: Option<u32>,
    },

    /// Fetch a discussion topic
    Topic {
        /// Topic endpoint; defaults to the configured endpoint
        #[arg(short = 'u', long)]
        url: Option<String>,

        /// Number of overlapping requests; only the newest answer is kept
        #[arg(short = 'n', long, default_value_t = 1)]
        requests: usize,
    },

    /// Check whether the preview form would let this user join
    CanJoin {
        #[arg(short = 'n', long, default_value = "")]
        name: String,

        /// Whether the preview flow has enabled joining
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        enable_join: bool,

        #[arg(short = 'f', long)]
        flags: Option<PathBuf>,

        #[arg(long)]
        streaming_kit: bool,
    },

    /// Print the JSON schema of an input file format
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Context)]
        target: SchemaTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaTarget {
    Context,
    Flags,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    log_config(&cli).init()?;

    let config = ConferenceConfig::from_env()?;

    match cli.command {
        Commands::Select {
            context,
            flags,
            mobile,
            width,
            mobile_breakpoint,
        } => {
            let ctx = load_context(&context)?;
            let flags = load_flags(flags.as_deref())?;
            let config = match mobile_breakpoint {
                Some(px) => config.with_mobile_breakpoint(px),
                None => config,
            };
            let mobile = mobile
                || width.is_some_and(|w| is_mobile_width(w, config.mobile_breakpoint_px));
            select(&ctx, &flags, mobile)?;
        }
        Commands::Countdown {
            end_time,
            flags,
            urgent_threshold,
            tick_ms,
        } => {
            let flags = load_flags(flags.as_deref())?;
            let end_time = end_time.or(flags.end_time);
            let config = countdown_config(config, urgent_threshold, tick_ms);
            countdown(end_time.as_deref(), &config).await;
        }
        Commands::Topic { url, requests } => {
            let config = match url {
                Some(url) => config.with_topic_endpoint(url),
                None => config,
            };
            topic(&config, requests).await?;
        }
        Commands::CanJoin {
            name,
            enable_join,
            flags,
            streaming_kit,
        } => {
            let flags = load_flags(flags.as_deref())?;
            let enabled = can_join(&name, enable_join, &flags);
            info!(name = %name, enabled, "Join gate evaluated");
            println!(
                "{}: {}",
                join_label(streaming_kit),
                if enabled { "enabled" } else { "disabled" }
            );
        }
        Commands::Schema { target } => {
            let schema = match target {
                SchemaTarget::Context => schemars::schema_for!(SessionContext),
                SchemaTarget::Flags => schemars::schema_for!(SessionFlags),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn log_config(cli: &Cli) -> LogConfig {
    let mut config = if cli.verbose {
        LogConfig::dev()
    } else {
        LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config = config.with_level(level);
    }
    if cli.json_logs {
        config = config.with_json();
    }
    if cli.quiet {
        config = config.without_logs();
    }
    config
}

/// Apply command-line overrides on top of the environment configuration
fn countdown_config(
    config: ConferenceConfig,
    urgent_threshold: Option<u32>,
    tick_ms: Option<u32>,
) -> ConferenceConfig {
    let config = match urgent_threshold {
        Some(secs) => config.with_urgent_threshold(secs),
        None => config,
    };
    match tick_ms {
        Some(ms) => config.with_tick_interval(ms),
        None => config,
    }
}

fn select(ctx: &SessionContext, flags: &SessionFlags, mobile: bool) -> Result<()> {
    let frame = MainViewFrame::derive(ctx, flags, mobile);

    match frame.view {
        Some(view) => info!("🖥️  Selected view: {}", view),
        None => info!("No local role yet, nothing to render"),
    }

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

async fn countdown(end_time: Option<&str>, config: &ConferenceConfig) {
    let mut countdown = SessionCountdown::start(end_time, chrono::Utc::now())
        .with_urgent_threshold(config.urgent_threshold_secs);
    countdown.on_reach_zero(|| info!("⏰ Session time is up"));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let outcome = run_countdown(
        &mut countdown,
        Duration::from_millis(u64::from(config.tick_interval_ms.max(1))),
        shutdown,
        |c| {
            let marker = if c.is_urgent() { " ⚠" } else { "" };
            println!("{}{}", c.display(), marker);
        },
    )
    .await;

    match outcome {
        CountdownOutcome::Finished => info!("Countdown finished"),
        CountdownOutcome::Interrupted => info!("Shutting down..."),
        CountdownOutcome::Unavailable => warn!("No usable end time, countdown not started"),
    }
}

async fn topic(config: &ConferenceConfig, requests: usize) -> Result<()> {
    let client = TopicClient::new(&config.topic_endpoint)?;
    let mut poller = TopicPoller::new(config.fallback_topics.clone());

    info!("📡 Fetching topic from {}", client.endpoint());
    let completions = fetch_topics(&client, &mut poller, requests.max(1)).await;

    for completion in &completions {
        match completion {
            Completion::Applied => info!("✓ Topic updated"),
            Completion::Retained(e) => warn!("Keeping previous topic: {}", e),
            Completion::Stale => info!("Discarded an outdated response"),
        }
    }

    println!("Topic: {}", poller.display_text());
    Ok(())
}
