use std::{fmt::Display, path::PathBuf};

use anyhow::Context as _;
use chrono::{Months, TimeDelta, Utc};
use clap::{Parser, ValueEnum};
use memories_query::{self as mq, lfm};
use serde::Serialize;

use crate::config::{Config, Network};

mod config;
mod output;

const CLIENT_ID: &str = concat!("memories/", env!("CARGO_PKG_VERSION"));

/// Lists music you had listened to before, from Last.fm (or Libre.fm).
///
/// Artists or albums are ranked by the number of separate listening sessions
/// within the window, not by the number of plays.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Last.fm/Libre.fm API key, from <https://www.last.fm/api/account/create>
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Connect to Libre.fm instead of Last.fm
    #[arg(short = 'L', long = "libre-fm")]
    libre_fm: bool,

    /// The path to the configuration file [default: <config dir>/last.fm-memories/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The period (in months) to rewind. For example, to list music listened to last year give it 12
    #[arg(
        short = 'b',
        long = "back",
        value_name = "MONTHS",
        default_value_t = 12
    )]
    months_back: u32,

    /// The duration (in days) to query
    #[arg(short, long, value_name = "DAYS", default_value_t = 30)]
    window: u32,

    /// Order the list descendingly
    #[arg(short, long, overrides_with = "asc")]
    desc: bool,

    /// Order the list ascendingly [default]
    #[arg(short, long, overrides_with = "desc")]
    asc: bool,

    /// Look up every artist or album on the service for canonical names and statistics
    #[arg(long)]
    resolve: bool,

    /// Print the list as JSON
    #[arg(long)]
    json: bool,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The listener whose history to query
    username: String,

    /// What to list
    #[arg(value_enum, ignore_case = true, default_value_t = Unit::Artists)]
    unit: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    #[value(alias = "artist")]
    Artists,
    #[value(alias = "album")]
    Albums,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    let api_key = args.api_key.clone().or(config.api_key).with_context(|| {
        format!(
            "An API key is required: pass --api-key, or set api_key in {}",
            config_path.display()
        )
    })?;
    let network = if args.libre_fm {
        Network::LibreFm
    } else {
        config.network
    };

    let client = lfm::Client::new(network.base_url(), api_key, CLIENT_ID)
        .context("Failed to create the HTTP client")?;
    let user = mq::LastFmUser::new(&client, &args.username).resolving(args.resolve);

    let reference = Utc::now()
        .checked_sub_months(Months::new(args.months_back))
        .with_context(|| format!("Cannot rewind {} months", args.months_back))?;
    let window = TimeDelta::try_days(i64::from(args.window))
        .with_context(|| format!("A window of {} days is too long", args.window))?;
    let criteria = mq::Criteria::at(user, window, reference)?.with_page_size(config.page_size);
    tracing::info!(
        user = criteria.user().username(),
        service = client.base_url(),
        reference = %criteria.timestamp(),
        window_days = criteria.window().num_days(),
        from = %criteria.timestamp_from(),
        to = %criteria.timestamp_to(),
        "querying history"
    );

    match args.unit {
        Unit::Artists => print_listing(mq::list_artists(&criteria).await?, &args),
        Unit::Albums => print_listing(mq::list_albums(&criteria).await?, &args),
    }
}

fn print_listing<T: Display + Serialize>(
    mut listing: Vec<(T, u32)>,
    args: &Args,
) -> anyhow::Result<()> {
    if args.desc {
        listing.reverse();
    }

    let stdout = std::io::stdout().lock();
    if args.json {
        output::write_json(stdout, &listing)
    } else {
        output::write_table(stdout, &listing).context("Failed to write to stdout")
    }
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "memories=warn,memories_query=warn",
        1 => "memories=info,memories_query=info",
        _ => "memories=debug,memories_query=debug,memories_lastfm=debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["memories", "listener"]).unwrap();
        assert_eq!(args.username, "listener");
        assert_eq!(args.unit, Unit::Artists);
        assert_eq!(args.months_back, 12);
        assert_eq!(args.window, 30);
        assert!(!args.desc && !args.libre_fm && !args.resolve && !args.json);
    }

    #[test]
    fn test_args_unit_is_case_insensitive() {
        for unit in ["albums", "ALBUMS", "Album"] {
            let args = Args::try_parse_from(["memories", "listener", unit]).unwrap();
            assert_eq!(args.unit, Unit::Albums, "{unit}");
        }
        assert!(Args::try_parse_from(["memories", "listener", "tracks"]).is_err());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::try_parse_from([
            "memories", "-L", "-k", "key", "-b", "6", "-w", "7", "-d", "-vv", "listener",
        ])
        .unwrap();
        assert!(args.libre_fm && args.desc);
        assert_eq!(args.api_key.as_deref(), Some("key"));
        assert_eq!((args.months_back, args.window, args.verbose), (6, 7, 2));

        let args = Args::try_parse_from(["memories", "-d", "-a", "listener"]).unwrap();
        assert!(!args.desc);
    }

    #[test]
    fn test_args_reject_negative_window() {
        assert!(Args::try_parse_from(["memories", "-w", "-1", "listener"]).is_err());
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
