/// Soul Shuffle - play a directory of audio files in a chosen order
use clap::{Args, Parser, Subcommand};
use soul_order::OrderKind;
use soul_playlist::SleepingSink;
use soul_shuffle::{commands, PlayerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soul-shuffle")]
#[command(about = "Play a directory of audio files in ordered, random or cycling order", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each file and wait its play time, until the time budget is used
    Play {
        #[command(flatten)]
        library: LibraryArgs,

        #[command(flatten)]
        order: OrderArgs,

        /// Total play time in seconds
        #[arg(long)]
        seconds: Option<f64>,

        /// Play time of every file in seconds
        #[arg(long)]
        track_seconds: Option<f64>,
    },
    /// Print the play order without waiting
    Order {
        #[command(flatten)]
        library: LibraryArgs,

        #[command(flatten)]
        order: OrderArgs,

        /// Number of entries to print
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },
    /// Print one shuffled pass over the directory
    Shuffle {
        #[command(flatten)]
        library: LibraryArgs,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct LibraryArgs {
    /// Directory to scan
    directory: Option<PathBuf>,

    /// Accepted file extension (repeatable)
    #[arg(short, long = "ext")]
    extensions: Vec<String>,

    /// Scan subdirectories too
    #[arg(short, long)]
    recursive: bool,
}

#[derive(Args)]
struct OrderArgs {
    /// Order strategy: ordered, ordered-cycle, random, random-cycle, random-cycle-regenerate
    #[arg(short, long)]
    strategy: Option<OrderKind>,

    /// Seed for reproducible random orders
    #[arg(long)]
    seed: Option<u64>,
}

impl LibraryArgs {
    fn apply(self, config: &mut PlayerConfig) {
        if let Some(directory) = self.directory {
            config.library.directory = Some(directory);
        }
        if !self.extensions.is_empty() {
            config.library.extensions = self.extensions;
        }
        if self.recursive {
            config.library.recursive = true;
        }
    }
}

impl OrderArgs {
    fn apply(self, config: &mut PlayerConfig) {
        if let Some(strategy) = self.strategy {
            config.playback.strategy = strategy;
        }
        if let Some(seed) = self.seed {
            config.playback.seed = Some(seed);
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout carries only paths
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soul_shuffle=info,soul_playlist=info,soul_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = PlayerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Play {
            library,
            order,
            seconds,
            track_seconds,
        } => {
            library.apply(&mut config);
            order.apply(&mut config);
            if let Some(seconds) = seconds {
                config.playback.total_seconds = seconds;
            }
            if let Some(track_seconds) = track_seconds {
                config.playback.track_seconds = track_seconds;
            }
            config.validate()?;

            let mut sink = SleepingSink::stdout();
            commands::play(&config, &mut sink)?;
        }
        Commands::Order {
            library,
            order,
            count,
            json,
        } => {
            library.apply(&mut config);
            order.apply(&mut config);
            config.validate()?;

            commands::order(&config, count, json, &mut std::io::stdout().lock())?;
        }
        Commands::Shuffle {
            library,
            seed,
            json,
        } => {
            library.apply(&mut config);
            if let Some(seed) = seed {
                config.playback.seed = Some(seed);
            }
            config.validate()?;

            commands::shuffle(&config, json, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
