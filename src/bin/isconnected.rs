//! CLI entry point for the `isconnected` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use airmap::cli::commands;
use airmap::graph::RouteMap;
use airmap::MapError;

#[derive(Parser)]
#[command(
    name = "isconnected",
    about = "Answer reachability questions over a directed route map"
)]
struct Cli {
    /// Map file to load before reading queries from stdin
    map: Option<PathBuf>,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Same as passing the map file directly
    Query {
        /// Path to the map file
        map: PathBuf,
    },
    /// Answer a single query
    Check {
        /// Path to the map file
        map: PathBuf,
        /// City to start from
        origin: String,
        /// City to reach
        destination: String,
    },
    /// List every city reachable from an origin
    Reach {
        /// Path to the map file
        map: PathBuf,
        /// City to start from
        origin: String,
    },
    /// Display the cities and connection counts of a map
    Info {
        /// Path to the map file
        map: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let command = match (cli.command, cli.map) {
        (Some(command), _) => command,
        (None, Some(map)) => Commands::Query { map },
        (None, None) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a map file or a subcommand is required",
            )
            .exit(),
    };

    let mut stdout = io::stdout().lock();
    let result = match command {
        Commands::Query { map } => RouteMap::load(&map).and_then(|mut route_map| {
            commands::cmd_query(&mut route_map, io::stdin().lock(), &mut stdout, json)
        }),
        Commands::Check {
            map,
            origin,
            destination,
        } => commands::cmd_check(&map, &origin, &destination, &mut stdout, json),
        Commands::Reach { map, origin } => commands::cmd_reach(&map, &origin, &mut stdout, json),
        Commands::Info { map } => commands::cmd_info(&map, &mut stdout, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            MapError::Io(_) => 1,
            MapError::MalformedRecord { .. } => 3,
            MapError::UnknownCity(_) => 4,
            MapError::NodeNotFound(_)
            | MapError::DuplicateCity(_)
            | MapError::CapacityExceeded(_) => 5,
        };
        process::exit(code);
    }
}
