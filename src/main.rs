use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use osrs_api::models::graph_timestamp;
use osrs_api::utils::{fit, fmt_number, fmt_rank};
use osrs_api::{cancellable, AppConfig, Client, GameMode, ResponseFormat};

#[derive(Parser)]
#[command(name = "osrs-api", about = "Old School RuneScape hiscores and Grand Exchange lookups", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the decoded response as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a player's skills and activity scores
    Hiscores {
        username: String,

        /// regular, ironman, hardcore_ironman, ultimate_ironman, deadman, seasonal, tournament, fresh_start
        #[arg(short, long, env = "OSRS_MODE")]
        mode: Option<GameMode>,

        /// json or text
        #[arg(short, long)]
        format: Option<ResponseFormat>,
    },

    /// List one page of the item catalogue
    Items {
        /// First letter filter ('#' for digits, empty for all)
        #[arg(short, long, default_value = "a")]
        alpha: String,

        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show current price and trends for one item
    Item { id: u64 },

    /// Show the daily price graph for one item
    Graph {
        id: u64,

        /// Only print the most recent N points
        #[arg(short, long, default_value_t = 30)]
        last: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "osrs_api=info,warn",
        1 => "osrs_api=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let client = Client::new(&config.client).context("Failed to build client")?;
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    match cli.command {
        Command::Hiscores { username, mode, format } => {
            let mode = mode.unwrap_or(config.defaults.mode);
            let format = format.unwrap_or(config.defaults.format);
            let stats = cancellable(client.hiscores(&username, Some(mode), Some(format)), ctrl_c)
                .await
                .with_context(|| format!("Hiscores lookup for {:?} failed", username))?;

            if cli.json {
                return print_json(&stats);
            }
            println!("─────────────────────────────────────────────────────");
            println!("  {} ({})", username, mode);
            println!("─────────────────────────────────────────────────────");
            for s in &stats.skills {
                println!(
                    "  {:<14} {:>4}  {:>15} xp  rank {}",
                    s.name,
                    s.level,
                    fmt_number(s.experience),
                    fmt_rank(s.ranked())
                );
            }
            let ranked: Vec<_> = stats.activities.iter().filter(|a| a.ranked().is_some()).collect();
            if !ranked.is_empty() {
                println!("─────────────────────────────────────────────────────");
                for a in ranked {
                    println!("  {:<32} {:>8}  rank {}", fit(&a.name, 32), fmt_number(a.score), fmt_rank(a.ranked()));
                }
            }
        }

        Command::Items { alpha, page } => {
            let listing = cancellable(client.items(&alpha, page), ctrl_c)
                .await
                .with_context(|| format!("Catalogue page {} ({:?}) failed", page, alpha))?;

            if cli.json {
                return print_json(&listing);
            }
            info!("{} items match {:?}", listing.total, alpha);
            for item in &listing.items {
                println!(
                    "  {:>6}  {:<36} {:>15}  {}",
                    item.id,
                    fit(&item.name, 36),
                    fmt_number(item.current.price.0),
                    item.current.trend
                );
            }
            if listing.items.is_empty() {
                println!("No items on page {}.", page);
            }
        }

        Command::Item { id } => {
            let item = cancellable(client.item(id), ctrl_c)
                .await
                .with_context(|| format!("Item {} lookup failed", id))?;

            if cli.json {
                return print_json(&item);
            }
            let s = &item.summary;
            println!("─────────────────────────────────");
            println!("  {} (#{})", s.name, s.id);
            println!("  {}", s.description);
            println!("─────────────────────────────────");
            println!("  Members  : {}", if s.is_members() { "yes" } else { "no" });
            println!("  Current  : {} ({})", fmt_number(s.current.price.0), s.current.trend);
            println!("  Today    : {} ({})", fmt_number(s.today.price.0), s.today.trend);
            println!("  30 days  : {} ({})", item.day30.change, item.day30.trend);
            println!("  90 days  : {} ({})", item.day90.change, item.day90.trend);
            println!("  180 days : {} ({})", item.day180.change, item.day180.trend);
            println!("─────────────────────────────────");
        }

        Command::Graph { id, last } => {
            let graph = cancellable(client.item_graph(id), ctrl_c)
                .await
                .with_context(|| format!("Price graph for item {} failed", id))?;

            if cli.json {
                return print_json(&graph);
            }
            let daily = graph.daily_series();
            let skip = daily.len().saturating_sub(last);
            for (key, price) in &daily[skip..] {
                let date = graph_timestamp(key)
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| key.to_string());
                let average = graph.average.get(*key).map(|a| fmt_number(*a)).unwrap_or_default();
                println!("  {}  {:>15}  avg {:>15}", date, fmt_number(*price), average);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
