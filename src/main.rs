//! Mealplan CLI
//!
//! Command-line interface for recipe search and meal planning:
//! - Search recipes and add them to the meal plan
//! - Maintain manual shopping items
//! - Show the meal plan and the derived shopping list
//! - Run a clock display

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use mealplan::clock::{Clock, ClockVariant};
use mealplan::config::{generate_default_config, Config, LoggingConfig};
use mealplan::planner::{Outcome, PlannerController};
use mealplan::recipes::MealDbClient;
use mealplan::storage::{FileStore, Persistence};
use mealplan::view::{ClockDisplay, TerminalRenderer};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mealplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recipe search, meal planning and shopping lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved state (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes by name
    Search {
        /// Recipe name
        query: String,
    },

    /// Search, then add one of the resulting cards to the meal plan
    Add {
        /// Recipe name
        query: String,
        /// Card number from the search results
        #[arg(long, default_value = "1")]
        card: usize,
    },

    /// Remove a recipe from the meal plan
    Remove {
        /// Recipe id
        id: String,
    },

    /// Add a manual shopping list item
    Item {
        /// Item text
        text: String,
    },

    /// Show the meal plan
    Plan,

    /// Show the shopping list
    List,

    /// Show the meal plan and shopping list, if anything is saved
    Show,

    /// Run the clock display until Ctrl-C
    Clock {
        /// Footer variant: press Enter to follow its link
        #[arg(long)]
        footer: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    init_logging(&config.logging);
    tracing::debug!("mealplan v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Search { query } => {
            let mut planner = planner(&config)?;
            planner.search(&query).await;
        }

        Commands::Add { query, card } => {
            let mut planner = planner(&config)?;
            let view = planner.search(&query).await;

            let Some(chosen) = card.checked_sub(1).and_then(|i| view.cards().get(i)) else {
                bail!("no card {} in the results for {:?}", card, query.trim());
            };

            if planner.add_to_meal_plan(chosen.recipe())? == Outcome::Applied {
                println!("Added {} to the meal plan", chosen.title);
            }
        }

        Commands::Remove { id } => {
            let mut planner = planner(&config)?;
            planner.remove_from_meal_plan(&id)?;
        }

        Commands::Item { text } => {
            let mut planner = planner(&config)?;
            planner.add_manual_item(&text)?;
        }

        Commands::Plan => {
            let mut planner = planner(&config)?;
            planner.render_meal_plan();
        }

        Commands::List => {
            let mut planner = planner(&config)?;
            planner.render_shopping_list();
        }

        Commands::Show => {
            let mut planner = controller(&config)?;
            if !planner.load()? {
                println!("Nothing saved yet.");
            }
        }

        Commands::Clock { footer } => {
            run_clock(&config, footer).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mealplan={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn controller(config: &Config) -> anyhow::Result<PlannerController<TerminalRenderer>> {
    let client = MealDbClient::new(config.api.client_config())?;

    let data_dir = config.storage.data_path();
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("opening saved state in {:?}", data_dir))?;

    Ok(PlannerController::new(
        Box::new(client),
        Persistence::new(Box::new(store)),
        TerminalRenderer::stdout(),
    ))
}

/// Controller with saved state restored but not yet rendered
fn planner(config: &Config) -> anyhow::Result<PlannerController<TerminalRenderer>> {
    let mut planner = controller(config)?;
    planner.restore()?;
    Ok(planner)
}

async fn run_clock(config: &Config, footer: bool) -> anyhow::Result<()> {
    let format = config.clock.format()?;
    let variant = if footer {
        ClockVariant::Footer(config.clock.link())
    } else {
        ClockVariant::Header
    };

    if let Some(link) = variant.link() {
        println!("Press Enter for {} ({}), Ctrl-C to quit", link.label, link.target);
    }

    let display: Arc<dyn ClockDisplay> = Arc::new(TerminalRenderer::stdout());
    let handle = Clock::new(variant, format)
        .with_interval(config.clock.interval())
        .start(display);

    if footer {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        tokio::select! {
            _ = tokio::signal::ctrl_c() => handle.stop().await,
            _ = enter_pressed(&mut lines) => {
                if let Err(handle) = handle.follow_link().await {
                    handle.stop().await;
                }
            }
        }
    } else {
        tokio::signal::ctrl_c()
            .await
            .context("waiting for Ctrl-C")?;
        handle.stop().await;
        println!();
    }

    Ok(())
}

/// Resolves on the next input line. Closed or unreadable input never counts
/// as a press, so the future stays pending.
async fn enter_pressed<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) {
    match lines.next_line().await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!("stdin closed, footer button disabled");
            std::future::pending::<()>().await
        }
        Err(e) => {
            tracing::warn!("Failed to read stdin, footer button disabled: {}", e);
            std::future::pending::<()>().await
        }
    }
}
