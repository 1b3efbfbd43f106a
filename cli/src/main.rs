mod menu;
mod tui;

use std::io;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, ValueEnum};
use eduplan_core::{default_seed, parse_due_date, InMemoryTaskRepository, SortStrategy, TaskService};
use tracing::info;

use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "eduplan")]
#[command(about = "In-memory planner for learning tasks", long_about = None)]
struct Cli {
    /// Start with an empty task list instead of the example tasks
    #[arg(long, env = "EDUPLAN_NO_SEED")]
    no_seed: bool,

    /// Date the example tasks are scheduled from (default: now)
    #[arg(long, env = "EDUPLAN_SEED_BASE", value_name = "DATE")]
    seed_base: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive text menu (default)
    Menu,
    /// Open the Terminal User Interface
    Tui,
    /// Print the starting task list and exit
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Due)]
        sort: SortArg,
        /// Emit JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Due,
    Id,
}

impl From<SortArg> for SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Due => SortStrategy::DueDate,
            SortArg::Id => SortStrategy::Id,
        }
    }
}

fn init_logging() {
    if std::env::var("EDUPLAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "eduplan_core=debug,eduplan=debug".into());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let now = Local::now().naive_local();
    let today = now.date();

    let mut service = TaskService::new(InMemoryTaskRepository::new());
    if !cli.no_seed {
        let base: NaiveDateTime = match cli.seed_base.as_deref() {
            Some(raw) => parse_due_date(raw, today).with_context(|| format!("Invalid --seed-base '{}'", raw))?,
            None => now,
        };
        service.seed(default_seed(base));
        info!(%base, "seeded example tasks");
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut service, stdin.lock(), io::stdout(), today);
            menu.run()?;
        }
        Commands::Tui => {
            tui::run(service, today)?;
        }
        Commands::List { sort, json } => {
            let tasks = service.get_sorted_tasks(sort.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("Список завдань порожній.");
            } else {
                for task in tasks {
                    println!("{}", task);
                }
            }
        }
    }
    Ok(())
}
