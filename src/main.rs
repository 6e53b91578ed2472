use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finsight::cli::{
    handle_categories, handle_dashboard, handle_monthly, handle_summary, handle_yearly,
    handle_years,
};
use finsight::config::{FinsightPaths, Settings};

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "finsight loads a CSV of financial transactions (Date, Type, \
                  Category, Amount) and shows summary totals, monthly and yearly \
                  income/expense trends, and category spending breakdowns."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full dashboard for a transaction CSV
    #[command(alias = "dash")]
    Dashboard {
        /// Path to the transaction CSV file
        file: PathBuf,
        /// Restrict summary, monthly and category views to one year
        #[arg(short, long)]
        year: Option<i32>,
        /// Print all derived tables as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show income, expense and net totals
    Summary {
        /// Path to the transaction CSV file
        file: PathBuf,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<i32>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the monthly income/expense/net series
    Monthly {
        /// Path to the transaction CSV file
        file: PathBuf,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<i32>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the expense breakdown by category
    #[command(alias = "cat")]
    Categories {
        /// Path to the transaction CSV file
        file: PathBuf,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<i32>,
        /// Show only the top N categories
        #[arg(long)]
        top: Option<usize>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show yearly trends over the full file (ignores any year filter)
    Yearly {
        /// Path to the transaction CSV file
        file: PathBuf,
        /// Break yearly expenses down by category
        #[arg(long)]
        by_category: bool,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the years present in a transaction CSV, newest first
    Years {
        /// Path to the transaction CSV file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = FinsightPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Dashboard { file, year, json } => {
            handle_dashboard(&file, year, json, &settings)?;
        }
        Commands::Summary {
            file,
            year,
            output,
            json,
        } => {
            handle_summary(&file, year, output, json, &settings)?;
        }
        Commands::Monthly {
            file,
            year,
            output,
            json,
        } => {
            handle_monthly(&file, year, output, json, &settings)?;
        }
        Commands::Categories {
            file,
            year,
            top,
            output,
            json,
        } => {
            handle_categories(&file, year, top, output, json, &settings)?;
        }
        Commands::Yearly {
            file,
            by_category,
            output,
            json,
        } => {
            handle_yearly(&file, by_category, output, json, &settings)?;
        }
        Commands::Years { file } => {
            handle_years(&file, &settings)?;
        }
        Commands::Config => {
            println!("finsight Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!();
            println!("Settings:");
            println!("  Date format:  {}", settings.date_format);
            println!("  Preview rows: {}", settings.preview_rows);
        }
    }

    Ok(())
}
