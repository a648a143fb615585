use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Iron-condor screener grader — turn a Barchart condor screener export
/// into a graded, filterable candidate table.
#[derive(Parser)]
#[command(name = "condor-screen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grade a screener CSV export and print the enriched candidate table
    Grade {
        /// Path to the screener CSV export
        file: PathBuf,

        /// Reference date for duration computation, MM/DD/YYYY (default: today)
        #[arg(long)]
        as_of: Option<String>,

        /// Keep only rows with profitability >= this value
        #[arg(long, default_value = "50.0")]
        min_profitability: f64,

        /// Keep only rows with profit probability >= this value
        #[arg(long, default_value = "50.0")]
        min_profit_prob: f64,

        /// Comma-separated display columns (default: Row Index, Symbol,
        /// Grade, Profitability, Profit Prob, Duration)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Write the enriched rows as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the scatter-plot spec as JSON to this file
        #[arg(long)]
        plot_spec: Option<PathBuf>,
    },

    /// Start the HTTP API server for the chart frontend
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value = "8787")]
        port: u16,

        /// Directory for uploaded CSV files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Output the JSON schema for grading weight configuration
    Schema,

    /// Output an example screener CSV to stdout
    Example,
}
