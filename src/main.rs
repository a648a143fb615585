use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use condor_screen::{api, cli, example, pipeline, schema};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Grade {
            file,
            as_of,
            min_profitability,
            min_profit_prob,
            columns,
            output,
            plot_spec,
        } => pipeline::run(&pipeline::GradeConfig {
            input: file,
            as_of,
            min_profitability,
            min_profit_prob,
            columns,
            output,
            plot_spec,
        }),
        cli::Command::Serve {
            host,
            port,
            data_dir,
        } => {
            let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
            rt.block_on(api::serve(&host, port, &data_dir))
        }
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
    }
}
