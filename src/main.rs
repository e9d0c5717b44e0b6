//! FleetDesk CLI binary

use clap::Parser;
use fleetdesk::cli::{render_chart_file, ChartAction, Cli, Commands, ContractAction, FleetDeskApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Contract { action } => match action {
            ContractAction::Submit {
                endpoint,
                file,
                accept_partial,
            } => {
                tracing::info!("submitting contract request from {}", file.display());
                let app = FleetDeskApp::new(&endpoint);
                app.submit_from_file(&file, accept_partial).await?;
            }
        },

        Commands::Chart { action } => match action {
            ChartAction::Render {
                file,
                out,
                width,
                height,
                color,
            } => {
                render_chart_file(&file, &out, width, height, &color)?;
            }
        },
    }

    Ok(())
}
