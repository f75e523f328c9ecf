use clap::Parser;
use token_plot_server::{logging, run, Args, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from(Args::parse());
    logging::initialize(
        settings.log_destination,
        settings.log_level,
        &settings.log_file,
    );
    run(settings).await
}
