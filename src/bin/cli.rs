// src/bin/cli.rs
use salary_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        tracing::error!("CLI: {e}");
        return Err(e.into());
    }
    Ok(())
}
