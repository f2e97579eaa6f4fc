use clap::Parser;
use ldpctx::cli::{run, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let start_time = std::time::Instant::now();
    run(cli)?;
    log::debug!("completed in {:.2?}", start_time.elapsed());
    Ok(())
}
