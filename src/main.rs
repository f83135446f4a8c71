use clap::Parser;
use quo_vadis::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    quo_vadis::run(&config)
}
