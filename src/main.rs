use clap::Parser;
use commit_prefix::{
    cli::{commands::Cli, handlers::CommandHandler},
    host::{ErrorSurface, StderrSurface},
};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut stdin_str = String::new();

    // Read only from piped stdin
    if !atty::is(atty::Stream::Stdin) {
        debug!("Reading from stdin");
        let stdin = io::stdin();
        stdin.lock().read_to_string(&mut stdin_str)?;
    }

    let handler = CommandHandler::new(&cli, stdin_str)?;

    if let Err(e) = handler.execute().await {
        if e.is_user_facing() {
            StderrSurface::new().show_error(&e.to_string());
            std::process::exit(1);
        }
        return Err(e.into());
    }

    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let file = std::fs::File::create(std::env::temp_dir().join("commit-prefix.log"))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "commit_prefix=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(file))
        .init();
    Ok(())
}
