use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devscope::app::{AppContext, DevscopeError};
use devscope::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; log lines go to stderr so they never corrupt
    // the picker.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            // Unknown verbs and malformed arguments exit 1, not clap's
            // default 2.
            err.print()?;
            std::process::exit(1);
        }
    };

    let ctx = AppContext::new()?;

    let outcome = match cli.command {
        Some(Commands::Top { timeline }) => commands::top(&ctx, timeline).await,
        Some(Commands::Tag { tag }) => commands::tag(&ctx, tag).await,
        Some(Commands::Latest) => commands::latest(&ctx).await,
        Some(Commands::Search { keyword }) => commands::search(&ctx, &keyword).await,
        Some(Commands::Author { username, profile }) => {
            if profile {
                commands::author_profile(&ctx, &username).await
            } else {
                commands::author_posts(&ctx, &username).await
            }
        }
        None => commands::home(&ctx).await,
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(DevscopeError::Interrupted) => std::process::exit(130),
        Err(err) => {
            eprintln!("{} {}", style("✗").red().bold(), err);
            std::process::exit(1);
        }
    }
}
