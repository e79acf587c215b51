/*
[INPUT]:  CLI arguments, .env file, VK_* environment, optional YAML config
[OUTPUT]: Click count or short link on stdout; error line and exit code otherwise
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit codes
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vk_linker::{FailureKind, LinkerError, Outcome, run};

#[derive(Parser, Debug)]
#[command(
    name = "vk-linker",
    version,
    about = "Shorten a URL with vk.cc, or count clicks on an existing vk.cc link"
)]
struct Cli {
    /// URL to shorten, or vk.cc link to count clicks for
    url: String,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(err) = init_tracing(&args.log_level) {
        let err = LinkerError::Other(format!("{:#}", err));
        eprintln!("{}", style(err.user_message()).red());
        return ExitCode::from(FailureKind::Unclassified.exit_code());
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => debug!(".env not found"),
        Err(err) => debug!(error = %err, "failed to load .env"),
    }

    match run(&args.url, args.config_path.as_deref()).await {
        Ok(Outcome::Clicks(total)) => {
            println!("{} {}", style("Clicks:").bold(), style(total).green());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Shortened(short_url)) => {
            println!("{} {}", style("Short link:").bold(), style(short_url).green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(kind = ?err.kind(), error = ?err, "processing failed");
            eprintln!("{}", style(err.user_message()).red());
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
