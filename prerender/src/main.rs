//! # advisor-prerender
//!
//! Writes a static snapshot of the advisor dashboard: one HTML file per route,
//! a `404.html` fallback for static hosts, and a `routes.json` manifest.
//!
//! ```bash
//! advisor-prerender --out dist --base-path /app/
//! ```

mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use advisor_dashboard::BasePath;

#[derive(Parser, Debug)]
#[command(name = "advisor-prerender")]
#[command(about = "Render every advisor dashboard route to static HTML")]
#[command(version)]
struct Args {
    /// Output directory
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Path prefix the site is served under
    #[arg(long, default_value = "/")]
    base_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let base = BasePath::new(&args.base_path);
    info!(out = %args.out.display(), %base, "prerendering");

    let written = export::export(&args.out, &base)?;
    for path in &written {
        println!("{}", path.display());
    }
    info!(files = written.len(), "done");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[advisor-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
