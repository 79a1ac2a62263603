// SPDX-License-Identifier: PMPL-1.0-or-later

//! tran: translate text from files, stdin, or an interactive prompt.
//!
//! With no file arguments and a terminal on stdin, an interactive shell is
//! started on stderr. Otherwise the input is translated in chunks and the
//! result is printed on stdout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tran::batch::{self, BatchOptions};
use tran::config::{Config, Overrides};
use tran::shell::{self, render, Editor, Shell};
use tran::{lang, script, Endpoint};

/// Log filter, e.g. `TRAN_LOG=tran=debug`
const LOG_ENV: &str = "TRAN_LOG";

#[derive(Parser)]
#[command(name = "tran")]
#[command(version)]
#[command(about = "Translate text through a remote translation endpoint")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Show language codes (ISO 639-1)
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Source language, code or name (default: auto-detect)
    #[arg(short, long, value_name = "LANG")]
    source: Option<String>,

    /// Target language, code or name (default: from config.toml)
    #[arg(short, long, value_name = "LANG")]
    target: Option<String>,

    /// Print the source text before each translation
    #[arg(short, long)]
    echo: bool,

    /// Print a server-side script implementing the endpoint
    #[arg(short = 'a', long = "api-script")]
    api_script: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Files to translate (default: stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.list {
        print!("{}", render::language_list(lang::all()));
        return Ok(());
    }
    if cli.api_script {
        print!("{}", script::APPS_SCRIPT);
        return Ok(());
    }

    let overrides = Overrides {
        source: cli.source,
        target: cli.target,
    };
    let config = Config::load(&overrides).context("failed to load configuration")?;
    let endpoint = Endpoint::new(config.endpoint.clone()).context("failed to set up HTTP client")?;

    if cli.files.is_empty() && io::stdin().is_terminal() {
        shell::color_for(&io::stderr());
        let mut editor = Editor::new().context("failed to start line editor")?;
        let mut shell = Shell::new(&config, &endpoint);
        shell.run(&mut editor, &mut io::stderr().lock())?;
        return Ok(());
    }

    let text = batch::read_inputs(&cli.files).context("failed to read input")?;
    let options = BatchOptions {
        source: config.source.code.to_string(),
        target: config.target.code.to_string(),
        limit_n_chars: config.limit_n_chars,
        echo: cli.echo,
    };
    batch::run(&text, &options, &endpoint, &mut io::stdout().lock())
        .context("translation failed")?;

    Ok(())
}
