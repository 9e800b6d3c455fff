//! `beta-signup` — command-line front end for the beta signup workflow.
//!
//! Collects an email and a name, drives a [`SignupForm`] through one submit
//! cycle, and prints the outcome. Exits non-zero when the outcome is an error.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signup_core::{
    ENV_API_URL, ENV_API_URL_LEGACY, SignupConfig, SignupForm, SignupSubmitter, SubmissionOutcome,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

/// Escape codes in use. All empty under `--no-color`.
#[derive(Clone, Copy)]
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    cyan: &'static str,
    white: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                red: RED,
                green: GREEN,
                cyan: CYAN,
                white: WHITE,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                red: "",
                green: "",
                cyan: "",
                white: "",
            }
        }
    }

    fn header(self, title: &str) {
        let Self { reset, bold, dim, cyan, .. } = self;
        println!("{bold}{cyan}✉ {title}{reset}");
        println!("{dim}─────────────────────────────────────────{reset}");
    }

    fn kv_line(self, key: &str, value: &str) {
        let Self { reset, dim, white, .. } = self;
        println!("  {dim}{key:<20}{reset} {white}{value}{reset}");
    }

    fn outcome(self, outcome: &SubmissionOutcome) {
        let Self { reset, bold, red, green, .. } = self;
        if outcome.is_success() {
            println!("{green}{bold}✓{reset} {}", outcome.message);
        } else {
            println!("{red}{bold}✗{reset} {red}{}{reset}", outcome.message);
        }
    }
}

// ── CLI structure ────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "beta-signup",
    version,
    about = "Beta signup CLI — submit a signup to the configured endpoint",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         SIGNUP_API_URL     Signup endpoint\n  \
         VITE_API_URL       Fallback signup endpoint\n  \
         SIGNUP_LOG_LEVEL   Log filter (default: warn)\n\n\
         {DIM}Examples:{RESET}\n  \
         beta-signup submit --email ada@example.com --name 'Ada Lovelace'\n  \
         beta-signup --endpoint https://api.example.com/signup submit --email a@b.c --name A --json"
    ),
)]
struct Cli {
    /// Signup endpoint. Falls back to `VITE_API_URL`.
    #[arg(long, env = "SIGNUP_API_URL")]
    endpoint: Option<String>,

    /// Log level filter. `RUST_LOG` takes precedence.
    #[arg(long, env = "SIGNUP_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Disable colored output.
    #[arg(long, default_value = "false")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a beta signup.
    Submit {
        /// Email address to register.
        #[arg(long)]
        email: String,
        /// Name to register.
        #[arg(long)]
        name: String,
        /// Print the outcome as JSON instead of a status line.
        #[arg(long, default_value = "false")]
        json: bool,
    },
    /// Show the resolved configuration.
    Config,
}

// ── Command dispatch ─────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let palette = Palette::new(!cli.no_color);

    // An empty `--endpoint`/`SIGNUP_API_URL` keeps the `VITE_API_URL` fallback.
    let mut config = SignupConfig::from_env().with_endpoint(cli.endpoint);
    config.log_level = cli.log_level;

    init_tracing(&config.log_level);

    match run(&config, palette, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            let Palette { reset, bold, red, .. } = palette;
            eprintln!();
            eprintln!("  {red}{bold}✗ Error:{reset} {e:#}");
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(config: &SignupConfig, palette: Palette, cmd: Commands) -> Result<ExitCode> {
    match cmd {
        Commands::Submit { email, name, json } => {
            cmd_submit(config, palette, email, name, json).await
        }
        Commands::Config => {
            cmd_config(config, palette);
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────

async fn cmd_submit(
    config: &SignupConfig,
    palette: Palette,
    email: String,
    name: String,
    json: bool,
) -> Result<ExitCode> {
    let submitter =
        SignupSubmitter::from_config(config).context("failed to initialize HTTP client")?;

    let mut form = SignupForm::new();
    form.set_email(email);
    form.set_name(name);

    if !json {
        let Palette { reset, dim, .. } = palette;
        println!("{dim}Submitting signup…{reset}");
    }

    let outcome = form
        .submit(&submitter)
        .await
        .context("signup form rejected the submission")?;
    debug!(
        status = %form.status(),
        settled = form.status().is_terminal(),
        "signup form finished"
    );

    if json {
        let text = serde_json::to_string_pretty(&outcome).context("failed to encode outcome")?;
        println!("{text}");
    } else {
        palette.outcome(&outcome);
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_config(config: &SignupConfig, palette: Palette) {
    palette.header("Signup configuration");
    palette.kv_line(
        "Endpoint",
        config.endpoint.as_deref().unwrap_or("(not configured)"),
    );
    palette.kv_line("Log level", &config.log_level);
    palette.kv_line("Endpoint variables", &format!("{ENV_API_URL}, {ENV_API_URL_LEGACY}"));
    println!();
}
