//! `argent`: command-line frontend for the Argent Bank session core.
//!
//! The durable backend is a JSON file under `ARGENT_STATE_DIR` (default
//! `~/.argent`); the ephemeral backend lives in process memory, so a login
//! without `--remember` lasts only as long as the command that made it.
//! Failures print one `error: ...` line to stderr and exit non-zero.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use argent::config::{ClientConfig, ConfigError};
use argent::forms::{FieldError, LoginForm, ProfileForm};
use argent::gateway::GatewayError;
use argent::gateway::http::HttpGateway;
use argent::guard::{self, Access, PROFILE_PATH};
use argent::persistence::Backends;
use argent::pipeline::{AuthFailure, AuthPipeline};
use argent::storage::{FileStore, MemoryStore};

const DURABLE_FILE: &str = "local.json";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Auth(#[from] AuthFailure),
    #[error("{}", join_field_errors(.0))]
    Invalid(Vec<FieldError>),
    #[error("not signed in; run `argent login` first (would redirect to {0})")]
    NotSignedIn(&'static str),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Parser, Debug)]
#[command(name = "argent", about = "Argent Bank account session CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long, env = "ARGENT_EMAIL")]
        email: String,
        #[arg(long, env = "ARGENT_PASSWORD", hide_env_values = true)]
        password: String,
        /// Keep the session after this command exits.
        #[arg(long)]
        remember: bool,
    },
    /// Show session state and the cached profile.
    Status,
    /// Fetch and show the signed-in profile.
    Profile,
    /// Change the first and last name on the profile.
    Rename {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
    },
    /// Sign out and forget the remembered credential.
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// One line for the terminal, built from `Display` only.
fn render_error(e: &CliError) -> String {
    format!("error: {e}")
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let durable = FileStore::new(config.state_dir.join(DURABLE_FILE));
    tracing::debug!(path = %durable.path().display(), "durable store");

    let gateway = HttpGateway::new(config.gateway)?;
    let pipeline = AuthPipeline::start(gateway, Backends::new(durable, MemoryStore::new()));

    match cli.command {
        Command::Login { email, password, remember } => {
            run_login(&pipeline, LoginForm { email, password, remember_me: remember }).await
        }
        Command::Status => {
            run_status(&pipeline);
            Ok(())
        }
        Command::Profile => run_profile(&pipeline).await,
        Command::Rename { first, last } => run_rename(&pipeline, ProfileForm { first_name: first, last_name: last }).await,
        Command::Logout => {
            pipeline.logout().await;
            println!("Signed out.");
            Ok(())
        }
    }
}

async fn run_login(pipeline: &AuthPipeline<HttpGateway>, form: LoginForm) -> Result<(), CliError> {
    if let Some(path) = guard::landing_for(&pipeline.session()) {
        println!("Already signed in; see `argent profile` ({path}).");
        return Ok(());
    }
    form.validate().map_err(CliError::Invalid)?;

    pipeline
        .login(form.email.trim(), &form.password, form.remember_me)
        .await?;

    match pipeline.fetch_profile().await {
        Ok(profile) => println!("Welcome back\n{}", profile.display_name()),
        Err(e) => {
            tracing::warn!(error = %e, "signed in but profile unavailable");
            println!("Signed in.");
        }
    }
    if !form.remember_me {
        println!("(not remembered: this session ends when the command exits)");
    }
    Ok(())
}

fn run_status(pipeline: &AuthPipeline<HttpGateway>) {
    let session = pipeline.session();
    println!("session: {}", session.phase());
    let access = match guard::decide(&session) {
        Access::Allow => "allow".to_owned(),
        Access::Redirect(path) => format!("redirect to {path}"),
    };
    println!("{PROFILE_PATH}: {access}");
    match pipeline.profile() {
        Some(profile) => println!("cached profile: {}", profile.display_name()),
        None => println!("cached profile: none"),
    }
}

async fn run_profile(pipeline: &AuthPipeline<HttpGateway>) -> Result<(), CliError> {
    require_session(pipeline)?;
    match pipeline.fetch_profile().await {
        Ok(profile) => {
            println!("Welcome back\n{}", profile.display_name());
            Ok(())
        }
        Err(e) => {
            if let Some(stale) = pipeline.profile() {
                println!("Welcome back\n{} (cached)", stale.display_name());
            }
            Err(e.into())
        }
    }
}

async fn run_rename(pipeline: &AuthPipeline<HttpGateway>, form: ProfileForm) -> Result<(), CliError> {
    require_session(pipeline)?;
    let profile = form.validate().map_err(CliError::Invalid)?;
    let saved = pipeline.update_profile(profile).await?;
    println!("Saved: {}", saved.display_name());
    Ok(())
}

fn require_session(pipeline: &AuthPipeline<HttpGateway>) -> Result<(), CliError> {
    match guard::decide(&pipeline.session()) {
        Access::Allow => Ok(()),
        Access::Redirect(path) => Err(CliError::NotSignedIn(path)),
    }
}
