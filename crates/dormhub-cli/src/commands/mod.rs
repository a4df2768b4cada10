//! CLI command definitions and dispatch.

pub mod accounts;
pub mod archives;
pub mod dashboard;
pub mod navigation;
pub mod notifications;
pub mod payments;
pub mod rooms;
pub mod route;
pub mod session;
pub mod tenants;

use clap::{Args, Parser, Subcommand};

use dormhub_core::config::AppConfig;
use dormhub_core::error::AppError;

use crate::context::{AppContext, Credentials};
use crate::output::OutputFormat;

/// DormHub: dormitory and tenant management
#[derive(Debug, Parser)]
#[command(name = "dormhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "DORMHUB_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Backend base URL, overriding the configuration
    #[arg(long, env = "DORMHUB_API_URL")]
    pub api_url: Option<String>,

    /// Credentials
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Sign-in options shared by every command
#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Account email
    #[arg(long, env = "DORMHUB_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password (will prompt if not provided)
    #[arg(long, env = "DORMHUB_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Existing bearer token, validated before use
    #[arg(long, env = "DORMHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

impl From<&CredentialArgs> for Credentials {
    fn from(args: &CredentialArgs) -> Self {
        Self {
            email: args.email.clone(),
            password: args.password.clone(),
            token: args.token.clone(),
        }
    }
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and print the session
    Login(session::LoginArgs),
    /// Show the current user, roles, and grants
    Whoami,
    /// Register a new account
    Register(session::RegisterArgs),
    /// Show the dashboard for your role
    Dashboard(dashboard::DashboardArgs),
    /// Room inventory
    Rooms(rooms::RoomArgs),
    /// Tenant records and checkout
    Tenants(tenants::TenantArgs),
    /// Billing and payments
    Payments(payments::PaymentArgs),
    /// Checkout archives
    Archives(archives::ArchiveArgs),
    /// Account approval and removal
    Accounts(accounts::AccountArgs),
    /// Navigation control for Admin accounts
    Navigation(navigation::NavigationArgs),
    /// In-app notifications
    Notifications(notifications::NotificationArgs),
    /// Resolve a path against the hash router
    Route(route::RouteArgs),
}

impl Cli {
    /// Apply command-line overrides to the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let ctx = AppContext::new(config)?;
        let credentials = Credentials::from(&self.credentials);

        match &self.command {
            Commands::Route(args) => return route::execute(args, self.format),
            Commands::Register(args) => {
                return session::register(args, &credentials, &ctx, self.format).await;
            }
            _ => {}
        }

        ctx.sign_in(&credentials).await?;

        match &self.command {
            Commands::Login(args) => session::login(args, &ctx, self.format),
            Commands::Whoami => session::whoami(&ctx, self.format),
            Commands::Dashboard(args) => dashboard::execute(args, &ctx, self.format).await,
            Commands::Rooms(args) => rooms::execute(args, &ctx, self.format).await,
            Commands::Tenants(args) => tenants::execute(args, &ctx, self.format).await,
            Commands::Payments(args) => payments::execute(args, &ctx, self.format).await,
            Commands::Archives(args) => archives::execute(args, &ctx, self.format).await,
            Commands::Accounts(args) => accounts::execute(args, &ctx, self.format).await,
            Commands::Navigation(args) => navigation::execute(args, &ctx, self.format).await,
            Commands::Notifications(args) => notifications::execute(args, &ctx, self.format).await,
            Commands::Route(_) | Commands::Register(_) => Ok(()),
        }
    }
}

/// Helper: map a dialoguer failure
pub(crate) fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}

/// Helper: ask a yes/no question, defaulting to no
pub(crate) fn confirm(prompt: &str) -> Result<bool, AppError> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}
