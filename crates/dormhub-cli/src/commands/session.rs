//! Login, identity, and registration commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dormhub_auth::session::StorageKey;
use dormhub_client::DashboardKind;
use dormhub_client::Route;
use dormhub_core::error::AppError;
use dormhub_entity::account::RegisterRequest;

use super::input_error;
use crate::context::{AppContext, Credentials};
use crate::output::{self, OutputFormat};

/// Arguments for login
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Print the bearer token so it can be exported as DORMHUB_TOKEN
    #[arg(long)]
    pub print_token: bool,
}

/// Arguments for registration
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Given name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Family name
    #[arg(long)]
    pub last_name: Option<String>,
    /// Requested role (defaults to Tenant on the backend)
    #[arg(long)]
    pub role: Option<String>,
}

/// Grant display row
#[derive(Debug, Serialize, Tabled)]
struct GrantRow {
    /// Resource
    resource: String,
    /// Action
    action: String,
}

/// Identity summary
#[derive(Debug, Serialize)]
struct WhoAmI<'a> {
    id: String,
    name: String,
    email: &'a str,
    role: &'a str,
    status: String,
    dashboard: Option<DashboardKind>,
    home: Option<Route>,
    permissions: Vec<String>,
}

/// Log in and print the session
pub fn login(args: &LoginArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let session = ctx.session();
    let name = session
        .user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_default();
    output::print_success(&format!("Logged in as {}", name));

    if args.print_token {
        if let Some(token) = ctx.auth.storage().get(StorageKey::Token) {
            println!("{}", token);
        }
    }

    whoami(ctx, format)
}

/// Show the current user, roles, and grants
pub fn whoami(ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let session = ctx.session();
    let user = session
        .user
        .as_ref()
        .ok_or_else(|| AppError::session("Not logged in"))?;
    let kind = DashboardKind::for_session(&ctx.access());

    let grants: Vec<GrantRow> = session
        .permissions
        .iter()
        .flatten()
        .map(|p| GrantRow {
            resource: p.resource.clone(),
            action: p.action.clone(),
        })
        .collect();

    let summary = WhoAmI {
        id: user.id.to_string(),
        name: user.display_name(),
        email: &user.email,
        role: &user.role,
        status: user.status.to_string(),
        dashboard: kind,
        home: kind.map(Route::home),
        permissions: grants
            .iter()
            .map(|g| format!("{}:{}", g.resource, g.action))
            .collect(),
    };

    output::print_item(
        &summary,
        &[
            ("ID", summary.id.clone()),
            ("Name", summary.name.clone()),
            ("Email", summary.email.to_string()),
            ("Role", summary.role.to_string()),
            ("Status", summary.status.clone()),
            ("Dashboard", output::or_dash(kind)),
            ("Home", output::or_dash(summary.home.map(|r| r.hash()))),
        ],
        format,
    );

    if format == OutputFormat::Table {
        output::print_heading("Permissions");
        output::print_list(&grants, format);
    }

    Ok(())
}

/// Register a new account; it stays pending until approved
pub async fn register(
    args: &RegisterArgs,
    credentials: &Credentials,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let prompt = |label: &str, value: &Option<String>| -> Result<String, AppError> {
        match value {
            Some(v) => Ok(v.clone()),
            None => dialoguer::Input::new()
                .with_prompt(label)
                .interact_text()
                .map_err(input_error),
        }
    };

    let first_name = prompt("First name", &args.first_name)?;
    let last_name = prompt("Last name", &args.last_name)?;
    let email = prompt("Email", &credentials.email)?;
    let password = match &credentials.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(input_error)?,
    };

    let request = RegisterRequest {
        first_name,
        last_name,
        email,
        confirm_password: password.clone(),
        password,
        role: args.role.clone(),
    };

    let account = ctx.auth.register(&request).await?;

    output::print_success(&format!(
        "Account '{}' registered (id: {}, status: {})",
        account.email, account.id, account.status
    ));
    if !account.status.can_login() {
        output::print_warning("An administrator must approve the account before you can log in.");
    }
    if format == OutputFormat::Json {
        output::print_item(&account, &[], format);
    }

    Ok(())
}
