//! Account approval and removal commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_core::error::AppError;
use dormhub_core::types::AccountId;
use dormhub_entity::account::{Account, AccountStatus};

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List all accounts
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<String>,
    },
    /// List accounts awaiting approval
    Pending,
    /// Approve a pending account
    Approve {
        /// Account ID
        id: AccountId,
    },
    /// Suspend an account
    Suspend {
        /// Account ID
        id: AccountId,
    },
    /// Reject a pending registration
    Reject {
        /// Account ID
        id: AccountId,
    },
    /// Delete an account
    Delete {
        /// Account ID
        id: AccountId,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Account display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct AccountRow {
    /// Account ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Registered
    registered: String,
}

impl From<&Account> for AccountRow {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.display_name(),
            email: a.email.clone(),
            role: a.role.clone(),
            status: a.status.to_string(),
            registered: output::or_dash(a.created_at.map(|t| t.format("%Y-%m-%d"))),
        }
    }
}

pub(crate) fn rows(accounts: &[Account]) -> Vec<AccountRow> {
    accounts.iter().map(AccountRow::from).collect()
}

fn require_manage(ctx: &AppContext, id: AccountId) -> Result<(), AppError> {
    if ctx.access().resolver().can_manage_account(id) {
        Ok(())
    } else {
        Err(AppError::authorization(format!(
            "Your account is not allowed to manage account {}",
            id
        )))
    }
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let accounts = &ctx.services.accounts;

    let (id, status) = match &args.command {
        AccountCommand::List { role } => {
            if !ctx.access().is_super_admin_or_higher() {
                return Err(AppError::authorization("Your account is not allowed to list accounts"));
            }
            let mut all = accounts.list().await?;
            if let Some(role) = role {
                all.retain(|a| &a.role == role);
            }
            output::print_list(&rows(&all), format);
            return Ok(());
        }
        AccountCommand::Pending => {
            if !ctx.access().is_super_admin_or_higher() {
                return Err(AppError::authorization("Your account is not allowed to list accounts"));
            }
            output::print_list(&rows(&accounts.pending().await?), format);
            return Ok(());
        }
        AccountCommand::Delete { id, force } => {
            require_manage(ctx, *id)?;
            if !force && !super::confirm(&format!("Delete account {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }
            accounts.delete(*id).await?;
            output::print_success(&format!("Account {} deleted", id));
            return Ok(());
        }
        AccountCommand::Approve { id } => (*id, AccountStatus::Active),
        AccountCommand::Suspend { id } => (*id, AccountStatus::Suspended),
        AccountCommand::Reject { id } => (*id, AccountStatus::Rejected),
    };

    require_manage(ctx, id)?;
    let account = accounts.update_status(id, status).await?;
    output::print_success(&format!(
        "Account '{}' is now {}",
        account.email, account.status
    ));

    Ok(())
}
