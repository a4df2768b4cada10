//! Navigation control commands.

use std::collections::BTreeSet;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_core::error::AppError;
use dormhub_core::types::{AccountId, NavigationItemId};
use dormhub_entity::permission::NavigationItem;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for navigation commands
#[derive(Debug, Args)]
pub struct NavigationArgs {
    /// Navigation subcommand
    #[command(subcommand)]
    pub command: NavigationCommand,
}

/// Navigation subcommands
#[derive(Debug, Subcommand)]
pub enum NavigationCommand {
    /// List the navigation catalog
    Items,
    /// Show the sections assigned to an Admin account
    Show {
        /// Account ID
        account: AccountId,
    },
    /// Add sections to an Admin account
    Grant {
        /// Account ID
        account: AccountId,
        /// Navigation item IDs
        #[arg(required = true)]
        items: Vec<NavigationItemId>,
    },
    /// Remove sections from an Admin account
    Revoke {
        /// Account ID
        account: AccountId,
        /// Navigation item IDs
        #[arg(required = true)]
        items: Vec<NavigationItemId>,
    },
}

/// Navigation item display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct NavigationRow {
    /// Item ID
    id: String,
    /// Name
    name: String,
    /// Description
    description: String,
    /// Assigned to the account shown
    assigned: String,
}

impl NavigationRow {
    fn new(item: &NavigationItem, assigned: Option<bool>) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: output::or_dash(item.description.as_deref()),
            assigned: match assigned {
                Some(true) => "✓".to_string(),
                Some(false) => "✗".to_string(),
                None => "-".to_string(),
            },
        }
    }
}

pub(crate) fn rows(items: &[NavigationItem]) -> Vec<NavigationRow> {
    items.iter().map(|i| NavigationRow::new(i, None)).collect()
}

/// Merge `changes` into `current`, adding or removing them.
fn apply(
    current: &[NavigationItemId],
    changes: &[NavigationItemId],
    grant: bool,
) -> Vec<NavigationItemId> {
    let mut set: BTreeSet<NavigationItemId> = current.iter().copied().collect();
    for id in changes {
        if grant {
            set.insert(*id);
        } else {
            set.remove(id);
        }
    }
    set.into_iter().collect()
}

/// Execute navigation commands
pub async fn execute(
    args: &NavigationArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    if !ctx.access().is_super_admin_or_higher() {
        return Err(AppError::authorization(
            "Only SuperAdmin and HeadAdmin accounts can use navigation control",
        ));
    }
    let navigation = &ctx.services.navigation;

    match &args.command {
        NavigationCommand::Items => {
            output::print_list(&rows(&navigation.items().await?), format);
        }
        NavigationCommand::Show { account } => {
            let (items, assigned) = tokio::try_join!(
                navigation.items(),
                navigation.admin_permissions(*account)
            )?;
            let rows: Vec<NavigationRow> = items
                .iter()
                .map(|i| NavigationRow::new(i, Some(assigned.navigation_item_ids.contains(&i.id))))
                .collect();
            output::print_list(&rows, format);
        }
        NavigationCommand::Grant { account, items } | NavigationCommand::Revoke { account, items } => {
            let grant = matches!(args.command, NavigationCommand::Grant { .. });
            let current = navigation.admin_permissions(*account).await?;
            let next = apply(&current.navigation_item_ids, items, grant);
            let updated = navigation.set_admin_permissions(*account, &next).await?;
            output::print_success(&format!(
                "Account {} now has {} navigation section(s)",
                updated.account_id,
                updated.navigation_item_ids.len()
            ));
        }
    }

    Ok(())
}
