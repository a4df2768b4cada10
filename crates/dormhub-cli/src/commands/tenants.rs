//! Tenant record and checkout commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_auth::guard::Guard;
use dormhub_core::error::AppError;
use dormhub_core::types::{RoomId, TenantId};
use dormhub_entity::archive::CheckoutRequest;
use dormhub_entity::tenant::{Tenant, TenantInput};

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for tenant commands
#[derive(Debug, Args)]
pub struct TenantArgs {
    /// Tenant subcommand
    #[command(subcommand)]
    pub command: TenantCommand,
}

/// Tenant subcommands
#[derive(Debug, Subcommand)]
pub enum TenantCommand {
    /// List all tenants
    List,
    /// Show one tenant
    Show {
        /// Tenant ID
        id: TenantId,
    },
    /// Add a tenant
    Create {
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Email
        #[arg(long)]
        email: String,
        /// Phone
        #[arg(long)]
        phone: Option<String>,
        /// Assigned room
        #[arg(long)]
        room: Option<RoomId>,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<NaiveDate>,
    },
    /// Remove a tenant record
    Delete {
        /// Tenant ID
        id: TenantId,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Check a tenant out and archive the record
    Checkout {
        /// Tenant ID
        id: TenantId,
        /// Check-out date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Reason for leaving
        #[arg(long)]
        reason: Option<String>,
    },
}

/// Tenant display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct TenantRow {
    /// Tenant ID
    id: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Room
    room: String,
    /// Check-in date
    check_in: String,
    /// Status
    status: String,
}

impl From<&Tenant> for TenantRow {
    fn from(t: &Tenant) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.full_name(),
            email: t.email.clone(),
            room: output::or_dash(t.room_id),
            check_in: output::or_dash(t.check_in_date),
            status: format!("{:?}", t.status),
        }
    }
}

pub(crate) fn rows(tenants: &[Tenant]) -> Vec<TenantRow> {
    tenants.iter().map(TenantRow::from).collect()
}

/// Execute tenant commands
pub async fn execute(
    args: &TenantArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tenants = &ctx.services.tenants;

    match &args.command {
        TenantCommand::List => {
            ctx.require(&Guard::new().permission("tenants", "read"), "view tenants")?;
            output::print_list(&rows(&tenants.list().await?), format);
        }
        TenantCommand::Show { id } => {
            ctx.require(&Guard::new().permission("tenants", "read"), "view tenants")?;
            let tenant = tenants.get(*id).await?;
            output::print_item(
                &tenant,
                &[
                    ("Name", tenant.full_name()),
                    ("Email", tenant.email.clone()),
                    ("Phone", output::or_dash(tenant.phone.as_deref())),
                    ("Room", output::or_dash(tenant.room_id)),
                    ("Check-in", output::or_dash(tenant.check_in_date)),
                    ("Status", format!("{:?}", tenant.status)),
                ],
                format,
            );
        }
        TenantCommand::Create {
            first_name,
            last_name,
            email,
            phone,
            room,
            check_in,
        } => {
            ctx.require(&Guard::new().permission("tenants", "write"), "add tenants")?;
            let input = TenantInput {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                room_id: *room,
                check_in_date: *check_in,
            };
            let tenant = tenants.create(&input).await?;
            output::print_success(&format!(
                "Tenant '{}' added (id: {})",
                tenant.full_name(),
                tenant.id
            ));
        }
        TenantCommand::Delete { id, force } => {
            ctx.require(&Guard::new().permission("tenants", "delete"), "remove tenants")?;
            if !force && !super::confirm(&format!("Remove tenant {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }
            tenants.delete(*id).await?;
            output::print_success(&format!("Tenant {} removed", id));
        }
        TenantCommand::Checkout { id, date, reason } => {
            ctx.require(&Guard::new().permission("archives", "write"), "check tenants out")?;
            let request = CheckoutRequest {
                check_out_date: *date,
                reason: reason.clone(),
            };
            let record = ctx.services.archives.checkout_tenant(*id, &request).await?;
            output::print_success(&format!(
                "{} checked out on {} (archive id: {})",
                record.tenant_name, record.check_out_date, record.id
            ));
        }
    }

    Ok(())
}
