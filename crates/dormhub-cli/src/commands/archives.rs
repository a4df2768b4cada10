//! Checkout archive commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_auth::guard::Guard;
use dormhub_core::error::AppError;
use dormhub_core::types::ArchiveId;
use dormhub_entity::archive::ArchiveRecord;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for archive commands
#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// Archive subcommand
    #[command(subcommand)]
    pub command: ArchiveCommand,
}

/// Archive subcommands
#[derive(Debug, Subcommand)]
pub enum ArchiveCommand {
    /// List archived tenants
    List,
    /// Show one archive record
    Show {
        /// Archive ID
        id: ArchiveId,
    },
}

/// Archive display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct ArchiveRow {
    /// Archive ID
    id: String,
    /// Tenant
    tenant: String,
    /// Room
    room: String,
    /// Checked out
    checked_out: String,
    /// Reason
    reason: String,
}

impl From<&ArchiveRecord> for ArchiveRow {
    fn from(a: &ArchiveRecord) -> Self {
        Self {
            id: a.id.to_string(),
            tenant: a.tenant_name.clone(),
            room: output::or_dash(a.room_number.as_deref()),
            checked_out: a.check_out_date.to_string(),
            reason: output::or_dash(a.reason.as_deref()),
        }
    }
}

pub(crate) fn rows(records: &[ArchiveRecord]) -> Vec<ArchiveRow> {
    records.iter().map(ArchiveRow::from).collect()
}

/// Execute archive commands
pub async fn execute(
    args: &ArchiveArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    ctx.require(&Guard::new().permission("archives", "read"), "view archives")?;
    let archives = &ctx.services.archives;

    match &args.command {
        ArchiveCommand::List => {
            output::print_list(&rows(&archives.list().await?), format);
        }
        ArchiveCommand::Show { id } => {
            let record = archives.get(*id).await?;
            output::print_item(
                &record,
                &[
                    ("Tenant", record.tenant_name.clone()),
                    ("Tenant ID", record.tenant_id.to_string()),
                    ("Room", output::or_dash(record.room_number.as_deref())),
                    ("Checked out", record.check_out_date.to_string()),
                    ("Reason", output::or_dash(record.reason.as_deref())),
                ],
                format,
            );
        }
    }

    Ok(())
}
