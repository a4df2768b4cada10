//! Billing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_auth::guard::Guard;
use dormhub_core::error::AppError;
use dormhub_core::types::{PaymentId, TenantId};
use dormhub_entity::payment::{self, Payment, PaymentInput, PaymentStatus};

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for payment commands
#[derive(Debug, Args)]
pub struct PaymentArgs {
    /// Payment subcommand
    #[command(subcommand)]
    pub command: PaymentCommand,
}

/// Payment subcommands
#[derive(Debug, Subcommand)]
pub enum PaymentCommand {
    /// List payments visible to you
    List,
    /// List payments of one tenant
    Tenant {
        /// Tenant ID
        id: TenantId,
    },
    /// Record a payment
    Record {
        /// Tenant ID
        #[arg(long)]
        tenant: TenantId,
        /// Amount paid
        #[arg(long)]
        amount: f64,
        /// Payment method
        #[arg(long)]
        method: Option<String>,
        /// Billing period, e.g. 2026-10
        #[arg(long)]
        period: Option<String>,
    },
    /// Change a payment's status
    Status {
        /// Payment ID
        id: PaymentId,
        /// New status: paid, pending, overdue
        #[arg(value_parser = parse_status)]
        status: PaymentStatus,
    },
}

fn parse_status(s: &str) -> Result<PaymentStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "paid" => Ok(PaymentStatus::Paid),
        "pending" => Ok(PaymentStatus::Pending),
        "overdue" => Ok(PaymentStatus::Overdue),
        _ => Err(format!("invalid status '{s}' (expected paid, pending, overdue)")),
    }
}

/// Payment display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct PaymentRow {
    /// Payment ID
    id: String,
    /// Tenant ID
    tenant: String,
    /// Amount
    amount: String,
    /// Method
    method: String,
    /// Period
    period: String,
    /// Status
    status: String,
    /// Paid at
    paid_at: String,
}

impl From<&Payment> for PaymentRow {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id.to_string(),
            tenant: p.tenant_id.to_string(),
            amount: format!("{:.2}", p.amount),
            method: output::or_dash(p.method.as_deref()),
            period: output::or_dash(p.period.as_deref()),
            status: p.status.to_string(),
            paid_at: output::or_dash(p.paid_at.map(|t| t.format("%Y-%m-%d %H:%M"))),
        }
    }
}

pub(crate) fn rows(payments: &[Payment]) -> Vec<PaymentRow> {
    payments.iter().map(PaymentRow::from).collect()
}

fn print_payments(payments: &[Payment], format: OutputFormat) {
    output::print_list(&rows(payments), format);
    if format == OutputFormat::Table && !payments.is_empty() {
        output::print_kv("Total paid", &format!("{:.2}", payment::total_paid(payments)));
    }
}

/// Execute payment commands
pub async fn execute(
    args: &PaymentArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let payments = &ctx.services.payments;

    match &args.command {
        PaymentCommand::List => {
            print_payments(&payments.list().await?, format);
        }
        PaymentCommand::Tenant { id } => {
            ctx.require(&Guard::new().permission("accounting", "read"), "view tenant payments")?;
            print_payments(&payments.for_tenant(*id).await?, format);
        }
        PaymentCommand::Record {
            tenant,
            amount,
            method,
            period,
        } => {
            ctx.require(&Guard::new().permission("accounting", "write"), "record payments")?;
            let input = PaymentInput {
                tenant_id: *tenant,
                amount: *amount,
                method: method.clone(),
                period: period.clone(),
            };
            let recorded = payments.record(&input).await?;
            output::print_success(&format!(
                "Payment {} of {:.2} recorded for tenant {}",
                recorded.id, recorded.amount, recorded.tenant_id
            ));
        }
        PaymentCommand::Status { id, status } => {
            ctx.require(&Guard::new().permission("accounting", "write"), "update payments")?;
            let updated = payments.update_status(*id, *status).await?;
            output::print_success(&format!("Payment {} is now {}", updated.id, updated.status));
        }
    }

    Ok(())
}
