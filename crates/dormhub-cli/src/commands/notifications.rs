//! Notification commands, including a live watch.

use std::time::Duration;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use dormhub_client::NotificationPoller;
use dormhub_core::error::AppError;
use dormhub_core::types::NotificationId;
use dormhub_entity::notification::Notification;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List notifications
    List {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Print the unread count
    Unread,
    /// Mark one notification as read
    Read {
        /// Notification ID
        id: NotificationId,
    },
    /// Mark every notification as read
    ReadAll,
    /// Poll for notifications until interrupted
    Watch {
        /// Poll interval in seconds (defaults to the configured interval)
        #[arg(long)]
        interval: Option<u64>,
    },
}

/// Notification display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct NotificationRow {
    /// Notification ID
    id: String,
    /// Read marker
    read: String,
    /// Title
    title: String,
    /// Message
    message: String,
    /// Created at
    created_at: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            read: if n.is_read { "✓" } else { "•" }.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            created_at: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub(crate) fn rows(notifications: &[Notification]) -> Vec<NotificationRow> {
    notifications.iter().map(NotificationRow::from).collect()
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let notifications = &ctx.services.notifications;

    match &args.command {
        NotificationCommand::List { unread } => {
            let mut all = notifications.list().await?;
            if *unread {
                all.retain(|n| !n.is_read);
            }
            output::print_list(&rows(&all), format);
        }
        NotificationCommand::Unread => {
            println!("Unread notifications: {}", notifications.unread_count().await?);
        }
        NotificationCommand::Read { id } => {
            notifications.mark_read(*id).await?;
            output::print_success(&format!("Notification {} marked as read", id));
        }
        NotificationCommand::ReadAll => {
            notifications.mark_all_read().await?;
            output::print_success("All notifications marked as read");
        }
        NotificationCommand::Watch { interval } => {
            let seconds = interval.unwrap_or(ctx.config.polling.notification_interval_seconds);
            watch(ctx, Duration::from_secs(seconds.max(1)), format).await?;
        }
    }

    Ok(())
}

async fn watch(ctx: &AppContext, interval: Duration, format: OutputFormat) -> Result<(), AppError> {
    let poller = NotificationPoller::spawn(ctx.services.notifications.clone(), interval);
    let mut updates = poller.subscribe();
    let mut redirects = ctx.api.redirects();
    let mut last_unread = None;

    output::print_success(&format!(
        "Watching notifications every {}s (Ctrl+C to stop)",
        interval.as_secs()
    ));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                poller.invalidate();
                break;
            }
            changed = redirects.changed() => {
                if changed.is_ok() && redirects.borrow_and_update().is_some() {
                    return Err(AppError::authentication("Session expired. Please log in again."));
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let Some(snapshot) = updates.borrow_and_update().clone() else {
                    continue;
                };
                if last_unread != Some(snapshot.unread) {
                    output::print_heading(&format!(
                        "{} unread ({})",
                        snapshot.unread,
                        snapshot.fetched_at.format("%H:%M:%S")
                    ));
                    output::print_list(&rows(&snapshot.notifications), format);
                    last_unread = Some(snapshot.unread);
                }
            }
        }
    }

    Ok(())
}
