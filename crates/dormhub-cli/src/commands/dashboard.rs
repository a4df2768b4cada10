//! Dashboard rendering, one-shot or as an interactive menu.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dormhub_client::{DashboardKind, DashboardSnapshot, ErrorNotice, Section, Widget};
use dormhub_core::error::AppError;

use super::{accounts, archives, input_error, navigation, notifications, payments, rooms, tenants};
use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the dashboard command
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Pick sections from a menu instead of printing everything
    #[arg(short, long)]
    pub interactive: bool,
}

/// Overview figure row
#[derive(Debug, Serialize, Tabled)]
struct StatRow {
    /// Label
    metric: String,
    /// Value
    value: String,
}

/// Execute the dashboard command
pub async fn execute(
    args: &DashboardArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    if args.interactive {
        return interactive(ctx, format).await;
    }

    let snapshot = ctx.dashboard().load(&ctx.access()).await?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&snapshot).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
        OutputFormat::Table => render_snapshot(&snapshot, format),
    }

    Ok(())
}

fn render_snapshot(snapshot: &DashboardSnapshot, format: OutputFormat) {
    println!("{}", snapshot.kind.title());
    for panel in &snapshot.panels {
        output::print_heading(panel.section.title());
        match &panel.content {
            Ok(widget) => render_widget(widget, format),
            Err(notice) => output::print_notice(notice),
        }
    }
}

/// Print one widget with the matching table layout
pub(crate) fn render_widget(widget: &Widget, format: OutputFormat) {
    match widget {
        Widget::Overview(stats) => {
            let rows: Vec<StatRow> = stats
                .iter()
                .map(|s| StatRow {
                    metric: s.label.clone(),
                    value: s.value.clone(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        Widget::Rooms(v) => output::print_list(&rooms::rows(v), format),
        Widget::Tenants(v) => output::print_list(&tenants::rows(v), format),
        Widget::Payments(v) => output::print_list(&payments::rows(v), format),
        Widget::Archives(v) => output::print_list(&archives::rows(v), format),
        Widget::Accounts(v) => output::print_list(&accounts::rows(v), format),
        Widget::Navigation(v) => output::print_list(&navigation::rows(v), format),
        Widget::Notifications(v) => output::print_list(&notifications::rows(v), format),
    }
}

async fn interactive(ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let access = ctx.access();
    let kind = DashboardKind::for_session(&access)
        .ok_or_else(|| AppError::authorization("No dashboard is available for this account"))?;
    let sections: Vec<Section> = kind.visible_sections(&access);
    if sections.is_empty() {
        output::print_warning("No sections are enabled for your account.");
        return Ok(());
    }

    let mut labels: Vec<&str> = sections.iter().map(|s| s.title()).collect();
    labels.push("Quit");
    let dashboard = ctx.dashboard();

    loop {
        let choice = dialoguer::Select::new()
            .with_prompt(kind.title())
            .items(&labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let Some(section) = sections.get(choice).copied() else {
            break;
        };

        output::print_heading(section.title());
        match dashboard.load_section(kind, section).await {
            Ok(widget) => render_widget(&widget, format),
            Err(e) if e.is_unauthorized() => return Err(e),
            Err(e) => output::print_notice(&ErrorNotice::from(&e)),
        }
    }

    Ok(())
}
