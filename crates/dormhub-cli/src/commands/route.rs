//! Hash router inspection.

use clap::Args;
use serde::Serialize;

use dormhub_client::{Route, hash_redirect};
use dormhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for route resolution
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Request path or hash, e.g. /dashboard or #/login
    pub path: String,
}

#[derive(Debug, Serialize)]
struct Resolution {
    path: String,
    redirect: Option<String>,
    route: Option<Route>,
    requires_auth: Option<bool>,
}

/// Resolve a path against the hash router
pub fn execute(args: &RouteArgs, format: OutputFormat) -> Result<(), AppError> {
    let route = args.path.parse::<Route>().ok();
    let resolution = Resolution {
        path: args.path.clone(),
        redirect: hash_redirect(&args.path),
        route,
        requires_auth: route.map(|r| r.requires_auth()),
    };

    output::print_item(
        &resolution,
        &[
            ("Path", resolution.path.clone()),
            ("Redirect", output::or_dash(resolution.redirect.as_deref())),
            ("Route", output::or_dash(route.map(|r| r.hash()))),
            ("Requires login", output::or_dash(resolution.requires_auth)),
        ],
        format,
    );

    Ok(())
}
