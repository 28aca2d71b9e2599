//! Query the dashboard access table from the command line.
//!
//! ```sh
//! chapterhouse-access check --role active --chair historian /dashboard/historian/archive
//! chapterhouse-access pages --role treasurer
//! chapterhouse-access roles
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use chapterhouse::middleware::permissions::RouteAccessPolicy;
use chapterhouse::models::role::Role;

#[derive(Parser, Debug)]
#[command(
    name = "chapterhouse-access",
    version,
    about = "Inspect which dashboard pages a role and chair may view"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide whether a member may view one page. Exits 1 when denied.
    Check {
        #[arg(short, long)]
        role: String,
        #[arg(short, long)]
        chair: Option<String>,
        page: String,
    },
    /// List every known dashboard page the member may view.
    Pages {
        #[arg(short, long)]
        role: String,
        #[arg(short, long)]
        chair: Option<String>,
    },
    /// List roles with their labels and style tokens.
    Roles,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(cli.command, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Execute one command, writing its report to `out`. Returns `false` only
/// when `check` denies access.
fn run(command: Command, out: &mut impl Write) -> io::Result<bool> {
    let policy = RouteAccessPolicy::dashboard();

    match command {
        Command::Check { role, chair, page } => {
            if role.parse::<Role>().is_err() {
                tracing::warn!("{role:?} is not a known role; treating it as unprivileged");
            }
            let allowed = policy.can_access_page(&role, chair.as_deref(), &page);
            writeln!(out, "{}", if allowed { "allowed" } else { "denied" })?;
            Ok(allowed)
        }
        Command::Pages { role, chair } => {
            for page in policy.accessible_pages(&role, chair.as_deref()) {
                writeln!(out, "{page}")?;
            }
            Ok(true)
        }
        Command::Roles => {
            for role in Role::ALL {
                writeln!(
                    out,
                    "{:<14} {:<14} {}",
                    role.as_str(),
                    role.label(),
                    role.style()
                )?;
            }
            Ok(true)
        }
    }
}
