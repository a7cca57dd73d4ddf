//! Check command: fails when generated files do not match the name lists.

use crate::commands::ProjectArgs;
use crate::commands::common::plan_with_report;
use crate::core::CliError;
use crate::utils::ui;
use clap::Parser;

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let root = args.project.root();
    let generator = args.project.generator()?;

    ui::print_header();
    let plan = plan_with_report(&generator)?;

    let stale: Vec<_> = plan.changed().collect();
    if stale.is_empty() {
        ui::print_up_to_date();
        return Ok(());
    }

    for file in &stale {
        ui::print_stale(ui::relative(&root, &file.path));
    }

    Err(CliError::Stale { count: stale.len() })
}
