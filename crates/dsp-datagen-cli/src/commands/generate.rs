//! Generate command implementation.

use crate::commands::common::plan_with_report;
use crate::commands::{DryRunDiff, ProjectArgs};
use crate::core::CliError;
use crate::utils::ui;
use clap::Parser;

/// Arguments for the generate command.
#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Dry run - show what would change without making changes.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let root = args.project.root();
    let generator = args.project.generator()?;

    ui::print_header();
    let plan = plan_with_report(&generator)?;

    if args.dry_run {
        let mut changed = 0;
        for file in plan.changed() {
            ui::print_would_update(ui::relative(&root, &file.path));
            DryRunDiff::from(file).print();
            changed += 1;
        }
        ui::print_dry_run_summary(changed);
        return Ok(());
    }

    let summary = plan.apply()?;
    for path in &summary.written {
        ui::print_updated(ui::relative(&root, path));
    }
    for path in &summary.unchanged {
        ui::print_unchanged(ui::relative(&root, path));
    }
    ui::print_written_summary(summary.written.len(), summary.unchanged.len());

    Ok(())
}
