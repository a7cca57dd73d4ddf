//! CLI command implementations.

mod check;
mod common;
mod dry_run;
mod generate;

pub use check::{CheckArgs, run_check};
pub use common::ProjectArgs;
pub use dry_run::DryRunDiff;
pub use generate::{GenerateArgs, run_generate};
