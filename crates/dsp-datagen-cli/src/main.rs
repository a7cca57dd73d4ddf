use clap::{ArgAction, Parser, Subcommand};
use dsp_datagen_cli::commands::{CheckArgs, GenerateArgs, run_check, run_generate};
use dsp_datagen_cli::utils::logging;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "dsp-datagen")]
#[command(about = "Regenerate item and recipe enums and locale tables from name lists")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the enum regions and locale tables
    Generate(GenerateArgs),

    /// Fail if any generated file is out of date
    Check(CheckArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .wrap_lines(false)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
    };

    result.map_err(miette::Report::new)
}
