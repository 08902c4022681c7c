use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use dotsync::cli::{Cli, Commands, usage};
use dotsync::{DotsyncContext, commands, logging, output};
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        output::error(&format!("Error: {e:#}"));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    output::set_verbosity(output::verbosity_from_flags(cli.quiet, cli.verbose));

    let Some(command) = cli.command else {
        print!("{}", usage());
        return Ok(());
    };

    match command {
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
        Commands::Install => {
            let ctx = DotsyncContext::new(cli.home, cli.snapshot_dir, cli.config)?;
            commands::install::execute(&ctx)?;
        }
        Commands::Save { yes } => {
            let ctx = DotsyncContext::new(cli.home, cli.snapshot_dir, cli.config)?;
            commands::save::execute(&ctx, yes)?;
        }
    }

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(g, cmd, name, &mut io::stdout());
}
