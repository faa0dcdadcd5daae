//! myquota - assign, remove and list organization resource quotas

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod quota;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    init_logging(opts.debug);

    match run(cli.command, &opts).await {
        Ok(()) => {}
        Err(err) if err.is_recoverable() => println!("{}", err),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Warnings by default, everything from this crate in debug mode.
/// `RUST_LOG` still applies on top.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[quota] {} {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .init();
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Assign(args) => {
            let ctx = CommandContext::new(opts)?;
            cli::assign::run(&ctx, &args).await
        }
        Commands::Remove(args) => {
            let ctx = CommandContext::new(opts)?;
            cli::remove::run(&ctx, &args).await
        }
        Commands::List(args) => {
            let ctx = CommandContext::new(opts)?;
            cli::list::run(&ctx, &args).await
        }
        Commands::Completion { shell } => {
            cli::completions::print(shell);
            Ok(())
        }
    }
}
