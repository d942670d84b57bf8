//! # CLI Layer
//!
//! This module is **one possible UI client** for carpark. It is the only place
//! that knows about stdin, stdout and stderr.
//!
//! ## Flow
//!
//! 1. Parse process arguments, load [`CarparkConfig`], install logging.
//! 2. Build a `CarparkApi<FileStore>` from the configured data file.
//! 3. Read one line at a time. Each line goes through a [`CommandBox`], which
//!    records it in the command history before it runs, then is parsed with
//!    clap into a [`ReplCommand`] and dispatched to the API.
//! 4. Render the returned `CmdResult`.
//!
//! Errors from a single line are printed and the prompt continues. Only
//! start-up failures end the process with a non-zero status.

use super::print::{print_carparks, print_details, print_error, print_history, print_messages};
use super::setup::{split_words, Cli, ReplCommand, ReplLine};
use carpark::api::CarparkApi;
use carpark::commands::CmdResult;
use carpark::config::CarparkConfig;
use carpark::error::Result;
use carpark::input::CommandBox;
use carpark::store::fs::FileStore;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "carpark> ";

enum Flow {
    Continue,
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CarparkConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    let data_file = cli.data_file.clone().unwrap_or_else(|| config.data_file());
    tracing::debug!(path = %data_file.display(), "using data file");
    let mut api = CarparkApi::load(FileStore::new(data_file));

    let interactive = io::stdin().is_terminal();
    let mut input = CommandBox::new(api.history());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        input.set_text(line);
        let submitted = input.submit(api.history_mut());
        match execute(&mut api, &submitted) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => print_error(&err),
        }
    }
    Ok(())
}

fn init_tracing(config: &CarparkConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("carpark=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(api: &mut CarparkApi<FileStore>, line: &str) -> Result<Flow> {
    let words = split_words(line)?;
    let command = match ReplLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    print!("{}", err)
                }
                _ => eprint!("{}", err),
            }
            return Ok(Flow::Continue);
        }
    };

    match command {
        ReplCommand::Add(args) => {
            let carpark = args.into_carpark()?;
            let result = api.add_carpark(carpark)?;
            print_messages(&result.messages);
        }
        ReplCommand::Delete { index } => {
            let result = api.delete_carpark(index)?;
            print_messages(&result.messages);
        }
        ReplCommand::Edit(args) => {
            let result = api.edit_carpark(args.index, &args.to_edit())?;
            print_messages(&result.messages);
        }
        ReplCommand::Find { keywords } => print_listing(&api.find(keywords)?),
        ReplCommand::Filter(args) => print_listing(&api.filter(args.to_criteria())?),
        ReplCommand::List => print_listing(&api.list()?),
        ReplCommand::Select { index } => {
            let result = api.select(index)?;
            print_messages(&result.messages);
            if let Some(selected) = result.affected.first() {
                print_details(selected);
            }
        }
        ReplCommand::Undo => print_listing(&api.undo()?),
        ReplCommand::Redo => print_listing(&api.redo()?),
        ReplCommand::Clear => {
            let result = api.clear()?;
            print_messages(&result.messages);
        }
        ReplCommand::History => {
            let result = api.show_history()?;
            print_messages(&result.messages);
            print_history(&result);
        }
        ReplCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn print_listing(result: &CmdResult) {
    print_messages(&result.messages);
    print_carparks(&result.listed, result.highlight);
}
