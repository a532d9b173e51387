use colored::*;
use gomr::commands::{self, CmdMessage, MessageLevel};
use gomr::error::Result;
use gomr::tool::GoTool;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let tool = GoTool::new();
    let cwd = std::env::current_dir()?;
    let gopath = std::env::var_os("GOPATH").map(PathBuf::from);

    let result = match cli.command {
        Commands::Add { name, path } => {
            commands::add::run(&tool, &cwd, gopath.as_deref(), &name, path)?
        }
        Commands::Remove { name } => commands::remove::run(&tool, &cwd, &name)?,
        Commands::Up => commands::up::run(&tool, &cwd)?,
        Commands::Down => commands::down::run(&tool, &cwd)?,
    };

    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
