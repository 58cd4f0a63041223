use clap::Parser;
use colored::*;
use mews_tools::commands::{self, CmdMessage, MessageLevel};
use mews_tools::error::Result;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lists => {
            let result = commands::lists::run();
            for line in &result.lines {
                println!("{}", line);
            }
            print_messages(&result.messages);
        }
        Commands::Normalize { dir } => {
            let result = commands::normalize::run(&dir)?;
            print_messages(&result.messages);
        }
    }
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
