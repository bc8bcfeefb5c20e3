// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat Guard CLI entry point.
//!
//! Offline tool for moderators and QA: runs the chat safety checks against
//! text typed on the command line using the configured policy.

mod cli_commands;
mod cli_parser;

use std::process::ExitCode;

fn main() -> ExitCode {
    chat_guard::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Chat Guard {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "check" => ExitCode::from(cli_commands::run_check(&args[2..])),
        "censor" => ExitCode::from(cli_commands::run_censor(&args[2..])),
        "quota" => ExitCode::from(cli_commands::run_quota(&args[2..])),
        "remaining" => ExitCode::from(cli_commands::run_remaining(&args[2..])),
        "config" => run_config_cmd(&args),
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_config_cmd(args: &[String]) -> ExitCode {
    let sub = args.get(2).map(|s| s.as_str()).unwrap_or("show");
    match sub {
        "show" => ExitCode::from(cli_commands::run_config_show()),
        "defaults" => ExitCode::from(cli_commands::run_config_defaults()),
        "validate" => ExitCode::from(cli_commands::run_config_validate()),
        _ => {
            eprintln!("Unknown config subcommand: {}", sub);
            cli_parser::print_command_help("config");
            ExitCode::FAILURE
        }
    }
}
