// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI help text for Chat Guard.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "Chat Guard - pre-booking chat safety filter v{}

USAGE:
    chat-guard [COMMAND] [OPTIONS]

COMMANDS:
    check        Validate a chat message (block / censor / allow)
    censor       Print a message with contact details masked
    quota        Check whether a pre-booking message may be sent
    remaining    Show how many pre-booking messages are left
    config       Manage configuration (show, defaults, validate)
    version      Show version information
    help         Show this help message

OPTIONS:
    -h, --help     Show help for command
    -V, --version  Show version information

EXAMPLES:
    chat-guard check \"see you at the property tomorrow\"
    chat-guard check \"call me at 0812345678900\" --json
    chat-guard censor \"mail me at tenant@example.com\"
    chat-guard quota --sent 3 --max 3
    chat-guard quota --sent 7 --booked
    chat-guard remaining --sent 1
    chat-guard config validate

ENVIRONMENT:
    CHAT_GUARD_CONFIG        Path to a TOML policy file
    CHAT_GUARD_MAX_MESSAGES  Override the pre-booking message cap
    CHAT_GUARD_LOG_FORMAT    Set to 'json' for JSON log lines
    RUST_LOG                 Log level (debug, info, warn, error)

EXIT CODES:
    0  Allowed / Success
    1  Blocked / Failure
    2  Configuration error
    3  Allowed after censoring contact details
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "check" => print_check_help(),
        "censor" => print_censor_help(),
        "quota" => print_quota_help(),
        "remaining" => print_remaining_help(),
        "config" => print_config_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'chat-guard help' for general usage.",
                command
            );
        }
    }
}

fn print_check_help() {
    eprintln!(
        "chat-guard check - Validate a chat message

USAGE:
    chat-guard check <TEXT>... [OPTIONS]

OPTIONS:
    --json         Output the validation result as JSON

DESCRIPTION:
    Runs the empty check, the blocked keyword filter and the contact-info
    detector in that order. Words after 'check' are joined with spaces.

EXIT CODES:
    0  Message allowed unchanged
    1  Message rejected (empty or blocked keyword)
    2  Configuration error
    3  Message allowed with contact details censored
"
    );
}

fn print_censor_help() {
    eprintln!(
        "chat-guard censor - Mask contact details

USAGE:
    chat-guard censor <TEXT>...

DESCRIPTION:
    Replaces phone numbers, emails and messaging-app links with '*' runs of
    the same length. Keywords are not checked.
"
    );
}

fn print_quota_help() {
    eprintln!(
        "chat-guard quota - Pre-booking quota check

USAGE:
    chat-guard quota --sent <N> [--max <M>] [--booked] [--json]

OPTIONS:
    --sent <N>     Messages already sent in the conversation
    --max <M>      Message cap (default: configured max_messages)
    --booked       The conversation has an active booking
    --json         Output the decision as JSON

EXIT CODES:
    0  Sending allowed
    1  Quota exhausted or invalid arguments
"
    );
}

fn print_remaining_help() {
    eprintln!(
        "chat-guard remaining - Messages left before the cap

USAGE:
    chat-guard remaining --sent <N> [--max <M>]
"
    );
}

fn print_config_help() {
    eprintln!(
        "chat-guard config - Manage configuration

USAGE:
    chat-guard config <SUBCOMMAND>

SUBCOMMANDS:
    show           Show current configuration
    validate       Validate configuration file
    defaults       Show default configuration
"
    );
}
