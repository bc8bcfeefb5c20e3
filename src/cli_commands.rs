// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the Chat Guard CLI.

use chat_guard::config::{self, SafetyConfig};
use chat_guard::safety::{ChatSafetyPolicy, ContactKind, Verdict};

const EXIT_OK: u8 = 0;
const EXIT_BLOCKED: u8 = 1;
const EXIT_CONFIG: u8 = 2;
const EXIT_CENSORED: u8 = 3;

/// Load the configured policy, reporting failures on stderr.
fn load_policy() -> Result<ChatSafetyPolicy, u8> {
    let config = config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        EXIT_CONFIG
    })?;
    ChatSafetyPolicy::new(&config).map_err(|e| {
        eprintln!("Policy error: {}", e);
        EXIT_CONFIG
    })
}

/// Split args into free text and `--json`.
fn text_and_json(args: &[String]) -> (String, bool) {
    let json = args.iter().any(|a| a == "--json");
    let text = args
        .iter()
        .filter(|a| a.as_str() != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    (text, json)
}

/// Run the check command.
pub fn run_check(args: &[String]) -> u8 {
    let policy = match load_policy() {
        Ok(p) => p,
        Err(code) => return code,
    };
    let (text, json) = text_and_json(args);
    let result = policy.validate_message(&text);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to encode result: {}", e);
                return EXIT_BLOCKED;
            }
        }
    } else {
        println!("Verdict:  {}", result.verdict());
        if let Some(reason) = &result.reason {
            println!("Reason:   {}", reason);
        }
        if let Some(censored) = &result.censored_message {
            println!("Censored: {}", censored);
        }
        let trimmed = text.trim();
        let keywords = policy.matched_keywords(trimmed);
        if !keywords.is_empty() {
            println!("Keywords: {}", keywords.join(", "));
        }
        let mut kinds: Vec<ContactKind> = Vec::new();
        for m in policy.detect_contact_info(trimmed) {
            if !kinds.contains(&m.kind) {
                kinds.push(m.kind);
            }
        }
        if !kinds.is_empty() {
            let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
            println!("Contacts: {}", names.join(", "));
        }
    }

    match result.verdict() {
        Verdict::Clean => EXIT_OK,
        Verdict::ContactCensored => EXIT_CENSORED,
        Verdict::Empty | Verdict::KeywordBlocked => EXIT_BLOCKED,
    }
}

/// Run the censor command.
pub fn run_censor(args: &[String]) -> u8 {
    let policy = match load_policy() {
        Ok(p) => p,
        Err(code) => return code,
    };
    println!("{}", policy.censor_contact_info(&args.join(" ")));
    EXIT_OK
}

struct QuotaArgs {
    sent: u32,
    max: Option<u32>,
    booked: bool,
    json: bool,
}

fn parse_quota_args(args: &[String]) -> Result<QuotaArgs, String> {
    let mut sent = None;
    let mut max = None;
    let mut booked = false;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sent" | "--max" => {
                let flag = args[i].as_str();
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("Missing value for {}", flag))?;
                let n: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid value for {}: {}", flag, value))?;
                if flag == "--sent" { sent = Some(n) } else { max = Some(n) }
                i += 2;
            }
            "--booked" => {
                booked = true;
                i += 1;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    if max == Some(0) {
        return Err("--max must be greater than 0".to_string());
    }
    let sent = sent.ok_or_else(|| "Missing required --sent <N>".to_string())?;
    Ok(QuotaArgs { sent, max, booked, json })
}

/// Run the quota command.
pub fn run_quota(args: &[String]) -> u8 {
    let parsed = match parse_quota_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: chat-guard quota --sent <N> [--max <M>] [--booked] [--json]");
            return EXIT_BLOCKED;
        }
    };
    let policy = match load_policy() {
        Ok(p) => p,
        Err(code) => return code,
    };
    let max = parsed.max.unwrap_or(policy.max_messages());
    let decision = policy.can_send_message_with_limit(parsed.booked, parsed.sent, max);

    if parsed.json {
        match serde_json::to_string_pretty(&decision) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to encode decision: {}", e);
                return EXIT_BLOCKED;
            }
        }
    } else if decision.can_send {
        if parsed.booked {
            println!("Can send: yes (active booking, no limit)");
        } else {
            println!(
                "Can send: yes ({} of {} remaining)",
                chat_guard::remaining_messages(parsed.sent, max),
                max
            );
        }
    } else {
        println!("Can send: no");
        if let Some(reason) = &decision.reason {
            println!("Reason:   {}", reason);
        }
    }

    if decision.can_send { EXIT_OK } else { EXIT_BLOCKED }
}

/// Run the remaining command.
pub fn run_remaining(args: &[String]) -> u8 {
    let parsed = match parse_quota_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: chat-guard remaining --sent <N> [--max <M>]");
            return EXIT_BLOCKED;
        }
    };
    let max = match parsed.max {
        Some(m) => m,
        None => match load_policy() {
            Ok(p) => p.max_messages(),
            Err(code) => return code,
        },
    };
    println!("{}", chat_guard::remaining_messages(parsed.sent, max));
    EXIT_OK
}

fn print_config(config: &SafetyConfig) -> u8 {
    match config.to_toml() {
        Ok(out) => {
            println!("{}", out);
            EXIT_OK
        }
        Err(e) => {
            eprintln!("Failed to render configuration: {}", e);
            EXIT_CONFIG
        }
    }
}

/// Show the effective configuration.
pub fn run_config_show() -> u8 {
    match config::load() {
        Ok(config) => print_config(&config),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            EXIT_CONFIG
        }
    }
}

/// Show the built-in defaults with the keyword list spelled out.
pub fn run_config_defaults() -> u8 {
    let mut defaults = SafetyConfig::default();
    defaults.keywords = Some(defaults.effective_keywords());
    print_config(&defaults)
}

/// Validate the configured file and environment overrides.
pub fn run_config_validate() -> u8 {
    let source = match config::config_path() {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };
    match load_policy() {
        Ok(policy) => {
            println!(
                "Configuration OK ({}): {} keywords, max_messages = {}",
                source,
                policy.keywords().len(),
                policy.max_messages()
            );
            EXIT_OK
        }
        Err(code) => code,
    }
}
