//! Command-line interface for ccl
//! This binary assembles client-care engagement letters from a template, a
//! set of field answers and the three section-variant choices.
//!
//! Usage:
//!   ccl scan `<path>`                                          - List the tokens in a template
//!   ccl assemble [--fields `<json>`] [--format `<format>`] ... - Assemble the letter text
//!   ccl fields                                                 - List the field schema
//!   ccl presets `<field>`                                      - Show preset phrases for a field
use clap::{Arg, ArgAction, Command};
use std::collections::BTreeMap;

use ccl::ccl::assemble::{assemble, missing_required_fields};
use ccl::ccl::blocks::to_blocks;
use ccl::ccl::fields::{FieldStore, FIELD_CATALOG};
use ccl::ccl::ports::{Clipboard, PortError};
use ccl::ccl::presets::presets_for;
use ccl::ccl::scanner::scan_with_warnings;
use ccl::ccl::sections::{ChargesVariant, CostsVariant, DisbursementsVariant, SectionChoices};
use ccl::ccl::template::DEFAULT_CCL_TEMPLATE;

fn main() {
    let matches = Command::new("ccl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for assembling client-care engagement letters")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("List the tokens found in a template file")
                .arg(
                    Arg::new("path")
                        .help("Path to the template file (defaults to the built-in letter)")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("assemble")
                .about("Assemble the letter text")
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Path to a template file (defaults to the built-in letter)"),
                )
                .arg(
                    Arg::new("fields")
                        .long("fields")
                        .help("Path to a JSON object of field name/value answers"),
                )
                .arg(
                    Arg::new("charges")
                        .long("charges")
                        .help("Charges variant ('hourly_rate' or 'no_estimate')"),
                )
                .arg(
                    Arg::new("costs")
                        .long("costs")
                        .help("Costs variant ('no_costs' or 'risk_costs')"),
                )
                .arg(
                    Arg::new("disbursements")
                        .long("disbursements")
                        .help("Disbursements variant ('table' or 'estimate')"),
                )
                .arg(
                    Arg::new("examples")
                        .long("examples")
                        .help("Include the worked-examples clause in the disbursements estimate")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text', 'json', 'blocks')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("copy")
                        .long("copy")
                        .help("Also copy the assembled text to the system clipboard")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("fields").about("List the field schema with display names"))
        .subcommand(
            Command::new("presets")
                .about("Show preset phrases for a field")
                .arg(
                    Arg::new("field")
                        .help("Field name, e.g. 'figure_or_range'")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path");
            handle_scan_command(path.map(String::as_str));
        }
        Some(("assemble", assemble_matches)) => {
            handle_assemble_command(assemble_matches);
        }
        Some(("fields", _)) => {
            handle_fields_command();
        }
        Some(("presets", presets_matches)) => {
            let field = presets_matches.get_one::<String>("field").unwrap();
            handle_presets_command(field);
        }
        _ => unreachable!(),
    }
}

/// Handle the scan command
fn handle_scan_command(path: Option<&str>) {
    let source = read_template(path);
    let (tokens, warnings) = scan_with_warnings(&source);
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    for token in &tokens {
        println!("{}..{}  {}", token.start, token.end, token.name);
    }
}

/// Handle the assemble command
fn handle_assemble_command(matches: &clap::ArgMatches) {
    let template = read_template(matches.get_one::<String>("template").map(String::as_str));

    let mut store = FieldStore::new();
    if let Some(fields_path) = matches.get_one::<String>("fields") {
        load_fields(&mut store, fields_path);
    }

    let mut choices = SectionChoices::default();
    if let Some(value) = matches.get_one::<String>("charges") {
        match value.parse::<ChargesVariant>() {
            Ok(variant) => choices.charges.choose(variant),
            Err(e) => fail(&e.to_string()),
        }
    }
    if let Some(value) = matches.get_one::<String>("costs") {
        match value.parse::<CostsVariant>() {
            Ok(variant) => choices.costs.choose(variant),
            Err(e) => fail(&e.to_string()),
        }
    }
    if let Some(value) = matches.get_one::<String>("disbursements") {
        match value.parse::<DisbursementsVariant>() {
            Ok(variant) => choices.disbursements.choose(variant),
            Err(e) => fail(&e.to_string()),
        }
    }
    if matches.get_flag("examples") {
        choices.estimate_examples.enabled = true;
    }

    let text = assemble(&template, &store, &choices);

    let missing = missing_required_fields(&template, &store, &choices);
    if !missing.is_empty() {
        eprintln!("Unanswered fields: {}", missing.join(", "));
    }

    let format = matches.get_one::<String>("format").unwrap();
    match format.as_str() {
        "text" => print!("{}", text),
        "json" => {
            let payload = serde_json::json!({
                "text": text,
                "missing": missing,
                "fields": store.snapshot(),
            });
            match serde_json::to_string_pretty(&payload) {
                Ok(out) => println!("{}", out),
                Err(e) => fail(&format!("serialization error: {}", e)),
            }
        }
        "blocks" => {
            let blocks = to_blocks(&text);
            match serde_json::to_string_pretty(&blocks) {
                Ok(out) => println!("{}", out),
                Err(e) => fail(&format!("serialization error: {}", e)),
            }
        }
        other => fail(&format!(
            "unknown format '{}' (expected 'text', 'json' or 'blocks')",
            other
        )),
    }

    if matches.get_flag("copy") {
        let mut clipboard = SystemClipboard::new().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        if let Err(e) = clipboard.copy_text(&text) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the fields command
fn handle_fields_command() {
    for (name, display) in FIELD_CATALOG {
        println!("{}  ({})", name, display);
    }
}

/// Handle the presets command
fn handle_presets_command(field: &str) {
    if !FieldStore::is_known(field) {
        fail(&format!("unknown field: {}", field));
    }
    let phrases = presets_for(field);
    if phrases.is_empty() {
        println!("(no presets for '{}')", field);
        return;
    }
    for phrase in phrases {
        println!("  {}", phrase);
    }
}

fn read_template(path: Option<&str>) -> String {
    match path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }),
        None => DEFAULT_CCL_TEMPLATE.to_string(),
    }
}

fn load_fields(store: &mut FieldStore, path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading fields file: {}", e);
        std::process::exit(1);
    });
    let answers: BTreeMap<String, String> =
        serde_json::from_str(&source).unwrap_or_else(|e| {
            eprintln!("Error parsing fields file: {}", e);
            std::process::exit(1);
        });
    for (name, value) in answers {
        if let Err(e) = store.set(&name, value) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Clipboard port backed by the OS clipboard.
struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self, PortError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PortError::Clipboard(e.to_string()))?;
        Ok(SystemClipboard { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), PortError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| PortError::Clipboard(e.to_string()))
    }
}
