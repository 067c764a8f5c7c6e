// SPDX-License-Identifier: MIT
//
// legible — readable text colors for site backgrounds, from the shell.
//
// Thin front end over the two library crates:
//
//   legible-color  → hex parsing/formatting, strict validation, midpoints
//   legible-scheme → contrast, text-color schemes, WCAG grading, backgrounds
//
// Every command is a single pure computation. Results go to stdout (plain
// text for single values, pretty JSON otherwise); logs go to stderr so the
// output stays pipeable.
//
// Configuration:
//
//   --log / LEGIBLE_LOG              tracing filter, default "warn"
//   --level / LEGIBLE_LEVEL          WCAG level for `check`, default "AA"
//   --size / LEGIBLE_TEXT_SIZE       text size for `check`, default "normal"

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use legible_color::{gradient_mid_color, is_valid_hex};
use legible_scheme::{
    BackgroundConfig, SchemeError, TextSize, WcagLevel, check_contrast, compliance_report,
    contrast_ratio, generate_color_scheme, optimal_text_color, recommended_colors,
};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "legible", version)]
#[command(about = "Readable text colors and WCAG contrast checks for site backgrounds")]
struct Cli {
    /// Log filter in `tracing` env-filter syntax.
    #[arg(long, global = true, env = "LEGIBLE_LOG", default_value = "warn")]
    log: String,

    /// Print JSON even for single-value answers.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// WCAG contrast ratio between two colors.
    Contrast { a: String, b: String },

    /// Black or white, whichever reads better on the background.
    Optimal { background: String },

    /// Full text-color scheme for a background, with its compliance report.
    Scheme { background: String },

    /// Check one text color against a background.
    Check {
        text: String,
        background: String,
        #[arg(long, env = "LEGIBLE_LEVEL", default_value = "AA")]
        level: String,
        #[arg(long, env = "LEGIBLE_TEXT_SIZE", default_value = "normal")]
        size: String,
        /// Reject unknown level or size values instead of failing the check.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Midpoint color of a two-stop gradient.
    Mid { start: String, end: String },

    /// Whether a string is a strict `#RGB` / `#RRGGBB` color.
    Valid { hex: String },

    /// Recommended text colors for a strictly valid background color.
    Recommend { background: String },

    /// Resolve stored background configurations (one object or an array).
    Resolve {
        /// JSON file to read, or `-` for stdin.
        input: PathBuf,
        /// Strictly validate every stored color before resolving.
        #[arg(long, default_value_t = false)]
        validate: bool,
    },
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error("{path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, CliError>;

// ─── Output ─────────────────────────────────────────────────────────────────

/// What a command produced, before formatting.
#[derive(Debug, PartialEq)]
enum Output {
    /// Single value: printed bare, or as `{ key: value }` with `--json`.
    Scalar { key: &'static str, value: Value },
    Document(Value),
}

impl Output {
    fn scalar(key: &'static str, value: impl Into<Value>) -> Self {
        Self::Scalar {
            key,
            value: value.into(),
        }
    }

    fn render(&self, force_json: bool) -> Result<String> {
        Ok(match self {
            Self::Scalar { value: Value::String(s), .. } if !force_json => s.clone(),
            Self::Scalar { value, .. } if !force_json => value.to_string(),
            Self::Scalar { key, value } => {
                let mut doc = serde_json::Map::new();
                doc.insert((*key).to_owned(), value.clone());
                serde_json::to_string_pretty(&Value::Object(doc))?
            }
            Self::Document(doc) => serde_json::to_string_pretty(doc)?,
        })
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Stored configurations arrive either one at a time or as a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigInput {
    Batch(Vec<BackgroundConfig>),
    Single(BackgroundConfig),
}

fn run(command: &Command) -> Result<Output> {
    match command {
        Command::Contrast { a, b } => Ok(Output::scalar("contrast", contrast_ratio(a, b))),

        Command::Optimal { background } => {
            Ok(Output::scalar("textColor", optimal_text_color(background)))
        }

        Command::Scheme { background } => {
            let scheme = generate_color_scheme(background);
            let report = compliance_report(&scheme, background);
            Ok(Output::Document(json!({
                "backgroundColor": background,
                "scheme": scheme,
                "wcagCompliance": report,
            })))
        }

        Command::Check {
            text,
            background,
            level,
            size,
            strict,
        } => {
            if *strict {
                level.parse::<WcagLevel>()?;
                size.parse::<TextSize>()?;
            }
            let check = check_contrast(text, background, level, size);
            debug!(%text, %background, contrast = check.contrast, "checked contrast");
            Ok(Output::Document(serde_json::to_value(check)?))
        }

        Command::Mid { start, end } => {
            Ok(Output::scalar("midColor", gradient_mid_color(start, end)))
        }

        Command::Valid { hex } => Ok(Output::scalar("valid", is_valid_hex(hex))),

        Command::Recommend { background } => {
            Ok(Output::Document(serde_json::to_value(recommended_colors(background)?)?))
        }

        Command::Resolve { input, validate } => {
            let raw = read_input(input)?;
            resolve(&raw, *validate)
        }
    }
}

fn resolve(raw: &str, validate: bool) -> Result<Output> {
    let (configs, batch) = match serde_json::from_str::<ConfigInput>(raw)? {
        ConfigInput::Batch(configs) => (configs, true),
        ConfigInput::Single(config) => (vec![config], false),
    };
    info!(count = configs.len(), validate, "resolving background configurations");

    let mut resolved = Vec::with_capacity(configs.len());
    for config in &configs {
        if validate {
            config.background.validate()?;
            config.text_color.validate()?;
        }
        resolved.push(serde_json::to_value(config.resolve()?)?);
    }

    Ok(Output::Document(if batch {
        Value::Array(resolved)
    } else {
        resolved.swap_remove(0)
    }))
}

fn read_input(path: &Path) -> Result<String> {
    let read_err = |source| CliError::Read {
        path: path.display().to_string(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(read_err)
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("legible: ignoring log filter '{filter}': {e}");
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let rendered = run(&cli.command).and_then(|out| out.render(cli.json));
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("legible: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn run_args(args: &[&str]) -> Result<Output> {
        let cli = Cli::try_parse_from(std::iter::once("legible").chain(args.iter().copied()))
            .expect("valid arguments");
        run(&cli.command)
    }

    fn document(args: &[&str]) -> Value {
        match run_args(args).unwrap() {
            Output::Document(doc) => doc,
            other => panic!("expected a document, got {other:?}"),
        }
    }

    // ── Scalar commands ───────────────────────────────────────────────────

    #[test]
    fn optimal_prints_bare_hex() {
        let out = run_args(&["optimal", "#ffffff"]).unwrap();
        assert_eq!(out.render(false).unwrap(), "#000000");
    }

    #[test]
    fn scalar_json_is_keyed() {
        let out = run_args(&["mid", "#000000", "#ffffff"]).unwrap();
        let parsed: Value = serde_json::from_str(&out.render(true).unwrap()).unwrap();
        assert_eq!(parsed, json!({ "midColor": "#7f7f7f" }));
    }

    #[test]
    fn valid_reports_strictness() {
        assert_eq!(run_args(&["valid", "#fff"]).unwrap().render(false).unwrap(), "true");
        assert_eq!(run_args(&["valid", "fff"]).unwrap().render(false).unwrap(), "false");
    }

    #[test]
    fn contrast_is_numeric() {
        let out = run_args(&["contrast", "#ffffff", "#000000"]).unwrap();
        let Output::Scalar { value, .. } = out else {
            panic!("expected scalar");
        };
        assert!((value.as_f64().unwrap() - 21.0).abs() < 1e-6);
    }

    // ── Documents ─────────────────────────────────────────────────────────

    #[test]
    fn scheme_includes_report() {
        let doc = document(&["scheme", "#1a1a2e"]);
        assert_eq!(doc["scheme"]["primary"], "#ffffff");
        assert_eq!(doc["wcagCompliance"]["primaryAAA"], true);
    }

    #[test]
    fn check_echoes_options() {
        let doc = document(&["check", "#000000", "#ffffff", "--level", "aaa"]);
        assert_eq!(doc["isValid"], true);
        assert_eq!(doc["wcagLevel"], "aaa");
        assert_eq!(doc["recommendation"], "#000000");
    }

    #[test]
    fn check_unknown_level_fails_quietly_unless_strict() {
        let doc = document(&["check", "#000000", "#ffffff", "--level", "A"]);
        assert_eq!(doc["isValid"], false);

        let err = run_args(&["check", "#000000", "#ffffff", "--level", "A", "--strict"]);
        assert!(matches!(err, Err(CliError::Scheme(SchemeError::UnknownLevel(_)))));
    }

    #[test]
    fn recommend_rejects_loose_hex() {
        let err = run_args(&["recommend", "ffffff"]);
        assert!(matches!(err, Err(CliError::Scheme(SchemeError::InvalidHex(_)))));
    }

    // ── Resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_single_config() {
        let raw = r##"{ "background": { "backgroundType": "color", "backgroundColor": "#000" } }"##;
        let Output::Document(doc) = resolve(raw, false).unwrap() else {
            panic!("expected document");
        };
        assert_eq!(doc["primaryTextColor"], "#ffffff");
        assert_eq!(doc["backgroundColor"], "#000");
    }

    #[test]
    fn resolve_batch_keeps_order() {
        let raw = r##"[
            { "background": { "backgroundType": "color", "backgroundColor": "#fff" } },
            { "background": { "backgroundType": "color", "backgroundColor": "#000" } }
        ]"##;
        let Output::Document(Value::Array(items)) = resolve(raw, false).unwrap() else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["primaryTextColor"], "#000000");
        assert_eq!(items[1]["primaryTextColor"], "#ffffff");
    }

    #[test]
    fn resolve_validate_rejects_stored_garbage() {
        let raw = r##"{ "background": { "backgroundType": "color", "backgroundColor": "black" } }"##;
        assert!(resolve(raw, false).is_ok());
        assert!(matches!(
            resolve(raw, true),
            Err(CliError::Scheme(SchemeError::InvalidHex(_)))
        ));
    }

    #[test]
    fn resolve_reports_bad_json() {
        assert!(matches!(resolve("{", false), Err(CliError::Json(_))));
    }

    #[test]
    fn resolve_image_without_color_is_an_error() {
        let raw = r#"{ "background": { "backgroundType": "image" } }"#;
        assert!(matches!(
            resolve(raw, false),
            Err(CliError::Scheme(SchemeError::NoRepresentativeColor(_)))
        ));
    }
}
