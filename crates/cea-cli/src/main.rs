use anyhow::{Context, Result};
use cea_cli::commands;
use cea_cli::AppConfig;
use cea_session::ConsolePrompter;
use cea_validate::ValidationMode;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("cea")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conflicting-evidence annotation: annotate, validate, report progress")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Annotation log path"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Progress state path"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("annotate")
                .about("Annotate pending examples interactively")
                .arg(
                    Arg::new("input")
                        .value_parser(value_parser!(PathBuf))
                        .help("Example source (JSONL)"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check an annotation log for consistency")
                .arg(
                    Arg::new("log")
                        .long("log")
                        .value_parser(value_parser!(PathBuf))
                        .help("Annotation log to check (defaults to the output path)"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Also check note coverage and abstain purity"),
                ),
        )
        .subcommand(
            Command::new("progress")
                .about("Show how many examples are annotated")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_parser(value_parser!(PathBuf))
                        .help("Example source (JSONL)"),
                )
                .arg(
                    Arg::new("log")
                        .long("log")
                        .value_parser(value_parser!(PathBuf))
                        .help("Annotation log (defaults to the output path)"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// File configuration with command line path overrides applied
fn resolve_config(sub: &ArgMatches) -> Result<AppConfig> {
    let mut config = match sub.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AppConfig::new(),
    };
    if let Some(output) = sub.get_one::<PathBuf>("output") {
        config = config.with_output(output);
    }
    if let Some(progress) = sub.get_one::<PathBuf>("progress") {
        config = config.with_progress(progress);
    }
    // Only `annotate` and `progress` take an input path.
    if let Some(input) = sub.try_get_one::<PathBuf>("input").ok().flatten() {
        config = config.with_input(input);
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<i32> {
    let Some((name, sub)) = matches.subcommand() else {
        return Ok(2);
    };
    let config = resolve_config(sub)?;

    match name {
        "annotate" => {
            let stdin = io::stdin();
            let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
            let summary = commands::annotate(&config, &mut prompter)?;
            if summary.interrupted {
                println!(
                    "\nInput closed: {} annotated this run, {} still pending. Run again to resume.",
                    summary.annotated, summary.remaining
                );
            }
            Ok(0)
        }
        "validate" => {
            let log = sub
                .get_one::<PathBuf>("log")
                .cloned()
                .unwrap_or_else(|| config.paths.output.clone());
            let mode = if sub.get_flag("strict") {
                ValidationMode::Strict
            } else {
                ValidationMode::Referential
            };
            let report = commands::validate(&log, mode)?;
            if report.passed() {
                println!("Validation passed ✅");
                Ok(0)
            } else {
                for diagnostic in report.diagnostics() {
                    eprintln!("{diagnostic}");
                }
                Ok(1)
            }
        }
        "progress" => {
            let log = sub
                .get_one::<PathBuf>("log")
                .cloned()
                .unwrap_or_else(|| config.paths.output.clone());
            let report = commands::progress(&config.paths.input, &log)?;
            println!("{report}");
            Ok(0)
        }
        _ => Ok(2),
    }
}

fn main() {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("verbose"));
    init_tracing(verbose);

    match run(&matches) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
