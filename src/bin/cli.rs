use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use promptshield::config::Config;
use promptshield::output::OutputFormat;
use promptshield::rules::{rule_catalog, Severity};
use promptshield::ScanOptions;

#[derive(Parser)]
#[command(
    name = "promptshield",
    about = "Static security scanner for AI/LLM application source code",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory of AI application sources for security issues
    Scan {
        /// Path to the directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json, sarif, html)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Minimum severity to fail (warning, error)
        #[arg(long)]
        fail_on: Option<String>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List all available detection rules
    ListRules {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .promptshield.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            path,
            config,
            format,
            fail_on,
            output,
        } => cmd_scan(path, config, format, fail_on, output),
        Commands::ListRules { format } => cmd_list_rules(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_scan(
    path: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    output_path: Option<PathBuf>,
) -> Result<i32, promptshield::error::ShieldError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let sev = Severity::from_str_lenient(&s);
        if sev.is_none() {
            eprintln!("Warning: unknown severity '{}', using config default", s);
        }
        sev
    });

    let options = ScanOptions {
        config_path: config,
        format,
        fail_on_override: fail_on,
    };

    let outcome = promptshield::scan(&path, &options)?;
    let rendered = promptshield::render_report(&outcome, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    for (file, message) in &outcome.summary.files_failed {
        eprintln!("Warning: {} could not be scanned: {}", file.display(), message);
    }

    // Exit code: 0 = pass, 1 = findings at or above threshold
    Ok(if outcome.pass() { 0 } else { 1 })
}

fn cmd_list_rules(format_str: String) -> Result<i32, promptshield::error::ShieldError> {
    let rules: Vec<_> = rule_catalog().iter().map(|r| r.metadata()).collect();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rules)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<10} {:<32} {:<10} CATEGORY", "CODE", "NAME", "SEVERITY");
            println!("{}", "-".repeat(80));
            for rule in &rules {
                println!(
                    "{:<10} {:<32} {:<10} {}",
                    rule.code,
                    rule.name,
                    rule.severity.to_string(),
                    rule.category,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, promptshield::error::ShieldError> {
    let path = PathBuf::from(".promptshield.toml");

    if path.exists() && !force {
        eprintln!(".promptshield.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .promptshield.toml");

    Ok(0)
}
