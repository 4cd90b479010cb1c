//! readmelint CLI
//!
//! Linter, previewer and auto-fixer for WordPress plugin `readme.txt` files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use readmelint_core::{MultiLineStyle, ReadmeConfig, ValidationResult, auto_fix, validate};
use readmelint_parser::parse;
use readmelint_render::{RenderOptions, render_preview};

mod output;

/// readmelint - WordPress plugin readme.txt linter
#[derive(Parser)]
#[command(name = "readmelint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate readme files
    Check {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Apply heuristic fixes to readme files
    Fix {
        /// Files to fix
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Code block style (indented, fenced)
        #[arg(long)]
        style: Option<String>,

        /// Preview fixes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Render an HTML preview of a readme
    Render {
        /// File to render
        file: PathBuf,

        /// Write HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not embed recognized video URLs
        #[arg(long)]
        no_videos: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Check { files, format } => run_check(&cli, files, format),
        Commands::Fix {
            files,
            style,
            dry_run,
        } => run_fix(&cli, files, style.as_deref(), *dry_run).map(|_| false),
        Commands::Render {
            file,
            output,
            no_videos,
        } => run_render(&cli, file, output.as_deref(), *no_videos).map(|_| false),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}

fn load_config(cli: &Cli) -> Result<ReadmeConfig> {
    if let Some(ref path) = cli.config {
        return ReadmeConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ReadmeConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ReadmeConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ReadmeConfig::new())
}

fn run_check(_cli: &Cli, files: &[PathBuf], format: &str) -> Result<bool> {
    let mut reports: Vec<(PathBuf, ValidationResult)> = Vec::with_capacity(files.len());

    for path in files {
        let text = std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
        let readme = parse(&text);
        reports.push((path.clone(), validate(&readme)));
    }

    let has_errors = reports.iter().any(|(_, r)| !r.is_valid());

    match format {
        "json" => output::print_json(&reports)?,
        "text" => output::print_text(&reports),
        other => return Err(miette::miette!("Unknown output format: {}", other)),
    }

    Ok(has_errors)
}

fn run_fix(cli: &Cli, files: &[PathBuf], style: Option<&str>, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;
    let style = match style {
        Some(s) => parse_style(s)?,
        None => config.multi_line_style,
    };

    for path in files {
        let text = std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
        let result = auto_fix(&text, style);

        if result.is_unchanged() {
            println!("{}: nothing to fix", path.display());
            continue;
        }

        if dry_run {
            println!(
                "Would fix {} ({} changes):",
                path.display(),
                result.changes.len()
            );
        } else {
            std::fs::write(path, &result.updated_text).into_diagnostic()?;
            println!("Fixed {} ({} changes):", path.display(), result.changes.len());
        }
        for change in &result.changes {
            println!("  {change}");
        }
    }

    if dry_run {
        println!("\nRun without --dry-run to apply fixes.");
    }
    Ok(())
}

fn parse_style(style: &str) -> Result<MultiLineStyle> {
    match style {
        "indented" => Ok(MultiLineStyle::Indented),
        "fenced" => Ok(MultiLineStyle::Fenced),
        other => Err(miette::miette!(
            "Unknown code block style '{}' (expected 'indented' or 'fenced')",
            other
        )),
    }
}

fn run_render(cli: &Cli, file: &Path, output: Option<&Path>, no_videos: bool) -> Result<()> {
    let config = load_config(cli)?;
    let options = RenderOptions {
        allow_videos: config.allow_videos && !no_videos,
        allow_html: config.allow_html,
        base_url: config.base_url.clone(),
    };

    let text = std::fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;
    let html = render_preview(&parse(&text), &options);

    match output {
        Some(path) => {
            std::fs::write(path, html).into_diagnostic()?;
            info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(ReadmeConfig::CONFIG_FILES[0]);

    let default_config = r#"{
  // How auto-fix rewrites multi-line code blocks: "indented" or "fenced"
  "multi_line_style": "indented",
  "allow_videos": true,
  "allow_html": false
}
"#;

    if config_path.exists() && !force {
        return Err(miette::miette!(
            "Config file already exists. Use --force to overwrite."
        ));
    }

    std::fs::write(&config_path, default_config).into_diagnostic()?;
    info!("Created {}", config_path.display());
    Ok(())
}
