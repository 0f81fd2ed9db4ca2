use anyhow::{Context as AnyhowContext, Result};
use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use insights_highlights::{ArtistSparklines, DigestConfig, DigestParser};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod report;

const CONFIG_ENV: &str = "INSIGHTS_CONFIG";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "insights")]
#[command(about = "Career highlight digests for collection insights", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Digest config file (TOML); falls back to INSIGHTS_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an event digest
    Parse(ParseArgs),

    /// Pick the event digest from an artist sparklines JSON document and parse it
    Sparklines(SparklinesArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Reference year for the retention window (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Include dropped and unclassified entries
    #[arg(long)]
    report: bool,
}

#[derive(Args)]
struct ParseArgs {
    /// Digest string; read from --file or stdin when omitted
    digest: Option<String>,

    /// Read the digest from a file
    #[arg(long, conflicts_with = "digest")]
    file: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct SparklinesArgs {
    /// Sparklines JSON file, or "-" for stdin
    path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

impl Commands {
    fn output(&self) -> &OutputArgs {
        match self {
            Commands::Parse(args) => &args.output,
            Commands::Sparklines(args) => &args.output,
        }
    }
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers
    if cli.command.output().json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config.as_deref())?;
    let parser = DigestParser::new(config).context("Invalid digest config")?;

    match &cli.command {
        Commands::Parse(args) => {
            let digest = match (&args.digest, &args.file) {
                (Some(digest), _) => digest.clone(),
                (None, Some(path)) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read digest from {}", path.display()))?,
                (None, None) => read_stdin()?,
            };
            run_parse(&parser, digest.trim_end_matches(['\n', '\r']), &args.output)
        }
        Commands::Sparklines(args) => {
            let raw = if args.path.as_os_str() == "-" {
                read_stdin()?
            } else {
                fs::read_to_string(&args.path).with_context(|| {
                    format!("Failed to read sparklines from {}", args.path.display())
                })?
            };
            let sparklines =
                ArtistSparklines::from_json(&raw).context("Invalid sparklines JSON")?;
            let digest = sparklines.select_event_digest().unwrap_or_else(|| {
                log::info!("No sparkline carries an event digest");
                ""
            });
            run_parse(&parser, digest, &args.output)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<DigestConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    let Some(path) = path else {
        return Ok(DigestConfig::default());
    };
    log::debug!("Loading digest config from {}", path.display());
    DigestConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn run_parse(parser: &DigestParser, digest: &str, output: &OutputArgs) -> Result<()> {
    let reference_year = output.year.unwrap_or_else(|| Utc::now().year());
    let parsed = parser.parse_year_with_report(digest, reference_year);

    let dropped = parsed.dropped().count();
    if dropped > 0 {
        log::info!("Dropped {dropped} digest entries");
    }

    let text = if output.json {
        report::render_json(&parsed, output.report)?
    } else {
        report::render_text(&parsed, output.report)
    };
    print_stdout(&text)
}
