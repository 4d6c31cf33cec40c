use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use x2md_config::Config;
use x2md_engine::table::parse_alignments;
use x2md_engine::{
    FrontMatterFormat, parse_tsv, render_table, to_front_matter, to_header, to_link, to_list,
    validate_table,
};

#[derive(Parser)]
#[command(name = "x2md")]
#[command(version, about = "Turn plain data into Markdown fragments", long_about = None)]
#[command(after_help = "EXAMPLES:
    x2md table data.tsv              TSV file to a Markdown table
    pbpaste | x2md table -a l,c,r    Clipboard TSV with column alignment
    x2md front-matter -f toml meta.json")]
struct Cli {
    /// Config file to use instead of ~/.config/x2md/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert TSV into a Markdown table
    Table {
        /// TSV file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Comma-separated column alignment, e.g. "left,center,right" or "l,c,r"
        #[arg(short, long, value_name = "LIST")]
        align: Option<String>,
    },
    /// Check that TSV would make a valid table
    Validate {
        /// TSV file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Convert a JSON object into YAML or TOML front matter
    FrontMatter {
        /// JSON file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Output format (yaml or toml)
        #[arg(short, long)]
        format: Option<FrontMatterFormat>,
    },
    /// Format an ATX heading
    Heading {
        text: String,

        /// Heading level 1-6; anything else becomes 1
        #[arg(short, long, default_value_t = 1)]
        level: usize,
    },
    /// Format a bullet list; reads one item per line from stdin without ITEMS
    List {
        items: Vec<String>,

        /// Indent level (four spaces each)
        #[arg(short, long, default_value_t = 0)]
        indent: usize,
    },
    /// Format an inline link
    Link {
        /// Link text, or the URL itself when URL is omitted
        text: String,
        url: Option<String>,
    },
    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG still wins over the -v flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli.config.as_deref().map(Config::expand_path);
    let config_path = config_path.as_deref();

    let output = match cli.command {
        Command::Table { file, align } => {
            let config = load_config(config_path)?;
            let input = read_input(file.as_deref())?;
            table_command(&input, align.as_deref(), &config)?
        }
        Command::Validate { file } => {
            let input = read_input(file.as_deref())?;
            return Ok(match validate_command(&input) {
                Ok(()) => {
                    println!("valid");
                    ExitCode::SUCCESS
                }
                Err(reason) => {
                    println!("invalid: {reason}");
                    ExitCode::FAILURE
                }
            });
        }
        Command::FrontMatter { file, format } => {
            let format = match format {
                Some(format) => format,
                None => load_config(config_path)?.front_matter,
            };
            let input = read_input(file.as_deref())?;
            front_matter_command(&input, format)?
        }
        Command::Heading { text, level } => format!("{}\n", to_header(&text, level)),
        Command::List { items, indent } => {
            let items = if items.is_empty() {
                lines_as_items(&read_input(None)?)
            } else {
                items
            };
            to_list(&items, indent)
        }
        Command::Link { text, url } => format!("{}\n", to_link(&text, url.as_deref())),
        Command::InitConfig { force } => {
            init_config(config_path, force)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(ExitCode::SUCCESS)
}

/// Load the `--config` file, which must exist, or fall back to the default
/// location and then to built-in defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = config_path else {
        return Ok(match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            None => {
                log::debug!("No config file found, using defaults");
                Config::default()
            }
        });
    };

    match Config::load_from_path(path)? {
        Some(config) => {
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => bail!("Config file not found: {}", path.display()),
    }
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    let target = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    if target.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            target.display()
        );
    }

    let config = Config::default();
    let saved = match config_path {
        Some(path) => config.save_to_path(path),
        None => config.save(),
    };
    saved.with_context(|| format!("Failed to write config to {}", target.display()))?;
    eprintln!("Wrote default config to {}", target.display());
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Render TSV as a table. A non-empty `--align` list wins over the configured
/// alignment; an empty one is no override at all.
fn table_command(input: &str, align: Option<&str>, config: &Config) -> Result<String> {
    let flag_alignment = align
        .map(parse_alignments)
        .transpose()
        .context("Invalid --align value")?
        .filter(|list| !list.is_empty());
    let alignment = flag_alignment
        .as_deref()
        .or_else(|| config.table.alignment_override());

    let table = parse_tsv(input);
    log::info!(
        "Rendering table with {} column(s) and {} row(s)",
        table.column_count(),
        table.rows.len()
    );
    Ok(render_table(&table, alignment)?)
}

fn validate_command(input: &str) -> Result<(), String> {
    validate_table(&parse_tsv(input)).map_err(|e| e.reason())
}

fn front_matter_command(input: &str, format: FrontMatterFormat) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    let Value::Object(data) = value else {
        bail!("Front matter input must be a JSON object");
    };
    Ok(to_front_matter(&data, format))
}

/// One item per non-blank line; `\n`, `\r\n` and a bare `\r` all end a line.
fn lines_as_items(input: &str) -> Vec<String> {
    input
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
