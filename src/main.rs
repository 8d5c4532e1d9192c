use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prosemark::{Config, Error, Result};

#[derive(Parser)]
#[command(name = "prosemark", version)]
#[command(about = "Render LLM-authored markdown into safe HTML")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "prosemark.toml")]
    config: PathBuf,

    /// Class prefix for generated elements, overriding the config
    #[arg(long)]
    class_prefix: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    init_tracing(cli.verbose, &config);

    let mut options = config.render_options();
    if let Some(prefix) = cli.class_prefix {
        options.class_prefix = Some(prefix);
    }

    let markdown = read_input(cli.input.as_deref())?;
    let html = prosemark::render_with_options(&markdown, &options);
    write_output(cli.output.as_deref(), &html)?;

    if let Some(output) = &cli.output {
        tracing::info!(output = %output.display(), "wrote html");
    }
    Ok(())
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&config.logging.level)
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| Error::ReadInput {
                input: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::ReadInput {
                    input: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, html).map_err(|source| Error::WriteOutput {
            output: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").map_err(|source| Error::WriteOutput {
                output: "stdout".to_string(),
                source,
            })
        }
    }
}
