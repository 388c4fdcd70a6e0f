use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "figma-simplify")]
#[command(version, about = "Simplify Figma API responses into a uniform node tree")]
#[command(long_about = "Simplify Figma API responses into a uniform node tree\n\n\
    Accepts a saved response of either `GET /v1/files/:key` or\n\
    `GET /v1/files/:key/nodes`. JSON output is pretty-printed by default.\n\n  \
    figma-simplify response.json [-o simplified.json] [--compact] [-v]\n  \
    curl ... | figma-simplify -")]
struct Cli {
    /// Input response JSON file path (`-` reads stdin)
    input: PathBuf,

    /// Output JSON file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = read_input(&cli.input)?;
    debug!(bytes = text.len(), "read input");

    let design =
        figma_simplify::simplify_str(&text).context("Failed to simplify Figma response")?;
    info!(file = %design.name, nodes = design.nodes.len(), "simplified");

    // Format output (pretty by default, compact if flag is set)
    let output = if cli.compact {
        serde_json::to_string(&design)?
    } else {
        serde_json::to_string_pretty(&design)?
    };

    match cli.output.as_ref() {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    info!(path = %path.display(), "reading input");
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
