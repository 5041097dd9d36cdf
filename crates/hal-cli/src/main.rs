//! HAL CLI — render HAL resources to HAL+JSON
//!
//! Commands: render, link, completions

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use hal_core::{Link, ResourceManifest};
use hal_render::{link_object, render, RenderFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "hal")]
#[command(version)]
#[command(about = "Render HAL (Hypertext Application Language) resources")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render a resource manifest (YAML, or JSON by extension)
    Render {
        /// Manifest file
        manifest: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Indented multi-line output
        #[arg(long)]
        pretty: bool,
        /// Write `/` as `\/`
        #[arg(long)]
        escape_slashes: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the wire object for a single link
    Link {
        href: String,
        #[arg(long)]
        templated: bool,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        hreflang: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
}

impl From<FormatArg> for RenderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => RenderFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            manifest,
            format,
            pretty,
            escape_slashes,
            output,
        } => {
            let format = RenderFormat::from(format);
            let options = RenderOptions {
                pretty,
                escape_slashes,
            };
            let rendered = render_manifest(&manifest, format, options)?;
            match output {
                Some(path) => std::fs::write(&path, rendered + "\n")
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
        Commands::Link {
            href,
            templated,
            name,
            hreflang,
            title,
        } => {
            let link = Link::from_parts(Some(href), templated, name, hreflang, title)?;
            println!("{}", serde_json::to_string(&link_object(&link))?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hal", &mut io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_manifest(path: &Path, format: RenderFormat, options: RenderOptions) -> Result<String> {
    let manifest = ResourceManifest::from_path(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let document = manifest.into_document()?;
    Ok(render(&document, format, options)?)
}
