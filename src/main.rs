//! A3S Dork CLI - search dork generator command line interface.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use a3s_dork::{
    debounce::Debouncer, render_for_target, source::source_for, tokenize, Catalog, EngineRegistry,
    RenderedDork,
};

/// A3S Dork - Search dork generator CLI
#[derive(Parser)]
#[command(name = "a3s-dork")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with additional engine definitions
    #[arg(long, global = true)]
    engines_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dork catalog for a target domain
    Generate(GenerateArgs),

    /// Translate a canonical query for one engine
    Translate(QueryArgs),

    /// Build the search URL for a canonical query
    Url(QueryArgs),

    /// Show how a query is tokenized and translated
    Explain {
        /// Canonical (Google syntax) query
        query: String,
    },

    /// List registered search engines
    Engines,

    /// Re-render the catalog for each target read from stdin
    Watch(WatchArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    /// Target domain (defaults to example.com)
    #[arg(default_value = "")]
    target: String,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Parser)]
struct WatchArgs {
    /// Quiet period after the last input line before re-rendering
    #[arg(long, default_value = "300")]
    debounce_ms: u64,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Parser)]
struct RenderArgs {
    /// Catalog file path or http(s) URL (defaults to the bundled catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Search engines to use (comma-separated, defaults to all enabled)
    #[arg(short, long, value_delimiter = ',')]
    engines: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Parser)]
struct QueryArgs {
    /// Canonical (Google syntax) query
    query: String,

    /// Target engine
    #[arg(short, long, default_value = "google")]
    engine: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact tab-separated output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = build_registry(cli.engines_file.as_ref()).await?;

    match cli.command {
        Commands::Generate(args) => run_generate(args, &registry).await,
        Commands::Translate(args) => {
            println!("{}", registry.translate(&args.engine, &args.query)?);
            Ok(())
        }
        Commands::Url(args) => {
            println!("{}", registry.build_search_url(&args.engine, &args.query)?);
            Ok(())
        }
        Commands::Explain { query } => explain(&query, &registry),
        Commands::Engines => list_engines(&registry),
        Commands::Watch(args) => run_watch(args, &registry).await,
    }
}

async fn build_registry(engines_file: Option<&PathBuf>) -> Result<EngineRegistry> {
    let mut registry = EngineRegistry::with_defaults();
    if let Some(path) = engines_file {
        let json = tokio::fs::read_to_string(path).await?;
        let added = registry.extend_from_json(&json)?;
        info!("Loaded {} engines from {}", added, path.display());
    }
    Ok(registry)
}

async fn load_catalog(location: Option<&str>) -> Result<Catalog> {
    let source = source_for(location)?;
    let catalog = source.load().await?;
    debug!(
        "Loaded {} templates ({} patterns) from {}",
        catalog.len(),
        catalog.pattern_count(),
        source.location()
    );
    Ok(catalog)
}

async fn run_generate(args: GenerateArgs, registry: &EngineRegistry) -> Result<()> {
    let catalog = load_catalog(args.render.catalog.as_deref()).await?;
    let dorks = render_for_target(&catalog, registry, &args.render.engines, &args.target)?;
    print_dorks(&dorks, args.render.format)
}

async fn run_watch(args: WatchArgs, registry: &EngineRegistry) -> Result<()> {
    let catalog = load_catalog(args.render.catalog.as_deref()).await?;
    let render = |input: &str| -> Result<()> {
        let dorks = render_for_target(&catalog, registry, &args.render.engines, input)?;
        print_dorks(&dorks, args.render.format)
    };

    render("")?;

    let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(args.debounce_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => debouncer.push(line)?,
                None => break,
            },
            Some(input) = settled.recv() => render(&input)?,
        }
    }

    debouncer.close().await;
    while let Some(input) = settled.recv().await {
        render(&input)?;
    }

    Ok(())
}

fn print_dorks(dorks: &[RenderedDork], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if dorks.is_empty() {
                println!("No results found.");
                return Ok(());
            }

            for dork in dorks {
                println!("{}", dork.title);
                for pattern in &dork.patterns {
                    println!("  {}", pattern.pattern);
                    for link in &pattern.links {
                        if link.query != pattern.pattern {
                            println!("    {:<11} {}", link.engine, link.query);
                            println!("    {:<11} {}", "", link.url);
                        } else {
                            println!("    {:<11} {}", link.engine, link.url);
                        }
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(dorks)?);
        }
        OutputFormat::Compact => {
            for dork in dorks {
                for pattern in &dork.patterns {
                    for link in &pattern.links {
                        println!("{}\t{}\t{}", dork.title, link.engine, link.url);
                    }
                }
            }
        }
    }

    Ok(())
}

fn explain(query: &str, registry: &EngineRegistry) -> Result<()> {
    println!("Tokens:");
    for token in tokenize(query) {
        println!("  {:<8} {}", token.kind(), token.value());
    }
    println!();
    println!("Translations:");
    for engine in registry.engines() {
        println!("  {:<11} {}", engine.shortcut(), engine.translate(query));
    }
    Ok(())
}

fn list_engines(registry: &EngineRegistry) -> Result<()> {
    println!("Available search engines:\n");
    for engine in registry.engines() {
        let config = engine.config();
        let aliases = if config.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", config.aliases.join(", "))
        };
        let status = if config.enabled { "" } else { " [disabled]" };
        println!(
            "  {:<11} - {}{}{}",
            config.shortcut, config.name, aliases, status
        );
        println!("  {:<11}   dialect: {}", "", config.dialect);
        println!("  {:<11}   {}", "", config.url_template);
    }
    println!();
    println!("Usage: a3s-dork generate acme.org -e google,bing,ddg");
    Ok(())
}
