//! vivo - VIVO SPARQL client CLI
//!
//! Command-line interface and HTTP server for the VIVO client

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use vivo_client::settings::DEFAULT_CONFIG_FILE;
use vivo_client::{
    serve, ConnectionSettings, Outcome, ServerConfig, SettingsSource, TestGate, TestOperation,
    TestRunner, VivoClient, VivoConfig,
};

#[derive(Parser)]
#[command(name = "vivo")]
#[command(version)]
#[command(about = "Forward SPARQL queries and updates to a VIVO server", long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (routes under /lvc)
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "127.0.0.1:8000")]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// Send one SPARQL query (or update, with --update)
    Query {
        /// SPARQL text, or "-" to read it from stdin
        query: String,
        /// Send to /api/sparqlUpdate instead of /api/sparqlQuery
        #[arg(long)]
        update: bool,
        /// VIVO base URL, overrides the configuration
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Run a demo operation (create, read, update, delete); needs debug and test_mode
    Test {
        kind: String,
    },
    /// Print the demo SPARQL for an operation without sending it
    Template {
        kind: String,
        /// Graph URI, defaults to graph_vivo from the configuration
        #[arg(long)]
        graph: Option<String>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::InitConfig { force } => init_config(&cli.config, force),

        Commands::Serve { bind, cors } => {
            let vivo = load_config(&cli.config)?;
            if let Err(e) = vivo.validate() {
                tracing::warn!(error = %e, "configuration incomplete, requests without explicit settings will fail");
            }
            serve(ServerConfig { bind, cors, vivo }).await
        }

        Commands::Query { query, update, url, email, password } => {
            let vivo = load_config(&cli.config)?;
            let text = if query == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                query
            };

            let source = SettingsSource::from_optional(Some(ConnectionSettings {
                base_url: url.unwrap_or_default(),
                email: email.unwrap_or_default(),
                password: password.unwrap_or_default(),
                graph: None,
            }));
            if source == SettingsSource::UseDefault {
                vivo.validate()
                    .context("no --url/--email/--password given and the configuration is incomplete")?;
            }

            let client = VivoClient::new(&vivo);
            print_outcome(&client.dispatch(&text, !update, source).await)
        }

        Commands::Test { kind } => {
            let vivo = load_config(&cli.config)?;
            let runner = TestRunner::new(VivoClient::new(&vivo), TestGate::from_config(&vivo));
            print_outcome(&runner.run(&kind).await)
        }

        Commands::Template { kind, graph } => {
            let operation: TestOperation = kind.parse()?;
            let graph = match graph {
                Some(graph) => graph,
                None => load_config(&cli.config)?.graph,
            };
            println!("{}", operation.render(&graph).text);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<VivoConfig> {
    let config = VivoConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), url = %config.base_url, "configuration loaded");
    Ok(config)
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = VivoConfig {
        base_url: "http://localhost:8080/vivo".to_string(),
        email: "vivo_root@example.org".to_string(),
        graph: "http://vitro.mannlib.cornell.edu/default/vitro-kb-2".to_string(),
        ..VivoConfig::default()
    };
    config.save(path)?;

    tracing::info!(path = %path.display(), "configuration written");
    Ok(())
}

fn print_outcome(outcome: &Outcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
    if !outcome.is_success() {
        bail!("request failed with status {}", outcome.http_status());
    }
    Ok(())
}
