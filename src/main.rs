use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kmeans_viz::render::ShapeKind;
use kmeans_viz::{ActionError, Command, Config, KMeansClient, Outcome, Plot, Session, alert_text};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Step through K-Means clustering on a remote server, one SVG frame per step.
#[derive(Parser)]
#[command(name = "kmeans-viz", version, about)]
struct Cli {
    /// JSON config file; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the clustering server
    #[arg(long, global = true)]
    server: Option<String>,

    /// Points per generated dataset
    #[arg(long, global = true)]
    points: Option<usize>,

    /// Initialization method sent with each step
    #[arg(long, global = true)]
    init_method: Option<String>,

    /// SVG file rewritten after every redraw
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Seed for reproducible datasets
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[arg(long, global = true)]
    width: Option<u32>,

    #[arg(long, global = true)]
    height: Option<u32>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Read commands from stdin (default)
    Session,
    /// Generate once, then run a fixed number of steps
    Run {
        #[arg(long, default_value_t = 1)]
        steps: usize,
    },
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(server) = &self.server {
            config.server = server.clone();
        }
        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(init_method) = &self.init_method {
            config.init_method = init_method.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = Some(timeout_secs);
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "kmeans_viz=debug"
    } else {
        "kmeans_viz=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn alert(err: &ActionError) {
    eprintln!("{}", alert_text(err));
}

/// Write a frame; a failed write is reported like any other failed action.
fn present(plot: &Plot, output: &Path) -> bool {
    match plot.write_svg(output) {
        Ok(()) => {
            println!(
                "✓ {} points, {} centroids -> {}",
                plot.count(ShapeKind::DataPoint),
                plot.count(ShapeKind::Centroid),
                output.display()
            );
            true
        }
        Err(e) => {
            warn!(error = %e, path = %output.display(), "failed to write frame");
            eprintln!("Error: could not write {}: {}", output.display(), e);
            false
        }
    }
}

async fn run_interactive(session: &mut Session<KMeansClient>, output: &Path) -> Result<()> {
    println!("Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(command).await {
            Ok(Outcome::Redrawn(plot)) => {
                present(&plot, output);
            }
            Ok(Outcome::Info(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => alert(&e),
        }
    }

    Ok(())
}

async fn run_steps(session: &mut Session<KMeansClient>, steps: usize, output: &Path) -> bool {
    for i in 1..=steps {
        let step_start = Instant::now();
        match session.step().await {
            Ok(plot) => {
                debug!(step = i, elapsed = ?step_start.elapsed(), "step done");
                if !present(&plot, output) {
                    return false;
                }
            }
            Err(e) => {
                alert(&e);
                return false;
            }
        }
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.resolve_config()?;
    let client = match config.timeout() {
        Some(timeout) => KMeansClient::with_timeout(&config.server, timeout)
            .context("Failed to build HTTP client")?,
        None => KMeansClient::new(&config.server),
    };
    let mut session = Session::from_config(client, &config);

    println!(
        "=== kmeans-viz: {} (method: {}) ===",
        config.server, config.init_method
    );

    // The page generates a dataset as soon as it loads.
    let generated = match session.generate().await {
        Ok(plot) => present(&plot, &config.output),
        Err(e) => {
            alert(&e);
            false
        }
    };

    match cli.mode.unwrap_or(Mode::Session) {
        Mode::Session => run_interactive(&mut session, &config.output).await?,
        Mode::Run { steps } => {
            if !generated || !run_steps(&mut session, steps, &config.output).await {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
