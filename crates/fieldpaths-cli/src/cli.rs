use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use fieldpaths_build::{
    config::{CONFIG_FILE_NAME, Config},
    emit::FileEmitter,
    generate::Generator,
    schema::load::ModelManifest,
    tree,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "fieldpaths",
    version,
    about = "Generate query path constants for model classes"
)]
pub struct Cli {
    /// Log traversal details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write one artifact per project class plus an index file.
    Generate(GenerateArgs),

    /// Print the path tree of a single class as JSON.
    Tree(TreeArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Model manifest (JSON).
    #[arg(long)]
    pub model: PathBuf,

    /// Output directory.
    #[arg(long)]
    pub out: PathBuf,

    /// Config file; defaults to `fieldpaths.toml` next to the manifest.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop at the first class that fails to generate.
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Model manifest (JSON).
    #[arg(long)]
    pub model: PathBuf,

    /// Qualified name of the root class.
    #[arg(long)]
    pub class: String,
}

/// Run a parsed command; `Ok(false)` means generation finished with
/// failures.
pub fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Tree(args) => {
            println!("{}", render_tree(&args)?);
            Ok(true)
        }
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<bool> {
    let pool = ModelManifest::load(&args.model)?.into_pool();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(default_config_path(&args.model))?,
    };
    config.generate.fail_fast |= args.fail_fast;

    let mut emitter = FileEmitter::new(&args.out, &config.emit)?;
    let report = Generator::new(&pool, config.generate).generate_report(&mut emitter);

    if report.is_success() {
        info!(
            artifacts = report.emitted.len(),
            index = %emitter.index_path().display(),
            "field paths generated"
        );
    } else {
        warn!(
            failed = report.failures.len(),
            skipped = report.skipped,
            attempted = report.attempted(),
            "field path generation finished with failures"
        );
    }

    Ok(report.is_success())
}

fn render_tree(args: &TreeArgs) -> anyhow::Result<String> {
    let pool = ModelManifest::load(&args.model)?.into_pool();
    let Some(class) = pool.get(&args.class) else {
        bail!("class '{}' not found in {}", args.class, args.model.display());
    };

    let nodes = tree::build(class, &pool);
    serde_json::to_string_pretty(&nodes).context("failed to serialize path tree")
}

fn default_config_path(model: &Path) -> PathBuf {
    model
        .parent()
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |dir| dir.join(CONFIG_FILE_NAME))
}

///
/// TESTS
///
