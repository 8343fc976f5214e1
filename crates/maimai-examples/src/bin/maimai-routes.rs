//! maimai-routes
//!
//! Declares the sample application and prints what the dispatcher would see:
//! route tables, resolved class views, validation findings.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use maimai_core::CoreConfig;
use maimai_examples::{logging, report, routed_classes, sample_registry};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "maimai-routes")]
#[command(about = "Inspect the resolved routes of the maimai sample application", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (maimai.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table of every routed class (default)
    Routes,

    /// Validate every routed class, failing on errors
    Validate,

    /// Print the resolved view of one class with its inherited metadata
    Inspect {
        /// Class name or full type path (e.g. UserController)
        class: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CoreConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CoreConfig::default(),
    };
    logging::init(&config.logging)?;

    let registry = sample_registry(config.registry.clone())?;
    let reflector = registry.reflector();
    let classes = routed_classes(&registry);
    info!(classes = classes.len(), "sample application declared");

    match cli.command.unwrap_or(Commands::Routes) {
        Commands::Routes => match cli.format {
            OutputFormat::Text => print!("{}", report::render_text(&reflector, &classes)),
            OutputFormat::Json => {
                let value = report::render_json(&reflector, &classes)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        },

        Commands::Validate => {
            let mut failed = 0;
            for &class in &classes {
                let outcome = reflector.validate(class).ensure_valid(class, &config.validation);
                match outcome {
                    Ok(()) => println!("{class}: ok"),
                    Err(err) => {
                        warn!(class = %class, "validation failed");
                        println!("{err}");
                        for error in &err.errors {
                            println!("  error: {error}");
                        }
                        for warning in &err.warnings {
                            println!("  warning: {warning}");
                        }
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} class(es) failed validation");
            }
        }

        Commands::Inspect { class } => {
            let table = registry.classes();
            let Some(info) = table.get_by_name(&class) else {
                let candidates: Vec<&str> =
                    table.classes_named(&class).iter().map(|c| c.path()).collect();
                if candidates.is_empty() {
                    anyhow::bail!("unknown class {class}");
                }
                anyhow::bail!("ambiguous class {class}; use one of: {}", candidates.join(", "));
            };
            let inherited = reflector.inherited_metadata(info.class);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inherited)?),
                OutputFormat::Text => {
                    print!("{}", report::render_text(&reflector, &[info.class]));
                    for entry in &inherited.inherited {
                        println!("inherits from:");
                        print!("{}", report::render_text(&reflector, &[entry.class]));
                    }
                }
            }
        }
    }

    Ok(())
}
