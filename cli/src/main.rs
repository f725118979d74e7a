use clap::{Args, Parser, Subcommand};
use portion::config::Config;
use portion::ingredients::{self, IngredientProcessor};
use portion::quantity::{self, MeasurementSystem, ScaleFactor};
use tracing::info;

const DEFAULT_CONFIG: &str = "portion.toml";

#[derive(Parser)]
#[command(name = "portion")]
#[command(about = "Scale and convert recipe ingredient quantities", long_about = None)]
struct Cli {
    /// Log pass-through decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ScaleArgs {
    /// Multiply every quantity by this factor
    #[arg(short, long, conflicts_with_all = ["servings", "original"])]
    factor: Option<f64>,

    /// Desired number of servings
    #[arg(short, long)]
    servings: Option<f64>,

    /// Servings the recipe was written for
    #[arg(short, long)]
    original: Option<f64>,
}

impl ScaleArgs {
    /// Resolve flags against config values; flags win
    fn resolve(&self, config: &Config) -> Result<ScaleFactor, quantity::QuantityError> {
        if let Some(factor) = self.factor {
            return ScaleFactor::new(factor);
        }
        if self.servings.is_none() && self.original.is_none() {
            return config.scale_factor();
        }
        let merged = Config {
            desired_servings: self.servings.or(config.desired_servings),
            original_servings: self.original.or(config.original_servings),
            ..config.clone()
        };
        merged.scale_factor()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Split an ingredient line into quantity, unit and item (JSON)
    Parse {
        /// Ingredient line (e.g., "1 1/2 cups flour")
        ingredient: String,
    },

    /// Render a number the way recipes display it
    Format {
        quantity: f64,
    },

    /// Scale an ingredient line
    Scale {
        ingredient: String,

        #[command(flatten)]
        scale: ScaleArgs,
    },

    /// Scale an ingredient line, then convert it to another measurement system
    Convert {
        ingredient: String,

        /// Target system: metric or imperial
        #[arg(short = 'S', long)]
        system: MeasurementSystem,

        #[command(flatten)]
        scale: ScaleArgs,
    },

    /// Convert a quantity between two units of the same kind
    Unit {
        quantity: f64,

        /// Source unit (e.g., "tbsp")
        from: String,

        /// Target unit (e.g., "tsp")
        to: String,
    },

    /// Render every ingredient line of a recipe file
    Recipe {
        /// Text file with one ingredient per line
        file: String,

        /// Target system: metric or imperial (default: from config, else no conversion)
        #[arg(short = 'S', long)]
        system: Option<MeasurementSystem>,

        /// Config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,

        #[command(flatten)]
        scale: ScaleArgs,
    },

    /// Process a grocery list (JSON array of strings or {name, checked, category})
    Grocery {
        /// JSON file with the grocery items
        file: String,

        /// Target system: metric or imperial (default: from config, else no conversion)
        #[arg(short = 'S', long)]
        system: Option<MeasurementSystem>,

        /// Config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<String>,

        #[command(flatten)]
        scale: ScaleArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parse { ingredient } => parse_ingredient(&ingredient),
        Commands::Format { quantity } => {
            println!("{}", quantity::format_quantity(quantity));
            Ok(())
        }
        Commands::Scale { ingredient, scale } => scale_ingredient(&ingredient, &scale),
        Commands::Convert {
            ingredient,
            system,
            scale,
        } => convert_ingredient(&ingredient, system, &scale),
        Commands::Unit { quantity, from, to } => convert_unit(quantity, &from, &to),
        Commands::Recipe {
            file,
            system,
            config,
            scale,
        } => render_recipe(&file, system, &config, &scale),
        Commands::Grocery {
            file,
            system,
            config,
            output,
            scale,
        } => process_grocery(&file, system, &config, output.as_deref(), &scale),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_ingredient(ingredient: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = quantity::parse(ingredient);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn scale_ingredient(
    ingredient: &str,
    scale: &ScaleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let factor = scale.resolve(&Config::empty())?;
    println!("{}", quantity::scale(ingredient, factor.value()));
    Ok(())
}

fn convert_ingredient(
    ingredient: &str,
    system: MeasurementSystem,
    scale: &ScaleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let factor = scale.resolve(&Config::empty())?;
    println!(
        "{}",
        quantity::scale_and_convert(ingredient, factor.value(), system)
    );
    Ok(())
}

fn convert_unit(quantity: f64, from: &str, to: &str) -> Result<(), Box<dyn std::error::Error>> {
    let converted = quantity::convert_to_unit(quantity, from, to)?;
    println!("{} {}", quantity::format_quantity(converted), to);
    Ok(())
}

fn build_processor(
    system: Option<MeasurementSystem>,
    config_path: &str,
    scale: &ScaleArgs,
) -> Result<IngredientProcessor, Box<dyn std::error::Error>> {
    let config = Config::load_or_empty(config_path)?;
    let factor = scale.resolve(&config)?;
    let system = system.or(config.measurement_system);

    info!(factor = factor.value(), system = ?system, "processing ingredients");
    Ok(IngredientProcessor::new(factor, system))
}

fn render_recipe(
    path: &str,
    system: Option<MeasurementSystem>,
    config_path: &str,
    scale: &ScaleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_processor(system, config_path, scale)?;

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read recipe file '{}': {}", path, e))?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for line in processor.render(&lines) {
        println!("{}", line);
    }

    Ok(())
}

fn process_grocery(
    path: &str,
    system: Option<MeasurementSystem>,
    config_path: &str,
    output: Option<&str>,
    scale: &ScaleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let processor = build_processor(system, config_path, scale)?;

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read grocery file '{}': {}", path, e))?;
    let items: Vec<ingredients::GroceryItem> = serde_json::from_str(&content)?;

    let lines = ingredients::process_grocery_items(items, &processor);
    let json = serde_json::to_string_pretty(&lines)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Grocery list written to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
