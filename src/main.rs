//! Main CLI application for the incremental Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    config::{CliOverrides, OutputFormat, SeedSource, Settings},
    engine::LifeEngine,
    seed::{create_example_patterns, load_pattern_from_file},
    seeded_engine,
    utils::{ColorOutput, GridFormatter},
    SimulationRunner,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Incremental Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a grid and run it until stable or a generation cap
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Maximum generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Random seed density in [0, 1] (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Fixed RNG seed for reproducible grids (overrides config)
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Seed from a pattern file instead of random cells (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a pattern file one step at a time, showing each delta
    Step {
        /// Pattern file to load
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of steps to perform
        #[arg(short, long, default_value_t = 1)]
        steps: usize,

        /// Show row and column numbers
        #[arg(long)]
        show_coords: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            density,
            rng_seed,
            pattern,
            verbose,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                density,
                rng_seed,
                pattern_file: pattern,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Step {
            pattern,
            steps,
            show_coords,
        } => step_command(pattern, steps, show_coords),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.width, settings.grid.height);
        println!("  Seed source: {:?}", settings.seed.source);
        println!("  Density: {}", settings.seed.density);
        println!("  Max generations: {}", settings.run.max_generations);
        println!("  Stop when stable: {}", settings.run.stop_when_stable);
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let engine = seeded_engine(&settings).context("Failed to seed the grid")?;

    let quiet = settings.output.format == OutputFormat::Json;
    if !quiet {
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Running {}x{} grid with {} live cells",
                engine.width(),
                engine.height(),
                engine.live_count()
            ))
        );
    }

    let mut runner = SimulationRunner::new(
        engine,
        settings.run.max_generations,
        settings.run.stop_when_stable,
    );

    let format = settings.output.format;
    let print_every = settings.output.print_every;
    let report = runner.run_with(|engine, generation, delta| match format {
        OutputFormat::Text => {
            if print_every > 0 && generation % print_every == 0 {
                println!("Generation {}: {}", generation, GridFormatter::format_delta(delta));
                print!("{}", engine);
            }
        }
        OutputFormat::Json => {
            if let Ok(line) = serde_json::to_string(delta) {
                println!("{}", line);
            }
        }
        OutputFormat::Summary => {}
    });

    match format {
        OutputFormat::Text => {
            println!("\nFinal grid:");
            print!("{}", runner.engine());
            println!("\n{}", report);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Summary => {
            println!("{}", report);
        }
    }

    if !quiet {
        let outcome = if report.quiescent {
            format!("Grid stabilized after {} generation(s)", report.generations)
        } else {
            format!("Reached the {} generation cap", report.generations)
        };
        println!("{}", ColorOutput::success(&outcome));
    }

    Ok(())
}

fn step_command(pattern_path: PathBuf, steps: usize, show_coords: bool) -> Result<()> {
    let pattern = load_pattern_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    let mut engine = LifeEngine::new(pattern.width, pattern.height)
        .with_context(|| format!("Pattern {} has unusable dimensions", pattern_path.display()))?;
    engine.seed(pattern.cells.iter().copied());

    println!("Initial state ({} live cells):", engine.live_count());
    print_grid(&engine, show_coords);

    for generation in 1..=steps {
        let delta = engine.step();
        println!(
            "\nGeneration {}: {}",
            generation,
            GridFormatter::format_delta(&delta)
        );
        print_grid(&engine, show_coords);

        if delta.is_quiescent() {
            println!("{}", ColorOutput::info("Grid is stable, stopping early"));
            break;
        }
    }

    Ok(())
}

fn print_grid(engine: &LifeEngine, show_coords: bool) {
    if show_coords {
        print!("{}", GridFormatter::format_with_coords(engine));
    } else {
        print!("{}", engine);
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Default configuration (random soup)
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // A variant that stamps a pattern file instead of random soup
    let mut glider_config = Settings::default();
    glider_config.grid.width = 24;
    glider_config.grid.height = 24;
    glider_config.seed.source = SeedSource::Pattern;
    glider_config.seed.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.run.max_generations = 100;
    glider_config.to_file(&config_dir.join("glider.yaml"))?;
    println!("Created: {}", config_dir.join("glider.yaml").display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Or step a pattern: cargo run -- step --pattern patterns/blinker.txt --steps 2");

    Ok(())
}
