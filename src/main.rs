//! CLI shell driving the simulation engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, InitialState, OutputFormat, Settings},
    game_of_life::{lookup, PatternKind, CATALOG},
    simulation::{Runner, Session},
    utils::{ColorOutput, GridFormatter, StatusFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Toroidal Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in cells (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in cells (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Tick delay in milliseconds (overrides config)
        #[arg(short, long)]
        speed: Option<u64>,

        /// Pattern stamped before the run starts (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Anchor for the stamped pattern as ROW,COL (default: grid center)
        #[arg(long)]
        at: Option<String>,

        /// Number of generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Start from a randomized grid instead of a stamped pattern
        #[arg(long)]
        random: bool,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the tick delay between generations
        #[arg(long)]
        fast: bool,

        /// Render the grid after every generation
        #[arg(short, long)]
        watch: bool,

        /// Emit the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the pattern catalog
    Patterns {
        /// Print the mask of a single pattern
        #[arg(short, long)]
        show: Option<String>,
    },

    /// Create example configuration files
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
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            speed,
            pattern,
            at,
            generations,
            random,
            seed,
            fast,
            watch,
            json,
        } => {
            let anchor = at.as_deref().map(parse_anchor).transpose()?;
            run_command(
                config,
                CliOverrides {
                    width,
                    height,
                    initial_state: random.then_some(InitialState::Random),
                    seed,
                    speed_ms: speed,
                    pattern,
                    generations,
                },
                anchor,
                fast,
                watch,
                json,
            )
        }
        Commands::Patterns { show } => patterns_command(show),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Parse a "ROW,COL" anchor; either coordinate may be negative
fn parse_anchor(input: &str) -> Result<(i64, i64)> {
    let (row, col) = input
        .split_once(',')
        .with_context(|| format!("Invalid anchor '{}', expected ROW,COL", input))?;

    let row = row
        .trim()
        .parse()
        .with_context(|| format!("Invalid anchor row '{}'", row))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("Invalid anchor column '{}'", col))?;

    Ok((row, col))
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    anchor: Option<(i64, i64)>,
    fast: bool,
    watch: bool,
    json: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    let stamp_requested = overrides.pattern.is_some();
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut session = Session::new(&settings).context("Failed to create session")?;

    // Stamp the selected pattern unless the run starts from a random grid
    if stamp_requested || settings.grid.initial_state == InitialState::Empty {
        let pattern = session.selected_pattern();
        let (row, col) = anchor.unwrap_or_else(|| {
            (
                (settings.grid.height as i64 - pattern.height() as i64) / 2,
                (settings.grid.width as i64 - pattern.width() as i64) / 2,
            )
        });
        session.stamp(row, col);
    }

    session.start();
    let runner = Runner::new(Some(settings.simulation.generations)).paced(!fast);
    let advanced = runner.run(&mut session, |session| {
        if watch {
            println!("{}", StatusFormatter::line(session));
            print!("{}", GridFormatter::compact(session.grid()));
            println!();
        }
    });

    if json || settings.output.format == OutputFormat::Json {
        let snapshot = session.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!(
        "{}",
        ColorOutput::success(&format!("Advanced {} generation(s)", advanced))
    );
    println!("{}", StatusFormatter::readout(&session));
    if settings.output.show_grid && !watch {
        print!("{}", GridFormatter::compact(session.grid()));
    }

    Ok(())
}

fn patterns_command(show: Option<String>) -> Result<()> {
    if let Some(name) = show {
        let pattern = lookup(&name)?;
        println!(
            "{} ({}, {}x{})",
            pattern.name,
            pattern.kind.label(),
            pattern.width(),
            pattern.height()
        );
        print!("{}", GridFormatter::pattern(pattern));
        return Ok(());
    }

    for kind in [
        PatternKind::StillLife,
        PatternKind::Oscillator,
        PatternKind::Spaceship,
        PatternKind::Gun,
    ] {
        println!("{}", ColorOutput::info(kind.label()));
        for pattern in CATALOG.iter().filter(|pattern| pattern.kind == kind) {
            println!(
                "  {:16} {}x{}, {} cells",
                pattern.name,
                pattern.width(),
                pattern.height(),
                pattern.live_cells().len()
            );
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let variants_dir = config_dir.join("presets");
    std::fs::create_dir_all(&variants_dir)?;

    // A glider crossing a small torus
    let mut glider_config = Settings::default();
    glider_config.grid.width = 20;
    glider_config.grid.height = 20;
    glider_config.simulation.pattern = "glider".to_string();
    glider_config.simulation.generations = 80;
    glider_config.to_file(&variants_dir.join("glider.yaml"))?;

    // A reproducible random soup
    let mut soup_config = Settings::default();
    soup_config.grid.initial_state = InitialState::Random;
    soup_config.grid.seed = Some(42);
    soup_config.simulation.generations = 500;
    soup_config.to_file(&variants_dir.join("soup.yaml"))?;

    println!("Created presets in: {}", variants_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete"));
    println!("Run: cargo run -- run --config config/default.yaml --pattern glider --watch");

    Ok(())
}
