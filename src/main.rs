//! Main CLI application for the digits puzzle solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use digits_solver::{
    arithmetic::Step,
    config::{CliOverrides, Settings},
    puzzle::{DigitProblem, SolutionValidator},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "digits_solver")]
#[command(about = "Countdown / NYT Digits puzzle solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a digits puzzle
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Goal number (overrides config)
        #[arg(short, long)]
        goal: Option<u64>,

        /// Numbers that can be used, each at most once (overrides config)
        #[arg(short, long, num_args = 1..)]
        inputs: Option<Vec<u64>>,

        /// Display every distinct solution, not just the optimal one
        #[arg(short, long)]
        all: bool,

        /// Search top-level branches in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Maximum solutions to keep after ranking (overrides config)
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Save solutions to this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replay a claimed solution and check it against the puzzle rules
    Validate {
        /// Goal number
        #[arg(short, long)]
        goal: u64,

        /// Numbers the solution may use
        #[arg(short, long, num_args = 1..)]
        inputs: Vec<u64>,

        /// Solution steps, comma separated, e.g. "2 + 3 = 5, 5 * 5 = 25"
        #[arg(short, long)]
        steps: Option<String>,

        /// Saved solution JSON file (alternative to --steps)
        #[arg(short = 'f', long)]
        solution_file: Option<PathBuf>,

        /// Show the working numbers after each step
        #[arg(long)]
        show_trace: bool,
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
        Commands::Solve {
            config,
            goal,
            inputs,
            all,
            parallel,
            max_solutions,
            output,
            verbose,
        } => solve_command(config, goal, inputs, all, parallel, max_solutions, output, verbose),
        Commands::Validate {
            goal,
            inputs,
            steps,
            solution_file,
            show_trace,
        } => validate_command(goal, inputs, steps, solution_file, show_trace),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

#[allow(clippy::too_many_arguments)]
fn solve_command(
    config_path: PathBuf,
    goal: Option<u64>,
    inputs: Option<Vec<u64>>,
    show_all: bool,
    parallel: bool,
    max_solutions: Option<usize>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔢 Starting Digits Puzzle Solver"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        objective: goal,
        inputs,
        show_all,
        parallel,
        max_solutions,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Objective: {}", settings.puzzle.objective);
        println!("  Inputs: {:?}", settings.puzzle.inputs);
        println!("  Parallel: {}", settings.solver.parallel);
        println!();
    }

    let start_time = Instant::now();
    let mut problem =
        DigitProblem::new(settings.clone()).context("Failed to create digits problem")?;

    if verbose {
        println!("{}", problem.estimate_search_space());
        println!();
    }

    let solutions = problem.solve().context("Failed to solve puzzle")?;
    let total_time = start_time.elapsed();

    println!(
        "{}",
        ColorOutput::success(&SolutionFormatter::format_summary(
            &solutions,
            total_time.as_secs_f64()
        ))
    );

    if solutions.is_empty() {
        println!("{}", ColorOutput::warning("❌ No solutions found"));
        return Ok(());
    }

    println!(
        "{}",
        ColorOutput::info(&format!("Optimal solution: {}", solutions[0]))
    );

    if settings.output.show_all {
        println!("\n{}", SolutionFormatter::format_solution_table(&solutions));
    }

    if settings.output.save_solutions {
        SolutionFormatter::save_solutions(
            &solutions,
            &settings.output.output_directory,
            settings.output.format,
        )
        .context("Failed to save solutions")?;

        println!(
            "{}",
            ColorOutput::success(&format!(
                "💾 Solutions saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn validate_command(
    goal: u64,
    inputs: Vec<u64>,
    steps: Option<String>,
    solution_file: Option<PathBuf>,
    show_trace: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating solution..."));

    let history: Vec<Step> = match (steps, solution_file) {
        (Some(steps), None) => parse_steps(&steps)?,
        (None, Some(path)) => {
            let solution = digits_solver::Solution::load_from_file(&path)
                .with_context(|| format!("Failed to load solution from {}", path.display()))?;
            solution.history
        }
        _ => anyhow::bail!("Provide exactly one of --steps or --solution-file"),
    };

    let validator = SolutionValidator::new(goal, inputs);
    let result = validator.validate(&history);

    println!("{}", result);

    if show_trace {
        println!("Reduction trace:");
        for (i, numbers) in result.reduction_trace.iter().enumerate() {
            println!("  after {} step(s): {:?}", i, numbers);
        }
    }

    if result.is_valid {
        println!("{}", ColorOutput::success("✅ Solution is valid!"));
    } else {
        println!("{}", ColorOutput::error("❌ Solution is invalid"));
    }

    Ok(())
}

/// Parse a comma-separated list of textual operation steps
fn parse_steps(steps: &str) -> Result<Vec<Step>> {
    steps
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<Step>()
                .with_context(|| format!("Failed to parse step '{}'", part.trim()))
        })
        .collect()
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

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

    let examples_dir = config_dir.join("puzzles");
    std::fs::create_dir_all(&examples_dir)?;

    // A small countdown-style puzzle
    let mut small = Settings::default();
    small.puzzle.objective = 10;
    small.puzzle.inputs = vec![2, 3, 5];
    small.output.show_all = true;
    small.to_file(&examples_dir.join("small.yaml"))?;

    // A full six-number puzzle, worth solving in parallel
    let mut large = Settings::default();
    large.puzzle.objective = 600;
    large.puzzle.inputs = vec![25, 50, 75, 100, 3, 6];
    large.solver.parallel = true;
    large.to_file(&examples_dir.join("large.yaml"))?;

    println!("Created example puzzles in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- solve --goal 10 --inputs 2 3 5 --all");

    Ok(())
}
