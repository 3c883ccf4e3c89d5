use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};

use motiv_calc::scoring::{Collector, Component, ScoreEngine, ScoreResult, ValueSet};
use motiv_calc::Error;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_EXPORT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

/// One flag per component. Unset flags take the configured starting value.
#[derive(Args, Debug, Clone, Default)]
struct ValueArgs {
    /// Digital technologies (diaries, sensors, video, platforms)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    digital: Option<f64>,

    /// Individual motivational profile
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    profile: Option<f64>,

    /// Diagnostics (motivation, anxiety, attitude to training, sociometry)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    diagnostics: Option<f64>,

    /// External agents (coach, parents, group climate, incentives)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    agents: Option<f64>,

    /// Basic needs (autonomy, competence, belonging)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    needs: Option<f64>,

    /// Self-regulation skills (goal setting, self-analysis, volition)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    selfreg: Option<f64>,

    /// Evaluation & correction (data analysis, feedback)
    #[arg(long, value_name = "0-10", allow_negative_numbers = true)]
    eval: Option<f64>,
}

impl ValueArgs {
    fn get(&self, component: Component) -> Option<f64> {
        match component {
            Component::DigitalTechnologies => self.digital,
            Component::IndividualProfile => self.profile,
            Component::Diagnostics => self.diagnostics,
            Component::ExternalAgents => self.agents,
            Component::BasicNeeds => self.needs,
            Component::SelfRegulation => self.selfreg,
            Component::EvaluationCorrection => self.eval,
        }
    }
}

/// Collects from command-line flags. Values are passed through unclamped;
/// the engine rejects anything outside 0-10.
struct FlagCollector {
    args: ValueArgs,
    default: f64,
}

impl Collector for FlagCollector {
    fn collect(&mut self) -> motiv_calc::Result<ValueSet> {
        let mut values = ValueSet::uniform(self.default);
        for component in Component::ALL {
            if let Some(value) = self.args.get(component) {
                values.set(component, value);
            }
        }
        Ok(values)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive sliders with a live radar chart (default if no subcommand)
    Tui,
    /// Print the motivation score for the given ratings
    Score {
        #[command(flatten)]
        values: ValueArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the score and save it to a .csv or .txt file
    Export {
        /// Destination file; the extension selects the format
        path: PathBuf,

        #[command(flatten)]
        values: ValueArgs,
    },
    /// Describe the model and its components
    About,
}

#[derive(Parser, Debug)]
#[command(name = "motiv-calc")]
#[command(about = "Athlete motivation calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (defaults to ~/.config/motiv-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_code_for(err: &Error) -> i32 {
    if err.is_input_error() {
        EXIT_INPUT
    } else {
        EXIT_EXPORT
    }
}

fn score_values(engine: &ScoreEngine, collector: &mut impl Collector) -> (ValueSet, ScoreResult) {
    let outcome = collector
        .collect()
        .and_then(|values| engine.compute(&values).map(|result| (values, result)));

    match outcome {
        Ok(scored) => scored,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    motiv_calc::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Tui);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match motiv_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = motiv_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let engine = ScoreEngine::default();
    let use_colors = motiv_calc::output::should_use_colors();

    match command {
        Commands::Score { values, json } => {
            let mut collector = FlagCollector {
                args: values,
                default: config.initial_value,
            };
            let (values, result) = score_values(&engine, &mut collector);

            if json {
                match motiv_calc::output::format_json(&values, &result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to encode JSON: {}", e);
                        std::process::exit(EXIT_EXPORT);
                    }
                }
            } else {
                println!("{}", motiv_calc::output::format_report(&result, use_colors));
            }
        }
        Commands::Export { path, values } => {
            let mut collector = FlagCollector {
                args: values,
                default: config.initial_value,
            };
            let (values, result) = score_values(&engine, &mut collector);
            let timestamp = Local::now().naive_local();

            match motiv_calc::export::write(&path, &values, result.score, timestamp) {
                Ok(written) => {
                    println!("{}", motiv_calc::output::format_headline(result.score, use_colors));
                    println!("Saved to {}", written.display());
                }
                Err(e) => {
                    eprintln!("Export failed: {}", e);
                    std::process::exit(exit_code_for(&e));
                }
            }
        }
        Commands::About => {
            println!("{}", motiv_calc::output::format_about(use_colors));
        }
        Commands::Tui => {
            let theme = motiv_calc::tui::resolve_theme(config.theme);
            let app = match motiv_calc::tui::App::new(engine, config, theme) {
                Ok(app) => app,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(exit_code_for(&e));
                }
            };

            if let Err(e) = motiv_calc::tui::run_tui(app).await.context("TUI error") {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_EXPORT);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
