use crate::arrivals::BernoulliArrivals;
use crate::config::{PartialConfig, SimConfig};
use crate::simulation::Simulation;
use crate::stats::{Report, Snapshot};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;
use tabled::settings::Style;
use tracing::info;
use tracing_subscriber::EnvFilter;
use turborand::GenCore;
use turborand::rng::Rng;

mod arrivals;
mod config;
mod plane;
mod queue;
mod runway;
mod simulation;
mod stats;
mod time;

/// Single-runway airport simulation. Parameters missing from the flags and the
/// scenario file are asked for interactively.
#[derive(Parser)]
#[command(version, about, allow_negative_numbers = true)]
struct Args {
    /// Path to a JSON scenario file with any of the six parameters
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Minutes one landing occupies the runway
    #[arg(long)]
    landing_service_time: Option<i64>,

    /// Minutes one takeoff occupies the runway
    #[arg(long)]
    takeoff_service_time: Option<i64>,

    /// Average minutes between arrivals to the landing queue
    #[arg(long)]
    avg_between_landings: Option<f64>,

    /// Average minutes between arrivals to the takeoff queue
    #[arg(long)]
    avg_between_takeoffs: Option<f64>,

    /// Minutes a plane can wait to land before running out of fuel
    #[arg(long)]
    max_landing_wait: Option<i64>,

    /// Total minutes to simulate
    #[arg(short, long)]
    total_sim_time: Option<i64>,

    /// Random seed for a reproducible run. A fresh one is drawn and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the per-minute queue sizes and runway state
    #[arg(long)]
    timeline: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn partial_config(&self) -> PartialConfig {
        PartialConfig {
            landing_service_time: self.landing_service_time,
            takeoff_service_time: self.takeoff_service_time,
            avg_between_landings: self.avg_between_landings,
            avg_between_takeoffs: self.avg_between_takeoffs,
            max_landing_wait: self.max_landing_wait,
            total_sim_time: self.total_sim_time,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    config: &'a SimConfig,
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<&'a [Snapshot]>,
}

fn ask<T: FromStr>(rl: &mut DefaultEditor, question: &str) -> Result<T, ReadlineError> {
    println!("{}", question);
    loop {
        let line = rl.readline(">> ")?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Could not read '{}', try again:", line.trim()),
        }
    }
}

fn ask_missing(partial: &mut PartialConfig) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    if partial.landing_service_time.is_none() {
        partial.landing_service_time = Some(ask(
            &mut rl,
            "Enter time needed for one plane to land (minutes, integer):",
        )?);
    }
    if partial.takeoff_service_time.is_none() {
        partial.takeoff_service_time = Some(ask(
            &mut rl,
            "Enter time needed for one plane to take off (minutes, integer):",
        )?);
    }
    if partial.avg_between_landings.is_none() {
        partial.avg_between_landings = Some(ask(
            &mut rl,
            "Enter average time (minutes) between arrivals to landing queue (double > 0):",
        )?);
    }
    if partial.avg_between_takeoffs.is_none() {
        partial.avg_between_takeoffs = Some(ask(
            &mut rl,
            "Enter average time (minutes) between arrivals to takeoff queue (double > 0):",
        )?);
    }
    if partial.max_landing_wait.is_none() {
        partial.max_landing_wait = Some(ask(
            &mut rl,
            "Enter maximum time a plane can wait in landing queue before running out of fuel (minutes, integer):",
        )?);
    }
    if partial.total_sim_time.is_none() {
        partial.total_sim_time = Some(ask(
            &mut rl,
            "Enter total length of time to be simulated (minutes, integer):",
        )?);
    }
    Ok(())
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    let _ = pager.wait();
}

fn print_timeline(snapshots: &[Snapshot]) {
    let mut table = tabled::Table::new(snapshots);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if snapshots.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,runway_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut partial = args.partial_config();
    if let Some(path) = &args.scenario {
        partial = partial.or(PartialConfig::load_from_file(path)?);
        info!(scenario = %path.display(), "loaded scenario");
    }

    if !partial.is_complete() {
        match ask_missing(&mut partial) {
            Ok(()) => {}
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return Ok(());
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }

    let config = match partial.validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid input: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(|| Rng::new().gen_u64());
    info!(seed, "seeded arrivals");

    let arrivals = BernoulliArrivals::seeded(&config, seed);
    let outcome = Simulation::new(config.clone(), arrivals).run();

    if args.json {
        let output = JsonOutput {
            seed,
            config: &config,
            report: &outcome.report,
            timeline: args.timeline.then_some(outcome.snapshots.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.timeline {
        print_timeline(&outcome.snapshots);
    }
    println!("\n{}", outcome.report);
    Ok(())
}
