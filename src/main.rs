//! Posture comparison runner for recorded landmark traces.

use anyhow::Result;
use clap::Parser;
use log::info;
use shoulder_rehab::config::Config;
use shoulder_rehab::exercise::{mode_for_exercise, EXERCISES};
use shoulder_rehab::pipeline::{EvaluationResult, FrameEvaluator};
use shoulder_rehab::report::{ExercisePrescription, PatientInfo, ReportAssembler};
use shoulder_rehab::session::{ComparisonSession, EvaluationSink, FanoutSink, ReferenceClip};
use shoulder_rehab::trace::TraceSource;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark trace file to evaluate (JSON lines)
    #[arg(short, long)]
    trace: PathBuf,

    /// Exercise being performed (defaults to the configured exercise)
    #[arg(short, long)]
    exercise: Option<String>,

    /// Patient name for the report
    #[arg(short, long, default_value = "")]
    patient: String,

    /// Patient age for the report
    #[arg(long)]
    age: Option<u32>,

    /// Prescribed repetitions
    #[arg(long, default_value = "")]
    reps: String,

    /// Prescribed series
    #[arg(long, default_value = "")]
    series: String,

    /// Prescribed load or resistance
    #[arg(long, default_value = "")]
    load: String,

    /// Where to write the report record (JSON)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// List known exercises and exit
    #[arg(long)]
    list_exercises: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Prints each evaluated frame the way the live overlay shows it
struct ConsoleRenderer;

impl EvaluationSink for ConsoleRenderer {
    fn on_result(&mut self, result: &EvaluationResult) -> shoulder_rehab::Result<()> {
        let flexion_mark = if result.flexion_on_target { "ok" } else { "off" };
        let abduction = match (result.abduction_deg, result.abduction_on_target) {
            (Some(angle), Some(true)) => format!("{angle:.1}° [ok]"),
            (Some(angle), _) => format!("{angle:.1}° [off]"),
            _ => "—".to_string(),
        };
        info!(
            "Flexion: {:.1}° [{}]  Abduction: {}",
            result.flexion_deg, flexion_mark, abduction
        );
        Ok(())
    }
}

/// Offline runs have no reference clip to advance
struct NoReference;

impl ReferenceClip for NoReference {
    fn advance(&mut self) -> shoulder_rehab::Result<bool> {
        Ok(true)
    }

    fn rewind(&mut self) -> shoulder_rehab::Result<()> {
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.list_exercises {
        for (name, mode) in EXERCISES {
            println!("{name} ({mode})");
        }
        return Ok(());
    }

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        Config::from_file(config_path)?
    } else {
        Config::default()
    };
    config.validate()?;

    let exercise = args
        .exercise
        .unwrap_or_else(|| config.session.default_exercise.clone());
    let mode = mode_for_exercise(&exercise);
    info!("Evaluating '{exercise}' in {mode} mode");

    let mut session = ComparisonSession::new(FrameEvaluator::from_config(mode, &config));
    session.set_loop_reference(config.session.loop_reference);

    let mut renderer = ConsoleRenderer;
    let mut assembler = ReportAssembler::new(
        PatientInfo {
            name: args.patient,
            age: args.age,
            diagnosis: None,
        },
        exercise,
        mode,
        config.evaluation.target_angles.clone(),
        ExercisePrescription {
            repetitions: args.reps,
            series: args.series,
            load: args.load,
        },
    );

    let source = TraceSource::open(&args.trace)?;
    let summary = {
        let mut sink = FanoutSink::new(vec![&mut renderer, &mut assembler]);
        session.run(source, None::<NoReference>, &mut sink)?
    };

    info!("Session finished after {} frames", summary.frames_processed);

    let record = assembler.finish();
    let report_path = args.report.unwrap_or(config.report.output_path);
    record.write_json(&report_path)?;
    info!("Report written to {}", report_path.display());

    Ok(())
}
