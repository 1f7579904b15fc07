use crate::render::{render_handoff, render_questions};
use crate::session::{run_session, SessionOutcome};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use heartsafe::config::{AppConfig, OutputFormat};
use heartsafe::error::AppError;
use heartsafe::telemetry;
use heartsafe::workflows::assessment::{
    AnswerKey, AssessmentHandoff, AssessmentRecord, QuestionBank, RiskScorer,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "heartsafe",
    about = "Take the HeartSafe heart health assessment from the command line",
    version
)]
struct Cli {
    /// Output format for results (text or json); overrides HEARTSAFE_OUTPUT
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questionnaire interactively (default command)
    Assess,
    /// Score a set of answers without the interactive questionnaire
    Score(ScoreArgs),
    /// List the questions, options and their point weights
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answer as key=value, e.g. --answer bloodPressure=stage1 (repeatable)
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(AnswerKey, String)>,
    /// JSON file with an assessment record keyed by question name
    #[arg(long)]
    pub(crate) record: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let format = cli.format.unwrap_or(config.output);
    let command = cli.command.unwrap_or(Command::Assess);
    info!(environment = ?config.environment, ?format, "starting heartsafe");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Assess => run_assess(io::stdin().lock(), &mut io::stderr(), &mut out, format),
        Command::Score(args) => run_score(args, format, &mut out),
        Command::Questions => render_questions(&QuestionBank::standard(), format, &mut out),
    }
}

/// Runs the questionnaire with prompts on `prompts`, keeping `out` for the
/// rendered result only.
pub(crate) fn run_assess<R: BufRead, P: Write, W: Write>(
    input: R,
    prompts: &mut P,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), AppError> {
    match run_session(input, prompts)? {
        SessionOutcome::Completed(handoff) => {
            info!(
                score = handoff.result.score,
                tier = handoff.result.tier.label(),
                "assessment finished"
            );
            render_handoff(&handoff, format, out)
        }
        SessionOutcome::Aborted { answered } => {
            info!(answered, "assessment aborted before completion");
            writeln!(prompts, "Assessment cancelled; no results were produced.")?;
            Ok(())
        }
    }
}

pub(crate) fn run_score<W: Write>(
    args: ScoreArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let ScoreArgs { answers, record } = args;

    let mut record = match record {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str::<AssessmentRecord>(&raw)?
        }
        None => AssessmentRecord::new(),
    };
    for (key, value) in answers {
        record.set(key, value);
    }

    if !record.is_complete() {
        info!(
            answered = record.answered_count(),
            "scoring a partial assessment record"
        );
    }

    let handoff = AssessmentHandoff::new(record, &RiskScorer::default(), Utc::now());
    render_handoff(&handoff, format, out)
}

pub(crate) fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).ok_or_else(|| format!("unsupported format '{raw}' (use text or json)"))
}

pub(crate) fn parse_answer(raw: &str) -> Result<(AnswerKey, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.parse::<AnswerKey>().map_err(|err| err.to_string())?;
    Ok((key, value.trim().to_string()))
}
