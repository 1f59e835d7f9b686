use crate::infra::assessment_policy;
use chrono::Local;
use clap::{Args, ValueEnum};
use privacy_advisor::config::AppConfig;
use privacy_advisor::error::AppError;
use privacy_advisor::workflows::assessment::report::export::{render_text, write_csv};
use privacy_advisor::workflows::assessment::{
    AnswerSet, AssessmentReport, AssessmentService, Questionnaire,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON object mapping question keys to answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Report rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Reject the answers if any yes/no question is unanswered
    #[arg(long)]
    pub(crate) require_complete: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::standard(assessment_policy(
        &config.advisor,
        args.require_complete,
    ));

    let answers = read_answers(&args.answers)?;
    let report = service.assess(answers, Local::now().naive_local())?;

    let stdout = io::stdout();
    render_report(&report, args.format, stdout.lock())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let stdout = io::stdout();
    list_questions(&Questionnaire::standard(), &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn read_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_report<W: Write>(
    report: &AssessmentReport,
    format: OutputFormat,
    mut out: W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => out.write_all(render_text(report).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report.to_view()).map_err(io::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

pub(crate) fn list_questions<W: Write>(questionnaire: &Questionnaire, out: &mut W) -> io::Result<()> {
    for (index, question) in questionnaire.questions().iter().enumerate() {
        writeln!(
            out,
            "{:>2}. [{}] {} {}",
            index + 1,
            question.key.key(),
            question.prompt,
            question.help
        )?;
    }
    Ok(())
}
