use crate::assess::{render_report, OutputFormat};
use crate::infra::assessment_policy;
use chrono::Local;
use clap::Args;
use privacy_advisor::config::AppConfig;
use privacy_advisor::error::AppError;
use privacy_advisor::workflows::assessment::{
    parse_token_list, AnswerKind, AnswerSet, AssessmentService, Questionnaire, YesNo,
};
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct InterviewArgs {
    /// Report rendering once the interview completes
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_interview_command(args: InterviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::standard(assessment_policy(&config.advisor, false));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(answers) = run_interview(service.questionnaire(), stdin.lock(), &mut out)? else {
        writeln!(out, "Assessment cancelled.")?;
        info!("interview cancelled before completion");
        return Ok(());
    };

    let report = service.assess(answers, Local::now().naive_local())?;
    writeln!(out)?;
    render_report(&report, args.format, out)
}

/// Ask every question in order. Returns `None` when the user types
/// `quit`/`exit` or input ends early.
pub(crate) fn run_interview<R: BufRead, W: Write>(
    questionnaire: &Questionnaire,
    mut input: R,
    output: &mut W,
) -> io::Result<Option<AnswerSet>> {
    writeln!(
        output,
        "Digital privacy check-up. Type 'quit' at any prompt to stop."
    )?;

    let mut answers = AnswerSet::new();
    let mut line = String::new();

    for (index, question) in questionnaire.questions().iter().enumerate() {
        loop {
            writeln!(output)?;
            writeln!(output, "{}. {}", index + 1, question.prompt)?;
            write!(output, "{} > ", question.help)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let reply = line.trim();
            if reply.eq_ignore_ascii_case("quit") || reply.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }

            match question.kind {
                AnswerKind::YesNo => match YesNo::parse_response(reply) {
                    Some(answer) => {
                        answers.set_yes_no(question.key, answer);
                        break;
                    }
                    None => writeln!(output, "Please answer 'yes' or 'no'.")?,
                },
                AnswerKind::StringList => {
                    answers.set_list(question.key, parse_token_list(reply));
                    break;
                }
            }
        }
    }

    Ok(Some(answers))
}
