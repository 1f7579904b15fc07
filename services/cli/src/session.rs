use heartsafe::error::AppError;
use heartsafe::workflows::assessment::{AssessmentFlow, AssessmentHandoff, QuestionSpec, Transition};
use std::io::{BufRead, Write};
use tracing::debug;

pub(crate) enum SessionOutcome {
    Completed(AssessmentHandoff),
    Aborted { answered: usize },
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Select(&'static str),
    Next,
    Back,
    Quit,
    Unrecognized,
}

/// Walks one user through the questionnaire over a line-oriented terminal.
/// Choosing an option records it and moves on; `n` moves on with the stored
/// answer, `b` goes back, `q` or end of input aborts.
pub(crate) fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
) -> Result<SessionOutcome, AppError> {
    let mut flow = AssessmentFlow::new();
    let mut line = String::new();

    loop {
        let Some(question) = flow.current_question() else {
            break;
        };
        render_prompt(&flow, question, out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(aborted(&flow));
        }

        let transition = match parse_input(&line, question) {
            Input::Select(value) => {
                flow.select_answer(question.key, value);
                flow.advance()
            }
            Input::Next => flow.advance(),
            Input::Back => {
                if flow.retreat() == Transition::Unchanged {
                    writeln!(out, "Already at the first question.")?;
                }
                continue;
            }
            Input::Quit => return Ok(aborted(&flow)),
            Input::Unrecognized => {
                writeln!(
                    out,
                    "Please enter an option number between 1 and {}.",
                    question.options.len()
                )?;
                continue;
            }
        };

        if transition == Transition::Unchanged {
            writeln!(out, "Please select an option to continue.")?;
        }
        debug!(?transition, "session input handled");
    }

    match flow.into_handoff() {
        Ok(handoff) => Ok(SessionOutcome::Completed(handoff)),
        Err(flow) => Ok(aborted(&flow)),
    }
}

fn aborted(flow: &AssessmentFlow) -> SessionOutcome {
    SessionOutcome::Aborted {
        answered: flow.record().answered_count(),
    }
}

fn render_prompt<W: Write>(
    flow: &AssessmentFlow,
    question: &QuestionSpec,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(
        out,
        "\nQuestion {} of {} ({}% Complete)",
        flow.current_step(),
        flow.total_steps(),
        flow.progress_percent()
    )?;
    writeln!(out, "{}", question.prompt)?;

    let selected = flow.current_answer().unwrap_or_default();
    for (index, option) in question.options.iter().enumerate() {
        let marker = if option.value == selected { " [x]" } else { "" };
        writeln!(out, "  {}) {}{}", index + 1, option.label, marker)?;
    }

    let back = if flow.current_step() > 1 { " / [b]ack" } else { "" };
    write!(
        out,
        "Select 1-{}, [n] {}{} / [q]uit: ",
        question.options.len(),
        flow.advance_label(),
        back
    )?;
    out.flush()?;
    Ok(())
}

fn parse_input(raw: &str, question: &QuestionSpec) -> Input {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "n" | "next" => return Input::Next,
        "b" | "back" | "p" | "prev" | "previous" => return Input::Back,
        "q" | "quit" | "exit" => return Input::Quit,
        _ => {}
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| question.options.get(index))
            .map(|option| Input::Select(option.value))
            .unwrap_or(Input::Unrecognized);
    }

    question
        .options
        .iter()
        .find(|option| option.value.eq_ignore_ascii_case(trimmed))
        .map(|option| Input::Select(option.value))
        .unwrap_or(Input::Unrecognized)
}
