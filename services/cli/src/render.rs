use heartsafe::config::OutputFormat;
use heartsafe::error::AppError;
use heartsafe::workflows::assessment::{AssessmentHandoff, CarePathway, QuestionBank};
use std::io::Write;

pub(crate) fn render_handoff<W: Write>(
    handoff: &AssessmentHandoff,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, handoff)?;
        writeln!(out)?;
        return Ok(());
    }

    let result = &handoff.result;

    writeln!(out, "\nYour Heart Health Assessment Results")?;
    writeln!(
        out,
        "Risk score: {} ({} Risk)",
        result.score,
        result.tier.label()
    )?;
    writeln!(out, "{}", result.description())?;
    writeln!(out, "{}", result.tier.encouragement())?;

    writeln!(out, "\nScore breakdown")?;
    for component in &handoff.breakdown {
        let answer = match handoff.answer_label(component) {
            Some(label) => label.to_string(),
            None if component.value.is_empty() => "(unanswered)".to_string(),
            None => format!("{} (not recognized)", component.value),
        };
        writeln!(
            out,
            "- {}: {} -> {} pts",
            component.key.label(),
            answer,
            component.points
        )?;
    }

    writeln!(out, "\nPersonalized recommendations")?;
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, recommendation)?;
    }

    writeln!(out, "\nNext step: {}", handoff.pathway.label())?;
    if handoff.pathway == CarePathway::Consultation {
        writeln!(out, "Consultation note: {}", handoff.consultation_note())?;
    }

    Ok(())
}

pub(crate) fn render_questions<W: Write>(
    bank: &QuestionBank,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, bank.questions())?;
        writeln!(out)?;
        return Ok(());
    }

    for (index, question) in bank.questions().iter().enumerate() {
        writeln!(
            out,
            "{}. {} [{}]",
            index + 1,
            question.prompt,
            question.key
        )?;
        for option in question.options {
            writeln!(
                out,
                "   - {:<12} {} ({} pts)",
                option.value, option.label, option.weight
            )?;
        }
    }

    Ok(())
}
