use planner_core::{Analysis, TaskSnapshot};

use super::error::{AnalysisError, Result};

/// One bullet per task, in input order.
fn describe_tasks(tasks: &[TaskSnapshot]) -> String {
    tasks
        .iter()
        .map(|task| {
            let status = if task.completed {
                "completed"
            } else {
                "not completed"
            };
            match task.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                Some(time) => format!(
                    "- {} (priority: {}, status: {}, time: {})",
                    task.title, task.priority, status, time
                ),
                None => format!(
                    "- {} (priority: {}, status: {})",
                    task.title, task.priority, status
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(tasks: &[TaskSnapshot]) -> String {
    format!(
        r#"Please analyze the following daily plan and provide a summary and suggestions.

Tasks:
{}

Answer in English with:
1. An overall summary (at most 100 words)
2. 3-5 specific suggestions

Return JSON in exactly this format:
{{
  "summary": "summary text",
  "suggestions": ["suggestion 1", "suggestion 2", "suggestion 3"]
}}"#,
        describe_tasks(tasks)
    )
}

/// Remove a surrounding Markdown code fence, if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop the info string (e.g. "json") on the opening fence line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}

/// Parse a model reply into an [`Analysis`].
///
/// Blank suggestions are dropped; a blank summary makes the reply invalid.
pub fn parse_reply(reply: &str) -> Result<Analysis> {
    let mut analysis: Analysis = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| AnalysisError::Parse(e.to_string()))?;

    if analysis.summary.trim().is_empty() {
        return Err(AnalysisError::Parse("summary is empty".to_string()));
    }

    analysis.summary = analysis.summary.trim().to_string();
    analysis.suggestions.retain(|s| !s.trim().is_empty());
    Ok(analysis)
}
