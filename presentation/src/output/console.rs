//! Console output formatter for workflow results

use colored::Colorize;
use survey_application::{WorkflowAbort, WorkflowReport};

/// Formats workflow reports and abort summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the success report as a text summary
    pub fn format(report: &WorkflowReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Survey Invitations Sent"));
        output.push('\n');

        output.push_str(&Self::field("Survey:", &report.survey_title));
        output.push_str(&Self::field("Survey ID:", report.survey_id.as_str()));
        output.push_str(&Self::field("Collector ID:", report.collector_id.as_str()));
        output.push_str(&Self::field(
            "Pages:",
            &format!(
                "{} ({} questions)",
                report.page_count, report.question_count
            ),
        ));
        output.push_str(&Self::field(
            "Recipients:",
            &report.recipient_count.to_string(),
        ));

        output.push_str(&Self::section_header("Invitations"));
        if report.invitation_ids.is_empty() {
            output.push_str(&format!("  {}\n", "(no invitation records returned)".dimmed()));
        } else {
            for id in &report.invitation_ids {
                output.push_str(&format!("  * {}\n", id));
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&Self::section_header("Skipped questions (no answers)"));
            for skipped in &report.skipped {
                output.push_str(&format!(
                    "  {} {} / {}\n",
                    "!".yellow(),
                    skipped.page,
                    skipped.question
                ));
            }
        }

        let elapsed = report.finished_at - report.started_at;
        output.push_str(&format!(
            "\n{} {} ms\n",
            "Completed in".dimmed(),
            elapsed.num_milliseconds()
        ));

        output
    }

    /// Format the success report as JSON
    pub fn format_json(report: &WorkflowReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an aborted run, including any remote resources left behind
    pub fn format_abort(abort: &WorkflowAbort) -> String {
        let mut output = format!(
            "{} {}\n",
            "Error:".red().bold(),
            abort.error
        );
        output.push_str(&format!(
            "  {} {} ({})\n",
            "Last completed stage:".dimmed(),
            abort.stage.display_name(),
            abort.error.kind()
        ));

        if abort.has_orphans() {
            output.push_str(&format!(
                "\n{}\n",
                "Remote resources were created before the failure and left in place:"
                    .yellow()
            ));
            if let Some(id) = &abort.survey_id {
                output.push_str(&format!("  Survey ID:    {}\n", id));
            }
            if let Some(id) = &abort.collector_id {
                output.push_str(&format!("  Collector ID: {}\n", id));
            }
        }

        output
    }

    /// Format an aborted run as JSON
    pub fn format_abort_json(abort: &WorkflowAbort) -> String {
        let value = serde_json::json!({
            "error": abort.error.kind(),
            "message": abort.error.to_string(),
            "stage": abort.stage,
            "survey_id": abort.survey_id,
            "collector_id": abort.collector_id,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn field(label: &str, value: &str) -> String {
        format!("{:<14}{}\n", label.cyan().bold(), value)
    }
}
