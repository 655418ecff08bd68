//! Tool call handlers
//!
//! Each handler is a pure transformation: arguments in, formatted text report
//! out. The only inputs besides the arguments are the immutable case profile,
//! the static category tables, and the injected clock. Nothing is stored;
//! generated record ids are not retrievable after the call returns.

use chrono::NaiveDate;
use serde_json::Value;

use crate::case::CaseProfile;
use crate::clock::{Clock, record_id};
use crate::tables::{AnalysisType, ConcernType, EvidenceType, Urgency};
use crate::{Error, Result};

/// Placeholder rendered for optional fields the caller omitted.
const NOT_SPECIFIED: &str = "Not specified";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Handle a tool call by dispatching to the appropriate handler.
///
/// An unknown name is a client error (`UnknownTool`); any failure inside a
/// handler is wrapped into `Execution` carrying the tool name and the
/// underlying message, so the server loop never sees a raw handler fault.
pub fn handle_tool_call(
    profile: &CaseProfile,
    clock: &dyn Clock,
    tool_name: &str,
    arguments: &Value,
) -> Result<String> {
    let outcome = match tool_name {
        "analyze_case" => analyze_case(profile, clock, arguments),
        "track_evidence" => track_evidence(clock, arguments),
        "monitor_deadline" => monitor_deadline(clock, arguments),
        "document_bias" => document_bias(clock, arguments),
        "assess_child_welfare" => assess_child_welfare(profile, clock, arguments),
        _ => return Err(Error::UnknownTool(tool_name.to_string())),
    };

    outcome.map_err(|e| Error::Execution {
        tool: tool_name.to_string(),
        message: e.to_string(),
    })
}

// ============================================================================
// Argument extraction
// ============================================================================

fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

fn str_arg_or<'a>(args: &'a Value, key: &str, default: &'a str) -> &'a str {
    str_arg(args, key).unwrap_or(default)
}

fn required_str<'a>(args: &'a Value, key: &'static str) -> Result<&'a str> {
    str_arg(args, key).ok_or(Error::MissingArgument(key))
}

/// Witness list rendered as a comma-separated line, or "None listed".
fn witness_line(args: &Value) -> String {
    let names: Vec<&str> = args
        .get("witnesses")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if names.is_empty() {
        "None listed".to_string()
    } else {
        names.join(", ")
    }
}

fn bullet_section(lines: &mut Vec<String>, heading: &str, items: &[&str]) {
    lines.push(String::new());
    lines.push(format!("## {heading}"));
    lines.push(String::new());
    for item in items {
        lines.push(format!("- {item}"));
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn analyze_case(profile: &CaseProfile, clock: &dyn Clock, args: &Value) -> Result<String> {
    let case_id = str_arg_or(args, "case_id", &profile.case_number);
    let analysis_type = required_str(args, "analysis_type")?;
    let focus_area = str_arg_or(args, "focus_area", NOT_SPECIFIED);

    // Unrecognized categories get the generic tables rather than an error.
    let (findings, recommendations) = match AnalysisType::parse(analysis_type) {
        Some(t) => (t.findings(), t.recommendations()),
        None => (
            AnalysisType::fallback_findings(),
            AnalysisType::fallback_recommendations(),
        ),
    };

    let mut lines = vec![
        "# Case Analysis Report".to_string(),
        String::new(),
        format!("Analysis ID: {}", record_id(clock, "CA")),
        format!("Case ID: {case_id}"),
        format!("Generated: {}", clock.now().format(TIMESTAMP_FORMAT)),
        format!("Analysis Type: {analysis_type}"),
        format!("Focus Area: {focus_area}"),
    ];
    bullet_section(&mut lines, "Findings", findings);
    bullet_section(&mut lines, "Recommendations", recommendations);

    Ok(lines.join("\n"))
}

fn track_evidence(clock: &dyn Clock, args: &Value) -> Result<String> {
    let evidence_type = required_str(args, "evidence_type")?;
    let description = required_str(args, "description")?;
    let date_collected = str_arg_or(args, "date_collected", NOT_SPECIFIED);
    let relevance = str_arg_or(args, "relevance", NOT_SPECIFIED);

    let handling_notes = EvidenceType::parse(evidence_type)
        .map(EvidenceType::handling_notes)
        .unwrap_or_else(EvidenceType::fallback_handling_notes);

    let mut lines = vec![
        "# Evidence Record".to_string(),
        String::new(),
        format!("Evidence ID: {}", record_id(clock, "EV")),
        format!("Recorded: {}", clock.now().format(TIMESTAMP_FORMAT)),
        format!("Evidence Type: {evidence_type}"),
        format!("Description: {description}"),
        format!("Date Collected: {date_collected}"),
        format!("Relevance: {relevance}"),
    ];
    bullet_section(&mut lines, "Handling Notes", handling_notes);

    Ok(lines.join("\n"))
}

fn monitor_deadline(clock: &dyn Clock, args: &Value) -> Result<String> {
    let deadline_type = required_str(args, "deadline_type")?;
    let date = required_str(args, "date")?;
    let description = required_str(args, "description")?;
    let priority = str_arg_or(args, "priority", NOT_SPECIFIED);

    let deadline = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: date.to_string(),
    })?;
    let days_remaining = (deadline - clock.today()).num_days();
    let urgency = Urgency::classify(days_remaining);

    let lines = vec![
        "# Deadline Report".to_string(),
        String::new(),
        format!("Deadline ID: {}", record_id(clock, "DL")),
        format!("Deadline Type: {deadline_type}"),
        format!("Date: {date}"),
        format!("Description: {description}"),
        format!("Priority: {priority}"),
        format!("Days Remaining: {days_remaining}"),
        format!("Urgency: {}", urgency.label()),
    ];

    Ok(lines.join("\n"))
}

fn document_bias(clock: &dyn Clock, args: &Value) -> Result<String> {
    let bias_type = required_str(args, "bias_type")?;
    let description = required_str(args, "description")?;
    let incident_date = str_arg_or(args, "incident_date", NOT_SPECIFIED);
    let impact = str_arg_or(args, "impact", NOT_SPECIFIED);

    let lines = vec![
        "# Bias Incident Report".to_string(),
        String::new(),
        format!("Incident ID: {}", record_id(clock, "BI")),
        format!("Recorded: {}", clock.now().format(TIMESTAMP_FORMAT)),
        format!("Incident Date: {incident_date}"),
        format!("Bias Type: {bias_type}"),
        format!("Description: {description}"),
        format!("Impact: {impact}"),
        format!("Witnesses: {}", witness_line(args)),
    ];

    Ok(lines.join("\n"))
}

fn assess_child_welfare(
    profile: &CaseProfile,
    clock: &dyn Clock,
    args: &Value,
) -> Result<String> {
    let assessment_date = required_str(args, "assessment_date")?;
    let concern_type = required_str(args, "concern_type")?;
    let severity = required_str(args, "severity")?;
    let evidence = str_arg_or(args, "evidence", NOT_SPECIFIED);
    let recommended_action = str_arg_or(args, "recommended_action", NOT_SPECIFIED);

    let follow_up = ConcernType::parse(concern_type)
        .map(ConcernType::follow_up)
        .unwrap_or_else(ConcernType::fallback_follow_up);

    let mut lines = vec![
        "# Child Welfare Assessment".to_string(),
        String::new(),
        format!("Assessment ID: {}", record_id(clock, "WA")),
        format!("Recorded: {}", clock.now().format(TIMESTAMP_FORMAT)),
        format!("Child: {}", profile.child_name),
        format!("Assessment Date: {assessment_date}"),
        format!("Concern Type: {concern_type}"),
        format!("Severity: {severity}"),
        format!("Evidence: {evidence}"),
        format!("Recommended Action: {recommended_action}"),
    ];
    bullet_section(&mut lines, "Suggested Follow-up", follow_up);

    Ok(lines.join("\n"))
}
