//! Scripted check-in: answers come from the command line instead of a prompt.
//!
//! Each value answers the question on screen. A value that opens a follow-up
//! is not followed by a continue; the next value answers the follow-up.
//!
//! Values that parse as integers are numbers. Prefix a value with `sym:` to
//! pass a symbol that looks like a number (`sym:3`).

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use daycheck_core::{
    AnswerMap, CheckinEvent, CheckinFlow, Config, FlowStatus, OptionValue, TimeOfDay,
};

use super::SessionArgs;

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub session: SessionArgs,
    /// Option values in question order (numbers, symbols such as "balanced", or sym:3)
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub session_id: String,
    pub time_of_day: TimeOfDay,
    pub status: FlowStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub answers: AnswerMap,
}

/// Parse one command-line value. `sym:` forces a symbol.
pub fn parse_value(raw: &str) -> OptionValue {
    match raw.strip_prefix("sym:") {
        Some(symbol) => OptionValue::Symbol(symbol.to_string()),
        None => OptionValue::parse(raw),
    }
}

pub fn run(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (catalog, time_of_day) = args.session.resolve(&config)?;
    let flow = CheckinFlow::start(&catalog, time_of_day);
    let values: Vec<OptionValue> = args.values.iter().map(|v| parse_value(v)).collect();

    let report = replay(flow, &values)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn replay(
    mut flow: CheckinFlow,
    values: &[OptionValue],
) -> Result<ReplayReport, Box<dyn std::error::Error>> {
    let time_of_day = flow.time_of_day();
    if flow.status() == FlowStatus::Empty {
        if !values.is_empty() {
            tracing::warn!(%time_of_day, ignored = values.len(), "no questions; values ignored");
        }
        return Ok(ReplayReport {
            session_id: flow.id().to_string(),
            time_of_day,
            status: FlowStatus::Empty,
            started_at: flow.started_at(),
            completed_at: None,
            answers: AnswerMap::new(),
        });
    }

    let mut values = values.iter();
    loop {
        let Some(question_id) = flow.current_question().map(|q| q.id.clone()) else {
            return Err("session ended without completing".into());
        };
        let Some(value) = values.next() else {
            return Err(format!("ran out of answers at question '{question_id}'").into());
        };

        let selected = flow.select_option(value)?;
        if matches!(selected, CheckinEvent::OptionSelected { follow_up: Some(_), .. }) {
            continue;
        }

        let event = flow.advance()?;
        if let CheckinEvent::Completed { session_id, answers, .. } = &event {
            let left_over = values.len();
            if left_over > 0 {
                return Err(format!("check-in completed with {left_over} unused value(s)").into());
            }
            return Ok(ReplayReport {
                session_id: session_id.clone(),
                time_of_day,
                status: FlowStatus::Finished,
                started_at: flow.started_at(),
                completed_at: Some(event.at()),
                answers: answers.clone(),
            });
        }
    }
}
