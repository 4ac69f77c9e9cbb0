//! Interactive check-in on the terminal.
//!
//! Input per line: an option number selects it, an empty line (or `c`)
//! continues, `q` closes the check-in. End of input also closes it.
//! Questions are drawn on stderr; stdout only carries the result.

use clap::Args;
use std::io::{self, BufRead, Write};

use daycheck_core::error::Result;
use daycheck_core::{
    AnswerMap, CheckinEvent, CheckinFlow, Config, DisplayConfig, FlowStatus, OptionValue, Prompt,
};

use super::SessionArgs;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub session: SessionArgs,
    /// Print the final answers as JSON
    #[arg(long)]
    pub json: bool,
}

/// How an interactive session ended.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Completed(AnswerMap),
    Closed { discarded: usize },
    Empty,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::load_or_default();
    let (catalog, time_of_day) = args.session.resolve(&config)?;
    let flow = CheckinFlow::start(&catalog, time_of_day);

    let stdin = io::stdin();
    let stderr = io::stderr();
    let outcome = drive(flow, &config.display, stdin.lock(), stderr.lock())?;

    match outcome {
        Outcome::Completed(answers) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&answers)?);
            } else {
                println!("Thank you for completing the check-in!");
                for (id, value) in answers.iter() {
                    println!("  {id}: {value}");
                }
            }
        }
        Outcome::Closed { .. } => println!("Check-in closed."),
        Outcome::Empty => println!("No {time_of_day} questions right now. Check back later."),
    }
    Ok(())
}

/// Run a session against any line-based input and output.
pub fn drive<R: BufRead, W: Write>(
    mut flow: CheckinFlow,
    display: &DisplayConfig,
    mut input: R,
    mut out: W,
) -> io::Result<Outcome> {
    if flow.current_question().is_none() {
        return Ok(Outcome::Empty);
    }

    if display.show_greeting {
        writeln!(
            out,
            "{}! Check in to reveal insights about your time, mood, and energy.",
            flow.time_of_day().greeting()
        )?;
    }

    let mut line = String::new();
    loop {
        let Some(question) = flow.current_question() else {
            return Ok(settle(flow));
        };
        render(&flow, question, display, &mut out)?;
        let values: Vec<OptionValue> = question.options.iter().map(|o| o.value.clone()).collect();

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(close(flow));
        }

        match line.trim() {
            "q" | "quit" => return Ok(close(flow)),
            "" | "c" => match flow.advance() {
                Ok(CheckinEvent::Completed { answers, .. }) => return Ok(Outcome::Completed(answers)),
                Ok(_) => {}
                Err(e) => writeln!(out, "! {e}")?,
            },
            other => match other.parse::<usize>() {
                Ok(n) if (1..=values.len()).contains(&n) => {
                    if let Err(e) = flow.select_option(&values[n - 1]) {
                        writeln!(out, "! {e}")?;
                    }
                }
                _ => writeln!(
                    out,
                    "! Enter a number from 1 to {}, press Enter to continue, or q to close",
                    values.len()
                )?,
            },
        }
    }
}

/// Outcome for a session with nothing left on screen.
fn settle(flow: CheckinFlow) -> Outcome {
    match flow.status() {
        FlowStatus::Finished => Outcome::Completed(flow.answers().clone()),
        FlowStatus::Empty => Outcome::Empty,
        FlowStatus::InProgress => close(flow),
    }
}

fn close(flow: CheckinFlow) -> Outcome {
    match flow.close() {
        CheckinEvent::Closed {
            discarded_answers, ..
        } => Outcome::Closed {
            discarded: discarded_answers,
        },
        _ => Outcome::Closed { discarded: 0 },
    }
}

fn render<W: Write>(
    flow: &CheckinFlow,
    question: &Prompt,
    display: &DisplayConfig,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out)?;
    if display.show_progress {
        let progress = flow.progress_info();
        writeln!(
            out,
            "{} OF {}  {:.0}%  ({} answered)",
            progress.current, progress.total, progress.percent, progress.answered
        )?;
    }
    writeln!(out, "{}", question.text)?;

    let selected = flow.selected(&question.id);
    for (i, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(&option.value) { "*" } else { " " };
        if display.show_icons {
            writeln!(out, " {marker}[{}] {} {}", i + 1, option.icon.glyph(), option.label)?;
        } else {
            writeln!(out, " {marker}[{}] {}", i + 1, option.label)?;
        }
    }

    let action = if flow.is_last_step() { "finish" } else { "continue" };
    write!(out, "Choose 1-{}, Enter to {action}, q to close: ", question.options.len())?;
    out.flush()
}
