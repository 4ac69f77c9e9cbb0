use clap::Args;
use daycheck_core::error::Result;
use daycheck_core::{Config, Prompt};

use super::SessionArgs;

#[derive(Args)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub session: SessionArgs,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: QuestionsArgs) -> Result<()> {
    let config = Config::load_or_default();
    let (catalog, time_of_day) = args.session.resolve(&config)?;
    let questions: Vec<_> = catalog.for_time_of_day(time_of_day).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    if questions.is_empty() {
        println!("No {time_of_day} questions.");
        return Ok(());
    }

    println!("{} {} questions:\n", questions.len(), time_of_day);
    for (i, question) in questions.iter().enumerate() {
        print_prompt(&format!("{}.", i + 1), &question.prompt);
        if let Some(follow_up) = &question.follow_up {
            print_prompt(
                &format!("   ↳ if {}:", follow_up.condition.value),
                &follow_up.question,
            );
        }
    }
    Ok(())
}

fn print_prompt(marker: &str, prompt: &Prompt) {
    println!("{marker} [{}] {}", prompt.id, prompt.text);
    let options: Vec<String> = prompt
        .options
        .iter()
        .map(|o| format!("{} = {}", o.label, o.value))
        .collect();
    println!("     {}", options.join(", "));
}
