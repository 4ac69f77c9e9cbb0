//! The shipped question set.

use super::question::{Icon, Prompt, Question, QuestionKind, QuestionOption, Trigger};
use crate::time::TimeOfDay;

fn opt(icon: Icon, label: &str, value: i64) -> QuestionOption {
    QuestionOption::new(icon, label, value)
}

fn sym(icon: Icon, label: &str, value: &str) -> QuestionOption {
    QuestionOption::new(icon, label, value)
}

fn five_point(labels: [&str; 5]) -> Vec<QuestionOption> {
    let icons = [
        Icon::Drained,
        Icon::Low,
        Icon::Neutral,
        Icon::Positive,
        Icon::Energised,
    ];
    icons
        .into_iter()
        .zip(labels)
        .zip(1..)
        .map(|((icon, label), value)| opt(icon, label, value))
        .collect()
}

fn mood_options() -> Vec<QuestionOption> {
    five_point(["Very Low", "Low", "Neutral", "Good", "Excellent"])
}

fn sleep_quality_options() -> Vec<QuestionOption> {
    five_point(["Very Poor", "Poor", "Fair", "Good", "Excellent"])
}

fn hours_options() -> Vec<QuestionOption> {
    vec![
        opt(Icon::Drained, "< 4 hours", 4),
        opt(Icon::Low, "4-6 hours", 6),
        opt(Icon::Neutral, "6-7 hours", 7),
        opt(Icon::Positive, "7-8 hours", 8),
        opt(Icon::Energised, "8+ hours", 9),
    ]
}

fn energy_options() -> Vec<QuestionOption> {
    five_point(["Exhausted", "Tired", "Okay", "Energetic", "Very Energetic"])
}

fn stress_options() -> Vec<QuestionOption> {
    vec![
        sym(Icon::Energised, "Very Relaxed", "very_relaxed"),
        sym(Icon::Positive, "Relaxed", "relaxed"),
        sym(Icon::Neutral, "Balanced", "balanced"),
        sym(Icon::Low, "Stressed", "stressed"),
        sym(Icon::Drained, "Very Stressed", "very_stressed"),
    ]
}

fn productivity_options() -> Vec<QuestionOption> {
    five_point([
        "Not Productive",
        "Slightly Productive",
        "Moderately Productive",
        "Productive",
        "Very Productive",
    ])
}

fn satisfaction_options() -> Vec<QuestionOption> {
    five_point([
        "Very Unsatisfied",
        "Unsatisfied",
        "Neutral",
        "Satisfied",
        "Very Satisfied",
    ])
}

fn yes_no_options() -> Vec<QuestionOption> {
    vec![
        sym(Icon::Energised, "Yes", "yes"),
        sym(Icon::Drained, "No", "no"),
    ]
}

fn break_count_options() -> Vec<QuestionOption> {
    vec![
        opt(Icon::Drained, "1-2 breaks", 2),
        opt(Icon::Low, "3-4 breaks", 4),
        opt(Icon::Neutral, "5-6 breaks", 6),
        opt(Icon::Positive, "7-8 breaks", 8),
        opt(Icon::Energised, "8+ breaks", 9),
    ]
}

fn balance_options() -> Vec<QuestionOption> {
    five_point([
        "Poor Balance",
        "Needs Improvement",
        "Moderate",
        "Good Balance",
        "Excellent Balance",
    ])
}

fn prompt(
    id: &str,
    text: &str,
    time_of_day: TimeOfDay,
    kind: QuestionKind,
    options: Vec<QuestionOption>,
) -> Prompt {
    Prompt {
        id: id.to_string(),
        text: text.to_string(),
        time_of_day,
        kind,
        options,
    }
}

/// Neutral mood (3) asks whether the user leans relaxed or stressed.
fn mood_with_stress_follow_up(mood_id: &str, stress_id: &str, time_of_day: TimeOfDay) -> Question {
    Question::new(prompt(
        mood_id,
        "How are you feeling?",
        time_of_day,
        QuestionKind::Mood,
        mood_options(),
    ))
    .with_follow_up(
        Trigger {
            question_id: Some(mood_id.to_string()),
            value: 3.into(),
        },
        prompt(
            stress_id,
            "Do you feel more relaxed or stressed?",
            time_of_day,
            QuestionKind::Mood,
            stress_options(),
        ),
    )
}

pub(super) fn questions() -> Vec<Question> {
    use TimeOfDay::*;

    vec![
        // Morning
        Question::new(prompt(
            "sleep_quality",
            "How well did you sleep last night?",
            Morning,
            QuestionKind::Scale,
            sleep_quality_options(),
        )),
        Question::new(prompt(
            "hours_sleep",
            "How many hours of sleep did you get?",
            Morning,
            QuestionKind::Number,
            hours_options(),
        )),
        Question::new(prompt(
            "morning_energy",
            "What's your energy level this morning?",
            Morning,
            QuestionKind::Scale,
            energy_options(),
        )),
        mood_with_stress_follow_up("morning_mood", "morning_stress", Morning),
        // Afternoon
        mood_with_stress_follow_up("afternoon_mood", "afternoon_stress", Afternoon),
        Question::new(prompt(
            "productivity",
            "How productive do you feel today?",
            Afternoon,
            QuestionKind::Scale,
            productivity_options(),
        )),
        // Evening
        mood_with_stress_follow_up("evening_mood", "evening_stress", Evening),
        Question::new(prompt(
            "satisfaction",
            "How satisfied are you with today's work?",
            Evening,
            QuestionKind::Scale,
            satisfaction_options(),
        )),
        Question::new(prompt(
            "breaks_taken",
            "Do you feel you've taken enough breaks today?",
            Evening,
            QuestionKind::YesNo,
            yes_no_options(),
        ))
        .with_follow_up(
            Trigger {
                question_id: Some("breaks_taken".to_string()),
                value: "yes".into(),
            },
            prompt(
                "break_count",
                "How many breaks did you take?",
                Evening,
                QuestionKind::Number,
                break_count_options(),
            ),
        ),
        Question::new(prompt(
            "leisure_minutes",
            "Did you have enough \"me\" time today?",
            Evening,
            QuestionKind::YesNo,
            yes_no_options(),
        )),
        Question::new(prompt(
            "overall_balance",
            "How would you rate your work-life balance today?",
            Evening,
            QuestionKind::Scale,
            balance_options(),
        )),
    ]
}
