//! Writing prompts

use chrono::{Datelike, NaiveDate};

pub const WRITING_PROMPTS: [&str; 5] = [
    "What made you smile today?",
    "Write about your favorite moment today.",
    "Describe something you learned recently.",
    "What are you grateful for right now?",
    "Recall a challenge and how you overcame it.",
];

const HEADER_NOTE: &str = "# Write your entry below. Lines starting with '# ' up here are removed.";

/// Prompt for journal day `date`; consecutive days cycle through the list
pub fn prompt_for(date: NaiveDate) -> &'static str {
    let index = date.num_days_from_ce().rem_euclid(WRITING_PROMPTS.len() as i32) as usize;
    WRITING_PROMPTS[index]
}

fn header_lines(prompt: &str) -> [String; 2] {
    [format!("# {}", prompt), HEADER_NOTE.to_string()]
}

/// Scratch file contents: the prompt as comment lines, then `initial`
pub fn scratch_seed(prompt: Option<&str>, initial: &str) -> String {
    match prompt {
        Some(prompt) => {
            let [first, second] = header_lines(prompt);
            format!("{}\n{}\n\n{}", first, second, initial)
        }
        None => initial.to_string(),
    }
}

/// Remove the lines [`scratch_seed`] added. Other `#` lines are the user's text.
pub fn strip_header(raw: &str, prompt: Option<&str>) -> String {
    let Some(prompt) = prompt else {
        return raw.to_string();
    };
    let header = header_lines(prompt);
    raw.lines()
        .filter(|line| !header.iter().any(|h| h == line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}
