//! Fixed conversation text.

use crate::secret::Verdict;

pub const SYSTEM_PROMPT: &str = "You are only allowed to respond by using the provided tool.";

/// User reply after the model resets the game.
pub const PLEASE_GUESS: &str = "Please guess!";

/// Questions asked once the dispatch steps are over.
pub const CLOSING_QUESTIONS: [&str; 2] = [
    "We are going to stop here.  How many rounds have we played?",
    "How many wrong guesses did you make in total?",
];

/// The opening user message explaining the game.
pub fn opening_prompt(max: u32) -> String {
    format!(
        "Let's play the number guessing game.\n\
         I'll pick a secret number between 0 and {max}, \
         and you are to make guess attempts until you successfully find the correct number.\n\
         To each of your guess I'll respond by '{}', '{}' or '{}'\n\
         Let's start!\n\n",
        Verdict::TooBig,
        Verdict::TooSmall,
        Verdict::Exact,
    )
}
