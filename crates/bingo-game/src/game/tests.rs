//! Dispatch loop tests against a scripted provider.

use std::sync::Arc;

use bingo_ai::{AiError, Message, Role, ToolChoice};

use super::*;
use crate::error::GameError;
use crate::prompts::{CLOSING_QUESTIONS, SYSTEM_PROMPT};
use crate::secret::GuessState;
use crate::testing::{guess_call, reset_call, tool_call, ScriptedClient};

fn game_with(client: &Arc<ScriptedClient>, secret: u32) -> Game {
    let mut state = GuessState::seeded(10, 7);
    state.set_secret(secret);
    Game::new(client.clone(), state)
}

#[test]
fn new_game_has_only_seed_messages() {
    let client = Arc::new(ScriptedClient::new());
    let game = game_with(&client, 5);

    assert_eq!(game.message_count(), 2);
    assert_eq!(game.messages()[0], Message::system(SYSTEM_PROMPT));
    assert_eq!(game.messages()[1].role, Role::User);
    assert!(game.messages()[1].content.contains("between 0 and 10"));
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn guesses_are_classified_against_secret() {
    let client = Arc::new(ScriptedClient::new());
    client
        .push_tool_calls(vec![guess_call(3)])
        .push_tool_calls(vec![guess_call(5)])
        .push_tool_calls(vec![guess_call(9)]);
    let mut game = game_with(&client, 5);

    for _ in 0..3 {
        assert_eq!(game.step().await.unwrap(), 1);
    }

    let tail: Vec<_> = game.messages()[2..]
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        tail,
        [
            (Role::Assistant, "3"),
            (Role::User, "Too small!"),
            (Role::Assistant, "5"),
            (Role::User, "Bingo!"),
            (Role::Assistant, "9"),
            (Role::User, "Too big!"),
        ]
    );
    assert_eq!(
        game.stats(),
        GameStats {
            resets: 0,
            guesses: 3,
            wrong_guesses: 2,
            wins: 1,
        }
    );
}

#[tokio::test]
async fn reset_appends_prompt_and_redraws() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![reset_call()]);
    let mut game = game_with(&client, 5);

    game.step().await.unwrap();

    assert_eq!(game.message_count(), 4);
    assert_eq!(game.messages()[2], Message::assistant("reset"));
    assert_eq!(game.messages()[3], Message::user("Please guess!"));
    assert!(game.state().secret() <= 10);
    assert_eq!(game.stats().resets, 1);
}

#[tokio::test]
async fn step_sends_full_history_with_catalog() {
    let client = Arc::new(ScriptedClient::new());
    client
        .push_tool_calls(vec![guess_call(1)])
        .push_tool_calls(vec![guess_call(2)]);
    let mut game = game_with(&client, 5);

    game.step().await.unwrap();
    game.step().await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].messages.len(), 2);
    assert_eq!(requests[1].messages.len(), 4);
    assert_eq!(requests[1].messages[..], game.messages()[..4]);
    for request in &requests {
        assert_eq!(request.tool_names, ["reset", "guess"]);
        assert_eq!(request.tool_choice, ToolChoice::Auto);
    }
}

#[tokio::test]
async fn multiple_calls_apply_in_order() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![guess_call(8), guess_call(2), guess_call(5)]);
    let mut game = game_with(&client, 5);

    assert_eq!(game.step().await.unwrap(), 3);

    assert_eq!(game.message_count(), 2 + 6);
    let replies: Vec<_> = game
        .messages()
        .iter()
        .skip(2)
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(replies, ["Too big!", "Too small!", "Bingo!"]);
}

#[tokio::test]
async fn unknown_tool_is_protocol_violation_and_appends_nothing() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![tool_call("foo")]);
    let mut game = game_with(&client, 5);

    let err = game.step().await.unwrap_err();

    assert!(matches!(err, GameError::ProtocolViolation { ref tool } if tool == "foo"));
    assert_eq!(game.message_count(), 2);
    assert_eq!(game.stats(), GameStats::default());
}

#[tokio::test]
async fn unknown_tool_after_valid_call_rejects_whole_batch() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![guess_call(4), tool_call("give_up")]);
    let mut game = game_with(&client, 5);

    assert!(game.step().await.is_err());
    assert_eq!(game.message_count(), 2);
}

#[tokio::test]
async fn empty_tool_call_list_is_a_no_op() {
    let client = Arc::new(ScriptedClient::new());
    client.push_text("I think the number is 4.");
    let mut game = game_with(&client, 5);

    assert_eq!(game.step().await.unwrap(), 0);
    assert_eq!(game.message_count(), 2);
    assert_eq!(game.tracker().call_count(), 1);
}

#[tokio::test]
async fn provider_failure_propagates() {
    let client = Arc::new(ScriptedClient::new());
    client.push_error(AiError::NetworkError("connection refused".into()));
    let mut game = game_with(&client, 5);

    let err = game.step().await.unwrap_err();

    assert!(matches!(err, GameError::Ai(AiError::NetworkError(_))));
    assert_eq!(game.message_count(), 2);
}

#[tokio::test]
async fn provider_failure_during_finish_keeps_the_question() {
    let client = Arc::new(ScriptedClient::new());
    client.push_text("One round.").push_error(AiError::Timeout);
    let mut game = game_with(&client, 5);

    let err = game.finish().await.unwrap_err();

    assert!(matches!(err, GameError::Ai(AiError::Timeout)));
    assert_eq!(game.message_count(), 5);
    assert_eq!(game.messages()[3], Message::assistant("One round."));
    assert_eq!(game.messages()[4], Message::user(CLOSING_QUESTIONS[1]));
}

#[tokio::test]
async fn finish_asks_two_questions_without_tools() {
    let client = Arc::new(ScriptedClient::new());
    client.push_text("One round.").push_text("Two wrong guesses.");
    let mut game = game_with(&client, 5);

    let answers = game.finish().await.unwrap();

    assert_eq!(answers, ["One round.", "Two wrong guesses."]);
    assert_eq!(game.message_count(), 6);
    assert_eq!(game.messages()[2], Message::user(CLOSING_QUESTIONS[0]));
    assert_eq!(game.messages()[3], Message::assistant("One round."));
    assert_eq!(game.messages()[4], Message::user(CLOSING_QUESTIONS[1]));
    assert_eq!(game.messages()[5], Message::assistant("Two wrong guesses."));

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(request.tool_names.is_empty());
        assert_eq!(request.tool_choice, ToolChoice::None);
    }
    // The second question is sent after the first answer is recorded.
    assert_eq!(requests[1].messages.len(), 5);
}

#[tokio::test]
async fn ten_steps_then_finish() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![reset_call()]);
    for n in 1..=8 {
        client.push_tool_calls(vec![guess_call(n)]);
    }
    client.push_text("Let me think.");
    client.push_text("One round.").push_text("Several.");
    let mut game = game_with(&client, 5);

    let answers = game.play(10).await.unwrap();

    // 9 tool calls across 10 steps, one step answered in free text.
    assert_eq!(game.message_count(), 2 + 9 * 2 + 4);
    assert_eq!(answers.len(), 2);
    assert_eq!(game.tracker().call_count(), 12);
    assert_eq!(game.stats().resets, 1);
    assert_eq!(game.stats().guesses, 8);
}

#[tokio::test]
async fn history_only_grows() {
    let client = Arc::new(ScriptedClient::new());
    client
        .push_tool_calls(vec![guess_call(2)])
        .push_tool_calls(vec![reset_call()])
        .push_tool_calls(vec![guess_call(7)]);
    let mut game = game_with(&client, 5);

    let mut previous = game.messages().to_vec();
    for _ in 0..3 {
        game.step().await.unwrap();
        let current = game.messages();
        assert_eq!(current.len(), previous.len() + 2);
        assert_eq!(current[..previous.len()], previous[..]);
        previous = current.to_vec();
    }
}

#[tokio::test]
async fn transcript_returns_only_new_messages() {
    let client = Arc::new(ScriptedClient::new());
    client.push_tool_calls(vec![guess_call(5)]);
    let mut game = game_with(&client, 5);

    assert_eq!(game.take_transcript().len(), 2);
    assert!(game.take_transcript().is_empty());

    game.step().await.unwrap();
    let fresh = game.take_transcript();
    assert_eq!(fresh, [Message::assistant("5"), Message::user("Bingo!")]);
}
