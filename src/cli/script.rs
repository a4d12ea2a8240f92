//! Scripted prompt replies for non-interactive runs.
//!
//! When `BOOKING_CLI_INPUTS` is set, prompts drain a queue of
//! pre-seeded answers instead of waiting on a terminal. Without the
//! queue, script mode falls back to reading plain lines from stdin,
//! which keeps the binary drivable from a pipe.

use std::collections::VecDeque;
use std::env;
use std::io::{self, BufRead};
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// One scripted reply to a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptAnswer {
    Value(String),
    Cancel,
}

struct ScriptQueue {
    enabled: bool,
    answers: VecDeque<ScriptAnswer>,
}

impl ScriptQueue {
    fn from_env() -> Self {
        match env::var("BOOKING_CLI_INPUTS") {
            Ok(raw) => Self {
                enabled: true,
                answers: parse_answers(&raw),
            },
            Err(_) => Self {
                enabled: false,
                answers: VecDeque::new(),
            },
        }
    }
}

static SCRIPT_ANSWERS: Lazy<Mutex<ScriptQueue>> =
    Lazy::new(|| Mutex::new(ScriptQueue::from_env()));

fn parse_answers(raw: &str) -> VecDeque<ScriptAnswer> {
    raw.split('|').map(parse_token).collect()
}

fn parse_token(token: &str) -> ScriptAnswer {
    match token.trim() {
        "<ESC>" | "ESC" => ScriptAnswer::Cancel,
        "<BLANK>" | "<EMPTY>" => ScriptAnswer::Value(String::new()),
        other => ScriptAnswer::Value(other.to_string()),
    }
}

/// True when a pre-seeded answer queue is active.
pub fn has_queue() -> bool {
    SCRIPT_ANSWERS
        .lock()
        .expect("script answer queue poisoned")
        .enabled
}

/// Next reply for a prompt: the queue when one is active, otherwise a
/// line from stdin. An exhausted queue and a closed stdin both read as
/// a cancel, so a short script winds the wizard down instead of
/// hanging it.
pub fn read_reply() -> ScriptAnswer {
    if let Some(answer) = pop_scripted() {
        return answer;
    }
    read_stdin_line()
}

fn pop_scripted() -> Option<ScriptAnswer> {
    let mut guard = SCRIPT_ANSWERS
        .lock()
        .expect("script answer queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(guard.answers.pop_front().unwrap_or(ScriptAnswer::Cancel))
}

fn read_stdin_line() -> ScriptAnswer {
    let mut buffer = String::new();
    match io::stdin().lock().read_line(&mut buffer) {
        Ok(0) | Err(_) => ScriptAnswer::Cancel,
        Ok(_) => parse_token(buffer.trim_end_matches(['\r', '\n'])),
    }
}

/// Replaces the queue with `answers`. Test helper.
#[allow(dead_code)]
pub fn install_answers<I>(answers: I)
where
    I: IntoIterator<Item = ScriptAnswer>,
{
    let mut guard = SCRIPT_ANSWERS
        .lock()
        .expect("script answer queue poisoned");
    guard.enabled = true;
    guard.answers = answers.into_iter().collect();
}

/// Restores the queue to whatever the environment dictates.
#[allow(dead_code)]
pub fn reset_answers() {
    let mut guard = SCRIPT_ANSWERS
        .lock()
        .expect("script answer queue poisoned");
    *guard = ScriptQueue::from_env();
}
