//! Console session: slash commands plus a transcript kept for `/history`.
//!
//! The transcript is local to the console; the responder never sees it.

use eco_core::{validate_message, CoreError, Responder, CLEARED_MESSAGE, QUICK_QUESTIONS};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "You"),
            Role::Assistant => write!(f, "ECO Matrix AI"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// What the loop should do with a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub const HELP_TEXT: &str = "Commands:
  /quick        list quick questions
  /quick N      ask quick question N
  /history      show this conversation
  /clear        clear the conversation
  /contact      show contact details
  /help         show this help
  /quit         exit";

pub struct Session {
    responder: Arc<Responder>,
    transcript: Vec<Turn>,
}

impl Session {
    pub fn new(responder: Arc<Responder>) -> Self {
        Self {
            responder,
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Validates and answers one message, recording both sides in the transcript.
    pub fn ask(&mut self, message: &str) -> Result<String, CoreError> {
        let message = validate_message(message)?;
        let response = self.responder.generate_response(message);
        self.transcript.push(Turn {
            role: Role::User,
            content: message.to_string(),
        });
        self.transcript.push(Turn {
            role: Role::Assistant,
            content: response.clone(),
        });
        Ok(response)
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Outcome::Reply(self.ask_or_explain(line));
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit") | Some("exit"), None) => Outcome::Quit,
            (Some("help"), None) => Outcome::Reply(HELP_TEXT.to_string()),
            (Some("clear"), None) => {
                self.transcript.clear();
                Outcome::Reply(CLEARED_MESSAGE.to_string())
            }
            (Some("history"), None) => Outcome::Reply(self.render_history()),
            (Some("contact"), None) => Outcome::Reply(self.contact_card()),
            (Some("quick"), None) => Outcome::Reply(render_quick_questions()),
            (Some("quick"), Some(n)) => match n.parse::<usize>() {
                Ok(n) if (1..=QUICK_QUESTIONS.len()).contains(&n) => {
                    let question = QUICK_QUESTIONS[n - 1];
                    Outcome::Reply(format!("> {}\n\n{}", question, self.ask_or_explain(question)))
                }
                _ => Outcome::Reply(format!(
                    "Quick question must be between 1 and {}.",
                    QUICK_QUESTIONS.len()
                )),
            },
            _ => Outcome::Reply(format!("Unknown command: /{}\n\n{}", command, HELP_TEXT)),
        }
    }

    fn ask_or_explain(&mut self, message: &str) -> String {
        match self.ask(message) {
            Ok(response) => response,
            Err(e) => e.to_string(),
        }
    }

    fn render_history(&self) -> String {
        if self.transcript.is_empty() {
            return "No messages yet.".to_string();
        }
        self.transcript
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn contact_card(&self) -> String {
        let knowledge = self.responder.knowledge();
        ["email", "phone", "website"]
            .iter()
            .filter_map(|key| {
                knowledge
                    .get("contact", key)
                    .map(|value| format!("**{}:** {}", eco_core::field_title(key), value))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_quick_questions() -> String {
    QUICK_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}
