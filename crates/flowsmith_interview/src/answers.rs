//! Answer sources.
//!
//! Every question in the pipeline is a suspension point: the caller awaits
//! one answer from an [`AnswerSource`]. The console implementation blocks on
//! stdin; the scripted implementation replays a fixed sequence so tests and
//! non-interactive drives never touch a terminal.

use std::collections::VecDeque;
use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

use crate::error::{InterviewError, InterviewResult};

/// A line-oriented question/answer channel.
///
/// Answers are returned trimmed of leading/trailing whitespace.
#[async_trait]
pub trait AnswerSource: Send {
    /// Ask one question and wait for the answer.
    async fn ask(&mut self, prompt: &str) -> InterviewResult<String>;
}

/// Interactive console channel on stdin/stdout.
pub struct ConsoleAnswers {
    reader: BufReader<Stdin>,
}

impl ConsoleAnswers {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for ConsoleAnswers {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerSource for ConsoleAnswers {
    async fn ask(&mut self, prompt: &str) -> InterviewResult<String> {
        {
            let mut out = std::io::stdout();
            write!(out, "{} ", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(InterviewError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Replays a fixed sequence of answers.
///
/// Running out of answers is an error rather than an empty string, so a
/// test script that underruns fails loudly instead of silently ending
/// every list collection.
pub struct ScriptedAnswers {
    queue: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn ask(&mut self, _prompt: &str) -> InterviewResult<String> {
        self.queue
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(InterviewError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_replay_in_order() {
        let mut answers = ScriptedAnswers::new(["first", "  second  ", ""]);
        assert_eq!(answers.ask("q1").await.unwrap(), "first");
        assert_eq!(answers.ask("q2").await.unwrap(), "second");
        assert_eq!(answers.ask("q3").await.unwrap(), "");
        assert!(matches!(
            answers.ask("q4").await,
            Err(InterviewError::InputClosed)
        ));
    }
}
