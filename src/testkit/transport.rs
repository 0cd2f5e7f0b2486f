//! Scripted [`BotTransport`].

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::{BotTransport, InboundUpdate};

/// One scripted answer to `get_updates`.
#[derive(Debug, Clone)]
pub enum PollScript {
    Batch(Vec<InboundUpdate>),
    Fail(String),
}

/// A message handed to `send_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Answers polls from a queue (empty batches once exhausted) and records
/// every poll offset and sent message.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    polls: Mutex<VecDeque<PollScript>>,
    offsets: Mutex<Vec<u64>>,
    sent: Mutex<Vec<SentMessage>>,
    failing_sends: HashSet<usize>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(self, updates: Vec<InboundUpdate>) -> Self {
        self.polls.lock().push_back(PollScript::Batch(updates));
        self
    }

    pub fn with_poll_failure(self, reason: impl Into<String>) -> Self {
        self.polls.lock().push_back(PollScript::Fail(reason.into()));
        self
    }

    /// Make the `index`-th send (0-based, counting attempts) fail.
    pub fn with_failing_send(mut self, index: usize) -> Self {
        self.failing_sends.insert(index);
        self
    }

    /// Offsets passed to each `get_updates` call.
    pub fn offsets(&self) -> Vec<u64> {
        self.offsets.lock().clone()
    }

    /// Every send attempt, including failed ones.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().iter().map(|m| m.text.clone()).collect()
    }
}

#[async_trait]
impl BotTransport for ScriptedTransport {
    async fn get_updates(&self, offset: u64, _timeout: Duration) -> Result<Vec<InboundUpdate>> {
        self.offsets.lock().push(offset);
        let next = self.polls.lock().pop_front();
        match next {
            Some(PollScript::Batch(updates)) => Ok(updates),
            Some(PollScript::Fail(reason)) => Err(Error::Transport(reason)),
            None => Ok(Vec::new()),
        }
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let index = {
            let mut sent = self.sent.lock();
            sent.push(SentMessage {
                chat_id,
                text: text.to_string(),
            });
            sent.len() - 1
        };
        if self.failing_sends.contains(&index) {
            return Err(Error::Dispatch(format!("send #{index} rejected")));
        }
        Ok(())
    }
}
