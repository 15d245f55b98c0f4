//! Scriptable [`PasswordChecker`] for orchestrator tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::CheckError;
use crate::models::{CheckOutcome, CheckRequest};
use crate::traits::{HttpError, PasswordChecker};

type Answer = Result<CheckOutcome, CheckError>;

/// Password checker that answers from a script and records every call.
///
/// Per-password answers are queued: each call consumes the next one, and the
/// last one keeps answering once the queue is down to it. Latency is applied
/// with `tokio::time::sleep`, so it follows a paused test clock.
#[derive(Debug, Clone, Default)]
pub struct MockChecker {
    answers: Arc<Mutex<HashMap<String, Vec<Answer>>>>,
    default_answer: Arc<Mutex<Option<Answer>>>,
    latency: Arc<Mutex<HashMap<String, Duration>>>,
    default_latency: Arc<Mutex<Duration>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every check of `password` with `answer`.
    pub fn set_response(&self, password: &str, answer: Answer) {
        self.answers
            .lock()
            .unwrap()
            .insert(password.to_string(), vec![answer]);
    }

    /// Answer successive checks of `password` with `answers`, repeating the last.
    pub fn set_responses(&self, password: &str, answers: Vec<Answer>) {
        self.answers
            .lock()
            .unwrap()
            .insert(password.to_string(), answers);
    }

    pub fn set_default_response(&self, answer: Answer) {
        *self.default_answer.lock().unwrap() = Some(answer);
    }

    /// Delay answers for `password`.
    pub fn set_latency(&self, password: &str, latency: Duration) {
        self.latency
            .lock()
            .unwrap()
            .insert(password.to_string(), latency);
    }

    pub fn set_default_latency(&self, latency: Duration) {
        *self.default_latency.lock().unwrap() = latency;
    }

    /// Passwords checked so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, password: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == password)
            .count()
    }

    fn next_answer(&self, password: &str) -> Answer {
        let mut answers = self.answers.lock().unwrap();
        if let Some(queue) = answers.get_mut(password) {
            if queue.len() > 1 {
                return queue.remove(0);
            }
            if let Some(last) = queue.first() {
                return last.clone();
            }
        }
        drop(answers);

        self.default_answer.lock().unwrap().clone().unwrap_or_else(|| {
            Err(CheckError::Http(HttpError::Other(format!(
                "no mock answer for a {}-char password",
                password.chars().count()
            ))))
        })
    }
}

#[async_trait]
impl PasswordChecker for MockChecker {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, CheckError> {
        self.calls.lock().unwrap().push(request.password.clone());

        let answer = self.next_answer(&request.password);
        let latency = self
            .latency
            .lock()
            .unwrap()
            .get(&request.password)
            .copied()
            .unwrap_or_else(|| *self.default_latency.lock().unwrap());

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        answer
    }
}
