//! In-process [`ChatModel`] used by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::ChatModel;
use crate::error::TranslationError;

/// Records every call and answers with a canned reply.
pub struct FakeModel {
    reply: Result<String, fn() -> TranslationError>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeModel {
    pub fn answering(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: fn() -> TranslationError) -> Self {
        Self {
            reply: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(instruction, input)` pairs in call order.
    #[allow(clippy::unwrap_used)]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    fn model_name(&self) -> &str {
        "fake"
    }

    #[allow(clippy::unwrap_used)]
    async fn complete(&self, instruction: &str, input: &str) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .unwrap()
            .push((instruction.to_string(), input.to_string()));
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(make) => Err(make()),
        }
    }
}
