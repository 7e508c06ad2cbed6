use crate::error::{TranslationError, ValidationError};
use crate::translation::{
    AgentDescriptor, ChatModel, RunConfig, Runner, TranslationResult, validate_language,
};

/// What the last completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Translated {
        language: String,
        result: TranslationResult,
    },
    Failed {
        language: String,
        kind: &'static str,
        message: String,
    },
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting for the first submit.
    Idle,
    /// A request is in flight; input is locked.
    Running { language: String },
    /// A translation or an error is on display.
    Result(Outcome),
}

/// The interactive form's state machine.
///
/// Idle → Running on a valid submit, Running → Result when the run finishes
/// (success or failure), Result → Running on the next valid submit. Invalid
/// submits leave the state alone and record an inline validation message.
#[derive(Debug)]
pub struct FormSession {
    state: ViewState,
    validation: Option<ValidationError>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub const fn new() -> Self {
        Self {
            state: ViewState::Idle,
            validation: None,
        }
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Validation message from the last rejected submit, if any.
    pub const fn validation(&self) -> Option<&ValidationError> {
        self.validation.as_ref()
    }

    /// Whether the submit control should be disabled.
    pub const fn is_busy(&self) -> bool {
        matches!(self.state, ViewState::Running { .. })
    }

    /// Accepts a submit and returns the agent to run for it.
    pub fn submit(&mut self, language: &str, text: &str) -> Result<AgentDescriptor, ValidationError> {
        if self.is_busy() {
            return Err(ValidationError::Busy);
        }

        let checked = if text.trim().is_empty() {
            Err(ValidationError::EmptyInput)
        } else {
            validate_language(language)
                .and_then(|()| AgentDescriptor::for_target_language(language))
        };

        match checked {
            Ok(agent) => {
                self.validation = None;
                self.state = ViewState::Running {
                    language: language.to_string(),
                };
                Ok(agent)
            }
            Err(e) => {
                tracing::debug!(error = %e, "submit rejected");
                self.validation = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Records the outcome of the in-flight run.
    pub fn complete(&mut self, outcome: Result<TranslationResult, TranslationError>) {
        let ViewState::Running { language } = &self.state else {
            tracing::warn!("run completed while no run was in flight");
            return;
        };
        let language = language.clone();

        self.state = ViewState::Result(match outcome {
            Ok(result) => Outcome::Translated { language, result },
            Err(e) => Outcome::Failed {
                language,
                kind: e.kind(),
                message: e.to_string(),
            },
        });
    }

    /// Submits, runs and completes in one step.
    ///
    /// Translation failures end up in [`ViewState::Result`]; only validation
    /// failures are returned.
    pub async fn translate(
        &mut self,
        model: &dyn ChatModel,
        config: &RunConfig,
        language: &str,
        text: &str,
    ) -> Result<(), ValidationError> {
        let agent = self.submit(language, text)?;
        let outcome = Runner::run(&agent, text, model, config).await;
        self.complete(outcome);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::fake::FakeModel;

    #[test]
    fn test_new_session_is_idle() {
        let session = FormSession::new();
        assert_eq!(session.state(), &ViewState::Idle);
        assert!(session.validation().is_none());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_submit_moves_to_running() {
        let mut session = FormSession::new();

        let agent = session.submit("French", "Hello").unwrap();

        assert!(agent.instruction().contains("from English to French"));
        assert_eq!(
            session.state(),
            &ViewState::Running {
                language: "French".to_string()
            }
        );
        assert!(session.is_busy());
    }

    #[test]
    fn test_blank_submit_keeps_idle() {
        let mut session = FormSession::new();

        for text in ["", "   ", "\n\t"] {
            assert_eq!(session.submit("Urdu", text), Err(ValidationError::EmptyInput));
            assert_eq!(session.state(), &ViewState::Idle);
            assert_eq!(session.validation(), Some(&ValidationError::EmptyInput));
        }
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let mut session = FormSession::new();

        let result = session.submit("Klingon", "Hello");

        assert_eq!(
            result,
            Err(ValidationError::UnsupportedLanguage("Klingon".to_string()))
        );
        assert_eq!(session.state(), &ViewState::Idle);
    }

    #[test]
    fn test_submit_while_running_is_busy() {
        let mut session = FormSession::new();
        session.submit("French", "Hello").unwrap();

        assert_eq!(
            session.submit("German", "Hello"),
            Err(ValidationError::Busy)
        );
        assert_eq!(
            session.state(),
            &ViewState::Running {
                language: "French".to_string()
            }
        );
    }

    #[test]
    fn test_valid_submit_clears_validation() {
        let mut session = FormSession::new();
        let _ = session.submit("French", "");
        assert!(session.validation().is_some());

        session.submit("French", "Hello").unwrap();
        assert!(session.validation().is_none());
    }

    #[test]
    fn test_complete_without_run_is_ignored() {
        let mut session = FormSession::new();
        session.complete(Err(TranslationError::EmptyResponse));
        assert_eq!(session.state(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn test_translate_scenario_hello_french() {
        let model = FakeModel::answering("Bonjour");
        let mut session = FormSession::new();

        session
            .translate(&model, &RunConfig::default(), "French", "Hello")
            .await
            .unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(
            calls[0]
                .0
                .contains("translate the following text from English to French")
        );
        assert_eq!(calls[0].1, "Hello");

        let ViewState::Result(Outcome::Translated { language, result }) = session.state() else {
            panic!("expected a translation, got {:?}", session.state());
        };
        assert_eq!(language, "French");
        assert_eq!(result.output, "Bonjour");
    }

    #[tokio::test]
    async fn test_translate_failure_lands_in_result() {
        let model = FakeModel::failing(|| {
            TranslationError::Network("http://127.0.0.1:9: connection refused".into())
        });
        let mut session = FormSession::new();

        session
            .translate(&model, &RunConfig::default(), "Urdu", "Hello")
            .await
            .unwrap();

        assert!(!session.is_busy());
        let ViewState::Result(Outcome::Failed { kind, message, .. }) = session.state() else {
            panic!("expected a failure, got {:?}", session.state());
        };
        assert_eq!(*kind, "network");
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_translate_blank_never_invokes_model() {
        let model = FakeModel::answering("unused");
        let mut session = FormSession::new();

        let result = session
            .translate(&model, &RunConfig::default(), "Urdu", "  ")
            .await;

        assert_eq!(result, Err(ValidationError::EmptyInput));
        assert!(model.calls().is_empty());
        assert_eq!(session.state(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn test_language_change_between_runs_changes_instruction() {
        let model = FakeModel::answering("ok");
        let mut session = FormSession::new();

        session
            .translate(&model, &RunConfig::default(), "Urdu", "Good morning")
            .await
            .unwrap();
        session
            .translate(&model, &RunConfig::default(), "Spanish", "Good morning")
            .await
            .unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].0.contains("to Urdu"));
        assert!(calls[1].0.contains("to Spanish"));
        assert_ne!(calls[0].0, calls[1].0);
    }
}
