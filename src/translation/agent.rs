use super::prompt::{
    FIXED_AGENT_NAME, FORM_AGENT_NAME, URDU_TO_ENGLISH_INSTRUCTION, build_instruction,
};
use crate::error::ValidationError;

/// A named system instruction defining how the model should behave for one request.
///
/// Descriptors are immutable; build a fresh one for every request whose
/// target language may differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    name: String,
    instruction: String,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instruction: instruction.into(),
        }
    }

    /// The fixed Urdu-to-English agent used by `translator run`.
    pub fn urdu_to_english() -> Self {
        Self::new(FIXED_AGENT_NAME, URDU_TO_ENGLISH_INSTRUCTION)
    }

    /// Renders the English-to-`target_language` agent.
    ///
    /// Any non-blank language is accepted here; restricting the choice to the
    /// supported list is up to the caller.
    pub fn for_target_language(target_language: &str) -> Result<Self, ValidationError> {
        let target_language = target_language.trim();
        if target_language.is_empty() {
            return Err(ValidationError::EmptyTargetLanguage);
        }
        Ok(Self::new(FORM_AGENT_NAME, build_instruction(target_language)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_urdu_to_english() {
        let agent = AgentDescriptor::urdu_to_english();
        assert_eq!(agent.name(), "Translator Agent");
        assert_eq!(
            agent.instruction(),
            "You are a translator agent. Translate text from Urdu to English."
        );
    }

    #[test]
    fn test_for_target_language_renders_instruction() {
        let agent = AgentDescriptor::for_target_language("French").unwrap();
        assert!(
            agent
                .instruction()
                .contains("translate the following text from English to French")
        );
    }

    #[test]
    fn test_changing_language_changes_instruction() {
        let first = AgentDescriptor::for_target_language("Urdu").unwrap();
        let second = AgentDescriptor::for_target_language("Spanish").unwrap();

        assert_ne!(first.instruction(), second.instruction());
        assert!(second.instruction().contains("to Spanish"));
        assert!(!second.instruction().contains("Urdu"));
    }

    #[test]
    fn test_for_target_language_rejects_blank() {
        assert_eq!(
            AgentDescriptor::for_target_language(""),
            Err(ValidationError::EmptyTargetLanguage)
        );
        assert_eq!(
            AgentDescriptor::for_target_language(" \t\n"),
            Err(ValidationError::EmptyTargetLanguage)
        );
    }

    #[test]
    fn test_for_target_language_accepts_unlisted_language() {
        let agent = AgentDescriptor::for_target_language("Esperanto").unwrap();
        assert!(agent.instruction().contains("Esperanto"));
    }
}
