use std::time::Instant;

use super::agent::AgentDescriptor;
use super::client::ChatModel;
use crate::error::TranslationError;

/// Per-run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// When set, request and response text is kept out of the logs and only
    /// metadata (agent name, lengths, timing) is recorded.
    pub tracing_disabled: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tracing_disabled: true,
        }
    }
}

/// Outcome of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// The source text exactly as supplied.
    pub input: String,
    /// The model's answer.
    pub output: String,
}

/// Issues one request-response cycle for an agent.
pub struct Runner;

impl Runner {
    /// Runs `agent` over `input` without blocking the calling task.
    pub async fn run(
        agent: &AgentDescriptor,
        input: &str,
        model: &dyn ChatModel,
        config: &RunConfig,
    ) -> Result<TranslationResult, TranslationError> {
        if input.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        if config.tracing_disabled {
            tracing::info!(
                agent = agent.name(),
                model = model.model_name(),
                input_chars = input.chars().count(),
                "running agent"
            );
        } else {
            tracing::debug!(
                agent = agent.name(),
                model = model.model_name(),
                instruction = agent.instruction(),
                input,
                "running agent"
            );
        }

        let started = Instant::now();
        let result = model.complete(agent.instruction(), input).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(output) => {
                if config.tracing_disabled {
                    tracing::info!(
                        agent = agent.name(),
                        output_chars = output.chars().count(),
                        elapsed_ms,
                        "agent run finished"
                    );
                } else {
                    tracing::debug!(
                        agent = agent.name(),
                        output = output.as_str(),
                        elapsed_ms,
                        "agent run finished"
                    );
                }
                Ok(TranslationResult {
                    input: input.to_string(),
                    output,
                })
            }
            Err(e) => {
                // Callers report the failure to the user themselves.
                tracing::debug!(
                    agent = agent.name(),
                    kind = e.kind(),
                    error = %e,
                    elapsed_ms,
                    "agent run failed"
                );
                Err(e)
            }
        }
    }

    /// Runs `agent` over `input`, blocking the calling thread until the
    /// response arrives.
    ///
    /// Drives the request on a private current-thread runtime, so it must not
    /// be called from inside an async context.
    pub fn run_sync(
        agent: &AgentDescriptor,
        input: &str,
        model: &dyn ChatModel,
        config: &RunConfig,
    ) -> Result<TranslationResult, TranslationError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TranslationError::Runtime)?;

        runtime.block_on(Self::run(agent, input, model, config))
    }
}
