use crate::core::{prompt, LanguageModel};

/// Free-form career questions, answered in the voice of a domain counselor.
pub struct Counselor<M: LanguageModel> {
    model: M,
}

impl<M: LanguageModel> Counselor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Returns the model's text as-is. Failures come back as an error string
    /// so callers can render the result without a separate error path.
    pub async fn answer(&self, domain: &str, question: &str) -> String {
        match self.model.generate(&prompt::counselor_prompt(domain, question)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Query processing error: {}", e);
                format!("Error processing query: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{GuideError, Result};
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl LanguageModel for Echo {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {}", prompt.len()))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct Broken;

    #[async_trait]
    impl LanguageModel for Broken {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(GuideError::LlmError {
                message: "API key not valid".to_string(),
            })
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_answer_returns_model_text() {
        let counselor = Counselor::new(Echo);
        let answer = counselor.answer("Cloud", "How do I start?").await;
        assert!(answer.starts_with("echo: "));
    }

    #[tokio::test]
    async fn test_answer_never_fails() {
        let counselor = Counselor::new(Broken);
        let answer = counselor.answer("Cloud", "How do I start?").await;
        assert_eq!(answer, "Error processing query: LLM error: API key not valid");
    }
}
