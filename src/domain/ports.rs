use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A text-completion backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Sends one prompt and returns the reply text. An empty string means the
    /// model produced nothing usable.
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn name(&self) -> &str;
}

#[async_trait]
impl<T: LanguageModel + ?Sized> LanguageModel for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A data source that may fail and knows how to stand in for itself.
#[async_trait]
pub trait FallibleSource: Send + Sync {
    type Item: Send;
    type Error: std::fmt::Display + Send;

    fn label(&self) -> &str;

    async fn try_fetch(&self) -> std::result::Result<Vec<Self::Item>, Self::Error>;

    fn fallback(&self) -> Vec<Self::Item>;
}
