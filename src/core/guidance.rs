use crate::core::{fallback, parse, prompt};
use crate::core::{CareerGuidance, DomainProfile, ExperienceLevel, LanguageModel};
use crate::utils::error::{GuideError, ParseError, Result};

pub struct GuidanceGenerator<M: LanguageModel> {
    model: M,
}

impl<M: LanguageModel> GuidanceGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Always returns a populated record: model failures of any kind end in
    /// the deterministic fallback.
    pub async fn generate(
        &self,
        domain: &str,
        level: ExperienceLevel,
        profile: &DomainProfile,
    ) -> CareerGuidance {
        match self.try_generate(domain, level, profile).await {
            Ok(guidance) => {
                tracing::info!("Generated guidance for {} ({}) with {}", domain, level, self.model.name());
                guidance
            }
            Err(e) => {
                tracing::error!("Error generating guidance: {}", e);
                tracing::warn!("Falling back to local guidance for {} ({})", domain, level);
                fallback::synthesize(domain, level, profile)
            }
        }
    }

    async fn try_generate(
        &self,
        domain: &str,
        level: ExperienceLevel,
        profile: &DomainProfile,
    ) -> Result<CareerGuidance> {
        let reply = self
            .model
            .generate(&prompt::guidance_prompt(domain, level, profile))
            .await?;

        if reply.trim().is_empty() {
            return Err(ParseError::EmptyReply.into());
        }

        match parse::parse_guidance(&reply) {
            Ok(guidance) => Ok(guidance),
            Err(e) => {
                tracing::warn!("JSON parsing failed, trying simplified prompt: {}", e);
                tracing::debug!("Problematic response (first 500 chars): {}", preview(&reply, 500));
                self.generate_simplified(domain, level).await
            }
        }
    }

    async fn generate_simplified(&self, domain: &str, level: ExperienceLevel) -> Result<CareerGuidance> {
        let reply = self
            .model
            .generate(&prompt::simplified_prompt(domain, level))
            .await?;

        parse::parse_guidance(&reply).map_err(|e| {
            tracing::debug!("Simplified reply (first 500 chars): {}", preview(&reply, 500));
            GuideError::from(e)
        })
    }
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
