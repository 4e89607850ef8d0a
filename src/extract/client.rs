//! HTTP client for the Cohere Generate API

use crate::config::{ApiConfig, ApiCredentials};
use crate::error::{Result, ResumeParserError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An abstraction over text-generation backends.
///
/// The pipeline only needs "prompt in, raw generated text out"; tests
/// substitute canned or failing implementations.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    /// Issues one generation request and returns the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    k: u32,
    p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stop_sequences: &'a [String],
    return_likelihoods: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Deserialize, Debug)]
struct Generation {
    text: String,
}

/// Client for the Cohere `/v1/generate` endpoint.
pub struct CohereClient {
    client: reqwest::Client,
    credentials: ApiCredentials,
    config: ApiConfig,
}

impl CohereClient {
    /// Builds a client from an explicit credential and request
    /// parameters. The credential is validated at construction, before
    /// any network call is made.
    pub fn new(credentials: ApiCredentials, config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            config,
        }
    }
}

#[async_trait]
impl GenerateClient for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            k: self.config.k,
            p: self.config.p,
            frequency_penalty: self.config.frequency_penalty,
            presence_penalty: self.config.presence_penalty,
            stop_sequences: &self.config.stop_sequences,
            return_likelihoods: "NONE",
        };

        log::debug!(
            "Requesting generation from {} (model {}, {} prompt chars)",
            self.config.endpoint,
            self.config.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.credentials.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResumeParserError::Api(format!(
                "Generation request failed with status {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        let generation = parsed.generations.into_iter().next().ok_or_else(|| {
            ResumeParserError::Api("Generation response contained no generations".to_string())
        })?;

        Ok(generation.text)
    }
}
