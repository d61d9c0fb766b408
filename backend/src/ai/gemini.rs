//! Gemini-backed implementation of the advice service.
//!
//! One `generateContent` call per operation, JSON-mode responses parsed
//! into the typed reply shapes and validated against the closed mood
//! vocabulary.

use super::{prompts, AdviceError, AdviceService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{ChatMessage, ExpenseSummary, Mood, Transaction};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used against stub
    /// servers).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Send one prompt (optionally with an inline image) and return the
    /// text of the first candidate.
    async fn generate(&self, parts: Vec<Part>) -> Result<String, AdviceError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api { status, body });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| AdviceError::Decode("reply contained no text".to_string()))?;
        debug!("advice service replied with {} bytes", text.len());
        Ok(text)
    }

    async fn generate_mood(&self, parts: Vec<Part>) -> Result<Mood, AdviceError> {
        let text = self.generate(parts).await?;
        let reply: MoodReply =
            serde_json::from_str(&text).map_err(|e| AdviceError::Decode(e.to_string()))?;
        reply
            .mood
            .parse()
            .map_err(|_| AdviceError::InvalidMood { value: reply.mood })
    }

    async fn generate_advice(&self, prompt: String) -> Result<String, AdviceError> {
        let text = self.generate(vec![Part::text(prompt)]).await?;
        let reply: AdviceReply =
            serde_json::from_str(&text).map_err(|e| AdviceError::Decode(e.to_string()))?;
        if reply.advice.trim().is_empty() {
            return Err(AdviceError::EmptyAdvice);
        }
        Ok(reply.advice)
    }
}

#[async_trait]
impl AdviceService for GeminiClient {
    async fn detect_mood_from_text(&self, text: &str) -> Result<Mood, AdviceError> {
        if text.trim().is_empty() {
            return Err(AdviceError::EmptyText);
        }
        self.generate_mood(vec![Part::text(prompts::detect_mood_from_text(text))])
            .await
    }

    async fn detect_mood_from_image(&self, photo_data_uri: &str) -> Result<Mood, AdviceError> {
        if photo_data_uri.trim().is_empty() {
            return Err(AdviceError::EmptyImage);
        }
        let image = Part::inline_image(photo_data_uri)?;
        self.generate_mood(vec![Part::text(prompts::detect_mood_from_image()), image])
            .await
    }

    async fn advice_for_mood(&self, mood: Mood) -> Result<String, AdviceError> {
        self.generate_advice(prompts::advice_for_mood(mood)).await
    }

    async fn expense_advice(&self, history: &[ChatMessage]) -> Result<String, AdviceError> {
        self.generate_advice(prompts::expense_advice(history)).await
    }

    async fn summarize_expenses(
        &self,
        transactions: &[Transaction],
    ) -> Result<ExpenseSummary, AdviceError> {
        let text = self
            .generate(vec![Part::text(prompts::expense_summary(transactions))])
            .await?;
        serde_json::from_str(&text).map_err(|e| AdviceError::Decode(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    /// Split a `data:<mimetype>;base64,<data>` URI into an inline-data
    /// part.
    fn inline_image(photo_data_uri: &str) -> Result<Self, AdviceError> {
        let rest = photo_data_uri
            .strip_prefix("data:")
            .ok_or_else(|| decode_err("image is not a data URI"))?;
        let (mime_type, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| decode_err("image data URI is not base64-encoded"))?;
        Ok(Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
        })
    }
}

fn decode_err(message: &str) -> AdviceError {
    AdviceError::Decode(message.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoodReply {
    mood: String,
}

#[derive(Debug, Deserialize)]
struct AdviceReply {
    advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_splits_into_mime_and_payload() {
        let part = Part::inline_image("data:image/png;base64,aGVsbG8=").unwrap();
        let inline = part.inline_data.unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn malformed_data_uri_is_rejected() {
        assert!(Part::inline_image("not-a-data-uri").is_err());
        assert!(Part::inline_image("data:image/png,rawdata").is_err());
    }

    #[test]
    fn empty_inputs_fail_before_any_request() {
        let client = GeminiClient::new("key".to_string(), "model".to_string());
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = rt.block_on(client.detect_mood_from_text("  ")).unwrap_err();
        assert!(matches!(err, AdviceError::EmptyText));
        let err = rt.block_on(client.detect_mood_from_image("")).unwrap_err();
        assert!(matches!(err, AdviceError::EmptyImage));
    }

    #[test]
    fn response_decoding_reads_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"mood\":\"happy\"}"}]}}]}"#;
        let reply: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = reply.candidates[0].content.parts[0].text.as_deref().unwrap();
        let mood: MoodReply = serde_json::from_str(text).unwrap();
        assert_eq!(mood.mood.parse::<Mood>().unwrap(), Mood::Happy);
    }
}
