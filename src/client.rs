use crate::config::ClientConfig;
use crate::constants::{VISION_INSTRUCTIONS, VISION_MAX_TOKENS};
use crate::error::InterpretError;
use crate::utils::image_data_uri;
use crate::vision::{
    ImageUrl, OpenAiVisionRequestBody, VisionApiResponse, VisionContent, VisionMessageRole,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

/// Sends one chart image to a vision-capable chat-completions endpoint and
/// returns the model's description of it.
///
/// Holds only immutable configuration, so a single instance can serve
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct ImageInterpretationClient {
    http: Client,
    config: ClientConfig,
}

impl ImageInterpretationClient {
    pub fn new(config: ClientConfig) -> Result<Self, InterpretError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                InterpretError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        log::debug!(
            "Interpretation client ready: model={} url={} timeout={:?}",
            config.model,
            config.api_url,
            config.timeout
        );

        Ok(ImageInterpretationClient { http, config })
    }

    pub fn build_headers(&self) -> Result<HeaderMap, InterpretError> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|_| {
                InterpretError::ConfigurationError(
                    "API key contains characters not allowed in a header".to_string(),
                )
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub fn build_request(&self, image: &[u8]) -> OpenAiVisionRequestBody {
        OpenAiVisionRequestBody {
            model: self.config.model.clone(),
            messages: vec![VisionMessageRole {
                role: "user".to_string(),
                content: vec![
                    VisionContent::Text {
                        text: VISION_INSTRUCTIONS.to_string(),
                    },
                    VisionContent::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_uri(image),
                        },
                    },
                ],
            }],
            max_tokens: VISION_MAX_TOKENS,
        }
    }

    pub async fn interpret(&self, image: &[u8]) -> Result<String, InterpretError> {
        let headers = self.build_headers()?;
        let request_body = self.build_request(image);

        log::info!(
            "Requesting interpretation of {} byte image from {}",
            image.len(),
            self.config.model
        );

        let response = self
            .http
            .post(&self.config.api_url)
            .headers(headers)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Interpretation request failed with status {}", status);
            let body = response.text().await.unwrap_or_default();
            return Err(InterpretError::RequestFailure { status, body });
        }

        let body = response.text().await?;

        let interpretation = extract_interpretation(&body)?;
        log::debug!("Received {} chars of interpretation", interpretation.len());
        Ok(interpretation)
    }
}

pub fn extract_interpretation(body: &str) -> Result<String, InterpretError> {
    let api_response: VisionApiResponse = serde_json::from_str(body)
        .map_err(|e| InterpretError::MalformedResponse(format!("Invalid JSON body: {}", e)))?;

    api_response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| {
            InterpretError::MalformedResponse(
                "Response has no choices[0].message.content".to_string(),
            )
        })
}
