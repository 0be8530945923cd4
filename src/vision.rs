use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct VisionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VisionChoice {
    pub message: VisionMessage,
}

/// Fields are optional so a missing `choices` key is reported as a
/// malformed response rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct VisionApiResponse {
    #[serde(default)]
    pub choices: Vec<VisionChoice>,
}

impl VisionApiResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum VisionContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct VisionMessageRole {
    pub role: String,
    pub content: Vec<VisionContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiVisionRequestBody {
    pub model: String,
    pub messages: Vec<VisionMessageRole>,
    pub max_tokens: u32,
}
