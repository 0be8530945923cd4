pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const VISION_MODEL: &str = "gpt-4o-mini";
pub const VISION_INSTRUCTIONS: &str = "What's in this image?";
pub const VISION_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Declared for every image, PNG included.
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_URL: &str = "OPENAI_API_URL";
pub const ENV_VISION_MODEL: &str = "OPENAI_VISION_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";

pub const FLAG_HTML: &str = "-html";
