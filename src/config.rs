use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub chat_api_key: String,
    pub chat_api_url: String,
    pub chat_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set".to_string())?;

        let chat_api_key = env::var("CHAT_API_KEY")
            .map_err(|_| "CHAT_API_KEY must be set".to_string())?;

        let chat_api_url = env::var("CHAT_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string());

        let chat_model = env::var("CHAT_MODEL")
            .unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            chat_api_key,
            chat_api_url,
            chat_model,
        })
    }
}
