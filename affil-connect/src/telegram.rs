use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use affil_core::adapter::Notifier;
use affil_core::{CoreError, CoreResult};

/// Renders the text block delivered to the messaging channel.
pub fn render_text(kind: Option<&str>, message: &str, data: Option<&Value>) -> String {
    let kind = kind.unwrap_or("info");
    let mut text = format!("Notification [{kind}]: {message}");
    if let Some(data) = data {
        let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        text.push('\n');
        text.push_str(&pretty);
    }
    text
}

/// Live adapter for the bot-messaging API: sends the rendered text to the
/// one configured chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, bot_token: &str, chat_id: &str) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(
        &self,
        kind: Option<&str>,
        message: &str,
        data: Option<&Value>,
    ) -> CoreResult<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.bot_token);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": render_text(kind, message, data),
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| CoreError::Notify(format!("Messaging request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Notify(format!(
                "Messaging API returned {status}"
            )));
        }

        Ok(())
    }
}

/// No-remote variant: writes the rendered notification to the log instead of
/// delivering it anywhere.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        kind: Option<&str>,
        message: &str,
        data: Option<&Value>,
    ) -> CoreResult<()> {
        tracing::info!("{}", render_text(kind, message, data));
        Ok(())
    }
}
