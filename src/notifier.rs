use reqwest::Client;
use serde::Serialize;

/// Fixed base URL of the WeCom group-robot webhook
pub const WEBHOOK_BASE_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

/// Webhook payload: `{"msgtype":"markdown","markdown":{"content":...}}`
#[derive(Debug, Serialize)]
pub struct WecomMessage {
    msgtype: String,
    markdown: MarkdownContent,
}

#[derive(Debug, Serialize)]
struct MarkdownContent {
    content: String,
}

impl WecomMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            msgtype: "markdown".to_string(),
            markdown: MarkdownContent {
                content: content.into(),
            },
        }
    }
}

/// WeCom webhook notifier
pub struct WecomNotifier {
    client: Client,
    base_url: String,
}

impl WecomNotifier {
    pub fn new() -> Self {
        Self::with_base_url(WEBHOOK_BASE_URL)
    }

    /// Notifier posting to a different base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Webhook URL for a key
    pub fn webhook_url(&self, key: &str) -> String {
        format!("{}?key={key}", self.base_url)
    }

    /// Send the alert to one webhook key. Failures are logged, not
    /// propagated, so the remaining keys are still attempted.
    pub async fn send(&self, key: &str, content: &str) {
        let message = WecomMessage::new(content);

        match self
            .client
            .post(self.webhook_url(key))
            .json(&message)
            .send()
            .await
        {
            Ok(response) => {
                println!(
                    "Wecom message sent with status code: {}",
                    response.status()
                );
            }
            Err(e) => {
                eprintln!("Failed to send wecom message: {e}");
            }
        }
    }
}

impl Default for WecomNotifier {
    fn default() -> Self {
        Self::new()
    }
}
