use crate::balance::BalanceReading;

/// Composed alert, sent only when at least one alert line exists
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub content: String,
    pub alert_count: usize,
}

impl AlertMessage {
    pub fn should_send(&self) -> bool {
        self.alert_count > 0
    }
}

/// Build the markdown alert: a title header plus one line per reading
/// strictly below the threshold, in input order.
pub fn compose_alert(title: &str, readings: &[BalanceReading], threshold: f64) -> AlertMessage {
    let mut content = format!("### {title}\n");
    let mut alert_count = 0;

    for reading in readings {
        if reading.balance < threshold {
            content.push_str(&format!("{} *{:.4}*\n", reading.tag, reading.balance));
            alert_count += 1;
        }
    }

    AlertMessage {
        content,
        alert_count,
    }
}
