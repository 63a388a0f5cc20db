pub mod alert;
pub mod balance;
pub mod config;
pub mod logger;
pub mod notifier;
pub mod provider;

pub use alert::{compose_alert, AlertMessage};
pub use balance::{to_display_units, BalanceFetcher, BalanceReading};
pub use config::{Config, WatchedAddress};
pub use logger::log_reading;
pub use notifier::{WecomMessage, WecomNotifier, WEBHOOK_BASE_URL};
pub use provider::create_provider;
