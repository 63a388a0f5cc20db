use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;

/// Watched address with an alias tag, parsed from a `"tag:address"` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WatchedAddress {
    pub tag: String,
    pub address: String,
}

impl TryFrom<String> for WatchedAddress {
    type Error = String;

    fn try_from(entry: String) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = entry.split(':').collect();
        match fields.as_slice() {
            [tag, address] if !tag.is_empty() && !address.is_empty() => Ok(Self {
                tag: tag.to_string(),
                address: address.to_string(),
            }),
            _ => Err(format!(
                "invalid address entry {entry:?}, expected \"tag:address\""
            )),
        }
    }
}

impl From<WatchedAddress> for String {
    fn from(watched: WatchedAddress) -> Self {
        format!("{}:{}", watched.tag, watched.address)
    }
}

/// Application configuration from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint URL
    #[serde(rename = "EthRpc")]
    pub eth_rpc: String,
    /// Alert threshold in ether
    #[serde(rename = "BalanceAlert")]
    pub balance_alert: f64,
    /// Header text for alert messages
    #[serde(rename = "AlertTitle")]
    pub alert_title: String,
    /// Webhook keys, one per destination chat
    #[serde(rename = "QywxBot")]
    pub webhook_keys: Vec<String>,
    /// Addresses to watch, `"tag:address"` entries
    #[serde(rename = "EthAddress")]
    pub addresses: Vec<WatchedAddress>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("error reading config file {path}"))?;
        let config: Config =
            serde_yaml::from_str(&content).wrap_err("error parsing config file")?;
        Ok(config)
    }
}
