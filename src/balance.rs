use alloy::{
    primitives::{utils::format_units, Address, U256},
    providers::Provider,
};
use eyre::{Result, WrapErr};
use std::str::FromStr;

/// Balance of a watched address, in display units
#[derive(Debug, Clone)]
pub struct BalanceReading {
    pub tag: String,
    pub address: String,
    pub balance: f64,
}

/// Queries native-currency balances over an RPC provider
pub struct BalanceFetcher<P> {
    provider: P,
}

impl<P: Provider> BalanceFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get the raw wei balance of an address at the latest block
    pub async fn fetch(&self, address: &str) -> Result<U256> {
        let address = Address::from_str(address)
            .wrap_err_with(|| format!("invalid address {address}"))?;
        let wei = self
            .provider
            .get_balance(address)
            .await
            .wrap_err_with(|| format!("error getting balance of {address}"))?;
        Ok(wei)
    }

    /// Get the balance of an address in ether
    pub async fn fetch_display(&self, address: &str) -> Result<f64> {
        let wei = self.fetch(address).await?;
        to_display_units(wei)
    }
}

/// Convert a raw wei amount to ether.
///
/// Division by 10^18 happens on the exact decimal string; only the final
/// result is narrowed to f64.
pub fn to_display_units(wei: U256) -> Result<f64> {
    let ether = format_units(wei, 18)?;
    ether
        .parse::<f64>()
        .wrap_err_with(|| format!("error converting balance {wei} to ether"))
}
