use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use eyre::{Result, WrapErr};

/// Creates an HTTP provider for the configured RPC endpoint
pub fn create_provider(rpc_url: &str) -> Result<impl Provider> {
    let url = Url::parse(rpc_url).wrap_err_with(|| format!("invalid RPC endpoint {rpc_url}"))?;
    Ok(ProviderBuilder::new().connect_http(url))
}
