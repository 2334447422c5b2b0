
use crate::ClientConfig;

/// Configuration for talking to local mock servers, bypassing any proxy from the environment.
pub(crate) fn test_config() -> eyre::Result<ClientConfig> {
    Ok(ClientConfig::default()
        .with_http_client(reqwest::blocking::Client::builder().no_proxy().build()?))
}

/// A successful Alpaca response carrying `value`.
pub(crate) fn success_body(value: serde_json::Value) -> String {
    serde_json::json!({
        "Value": value,
        "ErrorNumber": 0,
        "ErrorMessage": "",
    })
    .to_string()
}
