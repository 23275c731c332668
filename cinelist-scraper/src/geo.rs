//! Public-IP country lookup.
//!
//! The source only serves its catalog to French IPs, so the sync command
//! checks where it is running before fetching anything.

use serde::Deserialize;
use tokio::time::Duration;

use crate::error::FetchError;

const IPINFO_URL: &str = "https://ipinfo.io/json";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// ISO country code the catalog is licensed for.
pub const LICENSED_COUNTRY: &str = "FR";

#[derive(Debug, Deserialize)]
struct IpInfo {
    country: String,
}

/// Look up the country code of the current public IP, retrying once on a
/// network failure.
pub async fn current_country() -> Result<String, FetchError> {
    let http = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;

    let resp = match http.get(IPINFO_URL).send().await {
        Ok(resp) => resp,
        Err(_) => http.get(IPINFO_URL).send().await?,
    };

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let info: IpInfo = resp
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(info.country)
}
