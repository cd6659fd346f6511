//! Concurrent fetch of the two resource sources for one address.

use super::{ChainClient, ChainError};
use crate::domain::ResourceReading;

/// Fetches the account record and bandwidth for `address` concurrently.
///
/// Both requests are started together and joined; the first error wins and
/// is returned as-is, with no partial reading. No retries.
///
/// # Errors
///
/// Returns the [`ChainError`] of whichever remote call failed.
pub async fn fetch_resources(
    client: &dyn ChainClient,
    address: &str,
) -> Result<ResourceReading, ChainError> {
    let (account, bandwidth) =
        tokio::try_join!(client.get_account(address), client.get_bandwidth(address))?;

    Ok(ResourceReading {
        energy: account.energy(),
        balance: account.balance,
        bandwidth,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{RendezvousChainClient, ScriptedChainClient, sample_address};

    #[tokio::test]
    async fn merges_account_and_bandwidth() {
        let client = ScriptedChainClient::with_resources(Some(400), Some(500), Some(600));
        let Ok(reading) = fetch_resources(&client, &sample_address(1)).await else {
            panic!("fetch must succeed");
        };
        assert_eq!(
            reading,
            ResourceReading {
                energy: Some(400),
                balance: Some(500),
                bandwidth: Some(600),
            }
        );
        assert_eq!(client.account_calls(), 1);
        assert_eq!(client.bandwidth_calls(), 1);
    }

    #[tokio::test]
    async fn both_calls_are_in_flight_together() {
        let client = RendezvousChainClient::with_resources(Some(400), Some(500), Some(600));
        let address = sample_address(1);

        let fetch = fetch_resources(&client, &address);
        let Ok(result) = tokio::time::timeout(Duration::from_secs(2), fetch).await else {
            panic!("account and bandwidth calls did not run concurrently");
        };

        let Ok(reading) = result else {
            panic!("fetch must succeed");
        };
        assert_eq!(reading.bandwidth, Some(600));
    }

    #[tokio::test]
    async fn missing_energy_is_not_an_error() {
        let client = ScriptedChainClient::with_resources(None, Some(500), None);
        let Ok(reading) = fetch_resources(&client, &sample_address(1)).await else {
            panic!("fetch must succeed");
        };
        assert_eq!(reading.energy, None);
        assert_eq!(reading.balance, Some(500));
        assert_eq!(reading.bandwidth, None);
    }

    #[tokio::test]
    async fn account_failure_propagates() {
        let client = ScriptedChainClient::with_resources(Some(1), Some(2), Some(3))
            .failing_account("node unavailable");
        let result = fetch_resources(&client, &sample_address(1)).await;
        assert!(matches!(result, Err(ChainError::Api(msg)) if msg == "node unavailable"));
    }

    #[tokio::test]
    async fn bandwidth_failure_propagates() {
        let client = ScriptedChainClient::with_resources(Some(1), Some(2), Some(3))
            .failing_bandwidth("rate limited");
        let result = fetch_resources(&client, &sample_address(1)).await;
        assert!(matches!(result, Err(ChainError::Api(msg)) if msg == "rate limited"));
    }
}
