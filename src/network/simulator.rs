// A stand-in for the Stellar Horizon round trips the platform will
// eventually make. Every call rolls its synthetic failure first, then
// sleeps for a random interval, then fabricates a plausible response.
// Nothing is validated and nothing is remembered between calls: submitting
// a transaction debits no balance, and two concurrent calls never observe
// each other.

use crate::config::SimulatorConfig;
use crate::error::{LearnaultError, Result};
use crate::wallet::format_address;
use chrono::Utc;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The only asset the mock network quotes
pub const ASSET_CODE: &str = "XLM";

/// Status string stamped on every accepted submission
pub const TX_STATUS_SUCCESS: &str = "success";

/// Issuer label on every verification response
pub const VERIFYING_ISSUER: &str = "Learnault Authority";

/// Exclusive upper bound for fabricated ledger sequence numbers
const MAX_LEDGER_SEQ: u32 = 1_000_000;

/// Balance lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub address: String,
    /// Formatted to two decimal places, the way the UI displays it
    pub balance: String,
    pub asset: String,
    pub last_updated: String,
}

/// A transfer to submit: no address validation, no sufficiency check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Receipt for an accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub status: String,
    pub ledger: u32,
    pub timestamp: String,
}

/// Credential verification response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialVerification {
    pub credential_id: String,
    pub verified: bool,
    pub issuer: String,
    pub verified_at: String,
}

/// Simulates the remote ledger the wallet pages talk to.
///
/// Calls are independent asynchronous units of work: no shared state, no
/// ordering between concurrent calls, no cancellation and no retry. A
/// failed call costs no delay; the failure roll happens before the sleep.
pub struct NetworkSimulator {
    config: SimulatorConfig,
}

impl Default for NetworkSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl NetworkSimulator {
    pub fn new(config: SimulatorConfig) -> NetworkSimulator {
        NetworkSimulator { config }
    }

    pub fn get_config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Look up the balance of an address. The address is echoed back
    /// unchecked; any string gets a quote.
    pub async fn get_balance(&self, address: &str) -> Result<BalanceResponse> {
        self.roll_failure(self.config.balance_failure_rate)?;
        self.network_delay().await;

        let balance: f64 = rand::thread_rng().gen_range(10.0..1010.0);
        debug!(
            "Quoted balance {balance:.2} {ASSET_CODE} for {}",
            format_address(address, 4)
        );

        Ok(BalanceResponse {
            address: address.to_string(),
            balance: format!("{balance:.2}"),
            asset: ASSET_CODE.to_string(),
            last_updated: Utc::now().to_rfc3339(),
        })
    }

    /// Submit a transfer. Accepted submissions get a fabricated hash and
    /// ledger sequence; no ledger state changes anywhere.
    pub async fn submit_transaction(&self, request: TransferRequest) -> Result<TransactionReceipt> {
        self.roll_failure(self.config.transfer_failure_rate)?;
        self.network_delay().await;

        let transaction_hash = mock_tx_hash();
        let ledger = rand::thread_rng().gen_range(0..MAX_LEDGER_SEQ);
        debug!(
            "Accepted transfer of {} from {} to {} in ledger {ledger}",
            request.amount,
            format_address(&request.from, 4),
            format_address(&request.to, 4)
        );

        Ok(TransactionReceipt {
            transaction_hash,
            from: request.from,
            to: request.to,
            amount: request.amount,
            status: TX_STATUS_SUCCESS.to_string(),
            ledger,
            timestamp: Utc::now().to_rfc3339(),
        })
    }

    /// Verify a credential id. Independent of the catalog: the id is not
    /// checked against the Credential collection.
    pub async fn verify_credential(&self, credential_id: &str) -> Result<CredentialVerification> {
        self.roll_failure(self.config.verify_failure_rate)?;
        self.network_delay().await;

        let verified = rand::thread_rng().gen::<f64>() < self.config.verified_rate;
        debug!("Credential {credential_id} verified={verified}");

        Ok(CredentialVerification {
            credential_id: credential_id.to_string(),
            verified,
            issuer: VERIFYING_ISSUER.to_string(),
            verified_at: Utc::now().to_rfc3339(),
        })
    }

    // The failure roll happens before any delay, so a failed call returns
    // immediately
    fn roll_failure(&self, probability: f64) -> Result<()> {
        if probability > 0.0 && rand::thread_rng().gen::<f64>() < probability {
            return Err(LearnaultError::mock_network());
        }
        Ok(())
    }

    async fn network_delay(&self) {
        let ms = if self.config.delay_max_ms > self.config.delay_min_ms {
            rand::thread_rng().gen_range(self.config.delay_min_ms..self.config.delay_max_ms)
        } else {
            self.config.delay_min_ms
        };
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// A fabricated 64-character lowercase-hex transaction hash.
fn mock_tx_hash() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MOCK_NETWORK_ERROR;

    fn reliable_simulator() -> NetworkSimulator {
        NetworkSimulator::new(SimulatorConfig::reliable())
    }

    fn failing_simulator() -> NetworkSimulator {
        NetworkSimulator::new(SimulatorConfig {
            balance_failure_rate: 1.0,
            transfer_failure_rate: 1.0,
            verify_failure_rate: 1.0,
            ..SimulatorConfig::reliable()
        })
    }

    #[tokio::test]
    async fn test_get_balance_success_shape() {
        let simulator = reliable_simulator();
        let response = simulator.get_balance("GABC").await.unwrap();
        assert_eq!(response.address, "GABC");
        assert_eq!(response.asset, ASSET_CODE);

        let value: f64 = response.balance.parse().unwrap();
        assert!((10.0..1010.0).contains(&value));
        // Two decimal places exactly
        let (_, decimals) = response.balance.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2);
    }

    #[tokio::test]
    async fn test_get_balance_failure_carries_fixed_message() {
        let simulator = failing_simulator();
        let err = simulator.get_balance("GABC").await.unwrap_err();
        match err {
            LearnaultError::MockNetwork(msg) => assert_eq!(msg, MOCK_NETWORK_ERROR),
            other => panic!("expected MockNetwork, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_transaction_receipt() {
        let simulator = reliable_simulator();
        let receipt = simulator
            .submit_transaction(TransferRequest {
                from: "GAAA".to_string(),
                to: "GBBB".to_string(),
                amount: 42.5,
            })
            .await
            .unwrap();

        assert_eq!(receipt.from, "GAAA");
        assert_eq!(receipt.to, "GBBB");
        assert_eq!(receipt.amount, 42.5);
        assert_eq!(receipt.status, TX_STATUS_SUCCESS);
        assert!(receipt.ledger < MAX_LEDGER_SEQ);
        assert_eq!(receipt.transaction_hash.len(), 64);
        assert!(receipt
            .transaction_hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_submit_transaction_failure() {
        let simulator = failing_simulator();
        let result = simulator
            .submit_transaction(TransferRequest {
                from: "GAAA".to_string(),
                to: "GBBB".to_string(),
                amount: 1.0,
            })
            .await;
        assert!(matches!(result, Err(LearnaultError::MockNetwork(_))));
    }

    #[tokio::test]
    async fn test_verify_credential_respects_verified_rate() {
        let always = reliable_simulator();
        let verification = always.verify_credential("cred-001").await.unwrap();
        assert!(verification.verified);
        assert_eq!(verification.issuer, VERIFYING_ISSUER);
        assert_eq!(verification.credential_id, "cred-001");

        let never = NetworkSimulator::new(SimulatorConfig {
            verified_rate: 0.0,
            ..SimulatorConfig::reliable()
        });
        let verification = never.verify_credential("cred-001").await.unwrap();
        assert!(!verification.verified);
    }

    #[tokio::test]
    async fn test_calls_are_independent() {
        // A submission does not move any balance a later lookup could see;
        // both calls just fabricate values
        let simulator = reliable_simulator();
        simulator
            .submit_transaction(TransferRequest {
                from: "GAAA".to_string(),
                to: "GBBB".to_string(),
                amount: 999.0,
            })
            .await
            .unwrap();
        let before = simulator.get_balance("GBBB").await.unwrap();
        let after = simulator.get_balance("GBBB").await.unwrap();
        // Nothing to assert beyond both succeeding with in-range values
        for response in [before, after] {
            let value: f64 = response.balance.parse().unwrap();
            assert!((10.0..1010.0).contains(&value));
        }
    }

    #[test]
    fn test_mock_tx_hash_shape() {
        let hash = mock_tx_hash();
        assert_eq!(hash.len(), 64);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
