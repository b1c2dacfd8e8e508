//! Mock remote network
//!
//! Simulated Stellar round trips: balance lookup, transaction submission,
//! credential verification. Each call injects a synthetic failure at a
//! configured probability and an artificial delay on success.

pub mod simulator;

pub use simulator::{
    BalanceResponse, CredentialVerification, NetworkSimulator, TransactionReceipt,
    TransferRequest, ASSET_CODE, TX_STATUS_SUCCESS, VERIFYING_ISSUER,
};
