//! # Learnault Core - Catalog Queries and Mock Network
//!
//! This is the backend core for the Learnault learn-to-earn landing pages.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What I Built
//! - **Catalog Store**: the six reference collections (modules, users,
//!   transactions, credentials, employers, candidates) seeded once and only
//!   ever read
//! - **Query Layer**: pure filter/sort/join operations the pages render from
//! - **Mock Network**: simulated Stellar round trips with injected latency
//!   and synthetic failures, so the wallet UI can be built before a real
//!   Horizon integration exists
//! - **Mock Wallets**: Stellar-looking key pairs with no real key material
//! - **Session Store**: a local-storage-style auth toy with no security
//!   guarantees
//!
//! ## How I Organized My Code
//! - `catalog/`: record types, fixture data, query operations
//! - `wallet/`: mock key pair generation and address display helpers
//! - `network/`: the simulator and its response types
//! - `session/`: token + user-record key/value session state
//! - `config/`: simulator tuning with environment overrides
//! - `cli/`: demo commands for every operation
//!
//! ## Key Design Decisions I Made
//! - No global fixture state: the store is constructed and passed explicitly
//! - Synthetic failures are typed errors, not exceptions in disguise
//! - The failure roll happens before the artificial delay, so failures are
//!   cheap and immediate
//! - Malformed transaction dates fail the date sort loudly instead of
//!   sorting garbage

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod session;
pub mod wallet;

// Re-export commonly used types for convenience
pub use catalog::{
    Candidate, CandidateProfile, CatalogStore, Credential, Difficulty, Employer, LearningStage,
    Module, ModuleCategory, ModuleStatus, ProgressState, Transaction, TransactionStatus,
    TransactionType, User, UserRole,
};
pub use cli::{Command, Opt};
pub use config::SimulatorConfig;
pub use error::{LearnaultError, Result, MOCK_NETWORK_ERROR};
pub use network::{
    BalanceResponse, CredentialVerification, NetworkSimulator, TransactionReceipt,
    TransferRequest, ASSET_CODE, TX_STATUS_SUCCESS, VERIFYING_ISSUER,
};
pub use session::{AuthUser, SessionStore, AUTH_TOKEN_KEY, USER_DATA_KEY};
pub use wallet::{
    format_address, Wallet, ADDRESS_ALPHABET, ADDRESS_BODY_LEN, PUBLIC_KEY_PREFIX,
    SECRET_KEY_PREFIX,
};
