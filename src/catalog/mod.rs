//! Catalog records and the read-only query layer
//!
//! This module holds the platform's six reference collections (modules,
//! users, transactions, credentials, employers, candidates) and the pure
//! filter/sort/join queries the pages render from.

pub mod records;
pub mod store;

pub use records::{
    Candidate, Credential, Difficulty, Employer, LearningStage, Module, ModuleCategory,
    ModuleStatus, ProgressState, Transaction, TransactionStatus, TransactionType, User, UserRole,
};
pub use store::{CandidateProfile, CatalogStore};
