// These are the record types the platform serves to its web client.
// Field names serialize as camelCase so the JSON shape matches what the
// frontend already consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog categories a module can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleCategory {
    Development,
    Design,
    Marketing,
    Business,
    Web3,
    #[serde(rename = "AI")]
    Ai,
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleCategory::Development => write!(f, "Development"),
            ModuleCategory::Design => write!(f, "Design"),
            ModuleCategory::Marketing => write!(f, "Marketing"),
            ModuleCategory::Business => write!(f, "Business"),
            ModuleCategory::Web3 => write!(f, "Web3"),
            ModuleCategory::Ai => write!(f, "AI"),
        }
    }
}

impl FromStr for ModuleCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(ModuleCategory::Development),
            "design" => Ok(ModuleCategory::Design),
            "marketing" => Ok(ModuleCategory::Marketing),
            "business" => Ok(ModuleCategory::Business),
            "web3" => Ok(ModuleCategory::Web3),
            "ai" => Ok(ModuleCategory::Ai),
            _ => Err(format!(
                "Invalid category: {s}. Valid options: development, design, marketing, business, web3, ai"
            )),
        }
    }
}

/// Difficulty tiers, ordered Beginner < Intermediate < Advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Explicit sort rank: Beginner 1, Intermediate 2, Advanced 3.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Publication state of a catalog module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleStatus {
    Draft,
    Published,
    Archived,
}

/// A learning module in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ModuleCategory,
    pub difficulty: Difficulty,
    pub status: ModuleStatus,
    pub duration_minutes: u32,
}

/// Platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

/// Coarse progress marker on a user's current module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressState {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// How far along the learning path a user is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningStage {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for LearningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStage::Beginner => write!(f, "Beginner"),
            LearningStage::Intermediate => write!(f, "Intermediate"),
            LearningStage::Advanced => write!(f, "Advanced"),
            LearningStage::Expert => write!(f, "Expert"),
        }
    }
}

impl FromStr for LearningStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(LearningStage::Beginner),
            "intermediate" => Ok(LearningStage::Intermediate),
            "advanced" => Ok(LearningStage::Advanced),
            "expert" => Ok(LearningStage::Expert),
            _ => Err(format!(
                "Invalid learning stage: {s}. Valid options: beginner, intermediate, advanced, expert"
            )),
        }
    }
}

/// A learner or instructor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub progress_state: ProgressState,
    pub learning_stage: LearningStage,
    pub total_points: u32,
}

/// Point/token movement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Reward,
    Purchase,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "Deposit"),
            TransactionType::Withdrawal => write!(f, "Withdrawal"),
            TransactionType::Reward => write!(f, "Reward"),
            TransactionType::Purchase => write!(f, "Purchase"),
        }
    }
}

/// Settlement state of a transaction record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Completed => write!(f, "Completed"),
            TransactionStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// A ledger-style record of points moving in or out of a user account.
/// There is no real ledger behind these; they are display records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: f64,
    pub status: TransactionStatus,
    /// RFC 3339 timestamp
    pub date: String,
}

/// An issued certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub issuer: String,
    /// RFC 3339 timestamp
    pub date_earned: String,
    pub url: String,
}

/// A company recruiting from the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub open_roles: u32,
}

/// A job-seeker profile, linked to a User by `user_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub user_id: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub expected_salary_range: String,
    pub is_actively_looking: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_rank_ordering() {
        assert!(Difficulty::Beginner.rank() < Difficulty::Intermediate.rank());
        assert!(Difficulty::Intermediate.rank() < Difficulty::Advanced.rank());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("web3".parse::<ModuleCategory>(), Ok(ModuleCategory::Web3));
        assert_eq!("AI".parse::<ModuleCategory>(), Ok(ModuleCategory::Ai));
        assert!("cooking".parse::<ModuleCategory>().is_err());
    }

    #[test]
    fn test_learning_stage_parsing() {
        assert_eq!("Expert".parse::<LearningStage>(), Ok(LearningStage::Expert));
        assert!("grandmaster".parse::<LearningStage>().is_err());
    }

    #[test]
    fn test_transaction_serializes_with_camel_case_and_type_field() {
        let tx = Transaction {
            id: "tx-900".to_string(),
            user_id: "usr-001".to_string(),
            tx_type: TransactionType::Reward,
            amount: 50.0,
            status: TransactionStatus::Completed,
            date: "2024-10-25T10:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["userId"], "usr-001");
        assert_eq!(json["type"], "Reward");
    }

    #[test]
    fn test_progress_state_uses_spaced_labels() {
        let json = serde_json::to_string(&ProgressState::NotStarted).unwrap();
        assert_eq!(json, "\"Not Started\"");
    }
}
