// The catalog store owns the six reference collections and answers the
// read-only queries the platform pages need. Nothing here mutates: every
// query clones the matching records out, and the fixture data is built once
// by `seed()` and then only read.

use crate::catalog::records::{
    Candidate, Credential, Difficulty, Employer, LearningStage, Module, ModuleCategory,
    ModuleStatus, ProgressState, Transaction, TransactionStatus, TransactionType, User, UserRole,
};
use crate::error::{LearnaultError, Result};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A candidate joined with the user record their `user_id` points at.
///
/// Serializes as the candidate's fields plus a nested `user` object, the
/// shape the hiring pages expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub user: User,
}

/// Read-only store over the six fixture collections.
///
/// Built once at startup and passed by reference to whoever needs it; there
/// is deliberately no global instance and no way to mutate it after
/// construction.
pub struct CatalogStore {
    modules: Vec<Module>,
    users: Vec<User>,
    transactions: Vec<Transaction>,
    credentials: Vec<Credential>,
    employers: Vec<Employer>,
    candidates: Vec<Candidate>,
}

impl CatalogStore {
    /// Construct a store from explicit collections.
    pub fn new(
        modules: Vec<Module>,
        users: Vec<User>,
        transactions: Vec<Transaction>,
        credentials: Vec<Credential>,
        employers: Vec<Employer>,
        candidates: Vec<Candidate>,
    ) -> CatalogStore {
        CatalogStore {
            modules,
            users,
            transactions,
            credentials,
            employers,
            candidates,
        }
    }

    pub fn modules(&self) -> &[Module] {
        self.modules.as_slice()
    }

    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn credentials(&self) -> &[Credential] {
        self.credentials.as_slice()
    }

    pub fn employers(&self) -> &[Employer] {
        self.employers.as_slice()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_slice()
    }

    /// Modules whose category matches, in fixture order.
    pub fn modules_by_category(&self, category: ModuleCategory) -> Vec<Module> {
        self.modules
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect()
    }

    /// Sort modules Beginner -> Intermediate -> Advanced.
    ///
    /// The sort is stable, so modules of equal difficulty keep their input
    /// order. The input slice is left untouched.
    pub fn sort_modules_by_difficulty(modules: &[Module]) -> Vec<Module> {
        let mut sorted = modules.to_vec();
        sorted.sort_by_key(|m| m.difficulty.rank());
        sorted
    }

    /// All transactions belonging to one user, in fixture order.
    pub fn user_transactions(&self, user_id: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Users at a given learning stage, in fixture order.
    pub fn users_by_learning_stage(&self, stage: LearningStage) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.learning_stage == stage)
            .cloned()
            .collect()
    }

    /// Look up a candidate and join in their user record.
    ///
    /// Returns `None` both when the candidate id is unknown and when the
    /// candidate's `user_id` does not resolve - a dangling link is treated
    /// the same as a missing candidate, not as a distinct error.
    pub fn full_candidate_profile(&self, candidate_id: &str) -> Option<CandidateProfile> {
        let candidate = self.candidates.iter().find(|c| c.id == candidate_id)?;
        let user = self.users.iter().find(|u| u.id == candidate.user_id)?;
        Some(CandidateProfile {
            candidate: candidate.clone(),
            user: user.clone(),
        })
    }

    /// Sort transactions newest first.
    ///
    /// Dates are parsed as RFC 3339 up front; an unparseable date fails the
    /// whole call rather than sorting garbage. Stable: equal timestamps keep
    /// their input order. The input slice is left untouched.
    pub fn sort_transactions_by_date_desc(transactions: &[Transaction]) -> Result<Vec<Transaction>> {
        let mut keyed: Vec<(DateTime<FixedOffset>, Transaction)> = Vec::new();
        for tx in transactions {
            let parsed = DateTime::parse_from_rfc3339(&tx.date).map_err(|_| {
                LearnaultError::InvalidTimestamp(format!(
                    "transaction {} has unparseable date {:?}",
                    tx.id, tx.date
                ))
            })?;
            keyed.push((parsed, tx.clone()));
        }
        // sort_by is stable, so reversing the comparison gives newest-first
        // while ties keep their original relative order
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, tx)| tx).collect())
    }

    /// The sample data set the platform ships with.
    pub fn seed() -> CatalogStore {
        CatalogStore::new(
            seed_modules(),
            seed_users(),
            seed_transactions(),
            seed_credentials(),
            seed_employers(),
            seed_candidates(),
        )
    }
}

fn seed_modules() -> Vec<Module> {
    vec![
        Module {
            id: "mod-001".to_string(),
            title: "Introduction to Web3".to_string(),
            description: "Learn the fundamentals of blockchain technology, decentralized applications, and smart contracts.".to_string(),
            category: ModuleCategory::Web3,
            difficulty: Difficulty::Beginner,
            status: ModuleStatus::Published,
            duration_minutes: 120,
        },
        Module {
            id: "mod-002".to_string(),
            title: "Advanced React Patterns".to_string(),
            description: "Master complex state management, custom hooks, and performance optimization techniques in React.".to_string(),
            category: ModuleCategory::Development,
            difficulty: Difficulty::Advanced,
            status: ModuleStatus::Published,
            duration_minutes: 180,
        },
        Module {
            id: "mod-003".to_string(),
            title: "UI/UX Fundamentals".to_string(),
            description: "Understand the principles of user interface and user experience design to create intuitive applications.".to_string(),
            category: ModuleCategory::Design,
            difficulty: Difficulty::Beginner,
            status: ModuleStatus::Published,
            duration_minutes: 90,
        },
        Module {
            id: "mod-004".to_string(),
            title: "Machine Learning with Python".to_string(),
            description: "Build predictive models using scikit-learn and understand the basics of AI.".to_string(),
            category: ModuleCategory::Ai,
            difficulty: Difficulty::Intermediate,
            status: ModuleStatus::Draft,
            duration_minutes: 240,
        },
        Module {
            id: "mod-005".to_string(),
            title: "Digital Marketing Strategies".to_string(),
            description: "Learn how to effectively market digital products through SEO, content marketing, and paid advertising.".to_string(),
            category: ModuleCategory::Marketing,
            difficulty: Difficulty::Intermediate,
            status: ModuleStatus::Published,
            duration_minutes: 150,
        },
    ]
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "usr-001".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            role: UserRole::Student,
            progress_state: ProgressState::InProgress,
            learning_stage: LearningStage::Intermediate,
            total_points: 1250,
        },
        User {
            id: "usr-002".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            role: UserRole::Student,
            progress_state: ProgressState::NotStarted,
            learning_stage: LearningStage::Beginner,
            total_points: 0,
        },
        User {
            id: "usr-003".to_string(),
            name: "Charlie Brown".to_string(),
            email: "charlie@example.com".to_string(),
            role: UserRole::Student,
            progress_state: ProgressState::Completed,
            learning_stage: LearningStage::Advanced,
            total_points: 3400,
        },
        User {
            id: "usr-004".to_string(),
            name: "Diana Prince".to_string(),
            email: "diana@example.com".to_string(),
            role: UserRole::Instructor,
            progress_state: ProgressState::Completed,
            learning_stage: LearningStage::Expert,
            total_points: 5000,
        },
    ]
}

fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx-001".to_string(),
            user_id: "usr-001".to_string(),
            tx_type: TransactionType::Reward,
            amount: 50.0,
            status: TransactionStatus::Completed,
            date: "2024-10-25T10:00:00Z".to_string(),
        },
        Transaction {
            id: "tx-002".to_string(),
            user_id: "usr-003".to_string(),
            tx_type: TransactionType::Deposit,
            amount: 100.0,
            status: TransactionStatus::Completed,
            date: "2024-10-26T14:30:00Z".to_string(),
        },
        Transaction {
            id: "tx-003".to_string(),
            user_id: "usr-001".to_string(),
            tx_type: TransactionType::Purchase,
            amount: 25.0,
            status: TransactionStatus::Pending,
            date: "2024-10-27T09:15:00Z".to_string(),
        },
        Transaction {
            id: "tx-004".to_string(),
            user_id: "usr-004".to_string(),
            tx_type: TransactionType::Withdrawal,
            amount: 500.0,
            status: TransactionStatus::Completed,
            date: "2024-10-28T16:45:00Z".to_string(),
        },
        Transaction {
            id: "tx-005".to_string(),
            user_id: "usr-002".to_string(),
            tx_type: TransactionType::Reward,
            amount: 10.0,
            status: TransactionStatus::Failed,
            date: "2024-10-29T11:20:00Z".to_string(),
        },
    ]
}

fn seed_credentials() -> Vec<Credential> {
    vec![
        Credential {
            id: "cred-001".to_string(),
            user_id: "usr-003".to_string(),
            title: "Advanced React Developer".to_string(),
            issuer: "Learnault".to_string(),
            date_earned: "2024-09-15T00:00:00Z".to_string(),
            url: "https://learnault.example.com/credentials/cred-001".to_string(),
        },
        Credential {
            id: "cred-002".to_string(),
            user_id: "usr-004".to_string(),
            title: "Certified Digital Marketer".to_string(),
            issuer: "Marketing Inst.".to_string(),
            date_earned: "2023-11-20T00:00:00Z".to_string(),
            url: "https://example.com/cert/cred-002".to_string(),
        },
        Credential {
            id: "cred-003".to_string(),
            user_id: "usr-001".to_string(),
            title: "Web3 Basics".to_string(),
            issuer: "Learnault".to_string(),
            date_earned: "2024-10-10T00:00:00Z".to_string(),
            url: "https://learnault.example.com/credentials/cred-003".to_string(),
        },
    ]
}

fn seed_employers() -> Vec<Employer> {
    vec![
        Employer {
            id: "emp-001".to_string(),
            company_name: "TechNova Solutions".to_string(),
            industry: "Software Development".to_string(),
            website: "https://technova.example.com".to_string(),
            logo_url: None,
            open_roles: 5,
        },
        Employer {
            id: "emp-002".to_string(),
            company_name: "Creative Spark Media".to_string(),
            industry: "Marketing & Design".to_string(),
            website: "https://creativespark.example.com".to_string(),
            logo_url: None,
            open_roles: 2,
        },
        Employer {
            id: "emp-003".to_string(),
            company_name: "BlockChain Pioneers".to_string(),
            industry: "Web3 & Crypto".to_string(),
            website: "https://bcpioneers.example.com".to_string(),
            logo_url: None,
            open_roles: 8,
        },
    ]
}

fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "can-001".to_string(),
            user_id: "usr-003".to_string(), // Charlie Brown
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "Web3".to_string(),
            ],
            experience_years: 4,
            expected_salary_range: "$80,000 - $120,000".to_string(),
            is_actively_looking: true,
        },
        Candidate {
            id: "can-002".to_string(),
            user_id: "usr-001".to_string(), // Alice Johnson
            skills: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "UI/UX Basics".to_string(),
            ],
            experience_years: 1,
            expected_salary_range: "$50,000 - $70,000".to_string(),
            is_actively_looking: true,
        },
        Candidate {
            id: "can-003".to_string(),
            user_id: "usr-004".to_string(), // Diana Prince
            skills: vec![
                "Digital Marketing".to_string(),
                "SEO".to_string(),
                "Content Strategy".to_string(),
            ],
            experience_years: 7,
            expected_salary_range: "$90,000 - $140,000".to_string(),
            is_actively_looking: false,
        },
    ]
}
