use crate::catalog::{LearningStage, ModuleCategory};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "learnault")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "modules", about = "List catalog modules")]
    Modules {
        #[arg(
            long = "category",
            help = "Only show one category (development, design, marketing, business, web3, ai)"
        )]
        category: Option<ModuleCategory>,
        #[arg(long = "sort", help = "Sort by difficulty, easiest first")]
        sort: bool,
    },
    #[command(name = "transactions", about = "List a user's transactions, newest first")]
    Transactions {
        #[arg(help = "The user id, e.g. usr-001")]
        user_id: String,
    },
    #[command(name = "users", about = "List users at a learning stage")]
    Users {
        #[arg(help = "Learning stage (beginner, intermediate, advanced, expert)")]
        stage: LearningStage,
    },
    #[command(name = "candidate", about = "Show a candidate's full profile as JSON")]
    Candidate {
        #[arg(help = "The candidate id, e.g. can-001")]
        candidate_id: String,
    },
    #[command(name = "createwallet", about = "Generate a mock Stellar key pair")]
    Createwallet,
    #[command(name = "getbalance", about = "Look up the mock balance of an address")]
    GetBalance {
        #[arg(help = "The wallet address")]
        address: String,
    },
    #[command(name = "send", about = "Submit a mock transfer between addresses")]
    Send {
        #[arg(help = "Source wallet address")]
        from: String,
        #[arg(help = "Destination wallet address")]
        to: String,
        #[arg(help = "Amount to send")]
        amount: f64,
    },
    #[command(name = "verifycredential", about = "Verify a credential id on the mock network")]
    VerifyCredential {
        #[arg(help = "The credential id, e.g. cred-001")]
        credential_id: String,
    },
    #[command(name = "login", about = "Run the mock login flow and print the session user")]
    Login {
        #[arg(help = "Email address to sign in with")]
        email: String,
        #[arg(help = "Password (any non-empty value is accepted)")]
        password: String,
    },
}
