// This is the demo entry point for the platform core. It wires the seeded
// catalog and the mock network simulator to a handful of CLI commands so
// every operation can be exercised from a terminal.
use clap::Parser;
use learnault::{
    format_address, CatalogStore, Command, NetworkSimulator, Opt, SessionStore, SimulatorConfig,
    TransferRequest, Wallet,
};
use log::{error, LevelFilter};
use std::process;

#[tokio::main]
async fn main() {
    // Info level shows the command flow without drowning in simulator noise
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command).await {
        error!("Error: {e}");
        process::exit(1);
    }
}

async fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    // The catalog is seeded once and only read; the simulator picks up any
    // LEARNAULT_* overrides from the environment
    let catalog = CatalogStore::seed();
    let simulator = NetworkSimulator::new(SimulatorConfig::from_env());

    match command {
        Command::Modules { category, sort } => {
            let mut modules = match category {
                Some(category) => catalog.modules_by_category(category),
                None => catalog.modules().to_vec(),
            };
            if sort {
                modules = CatalogStore::sort_modules_by_difficulty(&modules);
            }
            for module in &modules {
                println!(
                    "{} [{}] {} ({}, {} min)",
                    module.id, module.category, module.title, module.difficulty,
                    module.duration_minutes
                );
            }
        }
        Command::Transactions { user_id } => {
            let transactions = catalog.user_transactions(&user_id);
            if transactions.is_empty() {
                println!("No transactions for {user_id}");
                return Ok(());
            }
            let sorted = CatalogStore::sort_transactions_by_date_desc(&transactions)?;
            for tx in &sorted {
                println!(
                    "{} {} {} {} ({})",
                    tx.date, tx.id, tx.tx_type, tx.amount, tx.status
                );
            }
        }
        Command::Users { stage } => {
            for user in catalog.users_by_learning_stage(stage) {
                println!("{} {} <{}> - {} points", user.id, user.name, user.email, user.total_points);
            }
        }
        Command::Candidate { candidate_id } => match catalog.full_candidate_profile(&candidate_id) {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => return Err(format!("No candidate found with id {candidate_id}").into()),
        },
        Command::Createwallet => {
            let wallet = Wallet::new();
            println!("Public key: {}", wallet.get_public_key());
            println!("Secret key: {}", wallet.get_secret_key());
            println!("Created:    {}", wallet.get_created_at());
        }
        Command::GetBalance { address } => {
            let response = simulator.get_balance(&address).await?;
            println!(
                "Balance of {}: {} {}",
                format_address(&response.address, 4),
                response.balance,
                response.asset
            );
        }
        Command::Send { from, to, amount } => {
            let receipt = simulator
                .submit_transaction(TransferRequest { from, to, amount })
                .await?;
            println!("Status: {}", receipt.status);
            println!("Hash:   {}", receipt.transaction_hash);
            println!("Ledger: {}", receipt.ledger);
        }
        Command::VerifyCredential { credential_id } => {
            let verification = simulator.verify_credential(&credential_id).await?;
            if verification.verified {
                println!(
                    "{} verified by {} at {}",
                    verification.credential_id, verification.issuer, verification.verified_at
                );
            } else {
                println!("{} could not be verified", verification.credential_id);
            }
        }
        Command::Login { email, password } => {
            let session = SessionStore::new();
            let user = session.login(&email, &password)?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }
    Ok(())
}
