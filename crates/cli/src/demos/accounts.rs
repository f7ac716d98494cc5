use chrono::Utc;

use tally_accounts::{
    format_amount, Account, ApplyOutcome, BankTransferProcessor, CryptoWalletProcessor,
    MobileMoneyProcessor, Transaction, TransactionProcessor,
};
use tally_core::Repository;

/// Process three transactions through their channels, then apply them to a
/// savings account that declines overdraws.
pub fn run() {
    println!("=== Accounts ===");

    let mut account = Account::savings("SB20250815001", 200_000);
    let mut ledger: Repository<Transaction> = Repository::new();

    let transactions = [
        Transaction::new(101, Utc::now(), 45_000, "Electronics Purchase"),
        Transaction::new(102, Utc::now(), 27_500, "Restaurant Bill"),
        Transaction::new(103, Utc::now(), 90_000, "Flight Booking"),
    ];
    let processors: [&dyn TransactionProcessor; 3] = [
        &MobileMoneyProcessor,
        &BankTransferProcessor,
        &CryptoWalletProcessor,
    ];

    for (tx, processor) in transactions.iter().zip(processors) {
        println!("{}", processor.process(tx));
    }

    for tx in &transactions {
        match account.apply(tx) {
            ApplyOutcome::Applied { new_balance } => println!(
                "[Account] {} deducted. New Balance: {}",
                format_amount(tx.amount),
                format_amount(new_balance)
            ),
            ApplyOutcome::Declined { balance } => println!(
                "Transaction declined: insufficient funds (balance {}).",
                format_amount(balance)
            ),
        }

        if let Err(err) = ledger.add(tx.clone()) {
            tracing::warn!(error = %err, "ledger insert failed");
        }
    }

    println!("{} transaction(s) on ledger.\n", ledger.len());
}
