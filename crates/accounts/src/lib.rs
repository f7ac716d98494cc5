//! Accounts module: transactions, payment-channel processors, and accounts
//! with an overdraft policy chosen at construction.

pub mod account;
pub mod transaction;

pub use account::{Account, ApplyOutcome, OverdraftPolicy};
pub use transaction::{
    format_amount, BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, Transaction,
    TransactionProcessor,
};
