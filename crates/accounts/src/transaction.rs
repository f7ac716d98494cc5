use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{Entity, EntityId};

/// A single money movement, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub date: DateTime<Utc>,
    /// Positive amount in smallest currency unit (e.g., cents).
    pub amount: i64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: u32, date: DateTime<Utc>, amount: i64, category: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(id),
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Render an amount in smallest units as a currency string, e.g. `$450.00`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// A payment channel that can process a transaction.
///
/// Processing here is presentation-level: each channel produces its own
/// human-readable processing line; the caller decides where it goes.
pub trait TransactionProcessor {
    /// Channel label used in the processing line, e.g. `BankTransfer`.
    fn channel(&self) -> &'static str;

    fn process(&self, tx: &Transaction) -> String {
        format!(
            "[{}] Processing {} for {}",
            self.channel(),
            format_amount(tx.amount),
            tx.category
        )
    }
}

/// Processor for bank transfer transactions.
#[derive(Debug, Default)]
pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn channel(&self) -> &'static str {
        "BankTransfer"
    }
}

/// Processor for mobile money transactions.
#[derive(Debug, Default)]
pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn channel(&self) -> &'static str {
        "MobileMoney"
    }
}

/// Processor for cryptocurrency wallet transactions.
#[derive(Debug, Default)]
pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn channel(&self) -> &'static str {
        "CryptoWallet"
    }
}
