use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// What the account does when a transaction exceeds the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverdraftPolicy {
    /// Deduct regardless; the balance may go negative.
    Allow,
    /// Refuse the transaction and leave the balance untouched.
    Decline,
}

/// Result of applying a transaction to an account.
///
/// A decline is a normal outcome of the account's policy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { new_balance: i64 },
    Declined { balance: i64 },
}

/// A balance-holding account with a policy chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: String,
    /// Balance in smallest currency unit.
    balance: i64,
    policy: OverdraftPolicy,
}

impl Account {
    /// A plain account that allows the balance to go negative.
    pub fn new(number: impl Into<String>, initial_balance: i64) -> Self {
        Self::with_policy(number, initial_balance, OverdraftPolicy::Allow)
    }

    /// A savings-style account that declines overdrawing transactions.
    pub fn savings(number: impl Into<String>, initial_balance: i64) -> Self {
        Self::with_policy(number, initial_balance, OverdraftPolicy::Decline)
    }

    pub fn with_policy(
        number: impl Into<String>,
        initial_balance: i64,
        policy: OverdraftPolicy,
    ) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
            policy,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn policy(&self) -> OverdraftPolicy {
        self.policy
    }

    /// Apply a transaction, deducting its amount according to the policy.
    pub fn apply(&mut self, tx: &Transaction) -> ApplyOutcome {
        if self.policy == OverdraftPolicy::Decline && tx.amount > self.balance {
            tracing::warn!(
                account = %self.number,
                amount = tx.amount,
                balance = self.balance,
                "transaction declined: insufficient funds"
            );
            return ApplyOutcome::Declined {
                balance: self.balance,
            };
        }

        self.balance -= tx.amount;
        ApplyOutcome::Applied {
            new_balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tx(amount: i64) -> Transaction {
        Transaction::new(1, Utc::now(), amount, "test")
    }

    #[test]
    fn applying_deducts_from_the_balance() {
        let mut account = Account::savings("SB001", 2_000);
        let outcome = account.apply(&tx(450));

        assert_eq!(outcome, ApplyOutcome::Applied { new_balance: 1_550 });
        assert_eq!(account.balance(), 1_550);
    }

    #[test]
    fn savings_account_declines_overdraw_and_keeps_balance() {
        let mut account = Account::savings("SB001", 100);
        let outcome = account.apply(&tx(900));

        assert_eq!(outcome, ApplyOutcome::Declined { balance: 100 });
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn allow_policy_lets_the_balance_go_negative() {
        let mut account = Account::new("CH001", 100);
        let outcome = account.apply(&tx(900));

        assert_eq!(outcome, ApplyOutcome::Applied { new_balance: -800 });
    }

    #[test]
    fn savings_account_allows_exact_balance_spend() {
        let mut account = Account::savings("SB001", 900);
        let outcome = account.apply(&tx(900));

        assert_eq!(outcome, ApplyOutcome::Applied { new_balance: 0 });
    }
}
