//! In-memory record store
//!
//! Holds the income and expense collections for the lifetime of the process.
//! There is no persistence: the store starts empty and everything is lost on
//! restart. A `RecordStore` is a cheap-to-clone handle; all clones share the
//! same underlying collections.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    Expense, ExpenseUpdate, Income, IncomeUpdate, NewExpense, NewIncome,
};

#[derive(Debug, Default)]
struct Records {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
    next_income_id: i64,
    next_expense_id: i64,
}

/// Shared handle to the in-memory collections
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    inner: Arc<Mutex<Records>>,
}

/// Serializable view of the full store, for seeding and CLI reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned mutex still holds consistent data; recover the guard.
    fn lock(&self) -> MutexGuard<'_, Records> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ===== Incomes =====

    /// Add an income source, assigning the next id.
    ///
    /// A blank description falls back to the kind's default.
    pub fn add_income(&self, new: NewIncome) -> Income {
        let mut records = self.lock();
        records.next_income_id += 1;
        let description = match new.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => new.kind.default_description().to_string(),
        };
        let income = Income {
            id: records.next_income_id,
            description,
            amount: new.amount,
            frequency: new.frequency,
            kind: new.kind,
        };
        records.incomes.push(income.clone());
        tracing::debug!(id = income.id, kind = %income.kind, "Income added");
        income
    }

    pub fn list_incomes(&self) -> Vec<Income> {
        self.lock().incomes.clone()
    }

    pub fn get_income(&self, id: i64) -> Option<Income> {
        self.lock().incomes.iter().find(|i| i.id == id).cloned()
    }

    /// Apply a partial update to an income record.
    pub fn update_income(&self, id: i64, update: IncomeUpdate) -> Result<Income> {
        let mut records = self.lock();
        let income = records
            .incomes
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound(format!("Income {}", id)))?;

        if let Some(description) = update.description {
            income.description = description;
        }
        if let Some(amount) = update.amount {
            income.amount = amount;
        }
        if let Some(frequency) = update.frequency {
            income.frequency = frequency;
        }
        if let Some(kind) = update.kind {
            income.kind = kind;
        }
        Ok(income.clone())
    }

    pub fn delete_income(&self, id: i64) -> Result<()> {
        let mut records = self.lock();
        let before = records.incomes.len();
        records.incomes.retain(|i| i.id != id);
        if records.incomes.len() == before {
            return Err(Error::NotFound(format!("Income {}", id)));
        }
        tracing::debug!(id, "Income deleted");
        Ok(())
    }

    // ===== Expenses =====

    /// Add an expense, assigning the next id and a creation timestamp.
    pub fn add_expense(&self, new: NewExpense) -> Expense {
        let mut records = self.lock();
        records.next_expense_id += 1;
        let expense = Expense {
            id: records.next_expense_id,
            description: new.description,
            amount: new.amount,
            category: new.category,
            created_at: Utc::now(),
        };
        records.expenses.push(expense.clone());
        tracing::debug!(id = expense.id, category = %expense.category, "Expense added");
        expense
    }

    pub fn list_expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    pub fn get_expense(&self, id: i64) -> Option<Expense> {
        self.lock().expenses.iter().find(|e| e.id == id).cloned()
    }

    /// Apply a partial update to an expense record.
    pub fn update_expense(&self, id: i64, update: ExpenseUpdate) -> Result<Expense> {
        let mut records = self.lock();
        let expense = records
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Expense {}", id)))?;

        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category) = update.category {
            expense.category = category;
        }
        Ok(expense.clone())
    }

    pub fn delete_expense(&self, id: i64) -> Result<()> {
        let mut records = self.lock();
        let before = records.expenses.len();
        records.expenses.retain(|e| e.id != id);
        if records.expenses.len() == before {
            return Err(Error::NotFound(format!("Expense {}", id)));
        }
        tracing::debug!(id, "Expense deleted");
        Ok(())
    }

    // ===== Snapshots =====

    /// Copy out the full record set.
    pub fn snapshot(&self) -> StoreSnapshot {
        let records = self.lock();
        StoreSnapshot {
            incomes: records.incomes.clone(),
            expenses: records.expenses.clone(),
        }
    }

    /// Replace the store contents with a snapshot.
    ///
    /// Id counters resume above the highest id seen, so records added after
    /// loading never collide with seeded ones.
    pub fn load_snapshot(&self, snapshot: StoreSnapshot) -> Result<()> {
        for income in &snapshot.incomes {
            if income.amount < 0.0 {
                return Err(Error::InvalidData(format!(
                    "Income {} has negative amount",
                    income.id
                )));
            }
        }
        for expense in &snapshot.expenses {
            if expense.amount < 0.0 {
                return Err(Error::InvalidData(format!(
                    "Expense {} has negative amount",
                    expense.id
                )));
            }
        }

        let mut records = self.lock();
        records.next_income_id = snapshot.incomes.iter().map(|i| i.id).max().unwrap_or(0);
        records.next_expense_id = snapshot.expenses.iter().map(|e| e.id).max().unwrap_or(0);
        records.incomes = snapshot.incomes;
        records.expenses = snapshot.expenses;
        tracing::info!(
            incomes = records.incomes.len(),
            expenses = records.expenses.len(),
            "Snapshot loaded"
        );
        Ok(())
    }

    /// Read a snapshot from a JSON file and load it.
    pub fn load_snapshot_file(&self, path: &std::path::Path) -> Result<()> {
        let data = std::fs::read_to_string(path)?;
        let snapshot: StoreSnapshot = serde_json::from_str(&data)?;
        self.load_snapshot(snapshot)
    }
}
