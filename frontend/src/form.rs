use crate::errors::{AppError, FormError};
use crate::models::{parse_amount, ExpenseRecord};
use crate::storage::{ExpenseStore, KeyValueStore};
use chrono::NaiveDate;

pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub category: String,
    pub notes: String,
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<ExpenseRecord, FormError> {
        let title = required(&self.title, "title")?;
        let amount = required(&self.amount, "amount")?;
        let date = required(&self.date, "date")?;
        let category = required(&self.category, "category")?;

        // chrono accepts unpadded fields, so insist on the canonical form
        match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
            Ok(parsed) if parsed.format("%Y-%m-%d").to_string() == date => {}
            _ => return Err(FormError::InvalidDate(date)),
        }

        match parse_amount(&amount) {
            Some(value) if value > 0.0 => {}
            _ => return Err(FormError::InvalidAmount(amount)),
        }

        Ok(ExpenseRecord {
            date,
            title,
            category,
            amount,
            notes: self.notes.trim().to_string(),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Storage(#[from] AppError),
}

pub fn submit_expense<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    draft: &ExpenseDraft,
) -> Result<ExpenseRecord, SubmitError> {
    let record = draft.validate()?;
    store.append(record.clone())?;
    Ok(record)
}
