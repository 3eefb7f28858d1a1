use crate::format::format_entered_amount;
use crate::models::ExpenseRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRow {
    pub date: String,
    pub title: String,
    pub category: String,
    pub amount: String,
    pub notes: String,
}

impl ExpenseRow {
    pub fn from_record(record: &ExpenseRecord, symbol: &str) -> Self {
        Self {
            date: record.date.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            amount: format_entered_amount(&record.amount, symbol),
            notes: record.notes.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseListing {
    pub rows: Vec<ExpenseRow>,
    pub total: f64,
    /// Rows whose amount is not a usable number; shown but left out of `total`.
    pub unparsed: usize,
}

pub fn build_listing(records: &[ExpenseRecord], symbol: &str) -> ExpenseListing {
    let mut listing = ExpenseListing::default();
    for record in records {
        listing.rows.push(ExpenseRow::from_record(record, symbol));
        match record.amount_value() {
            Some(value) => listing.total += value,
            None => {
                log::warn!(
                    "expense `{}` has a non-numeric amount `{}`",
                    record.title,
                    record.amount
                );
                listing.unparsed += 1;
            }
        }
    }
    listing
}
