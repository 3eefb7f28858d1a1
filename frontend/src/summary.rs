use crate::analysis::TimePeriod;
use crate::models::ExpenseRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryLine {
    pub group: String,
    pub category: String,
    /// Present only for the per-day view, where each line is one expense.
    pub title: Option<String>,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PeriodSummary {
    pub lines: Vec<SummaryLine>,
    pub total: f64,
    pub skipped: usize,
}

fn group_key(date: NaiveDate, period: TimePeriod) -> String {
    match period {
        TimePeriod::Day => date.format("%Y-%m-%d").to_string(),
        TimePeriod::Month => date.format("%Y-%m").to_string(),
        TimePeriod::Year => date.format("%Y").to_string(),
    }
}

pub fn summarize(records: &[ExpenseRecord], period: TimePeriod) -> PeriodSummary {
    let mut summary = PeriodSummary::default();
    let mut groups: BTreeMap<(String, String), f64> = BTreeMap::new();

    for record in records {
        let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d");
        let (date, amount) = match (date, record.amount_value()) {
            (Ok(date), Some(amount)) => (date, amount),
            _ => {
                summary.skipped += 1;
                continue;
            }
        };

        summary.total += amount;
        let group = group_key(date, period);
        if period == TimePeriod::Day {
            summary.lines.push(SummaryLine {
                group,
                category: record.category.clone(),
                title: Some(record.title.clone()),
                amount,
            });
        } else {
            *groups.entry((group, record.category.clone())).or_insert(0.0) += amount;
        }
    }

    if period == TimePeriod::Day {
        // stable: same-day expenses keep their entry order
        summary.lines.sort_by(|a, b| b.group.cmp(&a.group));
    } else {
        let mut lines: Vec<SummaryLine> = groups
            .into_iter()
            .map(|((group, category), amount)| SummaryLine {
                group,
                category,
                title: None,
                amount,
            })
            .collect();
        lines.sort_by(|a, b| b.group.cmp(&a.group).then_with(|| a.category.cmp(&b.category)));
        summary.lines = lines;
    }

    summary
}
