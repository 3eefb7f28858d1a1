use serde::{Deserialize, Deserializer, Serialize};

// Largest accepted amount; keeps sums exact to the cent and far from overflow.
pub const MAX_AMOUNT: f64 = 1e12;

pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() <= MAX_AMOUNT)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub title: String,
    pub category: String,
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    #[serde(default)]
    pub notes: String,
}

impl ExpenseRecord {
    pub fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }
}

// Older pages stored the raw input string, hand-edited data may hold a number.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Text(text) => text,
        Amount::Number(number) => number.to_string(),
    })
}
