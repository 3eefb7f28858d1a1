use crate::errors::AppError;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_LABEL: &str = "No Data";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimePeriod {
    #[default]
    Day,
    Month,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Day, TimePeriod::Month, TimePeriod::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Day => "day",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Day => "Daily",
            TimePeriod::Month => "Monthly",
            TimePeriod::Year => "Yearly",
        }
    }

    /// Unknown selector values fall back to `Day`, like the server does.
    pub fn parse(value: &str) -> Self {
        match value {
            "month" => TimePeriod::Month,
            "year" => TimePeriod::Year,
            _ => TimePeriod::Day,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub amounts: Vec<f64>,
}

impl Series {
    pub fn placeholder() -> Self {
        Self {
            labels: vec![PLACEHOLDER_LABEL.to_string()],
            amounts: vec![0.0],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.amounts.is_empty()
    }

    pub fn or_placeholder(mut self) -> Self {
        if self.is_empty() {
            return Self::placeholder();
        }
        let paired = self.labels.len().min(self.amounts.len());
        if self.labels.len() != self.amounts.len() {
            log::warn!(
                "series has {} labels but {} amounts; keeping the first {}",
                self.labels.len(),
                self.amounts.len(),
                paired
            );
        }
        self.labels.truncate(paired);
        self.amounts.truncate(paired);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub line_chart: Series,
    #[serde(default)]
    pub category_charts: Series,
}

impl AnalysisPayload {
    pub fn with_placeholders(self) -> Self {
        Self {
            line_chart: self.line_chart.or_placeholder(),
            category_charts: self.category_charts.or_placeholder(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
}

/// Identifies one issued request; later requests carry larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Render(AnalysisPayload),
    Failed(String),
    Stale,
}

#[derive(Debug)]
pub struct AnalysisController {
    state: FetchState,
    latest: u64,
    period: TimePeriod,
}

impl Default for AnalysisController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisController {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            latest: 0,
            period: TimePeriod::Day,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn begin(&mut self, period: TimePeriod) -> RequestToken {
        self.latest += 1;
        self.period = period;
        self.state = FetchState::Loading;
        log::debug!("analysis request #{} for `{}`", self.latest, period.as_str());
        RequestToken(self.latest)
    }

    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<AnalysisPayload, AppError>,
    ) -> Outcome {
        if token.0 != self.latest {
            log::debug!(
                "discarding analysis response #{}; #{} is newer",
                token.0,
                self.latest
            );
            return Outcome::Stale;
        }

        self.state = FetchState::Idle;
        match result {
            Ok(payload) => Outcome::Render(payload.with_placeholders()),
            Err(err) => {
                log::error!("error fetching analysis data: {}", err);
                Outcome::Failed(format!("Could not load analysis data. {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], amounts: &[f64]) -> Series {
        Series {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            amounts: amounts.to_vec(),
        }
    }

    fn payload(line: Series, categories: Series) -> AnalysisPayload {
        AnalysisPayload {
            line_chart: line,
            category_charts: categories,
        }
    }

    #[test]
    fn decodes_server_payload() {
        let raw = r#"{
            "line_chart": {"labels": ["2024-01-01", "2024-01-02"], "amounts": [150, 20.5]},
            "category_charts": {"labels": ["Food"], "amounts": [170.5]}
        }"#;
        let decoded: AnalysisPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.line_chart.amounts, vec![150.0, 20.5]);
        assert_eq!(decoded.category_charts.labels, vec!["Food"]);
    }

    #[test]
    fn missing_series_decode_as_empty() {
        let decoded: AnalysisPayload = serde_json::from_str("{}").unwrap();
        assert!(decoded.line_chart.is_empty());
        assert!(decoded.category_charts.is_empty());
    }

    #[test]
    fn empty_series_get_placeholders() {
        let shaped = payload(series(&[], &[]), series(&["Food"], &[])).with_placeholders();
        assert_eq!(shaped.line_chart, Series::placeholder());
        assert_eq!(shaped.category_charts, Series::placeholder());
        assert_eq!(shaped.line_chart.labels, vec![PLACEHOLDER_LABEL]);
        assert_eq!(shaped.line_chart.amounts, vec![0.0]);
    }

    #[test]
    fn mismatched_series_are_truncated() {
        let shaped = series(&["a", "b", "c"], &[1.0, 2.0]).or_placeholder();
        assert_eq!(shaped, series(&["a", "b"], &[1.0, 2.0]));
    }

    #[test]
    fn populated_series_pass_through() {
        let line = series(&["Jan"], &[5.0]);
        let shaped = payload(line.clone(), line.clone()).with_placeholders();
        assert_eq!(shaped.line_chart, line);
    }

    #[test]
    fn period_parsing_defaults_to_day() {
        assert_eq!(TimePeriod::parse("month"), TimePeriod::Month);
        assert_eq!(TimePeriod::parse("year"), TimePeriod::Year);
        assert_eq!(TimePeriod::parse("week"), TimePeriod::Day);
        assert_eq!(TimePeriod::Month.as_str(), "month");
    }

    #[test]
    fn success_returns_to_idle_and_renders() {
        let mut controller = AnalysisController::new();
        let token = controller.begin(TimePeriod::Day);
        assert_eq!(controller.state(), FetchState::Loading);

        let outcome = controller.resolve(token, Ok(payload(series(&[], &[]), series(&[], &[]))));
        assert_eq!(controller.state(), FetchState::Idle);
        match outcome {
            Outcome::Render(shaped) => assert_eq!(shaped.line_chart, Series::placeholder()),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn refreshing_the_same_period_issues_a_new_token() {
        let mut controller = AnalysisController::new();
        let first = controller.begin(TimePeriod::Month);
        let second = controller.begin(TimePeriod::Month);

        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn out_of_order_responses_keep_latest_request() {
        let mut controller = AnalysisController::new();
        let day = controller.begin(TimePeriod::Day);
        let month = controller.begin(TimePeriod::Month);

        let month_data = payload(series(&["2024-01"], &[10.0]), series(&["Food"], &[10.0]));
        let day_data = payload(series(&["2024-01-01"], &[1.0]), series(&["Food"], &[1.0]));

        assert_eq!(
            controller.resolve(month, Ok(month_data.clone())),
            Outcome::Render(month_data)
        );
        assert_eq!(controller.resolve(day, Ok(day_data)), Outcome::Stale);
        assert_eq!(controller.period(), TimePeriod::Month);
        assert_eq!(controller.state(), FetchState::Idle);
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut controller = AnalysisController::new();
        let first = controller.begin(TimePeriod::Day);
        let _second = controller.begin(TimePeriod::Year);

        assert_eq!(
            controller.resolve(first, Ok(AnalysisPayload::default())),
            Outcome::Stale
        );
        assert_eq!(controller.state(), FetchState::Loading);
    }

    #[test]
    fn failure_produces_one_notice() {
        let mut controller = AnalysisController::new();
        let token = controller.begin(TimePeriod::Day);

        let outcome = controller.resolve(token, Err(AppError::Status(500)));
        assert!(matches!(outcome, Outcome::Failed(ref msg) if msg.contains("500")));
        assert_eq!(controller.state(), FetchState::Idle);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut controller = AnalysisController::new();
        let first = controller.begin(TimePeriod::Day);
        let _second = controller.begin(TimePeriod::Month);

        let outcome = controller.resolve(first, Err(AppError::Network("offline".to_string())));
        assert_eq!(outcome, Outcome::Stale);
    }
}
