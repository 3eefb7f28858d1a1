use crate::analysis::{AnalysisPayload, TimePeriod};
use crate::errors::AppError;
use gloo_net::http::Request;

/// Prefix for API calls; empty means same-origin, as the page is served by the API host.
pub const API_BASE_URL: &str = match option_env!("EXPENSE_API_BASE") {
    Some(base) => base,
    None => "",
};

pub fn analysis_url(period: TimePeriod) -> String {
    format!(
        "{}/api/analysis_data?time_period={}",
        API_BASE_URL,
        period.as_str()
    )
}

pub async fn fetch_analysis(period: TimePeriod) -> Result<AnalysisPayload, AppError> {
    let resp = Request::get(&analysis_url(period)).send().await?;
    if !resp.ok() {
        return Err(AppError::Status(resp.status()));
    }
    Ok(resp.json::<AnalysisPayload>().await?)
}
