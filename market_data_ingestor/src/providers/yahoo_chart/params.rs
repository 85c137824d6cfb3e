use chrono::NaiveTime;

use crate::{
    models::request_params::BarsRequestParams,
    providers::{ProviderError, ValidationSnafu},
};

/// Rejects windows the chart endpoint cannot answer.
pub fn validate_window(params: &BarsRequestParams) -> Result<(), ProviderError> {
    if params.symbol.trim().is_empty() {
        return ValidationSnafu {
            message: "symbol must not be empty",
        }
        .fail();
    }
    if params.start >= params.end {
        return ValidationSnafu {
            message: format!(
                "start date {} must be before end date {}",
                params.start, params.end
            ),
        }
        .fail();
    }
    Ok(())
}

/// Builds the query string for a daily chart request.
///
/// `period1`/`period2` are midnight UTC epoch seconds of `start - 1 day` and
/// `end + 1 day`. Exchange-local midnight can sit up to 14 hours either side
/// of UTC midnight, so the request is padded by a day on each side and the
/// decoded bars are cut back to `[start, end)` by exchange-local date.
pub fn construct_params(params: &BarsRequestParams) -> Vec<(String, String)> {
    let first = params.start.pred_opt().unwrap_or(params.start);
    let last = params.end.succ_opt().unwrap_or(params.end);
    let period1 = first.and_time(NaiveTime::MIN).and_utc().timestamp();
    let period2 = last.and_time(NaiveTime::MIN).and_utc().timestamp();

    vec![
        ("period1".to_string(), period1.to_string()),
        ("period2".to_string(), period2.to_string()),
        ("interval".to_string(), "1d".to_string()),
        ("events".to_string(), "div|split".to_string()),
        ("includeAdjustedClose".to_string(), "true".to_string()),
    ]
}
