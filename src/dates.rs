//! Time-claim interpretation: extracting iat/nbf/exp from the payload,
//! humanizing durations, and evaluating expiry.

use chrono::{DateTime, Local, TimeDelta};
use serde_json::Value;

use crate::jwt::Claims;

/// The recognized time claims, in the order they are reported.
const TIME_CLAIMS: [&str; 3] = ["iat", "nbf", "exp"];

pub struct TimestampInfo {
    pub claim: &'static str,
    pub formatted: String,
    pub relative: String,
}

pub struct ExpiryStatus {
    pub expired: bool,
    pub relative: String,
}

/// Read a claim value as non-negative Unix epoch seconds, truncating any
/// fractional part. String-typed, negative, or otherwise non-numeric
/// values yield `None` — they are skipped, never coerced or reported.
fn claim_seconds(value: &Value) -> Option<i64> {
    let secs = value.as_f64()?;
    if secs < 0.0 {
        return None;
    }
    Some(secs.trunc() as i64)
}

fn claim_local_time(claims: &Claims, claim: &str) -> Option<DateTime<Local>> {
    let secs = claims.get(claim).and_then(claim_seconds)?;
    Some(DateTime::from_timestamp(secs, 0)?.with_timezone(&Local))
}

/// Collect timestamp info for the recognized time claims, always in
/// iat, nbf, exp order regardless of their order in the payload.
/// Missing or non-numeric claims are silently skipped.
pub fn extract_timestamps(claims: &Claims, now: DateTime<Local>) -> Vec<TimestampInfo> {
    let mut found = Vec::new();
    for claim in TIME_CLAIMS {
        let Some(date) = claim_local_time(claims, claim) else {
            continue;
        };
        let rel = humanize(now.signed_duration_since(date));
        let relative = if date > now {
            format!("in {rel}")
        } else {
            format!("{rel} ago")
        };
        found.push(TimestampInfo {
            claim,
            formatted: format_local(date),
            relative,
        });
    }
    found
}

/// Evaluate the exp claim against `now`. Absent or non-numeric exp
/// produces no status at all.
pub fn evaluate_expiry(claims: &Claims, now: DateTime<Local>) -> Option<ExpiryStatus> {
    let exp = claim_local_time(claims, "exp")?;
    Some(ExpiryStatus {
        expired: now > exp,
        relative: humanize(now.signed_duration_since(exp)),
    })
}

pub fn format_local(date: DateTime<Local>) -> String {
    date.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Compact, lossy humanization of a duration. Works on the absolute
/// value; months are a fixed 30 days and years a fixed 365, with
/// truncating division throughout.
pub fn humanize(delta: TimeDelta) -> String {
    let secs = delta.num_seconds().abs();
    if secs < 60 {
        return format!("{secs}s");
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m");
    }
    let hours = secs / 3600;
    if hours < 24 {
        return if mins % 60 == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h {}m", mins % 60)
        };
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{days}d");
    }
    if days < 365 {
        return format!("{}mo", days / 30);
    }
    format!("{}y", days / 365)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn claims(value: serde_json::Value) -> Claims {
        match value {
            Value::Object(map) => map,
            _ => panic!("test claims must be an object"),
        }
    }

    fn secs(n: i64) -> TimeDelta {
        TimeDelta::seconds(n)
    }

    // A whole-second clock, so exact relative strings don't lose a
    // second to subsecond truncation.
    fn whole_second_now() -> DateTime<Local> {
        DateTime::from_timestamp(Local::now().timestamp(), 0)
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn humanize_boundary_table() {
        assert_eq!(humanize(secs(45)), "45s");
        assert_eq!(humanize(secs(90)), "1m");
        assert_eq!(humanize(secs(3661)), "1h 1m");
        assert_eq!(humanize(secs(7200)), "2h");
        assert_eq!(humanize(secs(90_000)), "1d");
        assert_eq!(humanize(secs(40 * 86_400)), "1mo");
        assert_eq!(humanize(secs(400 * 86_400)), "1y");
    }

    #[test]
    fn humanize_takes_absolute_value() {
        assert_eq!(humanize(secs(-90)), "1m");
        assert_eq!(humanize(secs(-400 * 86_400)), "1y");
    }

    #[test]
    fn humanize_edges() {
        assert_eq!(humanize(secs(0)), "0s");
        assert_eq!(humanize(secs(59)), "59s");
        assert_eq!(humanize(secs(60)), "1m");
        assert_eq!(humanize(secs(3599)), "59m");
        assert_eq!(humanize(secs(3600)), "1h");
        assert_eq!(humanize(secs(86_399)), "23h 59m");
        assert_eq!(humanize(secs(86_400)), "1d");
        assert_eq!(humanize(secs(29 * 86_400)), "29d");
        assert_eq!(humanize(secs(30 * 86_400)), "1mo");
        assert_eq!(humanize(secs(364 * 86_400)), "12mo");
        assert_eq!(humanize(secs(365 * 86_400)), "1y");
    }

    #[test]
    fn extraction_order_is_fixed() {
        let now = Local::now();
        let t = now.timestamp();
        let payload = claims(json!({ "exp": t + 60, "sub": "x", "iat": t - 60, "nbf": t }));
        let found = extract_timestamps(&payload, now);
        let names: Vec<&str> = found.iter().map(|ts| ts.claim).collect();
        assert_eq!(names, vec!["iat", "nbf", "exp"]);
    }

    #[test]
    fn relative_phrases_for_past_and_future() {
        let now = whole_second_now();
        let t = now.timestamp();
        let payload = claims(json!({ "iat": t - 3600, "exp": t + 3600 }));
        let found = extract_timestamps(&payload, now);
        assert_eq!(found[0].relative, "1h ago");
        assert_eq!(found[1].relative, "in 1h");
    }

    #[test]
    fn formatted_time_matches_local_formatting() {
        let now = Local::now();
        let t = now.timestamp();
        let payload = claims(json!({ "iat": t }));
        let found = extract_timestamps(&payload, now);
        let expected = format_local(DateTime::from_timestamp(t, 0).unwrap().with_timezone(&Local));
        assert_eq!(found[0].formatted, expected);
    }

    #[test]
    fn string_typed_claims_are_skipped() {
        let now = Local::now();
        let payload = claims(json!({ "exp": "123", "iat": true, "nbf": null }));
        assert!(extract_timestamps(&payload, now).is_empty());
        assert!(evaluate_expiry(&payload, now).is_none());
    }

    #[test]
    fn negative_claims_are_skipped() {
        let now = Local::now();
        let payload = claims(json!({ "exp": -1 }));
        assert!(extract_timestamps(&payload, now).is_empty());
        assert!(evaluate_expiry(&payload, now).is_none());
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        let now = Local::now();
        let t = now.timestamp();
        let payload = claims(json!({ "iat": t as f64 + 0.9 }));
        let found = extract_timestamps(&payload, now);
        let expected = format_local(DateTime::from_timestamp(t, 0).unwrap().with_timezone(&Local));
        assert_eq!(found[0].formatted, expected);
    }

    #[test]
    fn missing_exp_yields_no_status() {
        let now = Local::now();
        let payload = claims(json!({ "sub": "x" }));
        assert!(evaluate_expiry(&payload, now).is_none());
    }

    #[test]
    fn expired_token_reports_elapsed_time() {
        let now = whole_second_now();
        let payload = claims(json!({ "exp": now.timestamp() - 3600 }));
        let status = evaluate_expiry(&payload, now).unwrap();
        assert!(status.expired);
        assert_eq!(status.relative, "1h");
    }

    #[test]
    fn valid_token_reports_remaining_time() {
        let now = whole_second_now();
        let payload = claims(json!({ "exp": now.timestamp() + 3600 }));
        let status = evaluate_expiry(&payload, now).unwrap();
        assert!(!status.expired);
        assert_eq!(status.relative, "1h");
    }

    #[test]
    fn expiry_at_exactly_now_is_still_valid() {
        let now = whole_second_now();
        let payload = claims(json!({ "exp": now.timestamp() }));
        let status = evaluate_expiry(&payload, now).unwrap();
        assert!(!status.expired);
        assert_eq!(status.relative, "0s");
    }
}
