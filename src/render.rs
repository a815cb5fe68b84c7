//! Output rendering: raw pretty JSON for piping, or colorized sections
//! with dates and an expiry verdict for terminals.

use std::fmt::Write;

use chrono::{DateTime, Local};
use colored::Colorize;
use serde_json::json;

use crate::dates::{evaluate_expiry, extract_timestamps};
use crate::jwt::Jwt;

/// Raw mode: one JSON object carrying the canonical header and payload,
/// pretty-printed with 2-space indentation. No color, no annotations.
pub fn render_raw(jwt: &Jwt) -> String {
    let out = json!({ "header": &jwt.header, "payload": &jwt.payload });
    serde_json::to_string_pretty(&out).expect("claims objects always serialize")
}

/// Interactive mode: HEADER and PAYLOAD sections, a DATES section for
/// any recognized time claims, and an expiry verdict when exp is present.
pub fn render_pretty(jwt: &Jwt, now: DateTime<Local>) -> String {
    let header_json =
        serde_json::to_string_pretty(&jwt.header).expect("claims objects always serialize");
    let payload_json =
        serde_json::to_string_pretty(&jwt.payload).expect("claims objects always serialize");

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "── HEADER ──".bold().cyan());
    let _ = writeln!(out, "{}", header_json.cyan());
    let _ = writeln!(out, "{}", "── PAYLOAD ─".bold().green());
    let _ = writeln!(out, "{}", payload_json.green());

    let timestamps = extract_timestamps(&jwt.payload, now);
    if !timestamps.is_empty() {
        let _ = writeln!(out, "{}", "── DATES ───".bold().dimmed());
        for ts in &timestamps {
            let _ = writeln!(
                out,
                "  {} {}  {}",
                format!("{:<4}", format!("{}:", ts.claim)).dimmed(),
                ts.formatted,
                format!("({})", ts.relative).dimmed()
            );
        }
        let _ = writeln!(out);
    }

    if let Some(status) = evaluate_expiry(&jwt.payload, now) {
        if status.expired {
            let _ = writeln!(
                out,
                "  {} {}\n",
                "✗ EXPIRED".red().bold(),
                format!("({} ago)", status.relative).dimmed()
            );
        } else {
            let _ = writeln!(
                out,
                "  {} {}\n",
                "✓ VALID".green().bold(),
                format!("(expires in {})", status.relative).dimmed()
            );
        }
    }

    out
}
