//! Text normalization for feed content.
//!
//! Everything here is best-effort: feeds ship malformed HTML and loose
//! timestamp formats, so these helpers favor never failing over full
//! fidelity. None of them parse markup properly.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

/// Longest excerpt, in characters, before the text is cut and "..." added.
pub const EXCERPT_MAX_CHARS: usize = 200;

lazy_static! {
    static ref HTML_COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref HTML_TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref SENTENCE_BREAK_RE: Regex = Regex::new(r"\.\s+([A-Z])").unwrap();
    static ref EXCESS_NEWLINES_RE: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref LIST_MARKER_RE: Regex = Regex::new(r"\n(- |\* |\d+\. )").unwrap();
}

/// Render an elapsed duration as "N minutes/hours/days ago".
///
/// Buckets: under an hour in minutes, under a day in hours, days beyond
/// that. Sub-minute elapsed comes out as "0 minutes ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds().max(0);

    if elapsed < 3600 {
        plural(elapsed / 60, "minute")
    } else if elapsed < 86400 {
        plural(elapsed / 3600, "hour")
    } else {
        plural(elapsed / 86400, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Relative time for a Unix epoch-seconds value (Hacker News `time`).
pub fn format_epoch(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(then) => relative_time(then, Utc::now()),
        None => String::new(),
    }
}

/// Relative time for a feed date string.
///
/// Feeds carry either ISO-8601 (`published`) or RFC-2822 (`pubDate`);
/// anything unparseable passes through unchanged rather than erroring.
pub fn format_date_str(value: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map(|dt| dt.with_timezone(&Utc));

    match parsed {
        Ok(then) => relative_time(then, Utc::now()),
        Err(_) => value.to_string(),
    }
}

/// Strip HTML down to plain text: comments out first, then tags, then the
/// handful of entities feeds actually use.
pub fn strip_html(text: &str) -> String {
    let text = HTML_COMMENT_RE.replace_all(text, "");
    let text = HTML_TAG_RE.replace_all(&text, "");

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

/// Reflow stripped article text for display: paragraph breaks between
/// sentences, capped blank runs, and list markers on their own lines.
pub fn format_article_content(text: &str) -> String {
    let text = SENTENCE_BREAK_RE.replace_all(text, ".\n\n$1");
    let text = LIST_MARKER_RE.replace_all(&text, "\n\n$1");
    let text = EXCESS_NEWLINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Strip HTML and cut down to [`EXCERPT_MAX_CHARS`], appending "..." only
/// when something was actually cut.
pub fn excerpt_of(text: &str) -> String {
    let stripped = strip_html(text);
    if stripped.chars().count() <= EXCERPT_MAX_CHARS {
        return stripped;
    }

    let cut: String = stripped.chars().take(EXCERPT_MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}
