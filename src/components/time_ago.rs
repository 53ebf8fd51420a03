//! Relative timestamp formatting ("3 hours ago").

use chrono::{DateTime, Utc};

/// Human-friendly age of a timestamp relative to now.
pub fn time_ago(timestamp: DateTime<Utc>) -> String {
    time_ago_from(timestamp, Utc::now())
}

fn time_ago_from(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 0 {
        return "just now".to_string();
    }

    const STEPS: &[(i64, &str)] = &[
        (60, "second"),
        (60, "minute"),
        (24, "hour"),
        (7, "day"),
        (4, "week"),
        (12, "month"),
    ];

    let mut value = seconds;
    let mut unit = "second";
    for (divisor, name) in STEPS {
        if value < *divisor {
            unit = name;
            break;
        }
        value /= divisor;
        unit = "year";
    }

    if unit == "second" && value < 10 {
        return "just now".to_string();
    }
    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} ago", value, unit, plural)
}
