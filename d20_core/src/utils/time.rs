//! Formats how long ago the last roll happened.

use chrono::{DateTime, Utc};

/// Short "Nm ago" style age for the header and farewell lines. Anything
/// under a minute reads as "just now" since rolls are seconds apart at most.
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    let seconds = Utc::now()
        .signed_duration_since(timestamp)
        .num_seconds()
        .max(0);

    match seconds {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3600),
        s => format!("{}d ago", s / 86_400),
    }
}
