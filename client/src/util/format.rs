//! Display formatting helpers (pt-BR copy).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Up to two uppercase initials from a display name; `"U"` when empty.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked: Vec<&str> = match words.as_slice() {
        [] => return "U".to_owned(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 { format!("há 1 {one}") } else { format!("há {n} {many}") }
}

/// Relative distance from `then` to `now`, e.g. "há 5 minutos".
///
/// Timestamps in the future (clock skew) read as "agora".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "agora".to_owned();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return plural(minutes, "minuto", "minutos");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hora", "horas");
    }
    let days = hours / 24;
    if days < 30 {
        return plural(days, "dia", "dias");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "mês", "meses");
    }
    plural(days / 365, "ano", "anos")
}

/// `dd/mm/yyyy`.
pub fn short_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}
