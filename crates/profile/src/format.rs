use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

pub const DEFAULT_TRUNCATE: usize = 100;

/// `2019 - 2021`, or `2021 - Present` while ongoing.
pub fn year_range(start_year: i32, end_year: Option<i32>) -> String {
    if start_year == 0 {
        return String::new();
    }

    match end_year {
        Some(end) => format!("{start_year} - {end}"),
        None => format!("{start_year} - Present"),
    }
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first letter of every space-separated word and lowers the
/// rest. Runs of spaces are kept.
pub fn title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }

    let head = text.chars().take(max_len).collect::<String>();
    format!("{}...", head.trim())
}

/// Groups Philippine numbers (`+63 917 123 4567`) and ten digit local ones
/// (`0917 123 456`). Anything else comes back untouched.
pub fn format_phone(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();

    if digits.len() == 11 && digits.starts_with("63") {
        return format!(
            "+{} {} {} {}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..]
        );
    }

    if digits.len() == 10 {
        return format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..]);
    }

    phone.to_owned()
}

/// First letter of the first and last word, upper-cased.
pub fn initials(name: &str) -> String {
    let parts = name.split_whitespace().collect::<Vec<_>>();
    let first_char = |part: &str| part.chars().next();

    let letters = match parts.as_slice() {
        [] => vec![],
        [only] => vec![first_char(*only)],
        [first, .., last] => vec![first_char(*first), first_char(*last)],
    };

    letters.into_iter().flatten().flat_map(char::to_uppercase).collect()
}

/// Renders `2024-01-05` or an RFC 3339 timestamp as `January 5, 2024`.
/// Unparseable input yields an empty string.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    let date = OffsetDateTime::parse(value, &Rfc3339)
        .map(|at| at.date())
        .or_else(|_| Date::parse(value, format_description!("[year]-[month]-[day]")));

    let Ok(date) = date else {
        return String::new();
    };

    date.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_default()
}
