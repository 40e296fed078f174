// Number and text formatting for the rendered page

/// `1234567` -> `1,234,567`
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole dollars with thousands separators: `1234.6` -> `$1,235`
pub fn format_dollars(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-${}", format_count(-rounded as i64))
    } else {
        format!("${}", format_count(rounded as i64))
    }
}

/// Two decimal places: `12.3` -> `$12.30`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Card suffix for a window: `5` -> `5m`, `120` -> `2h`
pub fn window_short(minutes: i32) -> String {
    if minutes >= 60 && minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{minutes}m")
    }
}

/// Completes "in the last ...": `5` -> `5 minutes`, `60` -> `hour`
pub fn window_phrase(minutes: i32) -> String {
    match minutes {
        1 => "minute".to_string(),
        60 => "hour".to_string(),
        m if m > 60 && m % 60 == 0 => format!("{} hours", m / 60),
        m => format!("{m} minutes"),
    }
}

/// `window_phrase` in title case, for chart titles
pub fn window_title(minutes: i32) -> String {
    window_phrase(minutes)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
