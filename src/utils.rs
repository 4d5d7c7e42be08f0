use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending with "...".
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Formats seconds as `M:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Calm,
    Warning,
    Danger,
}

impl TimerUrgency {
    pub fn for_time_left(seconds: u32) -> Self {
        match seconds {
            0..=5 => TimerUrgency::Danger,
            6..=10 => TimerUrgency::Warning,
            _ => TimerUrgency::Calm,
        }
    }
}
