use unicode_width::UnicodeWidthStr;

const SPARK_BLOCKS: [&str; 6] = [" ", "▁", "▃", "▄", "▆", "█"];

/// Format a track length in seconds as "M:SS"
pub fn format_track_length(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format an optional temperature as a rounded "24°"
pub fn format_temp(t: Option<f64>) -> String {
    match t {
        Some(v) => format!("{}°", v.round() as i64),
        None => "–".to_string(),
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// One block per mood score (0-5), for charting in plain text
pub fn sparkline(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| SPARK_BLOCKS[(*v).clamp(0, 5) as usize])
        .collect()
}

/// Pad `s` with spaces to `width` terminal columns (emoji count as two)
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut a single line to at most `max` characters, marking the cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_length() {
        assert_eq!(format_track_length(312), "5:12");
        assert_eq!(format_track_length(59), "0:59");
    }

    #[test]
    fn temps_round() {
        assert_eq!(format_temp(Some(24.6)), "25°");
        assert_eq!(format_temp(Some(-0.4)), "0°");
        assert_eq!(format_temp(None), "–");
    }

    #[test]
    fn bars() {
        assert_eq!(progress_bar(33, 100, 10), "███░░░░░░░");
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(150, 100, 3), "███");
    }

    #[test]
    fn sparkline_clamps() {
        assert_eq!(sparkline(&[5, 3, 1, 0]), "█▄▁ ");
        assert_eq!(sparkline(&[9, -2]), "█ ");
    }

    #[test]
    fn padding_counts_wide_glyphs() {
        assert_eq!(pad_to_width("😀", 4), "😀  ");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
    }
}
