use crate::domain::model::{BacResult, DisplayColor, Severity, SeverityPalette, Theme};
use crate::utils::error::Result;
use serde::Serialize;

pub const TITLE: &str = "Alcometer";

fn title_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "1;34",
        Theme::Dark => "1;97",
    }
}

fn paint(text: &str, code: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

pub fn render_text(
    result: &BacResult,
    theme: Theme,
    palette: &SeverityPalette,
    ansi: bool,
) -> String {
    let value = result.formatted();
    if !ansi {
        return format!("{}\nBAC: {} ({})", TITLE, value, result.severity);
    }

    let color = palette.color_for(result.severity);
    format!(
        "{}\nBAC: {} ({})",
        paint(TITLE, title_style(theme)),
        paint(&value, color.ansi_code()),
        result.severity
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    value: f64,
    formatted: &'a str,
    severity: Severity,
    color: DisplayColor,
}

pub fn render_json(result: &BacResult, palette: &SeverityPalette) -> Result<String> {
    let formatted = result.formatted();
    let report = JsonReport {
        value: result.value,
        formatted: &formatted,
        severity: result.severity,
        color: palette.color_for(result.severity),
    };
    Ok(serde_json::to_string(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moderate() -> BacResult {
        BacResult {
            value: 0.75,
            severity: Severity::Moderate,
        }
    }

    #[test]
    fn test_plain_text() {
        let text = render_text(&moderate(), Theme::Light, &SeverityPalette::default(), false);
        assert_eq!(text, "Alcometer\nBAC: 0.75 (moderate)");
    }

    #[test]
    fn test_ansi_text_uses_palette_and_theme() {
        let text = render_text(&moderate(), Theme::Dark, &SeverityPalette::default(), true);
        assert!(text.contains("\x1b[33m0.75\x1b[0m"));
        assert!(text.starts_with("\x1b[1;97mAlcometer"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&moderate(), &SeverityPalette::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["formatted"], "0.75");
        assert_eq!(parsed["severity"], "moderate");
        assert_eq!(parsed["color"], "yellow");
    }
}
