use alcometer::core::render::render_text;
use alcometer::domain::model::{OutputFormat, Theme};
use alcometer::domain::ports::{Alerter, ConfigProvider};
use alcometer::{CliConfig, DisplayColor, Severity, Sex, TomlConfig};
use clap::Parser;
use std::cell::Cell;

#[derive(Default)]
struct CountingAlerter {
    count: Cell<usize>,
}

impl Alerter for CountingAlerter {
    fn alert(&self, _title: &str, _message: &str) {
        self.count.set(self.count.get() + 1);
    }
}

#[test]
fn test_cli_defaults() {
    let config = CliConfig::try_parse_from(["alcometer", "--weight", "70"]).unwrap();

    assert_eq!(config.bottles, "0");
    assert_eq!(config.hours, "0");
    assert_eq!(config.default_sex(), Sex::Male);
    assert_eq!(config.theme(), Theme::Light);
    assert_eq!(config.output_format(), OutputFormat::Text);
    assert!(config.color_enabled());
}

#[test]
fn test_cli_to_form_and_calculate() {
    let config = CliConfig::try_parse_from([
        "alcometer",
        "--weight",
        "60",
        "--bottles",
        "5",
        "--sex",
        "female",
        "--theme",
        "dark",
    ])
    .unwrap();

    let alerter = CountingAlerter::default();
    let mut form = config.to_form();
    assert_eq!(form.theme, Theme::Dark);

    let result = form.calculate(&alerter).unwrap();
    assert_eq!(result.severity, Severity::High);
    assert_eq!(form.result_text, "1.65");
    assert_eq!(form.result_color, DisplayColor::Red);
    assert_eq!(alerter.count.get(), 0);
}

#[test]
fn test_cli_without_weight_alerts() {
    let config = CliConfig::try_parse_from(["alcometer", "--bottles", "3"]).unwrap();

    let alerter = CountingAlerter::default();
    let mut form = config.to_form();
    assert!(form.calculate(&alerter).is_none());
    assert_eq!(alerter.count.get(), 1);
}

#[test]
fn test_cli_accepts_negative_hours() {
    let config =
        CliConfig::try_parse_from(["alcometer", "-w", "70", "-b", "2", "--hours", "-1"]).unwrap();
    assert_eq!(config.hours, "-1");
}

#[test]
fn test_file_settings_fill_only_missing_flags() {
    let file = TomlConfig::from_toml_str(
        r#"
[display]
theme = "dark"
format = "json"
color = false

[palette]
low = "yellow"

[defaults]
sex = "female"
"#,
    )
    .unwrap();

    let mut config =
        CliConfig::try_parse_from(["alcometer", "--weight", "80", "--sex", "male"]).unwrap();
    config.apply_file(&file);

    assert_eq!(config.default_sex(), Sex::Male);
    assert_eq!(config.theme(), Theme::Dark);
    assert_eq!(config.output_format(), OutputFormat::Json);
    assert!(!config.color_enabled());

    let alerter = CountingAlerter::default();
    let mut form = config.to_form();
    form.calculate(&alerter).unwrap();
    assert_eq!(form.result_text, "0.00");
    assert_eq!(form.result_color, DisplayColor::Yellow);
}

#[test]
fn test_rendered_text_for_scenario() {
    let config = CliConfig::try_parse_from([
        "alcometer", "-w", "70", "-b", "2", "--hours", "1", "--no-color",
    ])
    .unwrap();

    let alerter = CountingAlerter::default();
    let mut form = config.to_form();
    let result = form.calculate(&alerter).unwrap();

    let text = render_text(&result, form.theme, &config.palette(), config.color_enabled());
    assert_eq!(text, "Alcometer\nBAC: 0.34 (low)");
}
