pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::form::FormState;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, SeverityPalette, Sex, Theme};
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "alcometer")]
#[command(about = "Estimate blood alcohol concentration from beer bottles, weight and time")]
pub struct CliConfig {
    /// Body weight in kilograms
    #[arg(short, long)]
    pub weight: Option<String>,

    /// Number of 0.33 l beer bottles
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub bottles: String,

    /// Hours since drinking started
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub hours: String,

    #[arg(short, long, value_enum)]
    pub sex: Option<Sex>,

    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable ANSI colors in text output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub palette: SeverityPalette,

    #[arg(skip)]
    pub file_color: Option<bool>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，未指定的項目才採用設定檔
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if self.sex.is_none() {
            self.sex = file.sex_setting();
        }
        if self.theme.is_none() {
            self.theme = file.theme_setting();
        }
        if self.format.is_none() {
            self.format = file.format_setting();
        }
        self.file_color = file.color_setting();
        self.palette = file.palette_setting();
    }

    /// Fill a form the way a user would: type the fields, pick the sex and theme.
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::new(self.palette());
        form.set_weight(self.weight.clone().unwrap_or_default());
        form.set_bottles(self.bottles.clone());
        form.set_hours(self.hours.clone());
        form.select_sex(self.default_sex());
        if self.theme() != form.theme {
            form.toggle_theme();
        }
        form
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn color_enabled(&self) -> bool {
        !self.no_color && self.file_color.unwrap_or(true)
    }

    fn palette(&self) -> SeverityPalette {
        self.palette
    }

    fn default_sex(&self) -> Sex {
        self.sex.unwrap_or_default()
    }
}
