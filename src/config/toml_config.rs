use crate::domain::model::{DisplayColor, OutputFormat, SeverityPalette, Sex, Theme};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AlcometerError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub palette: Option<PaletteConfig>,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub format: Option<String>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub low: Option<String>,
    pub moderate: Option<String>,
    pub high: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub sex: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AlcometerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AlcometerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ALCOMETER_THEME})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AlcometerError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn theme_setting(&self) -> Option<Theme> {
        self.display
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .and_then(|t| t.parse().ok())
    }

    pub fn format_setting(&self) -> Option<OutputFormat> {
        self.display
            .as_ref()
            .and_then(|d| d.format.as_deref())
            .and_then(|f| f.parse().ok())
    }

    pub fn color_setting(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.color)
    }

    pub fn sex_setting(&self) -> Option<Sex> {
        self.defaults
            .as_ref()
            .and_then(|d| d.sex.as_deref())
            .and_then(|s| s.parse().ok())
    }

    /// 未設定的顏色沿用預設對照
    pub fn palette_setting(&self) -> SeverityPalette {
        let defaults = SeverityPalette::default();
        let Some(palette) = &self.palette else {
            return defaults;
        };

        let pick = |token: &Option<String>, fallback: DisplayColor| {
            token
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or(fallback)
        };

        SeverityPalette {
            low: pick(&palette.low, defaults.low),
            moderate: pick(&palette.moderate, defaults.moderate),
            high: pick(&palette.high, defaults.high),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(display) = &self.display {
            if let Some(theme) = &display.theme {
                validate_one_of("display.theme", theme, &["light", "dark"])?;
            }
            if let Some(format) = &display.format {
                validate_one_of("display.format", format, &["text", "json"])?;
            }
        }

        if let Some(palette) = &self.palette {
            let entries = [
                ("palette.low", &palette.low),
                ("palette.moderate", &palette.moderate),
                ("palette.high", &palette.high),
            ];
            for (field, token) in entries {
                if let Some(token) = token {
                    validate_one_of(field, token, &DisplayColor::NAMES)?;
                }
            }
        }

        if let Some(sex) = self.defaults.as_ref().and_then(|d| d.sex.as_ref()) {
            validate_one_of("defaults.sex", sex, &["male", "female"])?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn theme(&self) -> Theme {
        self.theme_setting().unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format_setting().unwrap_or_default()
    }

    fn color_enabled(&self) -> bool {
        self.color_setting().unwrap_or(true)
    }

    fn palette(&self) -> SeverityPalette {
        self.palette_setting()
    }

    fn default_sex(&self) -> Sex {
        self.sex_setting().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
