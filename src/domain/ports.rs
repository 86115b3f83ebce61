use crate::domain::model::{OutputFormat, SeverityPalette, Sex, Theme};

pub trait ConfigProvider {
    fn theme(&self) -> Theme;
    fn output_format(&self) -> OutputFormat;
    fn color_enabled(&self) -> bool;
    fn palette(&self) -> SeverityPalette;
    fn default_sex(&self) -> Sex;
}

/// Blocking, user-facing notification raised by the form (e.g. missing weight).
pub trait Alerter {
    fn alert(&self, title: &str, message: &str);
}
