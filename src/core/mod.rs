pub mod batch;
pub mod estimator;
pub mod form;
pub mod render;

pub use crate::domain::model::{BacInput, BacResult, Severity, Sex};
pub use crate::domain::ports::{Alerter, ConfigProvider};
pub use crate::utils::error::Result;
