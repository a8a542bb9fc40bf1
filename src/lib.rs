pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::AppConfig;
pub use crate::core::averages::CourseAverages;
pub use crate::core::filter::by_course;
pub use crate::core::store::MenuStore;
pub use crate::domain::model::{Course, MenuItem, MenuItemId, NewMenuItem};
pub use crate::utils::error::{MenuError, Result};
