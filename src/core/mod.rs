pub mod averages;
pub mod filter;
pub mod store;

pub use crate::domain::model::{Course, MenuItem, MenuItemId, NewMenuItem};
pub use crate::utils::error::Result;
