use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::MenuError;
use crate::utils::validation::{validate_non_empty_string, Validate};

/// The three fixed menu categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Starters" => Ok(Course::Starters),
            "Mains" => Ok(Course::Mains),
            "Dessert" => Ok(Course::Dessert),
            other => Err(MenuError::ValidationError {
                field: "course".to_string(),
                reason: format!("Unknown course: {}", other),
            }),
        }
    }
}

/// Opaque item identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u64);

impl MenuItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Add-form payload. `price` stays text until validation parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl Validate for NewMenuItem {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("description", &self.description)?;
        validate_non_empty_string("price", &self.price)?;
        Ok(())
    }
}
