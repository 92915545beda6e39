use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseCourseError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// Picker order; the first entry is the draft default.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = ParseCourseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseCourseError::new(token))
    }
}

/// A committed catalog entry. Fields are read-only once constructed.
///
/// Serialize-only: items enter the catalog through draft validation, never
/// from external data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    id: ItemId,
    name: String,
    description: String,
    price: f64,
    course: Course,
}

impl MenuItem {
    /// Builds an item from already-validated parts.
    ///
    /// Callers own the field rules: `name` and `description` trimmed and
    /// non-empty, `price` finite and greater than zero.
    pub fn from_validated(
        id: ItemId,
        name: String,
        description: String,
        price: f64,
        course: Course,
    ) -> Self {
        debug_assert!(!name.is_empty() && !description.is_empty());
        debug_assert!(price.is_finite() && price > 0.0);
        Self {
            id,
            name,
            description,
            price,
            course,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn course(&self) -> Course {
        self.course
    }

    /// Price with exactly two decimals, e.g. `5.5` -> `"5.50"`.
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}
