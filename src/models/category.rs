//! Budget categories
//!
//! The catalog is fixed. Anything that does not resolve to a known category
//! becomes `Other`, including unknown labels read back from storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-vocabulary budgeting label attached to every transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Health,
    Leisure,
    Education,
    Salary,
    Freelance,
    #[default]
    Other,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Health,
        Category::Leisure,
        Category::Education,
        Category::Salary,
        Category::Freelance,
        Category::Other,
    ];

    /// The pt-BR label shown to the user and written to storage
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Transport => "Transporte",
            Self::Housing => "Moradia",
            Self::Health => "Saúde",
            Self::Leisure => "Lazer",
            Self::Education => "Educação",
            Self::Salary => "Salário",
            Self::Freelance => "Freelance",
            Self::Other => "Outros",
        }
    }

    /// Look up a category by its label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label).unwrap_or(Self::Other)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}
