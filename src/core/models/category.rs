use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Groceries,
    Utilities,
    Clothing,
    Healthcare,
    Entertainment,
    Fitness,
    Travel,
    Education,
    Gifts,
    PersonalCare,
    Maintenance,
    Subscriptions,
    Business,
    Other,
    /// Raw value the backend sent that this client does not know yet.
    Unknown(String),
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Groceries,
        Category::Utilities,
        Category::Clothing,
        Category::Healthcare,
        Category::Entertainment,
        Category::Fitness,
        Category::Travel,
        Category::Education,
        Category::Gifts,
        Category::PersonalCare,
        Category::Maintenance,
        Category::Subscriptions,
        Category::Business,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Housing => "housing",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Groceries => "groceries",
            Category::Utilities => "utilities",
            Category::Clothing => "clothing",
            Category::Healthcare => "healthcare",
            Category::Entertainment => "entertainment",
            Category::Fitness => "fitness",
            Category::Travel => "travel",
            Category::Education => "education",
            Category::Gifts => "gifts",
            Category::PersonalCare => "personal_care",
            Category::Maintenance => "maintenance",
            Category::Subscriptions => "subscriptions",
            Category::Business => "business",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == raw)
            .cloned()
            .unwrap_or(Category::Unknown(raw))
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::from(raw.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
