//! Fixed category registry used to classify ledger activity.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Categorises ledger activity for reporting. The registry is closed: no labels are added at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Oficina")]
    Office,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Tecnología")]
    Technology,
    #[serde(rename = "Recursos Humanos")]
    HumanResources,
    #[serde(rename = "Servicios")]
    Services,
    #[serde(rename = "Inventario")]
    Inventory,
    #[serde(rename = "Transporte")]
    Transport,
    #[serde(rename = "Alimentación")]
    Food,
    #[serde(rename = "Otros")]
    Other,
}

impl Category {
    /// Registry order, used for selection controls and per-category breakdowns.
    pub const ALL: [Category; 9] = [
        Category::Office,
        Category::Marketing,
        Category::Technology,
        Category::HumanResources,
        Category::Services,
        Category::Inventory,
        Category::Transport,
        Category::Food,
        Category::Other,
    ];

    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Office => "Oficina",
            Category::Marketing => "Marketing",
            Category::Technology => "Tecnología",
            Category::HumanResources => "Recursos Humanos",
            Category::Services => "Servicios",
            Category::Inventory => "Inventario",
            Category::Transport => "Transporte",
            Category::Food => "Alimentación",
            Category::Other => "Otros",
        }
    }

    /// Looks up a category by its exact display label, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Category> {
        let trimmed = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label() == trimmed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label does not name a registry category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_nine_labels_in_order() {
        let labels: Vec<&str> = Category::all().iter().map(Category::label).collect();
        assert_eq!(
            labels,
            vec![
                "Oficina",
                "Marketing",
                "Tecnología",
                "Recursos Humanos",
                "Servicios",
                "Inventario",
                "Transporte",
                "Alimentación",
                "Otros",
            ]
        );
    }

    #[test]
    fn labels_parse_back_to_categories() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            Category::from_label("  Recursos Humanos "),
            Some(Category::HumanResources)
        );
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(Category::from_label("Viajes").is_none());
        assert!(Category::from_label("oficina").is_none());
        assert_eq!(
            "".parse::<Category>(),
            Err(UnknownCategory(String::new()))
        );
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, "\"Tecnología\"");
        let parsed: Category = serde_json::from_str("\"Alimentación\"").unwrap();
        assert_eq!(parsed, Category::Food);
    }
}
