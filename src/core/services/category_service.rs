use crate::ledger::Category;

/// Read access to the fixed category registry.
pub struct CategoryService;

impl CategoryService {
    /// Registry labels in display order, for populating selection controls.
    pub fn list() -> &'static [Category] {
        Category::all()
    }

    pub fn labels() -> Vec<&'static str> {
        Category::all().iter().map(Category::label).collect()
    }

    pub fn lookup(label: &str) -> Option<Category> {
        Category::from_label(label)
    }
}
