//! Fixed default category set seeded on first run.

use crate::categories::categories_model::{Category, CategoryKind};

fn category(id: &str, name: &str, icon: &str, color: &str, kind: CategoryKind) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        kind,
    }
}

/// Returns the twelve default categories (four income, eight expense) with
/// stable ids.
pub fn default_categories() -> Vec<Category> {
    vec![
        // Income categories
        category("salary", "Salário", "💼", "#22c55e", CategoryKind::Income),
        category("freelance", "Freelance", "💻", "#3b82f6", CategoryKind::Income),
        category(
            "investment",
            "Investimentos",
            "📈",
            "#8b5cf6",
            CategoryKind::Income,
        ),
        category("bonus", "Bônus", "🎁", "#f59e0b", CategoryKind::Income),
        // Expense categories
        category("food", "Alimentação", "🍽️", "#ef4444", CategoryKind::Expense),
        category(
            "transport",
            "Transporte",
            "🚗",
            "#f97316",
            CategoryKind::Expense,
        ),
        category("health", "Saúde", "🏥", "#06b6d4", CategoryKind::Expense),
        category(
            "entertainment",
            "Lazer",
            "🎬",
            "#ec4899",
            CategoryKind::Expense,
        ),
        category("housing", "Moradia", "🏠", "#84cc16", CategoryKind::Expense),
        category(
            "education",
            "Educação",
            "📚",
            "#6366f1",
            CategoryKind::Expense,
        ),
        category("shopping", "Compras", "🛍️", "#d946ef", CategoryKind::Expense),
        category("bills", "Contas", "📄", "#64748b", CategoryKind::Expense),
    ]
}
