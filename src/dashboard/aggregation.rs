//! Builds the overview summary from the fetched resource lists.
//!
//! Everything here is pure and synchronous: the dashboard fetches the three
//! collections, hands them to [summarize], and renders the result. The
//! summary is recomputed in full on every load; nothing is cached.

use std::collections::HashMap;

use crate::{budget::Budget, expense::Expense, goal::Goal};

/// The category label used for expenses without a recorded category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A category paired with the total amount spent in it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category name.
    pub category: String,
    /// The summed expense amounts for this category.
    pub amount: f64,
}

/// The derived overview of all three resource collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The sum of all expense amounts.
    pub total: f64,
    /// Per-category totals, ordered by where each category first appears in
    /// the expense list.
    pub by_category: Vec<CategoryTotal>,
    /// The fetched budgets, untouched.
    pub budgets: Vec<Budget>,
    /// The fetched goals, untouched.
    pub goals: Vec<Goal>,
}

/// Aggregate the fetched collections into a [Summary].
///
/// A missing expense amount counts as zero (handled at deserialization), and
/// a missing or empty category is grouped under [UNCATEGORIZED_LABEL]. Each
/// expense lands in exactly one category bucket, so the total always equals
/// the sum of the per-category amounts.
pub fn summarize(expenses: &[Expense], budgets: Vec<Budget>, goals: Vec<Goal>) -> Summary {
    let mut total = 0.0;
    let mut by_category: Vec<CategoryTotal> = Vec::new();
    let mut category_index: HashMap<String, usize> = HashMap::new();

    for expense in expenses {
        total += expense.amount;

        let category = expense
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL);

        match category_index.get(category) {
            Some(&index) => by_category[index].amount += expense.amount,
            None => {
                category_index.insert(category.to_owned(), by_category.len());
                by_category.push(CategoryTotal {
                    category: category.to_owned(),
                    amount: expense.amount,
                });
            }
        }
    }

    Summary {
        total,
        by_category,
        budgets,
        goals,
    }
}
