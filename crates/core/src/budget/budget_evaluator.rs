use std::collections::HashMap;

use rust_decimal::Decimal;

use super::budget_model::{BudgetReport, BudgetRow, BudgetStatus};
use crate::constants::BUDGET_WARNING_THRESHOLD;
use crate::ledger::Category;
use crate::money::Money;

/// Evaluates spending against category targets with the default warning
/// threshold.
pub fn evaluate(categories: &[Category], spent_by_category: &HashMap<String, Money>) -> BudgetReport {
    evaluate_with_threshold(categories, spent_by_category, BUDGET_WARNING_THRESHOLD)
}

/// A category yields a row when it has spending in `spent_by_category` or a
/// strictly positive target. Spending keyed by ids absent from `categories`
/// is ignored.
pub fn evaluate_with_threshold(
    categories: &[Category],
    spent_by_category: &HashMap<String, Money>,
    warning_threshold: Decimal,
) -> BudgetReport {
    let mut rows: Vec<BudgetRow> = categories
        .iter()
        .filter_map(|category| {
            let spent = spent_by_category.get(&category.id).copied();
            if spent.is_none() && category.budget().is_none() {
                return None;
            }
            Some(build_row(
                category,
                spent.unwrap_or(Money::ZERO),
                warning_threshold,
            ))
        })
        .collect();

    // sort_by is stable: ties keep category order
    rows.sort_by(|a, b| b.spent.cmp(&a.spent));

    let total_budget: Money = rows
        .iter()
        .filter_map(|row| row.expected_amount.filter(|_| row.has_budget))
        .sum();
    let total_spent: Money = rows.iter().map(|row| row.spent).sum();
    let over_budget_count = rows.iter().filter(|row| row.is_over).count();

    let overall_utilization = if total_budget.is_zero() {
        None
    } else {
        Some(total_spent.ratio(total_budget))
    };
    let overall_status = match overall_utilization {
        None => BudgetStatus::Unbudgeted,
        Some(_) => status_for(true, total_spent, total_budget, warning_threshold),
    };

    BudgetReport {
        rows,
        total_budget,
        total_spent,
        overall_utilization,
        overall_status,
        over_budget_count,
    }
}

fn build_row(category: &Category, spent: Money, warning_threshold: Decimal) -> BudgetRow {
    let budget = category.budget();
    let has_budget = budget.is_some();
    let expected = budget.unwrap_or(Money::ZERO);

    let raw_utilization = if has_budget {
        spent.ratio(expected)
    } else {
        Decimal::ZERO
    };
    let status = status_for(has_budget, spent, expected, warning_threshold);

    BudgetRow {
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        category_color: category.color.clone(),
        category_icon: category.icon.clone(),
        expense_type: category.expense_type,
        expected_amount: category.expected_amount,
        spent,
        has_budget,
        raw_utilization,
        utilization: raw_utilization.min(Decimal::ONE),
        is_over: status == BudgetStatus::Over,
        is_warning: status == BudgetStatus::Warning,
        remaining: budget.map(|b| b - spent),
        status,
    }
}

fn status_for(
    has_budget: bool,
    spent: Money,
    expected: Money,
    warning_threshold: Decimal,
) -> BudgetStatus {
    if !has_budget {
        BudgetStatus::Unbudgeted
    } else if spent > expected {
        BudgetStatus::Over
    } else if spent.ratio(expected) > warning_threshold {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    }
}
