//! Property-based integration tests for the rollup computations.
//!
//! These tests check properties that must hold for any ledger contents,
//! using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, NaiveDateTime};
use hearth_core::aggregation::{aggregate_by_category, total};
use hearth_core::budget::evaluate;
use hearth_core::ledger::{Category, ExpenseType, Transaction};
use hearth_core::portfolio::{valuate, Holding};
use hearth_core::ranking::rank;
use hearth_core::Money;
use hearth_market_data::Quote;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

// =============================================================================
// Generators
// =============================================================================

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

/// Generates a transaction in one of a handful of categories.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    ("[a-z0-9]{8}", 0usize..6, 0i64..5_000_000, 0i64..29).prop_map(
        |(id, category, cents, day)| Transaction {
            id,
            category_id: format!("cat-{}", category),
            bank_id: "bank".to_string(),
            amount: Money::from_cents(cents),
            timestamp: base_time() + chrono::Duration::days(day),
            installments_total: 1,
            installment_index: 1,
            description: None,
            recurring: false,
        },
    )
}

fn arb_category() -> impl Strategy<Value = Category> {
    (0usize..6, proptest::option::of(0i64..2_000_000)).prop_map(|(index, expected)| Category {
        id: format!("cat-{}", index),
        name: format!("Category {}", index),
        expense_type: ExpenseType::Variable,
        expected_amount: expected.map(Money::from_cents),
        color: "#000000".to_string(),
        icon: None,
        active: true,
    })
}

fn arb_holding() -> impl Strategy<Value = Holding> {
    ("[A-Z]{4}[0-9]", 0i64..100_000, 0i64..1_000_000).prop_map(|(ticker, qty, cost)| {
        Holding::new(ticker, Decimal::new(qty, 2), Decimal::new(cost, 2))
    })
}

fn merge(a: &HashMap<String, Money>, b: &HashMap<String, Money>) -> HashMap<String, Money> {
    let mut merged = a.clone();
    for (key, value) in b {
        *merged.entry(key.clone()).or_insert(Money::ZERO) += *value;
    }
    merged
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_aggregation_is_additive_over_disjoint_sets(
        left in prop::collection::vec(arb_transaction(), 0..40),
        right in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let mut union = left.clone();
        union.extend(right.iter().cloned());

        let combined = aggregate_by_category(&union);
        let merged = merge(&aggregate_by_category(&left), &aggregate_by_category(&right));
        prop_assert_eq!(combined, merged);
        prop_assert_eq!(total(&union), total(&left) + total(&right));
    }

    #[test]
    fn prop_aggregation_total_matches_sum_of_groups(
        records in prop::collection::vec(arb_transaction(), 0..60),
    ) {
        let groups = aggregate_by_category(&records);
        let from_groups: Money = groups.values().copied().sum();
        prop_assert_eq!(from_groups, total(&records));
    }

    #[test]
    fn prop_budget_flags_are_consistent(
        categories in prop::collection::vec(arb_category(), 0..6),
        records in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let report = evaluate(&categories, &aggregate_by_category(&records));

        for row in &report.rows {
            prop_assert!(!(row.is_over && row.is_warning));
            prop_assert!(row.utilization <= Decimal::ONE);
            if !row.has_budget {
                prop_assert!(!row.is_over && !row.is_warning);
                prop_assert_eq!(row.raw_utilization, Decimal::ZERO);
            }
        }
        prop_assert!(report.rows.windows(2).all(|w| w[0].spent >= w[1].spent));
        prop_assert_eq!(
            report.over_budget_count,
            report.rows.iter().filter(|r| r.is_over).count()
        );
        prop_assert_eq!(report.overall_utilization.is_none(), report.total_budget.is_zero());
    }

    #[test]
    fn prop_rank_is_sorted_capped_and_idempotent(
        records in prop::collection::vec(arb_transaction(), 0..60),
        top_k in 0usize..10,
    ) {
        let aggregated = aggregate_by_category(&records);
        let ranked = rank(&aggregated, top_k);

        prop_assert!(ranked.len() <= top_k);
        prop_assert!(ranked.len() <= aggregated.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].value >= w[1].value));
        prop_assert_eq!(&ranked, &rank(&aggregated, top_k));

        let share_sum: Decimal = ranked.iter().map(|r| r.share).sum();
        let any_value = ranked.iter().any(|r| r.value.is_positive());
        if any_value {
            prop_assert!((share_sum - Decimal::ONE).abs() < Decimal::new(1, 9));
        } else {
            prop_assert!(share_sum.is_zero());
        }
    }

    #[test]
    fn prop_unquoted_holdings_have_zero_gain(
        holdings in prop::collection::vec(arb_holding(), 0..20),
    ) {
        let quotes: Vec<Quote> = Vec::new();
        let positions = valuate(&holdings, &quotes);

        prop_assert_eq!(positions.len(), holdings.len());
        for position in &positions {
            prop_assert!(position.quote_missing);
            prop_assert_eq!(position.gain_loss, Decimal::ZERO);
            prop_assert_eq!(position.gain_loss_pct, Decimal::ZERO);
            prop_assert_eq!(position.current_price, position.average_cost);
        }
    }
}

#[test]
fn test_empty_inputs_give_empty_results() {
    let no_transactions: Vec<Transaction> = Vec::new();
    assert!(aggregate_by_category(&no_transactions).is_empty());
    assert!(evaluate(&[], &HashMap::new()).rows.is_empty());
    assert!(rank(&HashMap::new(), 8).is_empty());
    assert!(valuate(&[], &[]).is_empty());
}
