use std::collections::HashMap;

use super::ranking_model::RankedCategory;
use crate::money::Money;

/// Ranks categories by value, highest first, and keeps the first `top_k`.
///
/// Ties are broken by category id so the order does not depend on map
/// iteration. Entries past `top_k` are dropped. Shares are computed over
/// the kept entries; when they sum to zero every share is zero.
pub fn rank(aggregated: &HashMap<String, Money>, top_k: usize) -> Vec<RankedCategory> {
    let mut entries: Vec<(&String, Money)> = aggregated.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(top_k);

    let ranked_total: Money = entries.iter().map(|(_, value)| *value).sum();

    entries
        .into_iter()
        .map(|(category_id, value)| RankedCategory {
            category_id: category_id.clone(),
            value,
            share: value.ratio(ranked_total),
        })
        .collect()
}
