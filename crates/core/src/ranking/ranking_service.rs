use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::ranker::rank;
use super::ranking_model::CategorySpending;
use crate::aggregation::aggregate_by_category;
use crate::config::EngineConfig;
use crate::constants::{UNCATEGORIZED_COLOR, UNCATEGORIZED_ICON, UNCATEGORIZED_LABEL};
use crate::errors::Result;
use crate::ledger::{Category, LedgerAccessorTrait, TransactionFilters};
use crate::window::{WindowSpec, YearMonth};

#[async_trait]
pub trait CategoryRankingServiceTrait: Send + Sync {
    /// Categories with the highest spending in `month`, at most `top_k`.
    async fn top_categories(&self, month: YearMonth, top_k: usize)
        -> Result<Vec<CategorySpending>>;

    /// Same as `top_categories` with the configured row count.
    async fn default_top_categories(&self, month: YearMonth) -> Result<Vec<CategorySpending>>;
}

pub struct CategoryRankingService {
    ledger: Arc<dyn LedgerAccessorTrait>,
    default_top_k: usize,
}

impl CategoryRankingService {
    pub fn new(ledger: Arc<dyn LedgerAccessorTrait>, config: &EngineConfig) -> Self {
        Self {
            ledger,
            default_top_k: config.top_categories,
        }
    }
}

#[async_trait]
impl CategoryRankingServiceTrait for CategoryRankingService {
    async fn default_top_categories(&self, month: YearMonth) -> Result<Vec<CategorySpending>> {
        self.top_categories(month, self.default_top_k).await
    }

    async fn top_categories(
        &self,
        month: YearMonth,
        top_k: usize,
    ) -> Result<Vec<CategorySpending>> {
        let window = WindowSpec::month(month);
        let filters = TransactionFilters::default();

        // All categories, so spending in since-deactivated ones keeps its name.
        let (categories, transactions) = futures::try_join!(
            self.ledger.fetch_categories(false),
            self.ledger.fetch_transactions(&window, &filters)
        )?;

        let by_id: HashMap<&str, &Category> =
            categories.iter().map(|c| (c.id.as_str(), c)).collect();
        let ranked = rank(&aggregate_by_category(&transactions), top_k);
        debug!("Ranked {} categories for {}", ranked.len(), month);

        Ok(ranked
            .into_iter()
            .map(|entry| match by_id.get(entry.category_id.as_str()) {
                Some(category) => CategorySpending {
                    name: category.name.clone(),
                    color: category.color.clone(),
                    icon: category
                        .icon
                        .clone()
                        .unwrap_or_else(|| UNCATEGORIZED_ICON.to_string()),
                    category_id: entry.category_id,
                    value: entry.value,
                    share: entry.share,
                },
                None => {
                    warn!(
                        "Transactions reference unknown category '{}'",
                        entry.category_id
                    );
                    CategorySpending {
                        name: UNCATEGORIZED_LABEL.to_string(),
                        color: UNCATEGORIZED_COLOR.to_string(),
                        icon: UNCATEGORIZED_ICON.to_string(),
                        category_id: entry.category_id,
                        value: entry.value,
                        share: entry.share,
                    }
                }
            })
            .collect())
    }
}
