use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Kind of spending bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    #[serde(alias = "Fixo")]
    Fixed,
    #[serde(alias = "Variável")]
    Variable,
    #[serde(alias = "Dívida")]
    Debt,
    #[serde(alias = "Investimento")]
    Investment,
}

/// Source of an income event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevenueType {
    #[serde(alias = "Salário")]
    Salary,
    #[serde(alias = "Pró-labore")]
    ProLabore,
    #[serde(alias = "Dividendo PJ")]
    CompanyDividend,
    #[serde(alias = "Freelance")]
    Freelance,
    #[serde(alias = "Aluguel")]
    Rent,
    #[serde(alias = "Investimento")]
    Investment,
    #[serde(alias = "Outro")]
    Other,
}

impl RevenueType {
    /// Display label in the product's locale.
    pub fn label(self) -> &'static str {
        match self {
            RevenueType::Salary => "Salário",
            RevenueType::ProLabore => "Pró-labore",
            RevenueType::CompanyDividend => "Dividendo PJ",
            RevenueType::Freelance => "Freelance",
            RevenueType::Rent => "Aluguel",
            RevenueType::Investment => "Investimento",
            RevenueType::Other => "Outro",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankType {
    #[serde(alias = "Corrente")]
    Checking,
    #[serde(alias = "Poupança")]
    Savings,
    #[serde(alias = "Cartão de Crédito")]
    CreditCard,
    #[serde(alias = "Carteira Digital")]
    DigitalWallet,
    #[serde(alias = "Investimento")]
    Investment,
}

/// A spending bucket with an optional monthly target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub expense_type: ExpenseType,
    /// Monthly target; `None` or zero means "no budget set"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Money>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

impl Category {
    /// The monthly target, only when it is strictly positive.
    pub fn budget(&self) -> Option<Money> {
        self.expected_amount.filter(|amount| amount.is_positive())
    }
}

/// One expense event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub category_id: String,
    pub bank_id: String,
    /// Non-negative
    pub amount: Money,
    pub timestamp: NaiveDateTime,
    pub installments_total: u32,
    pub installment_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    pub fn is_installment(&self) -> bool {
        self.installments_total > 1
    }
}

/// One income event. Mirrors `Transaction` without a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub id: String,
    pub bank_id: String,
    pub amount: Money,
    pub revenue_type: RevenueType,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: String,
    pub name: String,
    pub bank_type: BankType,
    pub initial_balance: Money,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub active: bool,
}

/// Optional equality filters for transaction queries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
}

impl TransactionFilters {
    pub fn by_category(category_id: impl Into<String>) -> Self {
        Self {
            category_id: Some(category_id.into()),
            bank_id: None,
        }
    }

    pub fn by_bank(bank_id: impl Into<String>) -> Self {
        Self {
            category_id: None,
            bank_id: Some(bank_id.into()),
        }
    }

    /// For accessor implementations that filter in memory.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.category_id
            .as_deref()
            .map_or(true, |id| transaction.category_id == id)
            && self
                .bank_id
                .as_deref()
                .map_or(true, |id| transaction.bank_id == id)
    }
}
