use super::category::Category;
use super::transaction::SplitMode;
use crate::constants::MAX_NAME_LENGTH;
use crate::core::errors::SplitviewError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unvalidated form input for a new expense.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: Option<Category>,
    pub split_mode: Option<SplitMode>,
    pub split_with: Option<String>,
}

/// Request body accepted by the backend's `add_expense` endpoint.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewExpense {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub split_mode: SplitMode,
    pub split_with: Option<String>,
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<NewExpense, SplitviewError> {
        let name = self.name.trim();
        validate_name(name)?;
        let amount = parse_amount(&self.amount)?;

        let category = match &self.category {
            Some(c) if c.is_known() => c.clone(),
            Some(c) => {
                return Err(SplitviewError::invalid(
                    "category",
                    "Invalid Category",
                    format!("Unknown category {}", c),
                ));
            }
            None => return Err(SplitviewError::invalid("category", "Missing Category", "Please select a category")),
        };

        let split_mode = match &self.split_mode {
            Some(m) if m.is_known() => m.clone(),
            Some(m) => {
                return Err(SplitviewError::invalid(
                    "split_mode",
                    "Invalid Split Mode",
                    format!("Unknown split mode {}", m),
                ));
            }
            None => {
                return Err(SplitviewError::invalid(
                    "split_mode",
                    "Missing Split Mode",
                    "Please select a split mode",
                ));
            }
        };

        let split_with = self
            .split_with
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        if split_mode.requires_counterparty() && split_with.is_none() {
            return Err(SplitviewError::invalid(
                "split_with",
                "Missing Counterparty",
                "Please enter the username to split with",
            ));
        }

        Ok(NewExpense {
            name: name.to_string(),
            amount,
            category,
            split_mode,
            split_with,
        })
    }
}

fn validate_name(name: &str) -> Result<(), SplitviewError> {
    if name.is_empty() {
        return Err(SplitviewError::invalid("name", "Invalid name", "name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(SplitviewError::invalid(
            "name",
            "name Too Long",
            format!("name cannot exceed {} characters", MAX_NAME_LENGTH),
        ));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(SplitviewError::invalid("name", "Invalid name", "name contains invalid characters"));
    }
    Ok(())
}

fn parse_amount(raw: &str) -> Result<Decimal, SplitviewError> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| SplitviewError::invalid("amount", "Invalid Amount", "Please enter a valid amount"))?;
    if amount <= Decimal::ZERO {
        return Err(SplitviewError::invalid("amount", "Invalid Amount", "Amount must be greater than 0"));
    }
    if amount.normalize().scale() > 2 {
        return Err(SplitviewError::invalid(
            "amount",
            "Invalid Amount",
            "Amount cannot have more than 2 decimal places",
        ));
    }
    Ok(amount)
}
