//! Invoice list queries.

use std::borrow::Cow;
use std::cmp::Ordering;

use clientdesk_core::DomainError;
use clientdesk_invoicing::{Invoice, InvoiceStatus};

use crate::pipeline::Queryable;

/// Sort keys offered by the invoice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceSort {
    /// Issue date, oldest first.
    Date,
    /// Amount, largest first.
    Amount,
    /// Invoice number, ascending (case-insensitive).
    Number,
}

impl InvoiceSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceSort::Date => "Date",
            InvoiceSort::Amount => "Amount",
            InvoiceSort::Number => "Number",
        }
    }
}

impl core::str::FromStr for InvoiceSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(InvoiceSort::Date),
            "amount" => Ok(InvoiceSort::Amount),
            "number" => Ok(InvoiceSort::Number),
            _ => Err(DomainError::unknown_option("invoice sort", s)),
        }
    }
}

impl Queryable for Invoice {
    type Status = InvoiceStatus;
    type SortKey = InvoiceSort;

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.number.as_str()),
            Cow::Owned(self.date.to_string()),
            Cow::Owned(self.amount.to_plain_string()),
        ]
    }

    fn compare_by(&self, other: &Self, key: InvoiceSort) -> Ordering {
        match key {
            InvoiceSort::Date => self.date.cmp(&other.date),
            InvoiceSort::Amount => other.amount.cmp(&self.amount),
            InvoiceSort::Number => self.number.to_lowercase().cmp(&other.number.to_lowercase()),
        }
    }
}
