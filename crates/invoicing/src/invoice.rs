use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clientdesk_core::{DomainError, Entity, InvoiceId, Money};

/// Invoice status as reported by the billing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Anything not yet paid counts toward the outstanding balance.
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, InvoiceStatus::Paid)
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(DomainError::unknown_option("invoice status", s)),
        }
    }
}

/// Invoice record (read-only in this scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Display identifier (e.g. "INV-2025-004").
    pub number: String,
    /// Issue date.
    pub date: NaiveDate,
    pub amount: Money,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn new(
        id: impl Into<InvoiceId>,
        number: impl Into<String>,
        date: NaiveDate,
        amount: Money,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            date,
            amount,
            status,
        }
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
