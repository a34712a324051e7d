//! Pure aggregations over an invoice collection.

use chrono::Datelike;

use clientdesk_core::Money;

use crate::invoice::{Invoice, InvoiceStatus};

/// Sum of all amounts not yet paid (pending + overdue).
pub fn outstanding_balance(invoices: &[Invoice]) -> Money {
    invoices
        .iter()
        .filter(|inv| inv.status.is_outstanding())
        .map(|inv| inv.amount)
        .sum()
}

/// Earliest-dated pending invoice.
///
/// Overdue invoices are not "next due": they are already due. Ties on date
/// resolve to the invoice listed first.
pub fn next_due_invoice(invoices: &[Invoice]) -> Option<&Invoice> {
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Pending)
        .min_by_key(|inv| inv.date)
}

/// Sum of paid amounts issued within calendar `year`.
pub fn total_paid(invoices: &[Invoice], year: i32) -> Money {
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Paid && inv.date.year() == year)
        .map(|inv| inv.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice(id: &str, amount: u64, status: InvoiceStatus, date: NaiveDate) -> Invoice {
        Invoice::new(id, format!("INV-{id}"), date, Money::from_major(amount), status)
    }

    #[test]
    fn overdue_counts_toward_balance_but_is_not_next_due() {
        let invoices = vec![
            invoice("1", 1200, InvoiceStatus::Overdue, date(2025, 3, 15)),
            invoice("2", 1800, InvoiceStatus::Pending, date(2025, 5, 10)),
        ];
        assert_eq!(outstanding_balance(&invoices), Money::from_major(3000));
        let next = next_due_invoice(&invoices).unwrap();
        assert_eq!(next.amount, Money::from_major(1800));
    }

    #[test]
    fn empty_collection_yields_zero_and_none() {
        assert_eq!(outstanding_balance(&[]), Money::ZERO);
        assert!(next_due_invoice(&[]).is_none());
        assert_eq!(total_paid(&[], 2025), Money::ZERO);
    }

    #[test]
    fn next_due_prefers_earliest_then_input_order() {
        let invoices = vec![
            invoice("a", 100, InvoiceStatus::Pending, date(2025, 6, 1)),
            invoice("b", 200, InvoiceStatus::Pending, date(2025, 4, 1)),
            invoice("c", 300, InvoiceStatus::Pending, date(2025, 4, 1)),
            invoice("d", 400, InvoiceStatus::Overdue, date(2025, 1, 1)),
        ];
        assert_eq!(next_due_invoice(&invoices).unwrap().id.as_str(), "b");
    }

    #[test]
    fn total_paid_only_counts_paid_in_year() {
        let invoices = vec![
            invoice("a", 500, InvoiceStatus::Paid, date(2025, 1, 1)),
            invoice("b", 700, InvoiceStatus::Paid, date(2025, 12, 31)),
            invoice("c", 900, InvoiceStatus::Paid, date(2024, 12, 31)),
            invoice("d", 1100, InvoiceStatus::Pending, date(2025, 6, 1)),
        ];
        assert_eq!(total_paid(&invoices, 2025), Money::from_major(1200));
        assert_eq!(total_paid(&invoices, 2024), Money::from_major(900));
        assert_eq!(total_paid(&invoices, 2023), Money::ZERO);
    }

    fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
        prop_oneof![
            Just(InvoiceStatus::Paid),
            Just(InvoiceStatus::Pending),
            Just(InvoiceStatus::Overdue),
        ]
    }

    proptest! {
        #[test]
        fn paid_plus_outstanding_is_grand_total(
            entries in prop::collection::vec((0u64..100_000, status_strategy()), 0..30)
        ) {
            let invoices: Vec<Invoice> = entries
                .iter()
                .enumerate()
                .map(|(i, (amount, status))| invoice(&i.to_string(), *amount, *status, date(2025, 2, 1)))
                .collect();

            let grand: Money = invoices.iter().map(|inv| inv.amount).sum();
            let paid = total_paid(&invoices, 2025);
            prop_assert_eq!(
                paid.saturating_add(outstanding_balance(&invoices)),
                grand
            );
            if let Some(next) = next_due_invoice(&invoices) {
                prop_assert_eq!(next.status, InvoiceStatus::Pending);
            }
        }
    }
}
