//! Free-text filtering over the transaction sequence.

use tally_domain::{Ledger, Transaction};

/// Case-insensitive substring matching over name and amount.
pub struct FilterService;

impl FilterService {
    /// Returns the transactions matching `query`, preserving display order.
    ///
    /// The query is trimmed and lowercased; if nothing remains, everything
    /// matches. A transaction matches when its lowercased name contains the
    /// query, or its amount's plain decimal rendering does. Substring only,
    /// no scoring or ranking.
    pub fn matching<'a>(ledger: &'a Ledger, query: &str) -> Vec<&'a Transaction> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return ledger.transactions.iter().collect();
        }
        ledger
            .transactions
            .iter()
            .filter(|txn| {
                txn.name.to_lowercase().contains(&needle)
                    || txn.amount.to_string().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tally_domain::EntryKind;

    fn seeded_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new("Rent", 1200.0, EntryKind::Debit, Utc::now()));
        ledger.add_transaction(Transaction::new(
            "Groceries",
            82.5,
            EntryKind::Debit,
            Utc::now(),
        ));
        ledger.add_transaction(Transaction::new(
            "Paycheck",
            2000.0,
            EntryKind::Credit,
            Utc::now(),
        ));
        ledger
    }

    #[test]
    fn empty_query_returns_everything_in_display_order() {
        let ledger = seeded_ledger();
        let all = FilterService::matching(&ledger, "   ");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Paycheck");
        assert_eq!(all[2].name, "Rent");
    }

    #[test]
    fn name_matching_ignores_case() {
        let ledger = seeded_ledger();
        let hits = FilterService::matching(&ledger, "  RENT ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rent");
    }

    #[test]
    fn amount_matches_as_decimal_substring() {
        let ledger = seeded_ledger();
        let hits = FilterService::matching(&ledger, "82.5");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Groceries");

        // "200" hits both 1200 and 2000.
        let partial = FilterService::matching(&ledger, "200");
        assert_eq!(partial.len(), 2);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let ledger = seeded_ledger();
        assert!(FilterService::matching(&ledger, "utilities").is_empty());
    }
}
