use crate::model::Transaction;

/// Selects transactions by a case-insensitive substring of their memo.
///
/// A transaction without a memo, or with an empty memo, never matches. This holds even for an
/// empty filter, which would otherwise match everything.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MemoFilter {
    needle: String,
}

impl MemoFilter {
    /// Create a filter for `text`. The text is used as-is, surrounding whitespace is significant.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            needle: text.into().to_lowercase(),
        }
    }

    /// Returns true if `transaction` has a non-empty memo that contains the filter text.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match transaction.memo() {
            Some(memo) if !memo.is_empty() => memo.to_lowercase().contains(&self.needle),
            _ => false,
        }
    }

    /// Returns the matching transactions in their original order.
    pub fn apply<'a>(
        &'a self,
        transactions: &'a [Transaction],
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |t| self.matches(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(memo: Option<&str>) -> Transaction {
        Transaction::new("2024-01-01", -1000, Some("Dining"), memo)
    }

    #[test]
    fn test_case_insensitive_substring() {
        let t = memo(Some("Coffee SHOP"));
        assert!(MemoFilter::new("shop").matches(&t));
        assert!(MemoFilter::new("fee s").matches(&t));
        assert!(MemoFilter::new("COFFEE").matches(&t));
    }

    #[test]
    fn test_trailing_space_is_significant() {
        let t = memo(Some("Coffee SHOP"));
        assert!(!MemoFilter::new("SHOP ").matches(&t));
    }

    #[test]
    fn test_missing_or_empty_memo_never_matches() {
        for filter in ["", "a", " "] {
            let filter = MemoFilter::new(filter);
            assert!(!filter.matches(&memo(None)));
            assert!(!filter.matches(&memo(Some(""))));
        }
    }

    #[test]
    fn test_empty_filter_matches_any_memo() {
        assert!(MemoFilter::new("").matches(&memo(Some("anything"))));
    }

    #[test]
    fn test_not_a_regex() {
        let t = memo(Some("rent (march)"));
        assert!(MemoFilter::new("(march)").matches(&t));
        assert!(!MemoFilter::new("r.nt").matches(&t));
    }

    #[test]
    fn test_apply_preserves_order() {
        let a = Transaction::new("2024-01-03", 1, None, Some("gift for A"));
        let b = Transaction::new("2024-01-01", 2, None, Some("something else"));
        let c = Transaction::new("2024-01-02", 3, None, Some("GIFT for C"));
        let transactions = vec![a.clone(), b, c.clone()];
        let filter = MemoFilter::new("gift");
        let actual: Vec<&Transaction> = filter.apply(&transactions).collect();
        assert_eq!(actual, vec![&a, &c]);
    }
}
