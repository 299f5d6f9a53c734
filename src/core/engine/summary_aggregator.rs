use crate::core::models::{CategoryStats, Expense};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Per-category reporting figures. Shares nothing with the balance side
/// except the raw expenses it reads.
pub struct SummaryAggregator;

impl SummaryAggregator {
    pub fn category_stats(expenses: &[Expense]) -> BTreeMap<String, CategoryStats> {
        let mut accumulated: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = accumulated
                .entry(expense.category.clone())
                .or_insert((Decimal::ZERO, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        accumulated
            .into_iter()
            .map(|(category, (sum, count))| {
                let mean = sum / Decimal::from(count);
                (category, CategoryStats { sum, count, mean })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stats_per_category() {
        let expenses = vec![
            Expense::new("asado", "A", "Meat", dec!(100), ""),
            Expense::new("asado", "B", "Meat", dec!(50), ""),
            Expense::new("asado", "A", "Drinks", dec!(30), ""),
        ];

        let stats = SummaryAggregator::category_stats(&expenses);

        assert_eq!(
            stats["Meat"],
            CategoryStats {
                sum: dec!(150),
                count: 2,
                mean: dec!(75),
            }
        );
        assert_eq!(
            stats["Drinks"],
            CategoryStats {
                sum: dec!(30),
                count: 1,
                mean: dec!(30),
            }
        );
    }

    #[test]
    fn empty_input_gives_empty_mapping() {
        assert!(SummaryAggregator::category_stats(&[]).is_empty());
    }
}
