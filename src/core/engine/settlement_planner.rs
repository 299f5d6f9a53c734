use crate::core::models::{Balance, SettlementPlan, Transfer};
use log::debug;
use rust_decimal::Decimal;

/// Balances within this distance of zero are considered settled (0.01).
pub const DEFAULT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Greedy debt settlement.
///
/// Debtors and creditors are ranked by amount, largest first, with ties
/// broken by participant name in ascending order. Each step pairs the largest
/// remaining debtor with the largest remaining creditor and moves the smaller
/// of the two amounts. Every step clears at least one party, so a plan never
/// holds more than `debtors + creditors - 1` transfers. It is not guaranteed
/// to be the global minimum, which is a subset-sum problem.
#[derive(Clone, Copy, Debug)]
pub struct SettlementPlanner {
    epsilon: Decimal,
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        SettlementPlanner {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl SettlementPlanner {
    pub fn new(epsilon: Decimal) -> Self {
        SettlementPlanner {
            epsilon: epsilon.abs(),
        }
    }

    pub fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    /// Builds the transfers that settle `balances`.
    ///
    /// Pairing stops once both the largest remaining debt and the largest
    /// remaining credit are within epsilon, so an input where everybody is
    /// at par yields an empty plan. A party within epsilon only takes part
    /// when the other side still holds more than epsilon, e.g. three people
    /// each owed 0.005 and one owing 0.015.
    /// Participant names in `balances` are expected to be unique.
    pub fn plan(&self, balances: &[Balance]) -> SettlementPlan {
        let mut debtors: Vec<(String, Decimal)> = balances
            .iter()
            .filter(|b| b.balance < Decimal::ZERO)
            .map(|b| (b.participant.clone(), -b.balance))
            .collect();
        let mut creditors: Vec<(String, Decimal)> = balances
            .iter()
            .filter(|b| b.balance > Decimal::ZERO)
            .map(|b| (b.participant.clone(), b.balance))
            .collect();

        debug!(
            "Planning settlement for {} debtors and {} creditors",
            debtors.len(),
            creditors.len()
        );

        rank(&mut debtors);
        rank(&mut creditors);

        let mut transfers = Vec::new();
        while !debtors.is_empty() && !creditors.is_empty() {
            if debtors[0].1 <= self.epsilon && creditors[0].1 <= self.epsilon {
                break;
            }
            let amount = debtors[0].1.min(creditors[0].1);

            transfers.push(Transfer {
                from: debtors[0].0.clone(),
                to: creditors[0].0.clone(),
                amount,
            });

            debtors[0].1 -= amount;
            creditors[0].1 -= amount;

            if debtors[0].1.is_zero() {
                debtors.remove(0);
            }
            if creditors[0].1.is_zero() {
                creditors.remove(0);
            }

            rank(&mut debtors);
            rank(&mut creditors);
        }

        debug!("Settlement plan has {} transfers", transfers.len());
        SettlementPlan { transfers }
    }
}

// Largest amount first; equal amounts by name.
fn rank(parties: &mut [(String, Decimal)]) {
    parties.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn balances(entries: &[(&str, Decimal)]) -> Vec<Balance> {
        entries
            .iter()
            .map(|(name, balance)| Balance {
                participant: name.to_string(),
                paid: Decimal::ZERO,
                balance: *balance,
            })
            .collect()
    }

    fn transfer(from: &str, to: &str, amount: Decimal) -> Transfer {
        Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[test]
    fn one_creditor_two_equal_debtors() {
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("A", dec!(200)),
            ("B", dec!(-100)),
            ("C", dec!(-100)),
        ]));

        assert_eq!(
            plan.transfers,
            vec![transfer("B", "A", dec!(100)), transfer("C", "A", dec!(100))]
        );
    }

    #[test]
    fn ties_break_by_name_not_input_order() {
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("Carla", dec!(-50)),
            ("Beto", dec!(-50)),
            ("Ana", dec!(100)),
        ]));

        assert_eq!(plan.transfers[0].from, "Beto");
        assert_eq!(plan.transfers[1].from, "Carla");
    }

    #[test]
    fn at_par_participant_is_left_out() {
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("A", dec!(0)),
            ("B", dec!(-100)),
            ("C", dec!(-100)),
            ("D", dec!(200)),
        ]));

        assert_eq!(
            plan.transfers,
            vec![transfer("B", "D", dec!(100)), transfer("C", "D", dec!(100))]
        );
        assert!(plan.iter().all(|t| t.from != "A" && t.to != "A"));
    }

    #[test]
    fn largest_debtor_pays_largest_creditor_first() {
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("A", dec!(-10)),
            ("B", dec!(-70)),
            ("C", dec!(30)),
            ("D", dec!(50)),
        ]));

        assert_eq!(
            plan.transfers,
            vec![
                transfer("B", "D", dec!(50)),
                transfer("B", "C", dec!(20)),
                transfer("A", "C", dec!(10)),
            ]
        );
    }

    #[test]
    fn remaining_amounts_are_reranked() {
        // Once B has paid D, A's 25 outranks B's remaining 10.
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("A", dec!(-25)),
            ("B", dec!(-60)),
            ("C", dec!(35)),
            ("D", dec!(50)),
        ]));

        assert_eq!(
            plan.transfers,
            vec![
                transfer("B", "D", dec!(50)),
                transfer("A", "C", dec!(25)),
                transfer("B", "C", dec!(10)),
            ]
        );
    }

    #[test]
    fn balances_within_epsilon_need_no_transfers() {
        let plan = SettlementPlanner::default().plan(&balances(&[
            ("A", dec!(0.01)),
            ("B", dec!(-0.005)),
            ("C", dec!(-0.005)),
        ]));
        assert!(plan.is_empty());
    }

    #[test]
    fn near_zero_creditors_collect_a_debt_beyond_epsilon() {
        let input = balances(&[
            ("A", dec!(0.005)),
            ("B", dec!(0.005)),
            ("C", dec!(0.005)),
            ("D", dec!(-0.015)),
        ]);
        let planner = SettlementPlanner::default();
        let plan = planner.plan(&input);

        assert_eq!(plan.transfers, vec![transfer("D", "A", dec!(0.005))]);
        for residual in plan.apply(&input) {
            assert!(residual.balance.abs() <= planner.epsilon(), "{:?}", residual);
        }
    }

    #[test]
    fn empty_balances_give_empty_plan() {
        assert!(SettlementPlanner::default().plan(&[]).is_empty());
    }

    #[test]
    fn plan_settles_every_balance() {
        let input = balances(&[
            ("A", dec!(-33.33)),
            ("B", dec!(66.67)),
            ("C", dec!(-33.34)),
        ]);
        let planner = SettlementPlanner::default();
        let plan = planner.plan(&input);

        for residual in plan.apply(&input) {
            assert!(residual.balance.abs() <= planner.epsilon(), "{:?}", residual);
        }
        assert!(plan.iter().all(|t| t.amount > Decimal::ZERO && t.from != t.to));
    }

    #[test]
    fn custom_epsilon_is_absolute() {
        let planner = SettlementPlanner::new(dec!(-1));
        assert_eq!(planner.epsilon(), dec!(1));
        assert!(planner.plan(&balances(&[("A", dec!(0.5)), ("B", dec!(-0.5))])).is_empty());
    }
}
