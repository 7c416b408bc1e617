//! Goal service
//!
//! Creates savings goals and moves money from the balance into them.
//!
//! Funding a goal is modelled as an expense against the general balance
//! rather than a separate pool, so `balance == sum of signed transactions`
//! holds everywhere. Each transfer is capped twice: by what the balance can
//! cover, then by what the goal still needs.

use std::cmp::min;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Goal, LedgerState, Money, Transaction, GOAL_FUNDING_CATEGORY};

use super::balance::compute_balance;
use super::transaction::parse_amount;

/// Result of funding a goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Amount actually moved into the goal
    pub applied: Money,
    /// The expense recorded against the balance
    pub transaction: Transaction,
}

/// Service for goal management
pub struct GoalService<'a> {
    state: &'a mut LedgerState,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(state: &'a mut LedgerState) -> Self {
        Self { state }
    }

    /// Create a goal
    ///
    /// A missing or blank `target` makes an open-ended goal. Names are not
    /// required to be unique.
    pub fn create(&mut self, name: &str, target: Option<&str>) -> LedgerResult<Goal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::MissingField("name"));
        }

        let target = match target.map(str::trim) {
            Some(text) if !text.is_empty() => Some(parse_amount(text)?),
            _ => None,
        };

        let goal = Goal::new(name, target);
        self.state.goals.push(goal.clone());

        info!(goal = %goal.name, "created goal");
        Ok(goal)
    }

    /// Move up to `requested` from the balance into the goal named `goal_name`
    ///
    /// On success the goal's `current` grows by the applied amount and a
    /// matching expense tagged with the goal name is appended. On failure the
    /// ledger is left unchanged.
    pub fn fund(&mut self, goal_name: &str, requested: Money) -> LedgerResult<Allocation> {
        let index = self
            .state
            .goals
            .iter()
            .position(|g| g.name == goal_name)
            .ok_or_else(|| LedgerError::GoalNotFound(goal_name.to_string()))?;

        let goal = &self.state.goals[index];
        if goal.is_reached() {
            return Err(LedgerError::GoalAlreadyReached(goal.name.clone()));
        }

        let balance = compute_balance(&self.state.transactions);

        let cap_by_balance = min(requested, balance);
        if cap_by_balance <= Money::zero() {
            return Err(LedgerError::InsufficientBalance {
                requested,
                available: balance,
            });
        }

        let applied = match goal.remaining() {
            Some(remaining) => min(cap_by_balance, remaining),
            None => cap_by_balance,
        };
        if applied <= Money::zero() {
            return Err(LedgerError::GoalAlreadyReached(goal.name.clone()));
        }

        let goal = &mut self.state.goals[index];
        goal.current += applied;

        let transaction =
            Transaction::expense(applied, GOAL_FUNDING_CATEGORY).with_goal(goal.name.clone());
        self.state.transactions.push(transaction.clone());

        info!(
            goal = %goal.name,
            requested = %requested,
            applied = %applied,
            "funded goal"
        );

        Ok(Allocation {
            applied,
            transaction,
        })
    }

    pub fn list(&self) -> &[Goal] {
        &self.state.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn state_with_balance(cents: i64, goals: Vec<Goal>) -> LedgerState {
        LedgerState::with_data(
            vec![Transaction::income(Money::from_cents(cents), "Salário")],
            goals,
        )
    }

    #[test]
    fn test_create_goal() {
        let mut state = LedgerState::new();
        let goal = GoalService::new(&mut state)
            .create(" Viagem ", Some("500"))
            .unwrap();

        assert_eq!(goal.name, "Viagem");
        assert_eq!(goal.target, Some(Money::from_cents(50000)));
        assert_eq!(goal.current, Money::zero());
        assert_eq!(state.goals.len(), 1);
    }

    #[test]
    fn test_create_open_ended_goal() {
        let mut state = LedgerState::new();
        let mut service = GoalService::new(&mut state);

        assert_eq!(service.create("Jar", None).unwrap().target, None);
        assert_eq!(service.create("Jar 2", Some("  ")).unwrap().target, None);
    }

    #[test]
    fn test_create_goal_validation() {
        let mut state = LedgerState::new();
        let mut service = GoalService::new(&mut state);

        assert!(matches!(
            service.create("  ", Some("100")),
            Err(LedgerError::MissingField("name"))
        ));
        assert!(matches!(
            service.create("Carro", Some("muito")),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_fund_capped_by_goal_remaining() {
        let mut state = LedgerState::with_data(
            vec![
                Transaction::income(Money::from_cents(100000), "Salário"),
                Transaction::expense(Money::from_cents(30000), "Aluguel"),
            ],
            vec![Goal::new("Viagem", Some(Money::from_cents(50000)))],
        );

        let allocation = GoalService::new(&mut state)
            .fund("Viagem", Money::from_cents(60000))
            .unwrap();

        assert_eq!(allocation.applied.cents(), 50000);
        assert_eq!(allocation.transaction.kind, TransactionKind::Expense);
        assert_eq!(allocation.transaction.category, GOAL_FUNDING_CATEGORY);
        assert_eq!(allocation.transaction.goal_name, "Viagem");

        let goal = state.find_goal("Viagem").unwrap();
        assert_eq!(goal.current.cents(), 50000);
        assert!(goal.is_reached());
        assert_eq!(state.transactions.len(), 3);
        assert_eq!(state.transactions.last(), Some(&allocation.transaction));
        assert_eq!(state.balance().cents(), 20000);
    }

    #[test]
    fn test_fund_reached_goal_fails_without_changes() {
        let viagem = Goal::new("Viagem", Some(Money::from_cents(50000)));
        let mut state = state_with_balance(70000, vec![viagem]);
        GoalService::new(&mut state)
            .fund("Viagem", Money::from_cents(60000))
            .unwrap();
        let before = state.clone();

        let err = GoalService::new(&mut state)
            .fund("Viagem", Money::from_cents(5000))
            .unwrap_err();

        assert!(matches!(err, LedgerError::GoalAlreadyReached(ref name) if name == "Viagem"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_fund_jar_capped_by_balance() {
        let mut state = state_with_balance(5000, vec![Goal::jar("Jar")]);

        let allocation = GoalService::new(&mut state)
            .fund("Jar", Money::from_cents(10000))
            .unwrap();

        assert_eq!(allocation.applied.cents(), 5000);
        assert_eq!(state.find_goal("Jar").unwrap().current.cents(), 5000);
        assert_eq!(state.balance(), Money::zero());
    }

    #[test]
    fn test_fund_unknown_goal() {
        let mut state = state_with_balance(5000, Vec::new());
        let err = GoalService::new(&mut state)
            .fund("Casa", Money::from_cents(100))
            .unwrap_err();
        assert!(matches!(err, LedgerError::GoalNotFound(ref name) if name == "Casa"));
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_fund_with_non_positive_request() {
        let mut state = state_with_balance(5000, vec![Goal::jar("Jar")]);
        let before = state.clone();

        for requested in [0, -100] {
            let err = GoalService::new(&mut state)
                .fund("Jar", Money::from_cents(requested))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_fund_with_empty_or_negative_balance() {
        let mut empty = LedgerState::with_data(Vec::new(), vec![Goal::jar("Jar")]);
        let err = GoalService::new(&mut empty)
            .fund("Jar", Money::from_cents(100))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientBalance { available, .. } if available == Money::zero()
        ));

        let mut overdrawn = LedgerState::with_data(
            vec![Transaction::expense(Money::from_cents(300), "Compras")],
            vec![Goal::jar("Jar")],
        );
        let before = overdrawn.clone();
        assert!(GoalService::new(&mut overdrawn)
            .fund("Jar", Money::from_cents(100))
            .is_err());
        assert_eq!(overdrawn, before);
    }

    #[test]
    fn test_fund_zero_target_goal_is_reached() {
        let mut state = state_with_balance(5000, vec![Goal::new("Nada", Some(Money::zero()))]);
        let err = GoalService::new(&mut state)
            .fund("Nada", Money::from_cents(100))
            .unwrap_err();
        assert!(matches!(err, LedgerError::GoalAlreadyReached(_)));
    }

    #[test]
    fn test_applied_amount_never_exceeds_any_cap() {
        let cases = [
            (10000, 2500, Some(4000), 0),
            (10000, 20000, Some(4000), 1000),
            (3000, 20000, None, 0),
            (10000, 700, Some(800), 799),
        ];

        for (balance, requested, target, already) in cases {
            let mut goal = Goal::new("G", target.map(Money::from_cents));
            goal.current = Money::from_cents(already);
            let remaining_before = goal.remaining();
            let mut state = state_with_balance(balance, vec![goal]);
            let balance_before = state.balance();

            let allocation = GoalService::new(&mut state)
                .fund("G", Money::from_cents(requested))
                .unwrap();

            let mut cap = min(Money::from_cents(requested), balance_before);
            if let Some(remaining) = remaining_before {
                cap = min(cap, remaining);
            }
            assert!(allocation.applied <= cap);
            assert_eq!(balance_before - state.balance(), allocation.applied);
            assert_eq!(
                state.find_goal("G").unwrap().current,
                Money::from_cents(already) + allocation.applied
            );
        }
    }

    #[test]
    fn test_fund_first_goal_with_duplicate_name() {
        let mut state = state_with_balance(5000, vec![Goal::jar("Dup"), Goal::jar("Dup")]);
        GoalService::new(&mut state)
            .fund("Dup", Money::from_cents(1000))
            .unwrap();
        assert_eq!(state.goals[0].current.cents(), 1000);
        assert_eq!(state.goals[1].current, Money::zero());
    }
}
