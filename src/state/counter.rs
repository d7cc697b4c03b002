//! Counter slice

/// Counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
}

impl CounterState {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Apply an action in place. Returns true if the value changed.
    pub fn reduce(&mut self, action: &CounterAction) -> bool {
        let next = match action {
            CounterAction::Increment => self.value.saturating_add(1),
            CounterAction::Decrement => self.value.saturating_sub(1),
            CounterAction::IncrementByAmount(amount) => self.value.saturating_add(*amount),
            CounterAction::Reset => 0,
        };
        let changed = next != self.value;
        self.value = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(CounterState::default().value(), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut state = CounterState::default();
        assert!(state.reduce(&CounterAction::Increment));
        assert!(state.reduce(&CounterAction::Increment));
        assert!(state.reduce(&CounterAction::Decrement));
        assert_eq!(state.value(), 1);
    }

    #[test]
    fn test_decrement_below_zero() {
        let mut state = CounterState::default();
        state.reduce(&CounterAction::Decrement);
        assert_eq!(state.value(), -1);
    }

    #[test]
    fn test_increment_by_amount() {
        let mut state = CounterState::default();
        state.reduce(&CounterAction::IncrementByAmount(5));
        state.reduce(&CounterAction::IncrementByAmount(-2));
        assert_eq!(state.value(), 3);
    }

    #[test]
    fn test_increment_by_zero_is_not_a_change() {
        let mut state = CounterState::default();
        assert!(!state.reduce(&CounterAction::IncrementByAmount(0)));
    }

    #[test]
    fn test_reset() {
        let mut state = CounterState::default();
        state.reduce(&CounterAction::IncrementByAmount(42));
        assert!(state.reduce(&CounterAction::Reset));
        assert_eq!(state.value(), 0);
        assert!(!state.reduce(&CounterAction::Reset));
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut state = CounterState::default();
        state.reduce(&CounterAction::IncrementByAmount(i64::MAX));
        assert!(!state.reduce(&CounterAction::Increment));
        assert_eq!(state.value(), i64::MAX);

        state.reduce(&CounterAction::Reset);
        state.reduce(&CounterAction::IncrementByAmount(i64::MIN));
        state.reduce(&CounterAction::Decrement);
        assert_eq!(state.value(), i64::MIN);
    }
}
