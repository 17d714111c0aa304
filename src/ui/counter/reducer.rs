//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState::new(state.value.saturating_add(1)),
            CounterIntent::Decrement => CounterState::new(state.value.saturating_sub(1)),
            CounterIntent::Unrecognized(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(CounterState::default().value, 0);
    }

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState::new(41), CounterIntent::Increment);
        assert_eq!(state.value, 42);
    }

    #[test]
    fn decrement_goes_below_zero() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
        assert_eq!(state.value, -1);
    }

    #[test]
    fn unrecognized_is_identity() {
        let state = CounterState::new(7);
        let new = CounterReducer::reduce(state, CounterIntent::Unrecognized("reset".into()));
        assert_eq!(new, state);
    }

    #[test]
    fn bounds_saturate() {
        let top = CounterReducer::reduce(CounterState::new(i64::MAX), CounterIntent::Increment);
        assert_eq!(top.value, i64::MAX);
        let bottom = CounterReducer::reduce(CounterState::new(i64::MIN), CounterIntent::Decrement);
        assert_eq!(bottom.value, i64::MIN);
    }
}
