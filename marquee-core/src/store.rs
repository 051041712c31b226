//! Effect store with middleware
//!
//! The store owns [`AppState`] and is the only place the reducer runs.
//! Middleware observes every dispatch before and after the reducer.

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::reducer::reducer;
use crate::state::AppState;

/// Middleware trait for intercepting actions
pub trait Middleware {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &Action);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &Action, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl Middleware for NoopMiddleware {
    fn before(&mut self, _action: &Action) {}
    fn after(&mut self, _action: &Action, _state_changed: bool) {}
}

/// Middleware that logs processed actions through `tracing`
///
/// Ticks are skipped; they fire several times a second.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn before(&mut self, _action: &Action) {}

    fn after(&mut self, action: &Action, state_changed: bool) {
        if matches!(action, Action::Tick) {
            return;
        }
        tracing::debug!(
            action = %action.summary(),
            category = action.category().unwrap_or("-"),
            state_changed,
            "Action processed"
        );
    }
}

/// Centralized state container
pub struct Store<M: Middleware = NoopMiddleware> {
    state: AppState,
    middleware: M,
}

impl Store<NoopMiddleware> {
    pub fn new(state: AppState) -> Self {
        Self::with_middleware(state, NoopMiddleware)
    }
}

impl<M: Middleware> Store<M> {
    pub fn with_middleware(state: AppState, middleware: M) -> Self {
        Self { state, middleware }
    }

    #[inline]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Use sparingly - prefer dispatching actions for state changes.
    #[inline]
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Dispatch an action through middleware and reducer
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.middleware.before(&action);
        let result = reducer(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl Middleware for CountingMiddleware {
        fn before(&mut self, _action: &Action) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &Action, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(AppState::default());
        let result = store.dispatch(Action::RouteFragmentChanged("#trends".into()));

        assert!(result.changed);
        assert_eq!(result.effects.len(), 1);
        assert_eq!(store.state().route, Route::Trends);
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store =
            Store::with_middleware(AppState::default(), CountingMiddleware::default());

        store.dispatch(Action::RouteFragmentChanged("".into()));
        store.dispatch(Action::Quit);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
    }

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut store = Store::with_middleware(AppState::default(), LoggingMiddleware::new());
        store.dispatch(Action::Tick);
        let result = store.dispatch(Action::RouteFragmentChanged("#trends".into()));
        assert!(result.changed);
        assert_eq!(store.state().route, Route::Trends);
    }

    #[test]
    fn test_state_mut() {
        let mut store = Store::new(AppState::default());
        store.state_mut().search_input = "Alien".into();
        assert_eq!(store.state().search_input, "Alien");
    }
}
