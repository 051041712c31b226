//! Event/action/render loop
//!
//! One task owns the store. Terminal events are mapped to actions, actions
//! run through the reducer, and the effects it returns are spawned as
//! keyed gateway tasks whose result actions come back on the same channel.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use marquee_api::MovieGateway;
use marquee_core::{Action, AppState, EventKind, Middleware, NoopMiddleware, Store};

use crate::effects::handle_effect;
use crate::poller::{process_raw_event, spawn_event_poller, RawEvent};
use crate::tasks::TaskManager;

/// Spinner frame interval
pub const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventOutcome {
    pub actions: Vec<Action>,
    /// Whether to force a re-render.
    pub needs_render: bool,
}

impl EventOutcome {
    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    /// Collect `Component::handle_event` results
    pub fn from_actions(iter: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }
}

impl From<Action> for EventOutcome {
    fn from(action: Action) -> Self {
        Self::from_actions([action])
    }
}

pub struct Runtime<M: Middleware = NoopMiddleware> {
    store: Store<M>,
    gateway: Arc<dyn MovieGateway>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    should_render: bool,
}

impl<M: Middleware> Runtime<M> {
    pub fn new(store: Store<M>, gateway: Arc<dyn MovieGateway>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        Self {
            store,
            gateway,
            action_tx,
            action_rx,
            tasks,
            should_render: true,
        }
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Dispatch one action and spawn its effects.
    ///
    /// Returns `false` when the action asks the loop to stop.
    pub fn process_action(&mut self, action: Action) -> bool {
        if matches!(action, Action::Quit) {
            return false;
        }
        let result = self.store.dispatch(action);
        for effect in result.effects {
            handle_effect(effect, &mut self.tasks, &self.gateway);
        }
        if result.changed {
            self.should_render = true;
        }
        true
    }

    /// Run the event/action loop until quit.
    pub async fn run<B, FRender, FEvent>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> EventOutcome,
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(event_tx, cancel_token.clone());

        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };
                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if !self.process_action(action) {
                        break;
                    }
                }

                _ = ticker.tick() => {
                    self.process_action(Action::Tick);
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use marquee_api::GatewayError;
    use marquee_core::{Category, Movie, Route};

    struct FakeGateway;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            genres: vec![Category {
                id: 18,
                name: "Drama".into(),
            }],
            ..Default::default()
        }
    }

    #[async_trait]
    impl MovieGateway for FakeGateway {
        async fn trending_movies(&self) -> Result<Vec<Movie>, GatewayError> {
            Ok(vec![movie(1), movie(2)])
        }
        async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
            Ok(vec![Category {
                id: 28,
                name: "Action".into(),
            }])
        }
        async fn movies_by_category(&self, _: u64) -> Result<Vec<Movie>, GatewayError> {
            Ok(vec![movie(3)])
        }
        async fn search_movies(&self, _: &str) -> Result<Vec<Movie>, GatewayError> {
            Ok(vec![movie(4)])
        }
        async fn movie(&self, id: u64) -> Result<Movie, GatewayError> {
            Ok(movie(id))
        }
        async fn recommendations(&self, id: u64) -> Result<Vec<Movie>, GatewayError> {
            Ok(vec![movie(id + 1)])
        }
    }

    fn runtime() -> Runtime {
        Runtime::new(Store::new(AppState::default()), Arc::new(FakeGateway))
    }

    /// Feed result actions back until nothing is pending
    async fn settle(runtime: &mut Runtime) {
        while runtime.state().is_loading() {
            let action = tokio::time::timeout(Duration::from_millis(500), runtime.action_rx.recv())
                .await
                .expect("timeout")
                .expect("channel closed");
            runtime.process_action(action);
        }
    }

    #[test]
    fn test_event_outcome_conversions() {
        let outcome = EventOutcome::from(Action::Quit);
        assert_eq!(outcome.actions, vec![Action::Quit]);
        assert!(!outcome.needs_render);
        assert!(EventOutcome::needs_render().actions.is_empty());
    }

    #[tokio::test]
    async fn test_quit_stops() {
        let mut runtime = runtime();
        assert!(!runtime.process_action(Action::Quit));
        assert!(runtime.process_action(Action::Tick));
    }

    #[tokio::test]
    async fn test_home_fills_previews() {
        let mut runtime = runtime();
        runtime.process_action(Action::RouteFragmentChanged(String::new()));
        settle(&mut runtime).await;

        let state = runtime.state();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.containers.trending_preview.len(), 2);
        assert_eq!(state.containers.categories_preview.len(), 1);
        assert!(state.containers.generic_list.is_empty());
    }

    #[tokio::test]
    async fn test_movie_route_chains_recommendations() {
        let mut runtime = runtime();
        runtime.process_action(Action::RouteFragmentChanged("#movie=550".into()));
        settle(&mut runtime).await;

        let state = runtime.state();
        assert_eq!(
            state.containers.movie_detail.as_ref().map(|m| m.id),
            Some(550)
        );
        assert_eq!(state.containers.detail_categories[0].name, "Drama");
        assert_eq!(state.containers.related_movies[0].id, 551);
    }

    #[tokio::test]
    async fn test_quick_navigation_keeps_latest_route() {
        let mut runtime = runtime();
        runtime.process_action(Action::NavigateTo("#trends".into()));
        runtime.process_action(Action::NavigateTo("#search=Alien".into()));
        settle(&mut runtime).await;

        let state = runtime.state();
        assert_eq!(
            state.route,
            Route::Search {
                query: "Alien".into()
            }
        );
        assert_eq!(state.containers.generic_list[0].id, 4);
    }
}
