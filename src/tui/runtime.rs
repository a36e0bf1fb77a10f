use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Runtime - owns the state and drives actions through the reducer
///
/// The Runtime is responsible for:
/// - Holding the application state
/// - Dispatching actions through the reducer
/// - Executing side effects on a background task
pub struct Runtime {
    state: AppState,

    /// Actions produced by completed effects
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called inside a tokio runtime; the effect executor is spawned here.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Turn fetch variants into futures and queue everything async
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchFeed => {
                debug!("EFFECT: fetching feed from {}", self.data_effects.describe());
                let fetch_effect = self.data_effects.fetch_feed();
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Async(_) => {
                trace!("EFFECT: queueing for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            Effect::FetchFeed => {
                tracing::warn!("EFFECT: FetchFeed reached the executor unresolved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::StaticFeed;
    use crate::tui::action::RosterAction;
    use crate::tui::state::RosterState;
    use crate::tui::testing::{create_loaded_state, wait_for_actions};

    fn sample_effects() -> Arc<DataEffects> {
        Arc::new(DataEffects::new(Arc::new(StaticFeed::sample())))
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let runtime = Runtime::new(AppState::default(), sample_effects());

        assert!(matches!(runtime.state().roster, RosterState::Loading));
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let mut runtime = Runtime::new(create_loaded_state(), sample_effects());

        runtime.dispatch(Action::MoveSelection(2));

        assert_eq!(runtime.state().ui.selected_index, 2);
    }

    #[tokio::test]
    async fn test_action_queue() {
        let mut runtime = Runtime::new(create_loaded_state(), sample_effects());

        let effect = Effect::Async(Box::pin(async {
            Action::Roster(RosterAction::SetMinGames(70))
        }));
        runtime.effect_tx.send(effect).unwrap();

        let count = wait_for_actions(&mut runtime, 1).await;

        assert_eq!(count, 1);
        assert_eq!(runtime.state().engine().unwrap().filters().min_games, 70);
    }

    #[tokio::test]
    async fn test_effect_execution() {
        use std::sync::Mutex;

        let mut runtime = Runtime::new(create_loaded_state(), sample_effects());

        let executed = Arc::new(Mutex::new(false));
        let executed_clone = executed.clone();
        let effect = Effect::Async(Box::pin(async move {
            *executed_clone.lock().unwrap() = true;
            Action::SelectLast
        }));

        runtime.effect_tx.send(effect).unwrap();
        let count = wait_for_actions(&mut runtime, 1).await;

        assert_eq!(count, 1);
        assert!(*executed.lock().unwrap());
        assert_eq!(runtime.state().ui.selected_index, 7);
    }

    #[tokio::test]
    async fn test_load_feed_resolves_through_data_effects() {
        let mut runtime = Runtime::new(AppState::default(), sample_effects());

        runtime.dispatch(Action::LoadFeed);
        assert!(matches!(runtime.state().roster, RosterState::Loading));

        let count = wait_for_actions(&mut runtime, 1).await;

        assert_eq!(count, 1);
        assert_eq!(runtime.state().engine().unwrap().snapshot().len(), 8);
    }

    #[tokio::test]
    async fn test_none_effect_queues_nothing() {
        let mut runtime = Runtime::new(create_loaded_state(), sample_effects());

        runtime.execute_effect(Effect::None);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert_eq!(runtime.process_actions(), 0);
    }
}
