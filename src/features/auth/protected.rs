//! Single-retry wrapper for write operations the API rejects pending email
//! verification. A denied action is parked while the user completes the
//! verification step, then replayed exactly once. At most one action is
//! parked at a time; a second denial overwrites the first, matching the
//! single verification prompt the UI shows.

use std::future::Future;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::app_lib::AppError;

/// Outcome of a protected call. `Paused` is not a success: the action was
/// parked behind the verification prompt and will be replayed later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtectedOutcome<T> {
    Completed(T),
    Paused,
}

type PendingAction = Box<dyn Fn() -> LocalBoxFuture<'static, Result<(), AppError>>>;

/// Context shared through Leptos that parks and replays denied actions.
/// Copyable so event handlers and view closures can capture it freely; the
/// parked action itself is pinned to the browser thread.
#[derive(Clone, Copy)]
pub struct ProtectedActions {
    /// True while the verification prompt should be shown.
    pub verification_required: RwSignal<bool>,
    pending: StoredValue<Option<PendingAction>, LocalStorage>,
}

impl Default for ProtectedActions {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectedActions {
    pub fn new() -> Self {
        Self {
            verification_required: RwSignal::new(false),
            pending: StoredValue::new_local(None),
        }
    }

    /// Runs `action`, intercepting an authorization-denied rejection by
    /// parking the action and opening the verification prompt. Any other
    /// rejection propagates unchanged.
    pub async fn execute<T, F, Fut>(&self, action: F) -> Result<ProtectedOutcome<T>, AppError>
    where
        T: 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        match action().await {
            Ok(value) => Ok(ProtectedOutcome::Completed(value)),
            Err(err) if err.is_authorization_denied() => {
                let replay: PendingAction =
                    Box::new(move || action().map(|result| result.map(|_| ())).boxed_local());
                self.pending.set_value(Some(replay));
                self.verification_required.set(true);
                Ok(ProtectedOutcome::Paused)
            }
            Err(err) => Err(err),
        }
    }

    /// Replays the parked action exactly once, discarding it whether the
    /// replay succeeds or fails. The original caller has already moved on,
    /// so replay errors are logged rather than re-thrown.
    pub async fn complete_verification(&self) {
        self.verification_required.set(false);
        let pending = self.pending.try_update_value(|slot| slot.take()).flatten();
        if let Some(action) = pending {
            if let Err(err) = action().await {
                log::error!("retrying action after verification failed: {err}");
            }
        }
    }

    /// Discards the parked action without replaying it.
    pub fn cancel_verification(&self) {
        self.verification_required.set(false);
        self.pending.set_value(None);
    }

    /// True while an action is parked awaiting verification.
    pub fn has_pending(&self) -> bool {
        self.pending.with_value(|slot| slot.is_some())
    }
}

/// Returns the shared protected-actions context or a fallback empty one.
pub fn use_protected_actions() -> ProtectedActions {
    use_context::<ProtectedActions>().unwrap_or_else(ProtectedActions::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn denied() -> AppError {
        AppError::Http {
            status: 403,
            message: "Email not verified.".to_string(),
        }
    }

    fn counting_action(
        counter: &Rc<Cell<usize>>,
        results: &Rc<RefCell<Vec<Result<u32, AppError>>>>,
    ) -> impl Fn() -> LocalBoxFuture<'static, Result<u32, AppError>> + 'static {
        let counter = Rc::clone(counter);
        let results = Rc::clone(results);
        move || {
            counter.set(counter.get() + 1);
            let result = results.borrow_mut().remove(0);
            async move { result }.boxed_local()
        }
    }

    #[test]
    fn resolved_action_returns_result_without_parking() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let results = Rc::new(RefCell::new(vec![Ok(41)]));

        let outcome = block_on(actions.execute(counting_action(&counter, &results)));

        assert_eq!(outcome, Ok(ProtectedOutcome::Completed(41)));
        assert_eq!(counter.get(), 1);
        assert!(!actions.has_pending());
        assert!(!actions.verification_required.get_untracked());
    }

    #[test]
    fn denied_action_is_parked_and_reported_as_paused() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let results = Rc::new(RefCell::new(vec![Err(denied()), Ok(41)]));

        let outcome = block_on(actions.execute(counting_action(&counter, &results)));

        assert_eq!(outcome, Ok(ProtectedOutcome::Paused));
        assert_eq!(counter.get(), 1);
        assert!(actions.has_pending());
        assert!(actions.verification_required.get_untracked());
    }

    #[test]
    fn other_rejections_propagate_unchanged() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let failure = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        let results = Rc::new(RefCell::new(vec![Err(failure.clone())]));

        let outcome = block_on(actions.execute(counting_action(&counter, &results)));

        assert_eq!(outcome, Err(failure));
        assert!(!actions.has_pending());
        assert!(!actions.verification_required.get_untracked());
    }

    #[test]
    fn complete_verification_replays_exactly_once() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let results = Rc::new(RefCell::new(vec![Err(denied()), Ok(41)]));

        block_on(actions.execute(counting_action(&counter, &results)));
        block_on(actions.complete_verification());

        assert_eq!(counter.get(), 2);
        assert!(!actions.has_pending());
        assert!(!actions.verification_required.get_untracked());

        // A second completion has nothing left to replay.
        block_on(actions.complete_verification());
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn replay_failures_are_swallowed() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let failure = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        let results = Rc::new(RefCell::new(vec![Err(denied()), Err(failure)]));

        block_on(actions.execute(counting_action(&counter, &results)));
        block_on(actions.complete_verification());

        assert_eq!(counter.get(), 2);
        assert!(!actions.has_pending());
    }

    #[test]
    fn cancel_discards_without_replay() {
        let actions = ProtectedActions::new();
        let counter = Rc::new(Cell::new(0));
        let results = Rc::new(RefCell::new(vec![Err(denied())]));

        block_on(actions.execute(counting_action(&counter, &results)));
        actions.cancel_verification();
        block_on(actions.complete_verification());

        assert_eq!(counter.get(), 1);
        assert!(!actions.has_pending());
        assert!(!actions.verification_required.get_untracked());
    }

    #[test]
    fn second_denial_overwrites_parked_action() {
        let actions = ProtectedActions::new();
        let first_counter = Rc::new(Cell::new(0));
        let first_results = Rc::new(RefCell::new(vec![Err(denied())]));
        let second_counter = Rc::new(Cell::new(0));
        let second_results = Rc::new(RefCell::new(vec![Err(denied()), Ok(7)]));

        block_on(actions.execute(counting_action(&first_counter, &first_results)));
        block_on(actions.execute(counting_action(&second_counter, &second_results)));
        block_on(actions.complete_verification());

        assert_eq!(first_counter.get(), 1);
        assert_eq!(second_counter.get(), 2);
    }
}
