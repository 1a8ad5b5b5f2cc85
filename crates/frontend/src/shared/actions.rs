//! Capability set behind every page button.
//!
//! Pages never mutate catalogs themselves. They call a [`HotelActions`]
//! implementation taken from context and show the outcome as a notice.

use crate::shared::components::notice::{Notice, NoticeSlot};
use contracts::data::catalogs;
use contracts::system::actions::{
    validate_request, ActionError, ActionRequest, ActionResult, HotelActions,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Validates and logs requests. Nothing is persisted.
pub struct LoggingActions;

impl HotelActions for LoggingActions {
    fn perform(&self, request: ActionRequest) -> ActionResult {
        let result = validate_request(&request, catalogs());
        match &result {
            Ok(()) => log::info!("action: {}", request),
            Err(err) => log::warn!("action rejected: {} ({})", request, err),
        }
        result
    }
}

#[derive(Clone, Copy)]
pub struct ActionsContext {
    inner: StoredValue<Arc<dyn HotelActions>>,
}

impl ActionsContext {
    pub fn new(actions: Arc<dyn HotelActions>) -> Self {
        Self {
            inner: StoredValue::new(actions),
        }
    }

    pub fn logging() -> Self {
        Self::new(Arc::new(LoggingActions))
    }

    /// Runs one operation and reports its outcome in `notice`.
    /// Returns true when the request was accepted.
    pub fn run(
        &self,
        notice: NoticeSlot,
        label: &str,
        op: impl FnOnce(&dyn HotelActions) -> ActionResult,
    ) -> bool {
        let result = match self.inner.try_get_value() {
            Some(actions) => op(actions.as_ref()),
            None => Err(ActionError::Backend("actions are no longer available".to_string())),
        };
        notice.show(Notice::from_result(label, &result));
        result.is_ok()
    }
}

pub fn use_actions() -> ActionsContext {
    use_context::<ActionsContext>().expect("ActionsContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_actions_validate_against_catalogs() {
        let actions = LoggingActions;
        assert_eq!(actions.check_in("res-001"), Ok(()));
        assert!(matches!(
            actions.check_in("res-002"),
            Err(ActionError::NotAllowed { .. })
        ));
        assert!(matches!(
            actions.restock("Caviar"),
            Err(ActionError::NotFound { .. })
        ));
    }
}
