//! Transient outcome banner for page actions.

use crate::shared::icons::icon;
use contracts::system::actions::ActionResult;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn from_result(label: &str, result: &ActionResult) -> Self {
        match result {
            Ok(()) => Notice {
                kind: NoticeKind::Success,
                text: format!("{label}: request sent"),
            },
            Err(err) => Notice {
                kind: NoticeKind::Error,
                text: format!("{label}: {err}"),
            },
        }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Page-local holder of the current notice.
#[derive(Clone, Copy)]
pub struct NoticeSlot {
    current: RwSignal<Option<Notice>>,
    shown: RwSignal<u64>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            shown: RwSignal::new(0),
        }
    }

    /// Shows `notice` and clears it after a delay unless a newer one replaced it.
    pub fn show(&self, notice: Notice) {
        let slot = *self;
        let generation = slot.shown.get_untracked() + 1;
        slot.shown.set(generation);
        slot.current.set(Some(notice));

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if slot.shown.try_get_untracked() == Some(generation) {
                slot.current.try_set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeBanner(notice: NoticeSlot) -> impl IntoView {
    move || {
        notice.current.get().map(|current| {
            let icon_name = match current.kind {
                NoticeKind::Success => "check-circle",
                NoticeKind::Error => "alert-triangle",
            };
            view! {
                <div class=current.class() role="status">
                    {icon(icon_name)}
                    <span class="notice__text">{current.text.clone()}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| notice.dismiss()>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::actions::ActionError;

    #[test]
    fn test_notice_from_ok() {
        let notice = Notice::from_result("Restock Rice", &Ok(()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Restock Rice: request sent");
    }

    #[test]
    fn test_notice_from_error_carries_reason() {
        let result = Err(ActionError::NotAllowed {
            action: "check_in",
            reason: "reservation res-002 is not confirmed".to_string(),
        });
        let notice = Notice::from_result("Check in res-002", &result);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.text,
            "Check in res-002: cannot check_in: reservation res-002 is not confirmed"
        );
    }
}
