//! Toast notices for finished prediction requests.

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::Reducible;
use yew::prelude::*;

use crate::settings;
use crate::state::{format_days, DashboardAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    fn alert_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Error => "alert-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeLevel::Success => "fas fa-check-circle",
            NoticeLevel::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Notice for a resolved request; `None` for every other action.
    pub fn from_outcome(action: &DashboardAction) -> Option<Self> {
        match action {
            DashboardAction::PredictionFulfilled(days) => Some(Self {
                level: NoticeLevel::Success,
                message: format!("Maintenance due in {}", format_days(*days)),
            }),
            DashboardAction::PredictionFailed(error) => Some(Self {
                level: NoticeLevel::Error,
                message: format!("Prediction failed: {}", error),
            }),
            _ => None,
        }
    }
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeBoard {
    pub shown: Vec<(usize, Notice)>,
}

pub enum NoticeAction {
    Show(usize, Notice),
    Dismiss(usize),
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut shown = self.shown.clone();
        match action {
            NoticeAction::Show(id, notice) => shown.push((id, notice)),
            NoticeAction::Dismiss(id) => shown.retain(|(shown_id, _)| *shown_id != id),
        }
        Rc::new(Self { shown })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    notify: Callback<Notice>,
}

impl ToastContext {
    pub fn notify_outcome(&self, action: &DashboardAction) {
        if let Some(notice) = Notice::from_outcome(action) {
            self.notify.emit(notice);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let board = use_reducer(NoticeBoard::default);
    let next_id = use_mut_ref(|| 0usize);

    // Dismissal goes through the reducer, so a timer never acts on a stale list
    let context = {
        let dispatcher = board.dispatcher();
        use_memo((), move |_| ToastContext {
            notify: Callback::from(move |notice: Notice| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                log::trace!("Showing notice {}: {}", id, notice.message);
                dispatcher.dispatch(NoticeAction::Show(id, notice));

                let dispatcher = dispatcher.clone();
                Timeout::new(settings::get_settings().toast_duration_ms, move || {
                    dispatcher.dispatch(NoticeAction::Dismiss(id));
                })
                .forget();
            }),
        })
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                { for board.shown.iter().map(|(id, notice)| {
                    let id = *id;
                    let on_close = {
                        let dispatcher = board.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(NoticeAction::Dismiss(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", notice.level.alert_class(), "shadow-lg")}>
                            <i class={notice.level.icon()}></i>
                            <span>{ &notice.message }</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_become_notices() {
        let ok = Notice::from_outcome(&DashboardAction::PredictionFulfilled(42.0)).unwrap();
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.message, "Maintenance due in 42 days");

        let failed =
            Notice::from_outcome(&DashboardAction::PredictionFailed("HTTP error: 500".to_string()))
                .unwrap();
        assert_eq!(failed.level, NoticeLevel::Error);
        assert_eq!(failed.message, "Prediction failed: HTTP error: 500");
    }

    #[test]
    fn test_other_actions_have_no_notice() {
        assert_eq!(Notice::from_outcome(&DashboardAction::PredictionRequested), None);
        assert_eq!(
            Notice::from_outcome(&DashboardAction::SetWeather("Rainy".to_string())),
            None
        );
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let notice = |message: &str| Notice {
            level: NoticeLevel::Error,
            message: message.to_string(),
        };
        let board = Rc::new(NoticeBoard::default())
            .reduce(NoticeAction::Show(1, notice("first")))
            .reduce(NoticeAction::Show(2, notice("second")))
            .reduce(NoticeAction::Dismiss(1));

        assert_eq!(board.shown, vec![(2, notice("second"))]);

        let board = board.reduce(NoticeAction::Dismiss(7));
        assert_eq!(board.shown.len(), 1);
    }
}
