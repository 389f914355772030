use std::rc::Rc;

use shared::views::NotificationLevel;
use shared::{DashboardController, Section, ViewAction, ViewState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::UseNotificationsActions;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

/// Yew wrapper so the shared `ViewState` can live in a reducer
#[derive(Clone, PartialEq)]
pub struct DashboardStore(pub ViewState);

impl Reducible for DashboardStore {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

pub struct UseDashboardResult {
    pub state: Rc<DashboardStore>,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub dispatcher: UseReducerDispatcher<DashboardStore>,
    pub switch_section: Callback<Section>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

#[hook]
pub fn use_dashboard(
    controller: Rc<DashboardController<ApiClient>>,
    notifications: UseNotificationsActions,
) -> UseDashboardResult {
    let store = use_reducer(|| DashboardStore(ViewState::new(today())));
    let dispatcher = store.dispatcher();

    // Initial load, announced with a toast either way
    {
        let controller = controller.clone();
        let dispatcher = dispatcher.clone();
        let notifications = notifications.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match controller.load(today()).await {
                    Ok(data) => {
                        dispatcher.dispatch(data.into_action());
                        notifications
                            .toast
                            .emit((NotificationLevel::Success, "Application loaded".to_string()));
                    }
                    Err(e) => {
                        log::error!("Initial load failed: {}", e);
                        notifications.toast.emit((NotificationLevel::Error, "Failed to load data".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let switch_section = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |section: Section, _| {
            dispatcher.dispatch(ViewAction::SwitchSection(section));
        })
    };

    let prev_month = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |_: MouseEvent, _| {
            dispatcher.dispatch(ViewAction::PreviousMonth);
        })
    };

    let next_month = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |_: MouseEvent, _| {
            dispatcher.dispatch(ViewAction::NextMonth);
        })
    };

    let actions = UseDashboardActions {
        dispatcher,
        switch_section,
        prev_month,
        next_month,
    };

    UseDashboardResult {
        state: Rc::new((*store).clone()),
        actions,
    }
}
