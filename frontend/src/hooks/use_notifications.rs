use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::views::{NoticeAction, NoticeBoard, Notification, NotificationLevel};
use shared::DashboardConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NoticeStore(pub NoticeBoard);

impl Reducible for NoticeStore {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

pub struct UseNotificationsResult {
    pub state: Rc<NoticeStore>,
    pub actions: UseNotificationsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseNotificationsActions {
    /// Transient toast in the corner
    pub toast: Callback<(NotificationLevel, String)>,
    /// Inline message above the admin forms
    pub admin_message: Callback<(NotificationLevel, String)>,
    pub dismiss: Callback<u32>,
}

fn notification(id: u32, level: NotificationLevel, message: String) -> Notification {
    match level {
        NotificationLevel::Success => Notification::success(id, message),
        NotificationLevel::Error => Notification::error(id, message),
    }
}

fn schedule_dismiss(dispatcher: UseReducerDispatcher<NoticeStore>, id: u32, timeout_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        dispatcher.dispatch(NoticeAction::Dismiss(id));
    });
}

#[hook]
pub fn use_notifications(config: &DashboardConfig) -> UseNotificationsResult {
    let store = use_reducer(NoticeStore::default);
    let next_id = use_mut_ref(|| 0u32);
    let dispatcher = store.dispatcher();

    let toast = {
        let dispatcher = dispatcher.clone();
        let next_id = next_id.clone();
        let timeout_ms = config.toast_timeout_ms;

        use_callback(timeout_ms, move |(level, message): (NotificationLevel, String), timeout_ms| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(NoticeAction::Toast(notification(id, level, message)));
            schedule_dismiss(dispatcher.clone(), id, *timeout_ms);
        })
    };

    let admin_message = {
        let dispatcher = dispatcher.clone();
        let next_id = next_id.clone();
        let timeout_ms = config.admin_message_timeout_ms;

        use_callback(timeout_ms, move |(level, message): (NotificationLevel, String), timeout_ms| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(NoticeAction::AdminMessage(notification(id, level, message)));
            schedule_dismiss(dispatcher.clone(), id, *timeout_ms);
        })
    };

    let dismiss = {
        let dispatcher = dispatcher.clone();
        use_callback((), move |id: u32, _| {
            dispatcher.dispatch(NoticeAction::Dismiss(id));
        })
    };

    UseNotificationsResult {
        state: Rc::new((*store).clone()),
        actions: UseNotificationsActions {
            toast,
            admin_message,
            dismiss,
        },
    }
}

impl Default for NoticeStore {
    fn default() -> Self {
        Self(NoticeBoard::default())
    }
}
