use std::rc::Rc;

use shared::views::NotificationLevel;
use shared::{DashboardController, HandlerError, SearchForm, SearchOutcome, ViewAction};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_dashboard::DashboardStore;
use crate::hooks::use_notifications::UseNotificationsActions;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct SearchState {
    pub form: SearchForm,
    pub loading: bool,
    pub outcome: Option<SearchOutcome>,
    pub error: Option<String>,
}

pub struct UseSearchResult {
    pub state: SearchState,
    pub actions: UseSearchActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSearchActions {
    pub on_year_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub search: Callback<()>,
}

#[hook]
pub fn use_search(
    controller: Rc<DashboardController<ApiClient>>,
    dispatcher: UseReducerDispatcher<DashboardStore>,
    notifications: UseNotificationsActions,
) -> UseSearchResult {
    let form = use_state(SearchForm::default);
    let loading = use_state(|| false);
    let outcome = use_state(|| Option::<SearchOutcome>::None);
    let error = use_state(|| Option::<String>::None);

    let on_year_change = {
        let form = form.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.select_year(value.clone());
            dispatcher.dispatch(ViewAction::SelectYear(value.trim().parse::<i32>().ok()));
            form.set(next);
        })
    };

    let on_date_change = {
        let form = form.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.select_date(value);
            if next.year.is_empty() {
                dispatcher.dispatch(ViewAction::SelectYear(None));
            }
            form.set(next);
        })
    };

    let search = {
        let form = form.clone();
        let loading = loading.clone();
        let outcome = outcome.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let controller = controller.clone();
            let notifications = notifications.clone();
            let form_value = (*form).clone();
            let loading = loading.clone();
            let outcome = outcome.clone();
            let error = error.clone();

            // An empty form never shows the loading panel
            if let Err(e) = form_value.query() {
                notifications.toast.emit((NotificationLevel::Error, e.to_string()));
                return;
            }

            spawn_local(async move {
                loading.set(true);
                error.set(None);
                outcome.set(None);

                match controller.search(&form_value).await {
                    Ok(result) => outcome.set(Some(result)),
                    Err(HandlerError::Validation(e)) => {
                        notifications.toast.emit((NotificationLevel::Error, e.to_string()));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }

                loading.set(false);
            });
        })
    };

    let state = SearchState {
        form: (*form).clone(),
        loading: *loading,
        outcome: (*outcome).clone(),
        error: (*error).clone(),
    };

    UseSearchResult {
        state,
        actions: UseSearchActions {
            on_year_change,
            on_date_change,
            search,
        },
    }
}
