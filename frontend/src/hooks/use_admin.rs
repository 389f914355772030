use std::rc::Rc;

use shared::views::NotificationLevel;
use shared::{AddHolidayForm, DashboardController, DeleteHolidayForm, HandlerError, MutationKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_dashboard::DashboardStore;
use crate::hooks::use_notifications::UseNotificationsActions;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Clone, PartialEq)]
pub struct AdminState {
    pub add_form: AddHolidayForm,
    pub delete_form: DeleteHolidayForm,
    pub submitting: bool,
}

pub struct UseAdminResult {
    pub state: AdminState,
    pub actions: UseAdminActions,
}

/// Which input of the admin forms changed
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
    AddYear,
    AddDate,
    AddName,
    AddApiKey,
    DeleteYear,
    DeleteDate,
    DeleteApiKey,
}

/// The one form touched by a field edit
#[derive(Debug, PartialEq)]
enum FormEdit {
    Add(AddHolidayForm),
    Delete(DeleteHolidayForm),
}

fn edit_field(field: AdminField, value: String, add: &AddHolidayForm, delete: &DeleteHolidayForm) -> FormEdit {
    match field {
        AdminField::AddYear => FormEdit::Add(AddHolidayForm {
            year: value,
            ..add.clone()
        }),
        AdminField::AddDate => FormEdit::Add(AddHolidayForm {
            date: value,
            ..add.clone()
        }),
        AdminField::AddName => FormEdit::Add(AddHolidayForm {
            name: value,
            ..add.clone()
        }),
        AdminField::AddApiKey => FormEdit::Add(AddHolidayForm {
            api_key: value,
            ..add.clone()
        }),
        AdminField::DeleteYear => FormEdit::Delete(DeleteHolidayForm {
            year: value,
            ..delete.clone()
        }),
        AdminField::DeleteDate => FormEdit::Delete(DeleteHolidayForm {
            date: value,
            ..delete.clone()
        }),
        AdminField::DeleteApiKey => FormEdit::Delete(DeleteHolidayForm {
            api_key: value,
            ..delete.clone()
        }),
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAdminActions {
    pub on_field_change: Callback<(AdminField, Event)>,
    pub add_holiday: Callback<()>,
    pub delete_holiday: Callback<()>,
}

fn report_failure(notifications: &UseNotificationsActions, kind: MutationKind, err: HandlerError) {
    notifications.admin_message.emit((NotificationLevel::Error, err.to_string()));
    let toast = if err.is_validation() {
        "Please fill in every field"
    } else {
        kind.failure_toast()
    };
    notifications.toast.emit((NotificationLevel::Error, toast.to_string()));
}

fn report_success(notifications: &UseNotificationsActions, kind: MutationKind, server_message: Option<String>) {
    if let Some(message) = server_message {
        log::info!("Holiday service: {}", message);
    }
    notifications
        .admin_message
        .emit((NotificationLevel::Success, kind.success_message().to_string()));
    notifications
        .toast
        .emit((NotificationLevel::Success, kind.success_message().to_string()));
}

#[hook]
pub fn use_admin(
    controller: Rc<DashboardController<ApiClient>>,
    dispatcher: UseReducerDispatcher<DashboardStore>,
    notifications: UseNotificationsActions,
) -> UseAdminResult {
    let add_form = use_state(AddHolidayForm::default);
    let delete_form = use_state(DeleteHolidayForm::default);
    let submitting = use_state(|| false);

    let on_field_change = {
        let add_form = add_form.clone();
        let delete_form = delete_form.clone();
        Callback::from(move |(field, e): (AdminField, Event)| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            match edit_field(field, value, &add_form, &delete_form) {
                FormEdit::Add(form) => add_form.set(form),
                FormEdit::Delete(form) => delete_form.set(form),
            }
        })
    };

    let add_holiday = {
        let controller = controller.clone();
        let dispatcher = dispatcher.clone();
        let notifications = notifications.clone();
        let add_form = add_form.clone();
        let submitting = submitting.clone();

        Callback::from(move |_| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let notifications = notifications.clone();
            let add_form = add_form.clone();
            let submitting = submitting.clone();
            let form_value = (*add_form).clone();

            spawn_local(async move {
                submitting.set(true);
                match controller.add_holiday(&form_value, today()).await {
                    Ok(outcome) => {
                        dispatcher.dispatch(outcome.data.into_action());
                        add_form.set(AddHolidayForm::default());
                        report_success(&notifications, outcome.kind, outcome.server_message);
                    }
                    Err(e) => report_failure(&notifications, MutationKind::Added, e),
                }
                submitting.set(false);
            });
        })
    };

    let delete_holiday = {
        let delete_form = delete_form.clone();
        let submitting = submitting.clone();

        Callback::from(move |_| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let notifications = notifications.clone();
            let delete_form = delete_form.clone();
            let submitting = submitting.clone();
            let form_value = (*delete_form).clone();

            spawn_local(async move {
                submitting.set(true);
                match controller.delete_holiday(&form_value, today()).await {
                    Ok(outcome) => {
                        dispatcher.dispatch(outcome.data.into_action());
                        delete_form.set(DeleteHolidayForm::default());
                        report_success(&notifications, outcome.kind, outcome.server_message);
                    }
                    Err(e) => report_failure(&notifications, MutationKind::Deleted, e),
                }
                submitting.set(false);
            });
        })
    };

    let state = AdminState {
        add_form: (*add_form).clone(),
        delete_form: (*delete_form).clone(),
        submitting: *submitting,
    };

    UseAdminResult {
        state,
        actions: UseAdminActions {
            on_field_change,
            add_holiday,
            delete_holiday,
        },
    }
}
