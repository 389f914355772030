use shared::views::Notification;
use yew::prelude::*;

use crate::hooks::use_admin::{AdminField, AdminState, UseAdminActions};

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub state: AdminState,
    pub actions: UseAdminActions,
    /// Inline result of the last admin action
    pub message: Option<Notification>,
}

fn field_input(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: &str,
    field: AdminField,
    on_field_change: &Callback<(AdminField, Event)>,
    disabled: bool,
) -> Html {
    let onchange = on_field_change.reform(move |e: Event| (field, e));
    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input type={input_type} id={id} value={value.to_string()} {onchange} {disabled} />
        </div>
    }
}

#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let state = &props.state;
    let on_change = &props.actions.on_field_change;

    let on_add_submit = {
        let add_holiday = props.actions.add_holiday.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            add_holiday.emit(());
        })
    };

    let on_delete_submit = {
        let delete_holiday = props.actions.delete_holiday.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            delete_holiday.emit(());
        })
    };

    html! {
        <section id="admin" class="section active">
            {if let Some(message) = props.message.as_ref() {
                html! {
                    <div id="admin-message" class={format!("admin-message {}", message.level.css_class())}>
                        {&message.message}
                    </div>
                }
            } else { html! {} }}

            <div class="admin-forms">
                <form id="add-holiday-form" class="admin-form" onsubmit={on_add_submit}>
                    <h3>{"➕ Add holiday"}</h3>
                    {field_input("add-year", "Year", "number", &state.add_form.year, AdminField::AddYear, on_change, state.submitting)}
                    {field_input("add-date", "Date", "date", &state.add_form.date, AdminField::AddDate, on_change, state.submitting)}
                    {field_input("add-name", "Name", "text", &state.add_form.name, AdminField::AddName, on_change, state.submitting)}
                    {field_input("api-key", "API key", "password", &state.add_form.api_key, AdminField::AddApiKey, on_change, state.submitting)}
                    <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                        {if state.submitting { "Saving..." } else { "Add holiday" }}
                    </button>
                </form>

                <form id="delete-holiday-form" class="admin-form" onsubmit={on_delete_submit}>
                    <h3>{"🗑️ Delete holiday"}</h3>
                    {field_input("delete-year", "Year", "number", &state.delete_form.year, AdminField::DeleteYear, on_change, state.submitting)}
                    {field_input("delete-date", "Date", "date", &state.delete_form.date, AdminField::DeleteDate, on_change, state.submitting)}
                    {field_input("delete-api-key", "API key", "password", &state.delete_form.api_key, AdminField::DeleteApiKey, on_change, state.submitting)}
                    <button type="submit" class="btn btn-danger" disabled={state.submitting}>
                        {if state.submitting { "Deleting..." } else { "Delete holiday" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
