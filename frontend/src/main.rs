use shared::views::HolidayDetails;
use shared::{DashboardConfig, DashboardController, Holiday, Section, ViewAction};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::admin_panel::AdminPanel;
use components::calendar::Calendar;
use components::dashboard_panel::DashboardPanel;
use components::header::Header;
use components::holiday_modal::HolidayModal;
use components::search_panel::SearchPanel;
use components::toast_container::ToastContainer;
use hooks::use_admin::use_admin;
use hooks::use_dashboard::use_dashboard;
use hooks::use_notifications::use_notifications;
use hooks::use_search::use_search;
use services::api::ApiClient;
use services::date_utils::today;
use services::logging;

/// Build-time configuration; `HOLIDAY_API_URL` points the dashboard at another service
fn load_config() -> DashboardConfig {
    DashboardConfig::default().with_api_base_url(option_env!("HOLIDAY_API_URL"))
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let controller = use_memo((), {
        let config = config.clone();
        move |_| DashboardController::new(ApiClient::new(&config), config.upcoming_count)
    });

    let notifications = use_notifications(&config);
    let dashboard = use_dashboard(controller.clone(), notifications.actions.clone());
    let search = use_search(
        controller.clone(),
        dashboard.actions.dispatcher.clone(),
        notifications.actions.clone(),
    );
    let admin = use_admin(
        controller.clone(),
        dashboard.actions.dispatcher.clone(),
        notifications.actions.clone(),
    );

    let view = &dashboard.state.0;

    let on_select_holiday = {
        let dispatcher = dashboard.actions.dispatcher.clone();
        Callback::from(move |holiday: Holiday| dispatcher.dispatch(ViewAction::ShowDetails(holiday)))
    };

    let on_close_details = {
        let dispatcher = dashboard.actions.dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewAction::CloseDetails))
    };

    let section = match view.active_section {
        Section::Dashboard => html! {
            <DashboardPanel stats={view.stats} upcoming={view.upcoming.clone()} />
        },
        Section::Search => html! {
            <SearchPanel
                state={search.state.clone()}
                actions={search.actions.clone()}
                years={view.year_options()}
                selected_year={view.selected_year}
            />
        },
        Section::Calendar => html! {
            <Calendar
                key={view.calendar_revision.to_string()}
                cursor={view.calendar}
                cells={view.calendar_grid(today())}
                on_prev_month={dashboard.actions.prev_month.clone()}
                on_next_month={dashboard.actions.next_month.clone()}
                on_select_holiday={on_select_holiday}
            />
        },
        Section::Admin => html! {
            <AdminPanel
                state={admin.state.clone()}
                actions={admin.actions.clone()}
                message={notifications.state.0.admin_message.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                active_section={view.active_section}
                on_switch_section={dashboard.actions.switch_section.clone()}
            />
            <main class="container">
                {section}
            </main>
            <HolidayModal
                details={view.details.as_ref().map(HolidayDetails::from)}
                on_close={on_close_details}
            />
            <ToastContainer
                toasts={notifications.state.0.toasts.clone()}
                on_dismiss={notifications.actions.dismiss.clone()}
            />
        </div>
    }
}

fn main() {
    logging::init();
    log::info!("Starting holiday dashboard");
    yew::Renderer::<App>::new().render();
}
