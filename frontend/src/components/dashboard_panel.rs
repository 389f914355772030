use shared::views::UpcomingView;
use shared::{DashboardStats, Holiday};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardPanelProps {
    pub stats: DashboardStats,
    pub upcoming: Vec<Holiday>,
}

#[function_component(DashboardPanel)]
pub fn dashboard_panel(props: &DashboardPanelProps) -> Html {
    html! {
        <section id="dashboard" class="section active">
            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-value" id="total-feriados">{props.stats.total_holidays}</div>
                    <div class="stat-label">{"Total holidays"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value" id="proximos-feriados">{props.stats.upcoming_count}</div>
                    <div class="stat-label">{"Upcoming"}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value" id="anio-actual">{props.stats.current_year}</div>
                    <div class="stat-label">{"Current year"}</div>
                </div>
            </div>

            <h2>{"Upcoming holidays"}</h2>
            <div class="upcoming-list" id="upcoming-feriados">
                {match UpcomingView::build(&props.upcoming) {
                    UpcomingView::Empty(message) => html! {
                        <p class="empty-state">{message}</p>
                    },
                    UpcomingView::Cards(cards) => html! {
                        <>
                            {for cards.into_iter().map(|card| html! {
                                <div class="upcoming-card">
                                    <h4>{card.name}</h4>
                                    <div class="date">{card.date_display}</div>
                                    <div class="days-left">{card.days_label}</div>
                                </div>
                            })}
                        </>
                    },
                }}
            </div>
        </section>
    }
}
