use shared::{DayCell, Holiday, MonthCursor};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub cursor: MonthCursor,
    /// Precomputed 42-cell grid for `cursor`
    pub cells: Vec<DayCell>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_select_holiday: Callback<Holiday>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = props.cells.iter().map(|cell| {
        let Some(holiday) = cell.holiday.clone() else {
            return html! {
                <div class={cell.css_classes()}>{cell.day_of_month}</div>
            };
        };

        let name = holiday.name.clone();
        let on_click = {
            let on_select_holiday = props.on_select_holiday.clone();
            Callback::from(move |_: MouseEvent| on_select_holiday.emit(holiday.clone()))
        };

        html! {
            <div class={cell.css_classes()} title={name.clone()} onclick={on_click}>
                {cell.day_of_month}
                <div class="holiday-name">{name.clone()}</div>
            </div>
        }
    });

    html! {
        <section id="calendar" class="section active">
            <div class="calendar-header">
                <button id="prev-month" class="btn" onclick={props.on_prev_month.clone()} title="Previous month">
                    {"◀"}
                </button>
                <h2 id="current-month">{props.cursor.title()}</h2>
                <button id="next-month" class="btn" onclick={props.on_next_month.clone()} title="Next month">
                    {"▶"}
                </button>
            </div>
            <div class="calendar">
                <div class="calendar-weekdays">
                    <div class="weekday">{"Sun"}</div>
                    <div class="weekday">{"Mon"}</div>
                    <div class="weekday">{"Tue"}</div>
                    <div class="weekday">{"Wed"}</div>
                    <div class="weekday">{"Thu"}</div>
                    <div class="weekday">{"Fri"}</div>
                    <div class="weekday">{"Sat"}</div>
                </div>
                <div class="calendar-grid" id="calendar-grid">
                    {for calendar_days}
                </div>
            </div>
        </section>
    }
}
