use shared::views::result_cards;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_search::{SearchState, UseSearchActions};

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub state: SearchState,
    pub actions: UseSearchActions,
    /// Years offered in the selector, newest first
    pub years: Vec<i32>,
    pub selected_year: Option<i32>,
}

/// Push the selected year into the live `<select>`. The `selected` attribute
/// stops driving the displayed option once the user has picked one.
fn sync_year_select(select: &HtmlSelectElement, year: Option<i32>) {
    let value = year.map(|y| y.to_string()).unwrap_or_default();
    if select.value() != value {
        select.set_value(&value);
    }
}

#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let state = &props.state;
    let year_select = use_node_ref();

    {
        let year_select = year_select.clone();
        use_effect_with((props.selected_year, props.years.clone()), move |(year, _)| {
            if let Some(select) = year_select.cast::<HtmlSelectElement>() {
                sync_year_select(&select, *year);
            }
        });
    }

    let selected_value = props.selected_year.map(|y| y.to_string()).unwrap_or_default();

    let on_search = {
        let search = props.actions.search.clone();
        Callback::from(move |_: MouseEvent| search.emit(()))
    };

    html! {
        <section id="search" class="section active">
            <div class="search-form">
                <div class="form-group">
                    <label for="year-select">{"Year"}</label>
                    <select id="year-select" ref={year_select} onchange={props.actions.on_year_change.clone()}>
                        <option value="" selected={selected_value.is_empty()}>{"Select a year"}</option>
                        {for props.years.iter().map(|year| {
                            let value = year.to_string();
                            html! {
                                <option value={value.clone()} selected={selected_value == value}>{value.clone()}</option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="date-input">{"Date"}</label>
                    <input
                        type="date"
                        id="date-input"
                        value={state.form.date.clone()}
                        onchange={props.actions.on_date_change.clone()}
                    />
                </div>
                <button id="search-btn" class="btn btn-primary" onclick={on_search} disabled={state.loading}>
                    {"🔍 Search"}
                </button>
            </div>

            {if state.loading {
                html! { <div id="loading" class="loading">{"Loading..."}</div> }
            } else { html! {} }}

            {if let Some(error) = state.error.as_ref() {
                html! {
                    <div id="error" class="error-panel">
                        <span id="error-text">{error}</span>
                    </div>
                }
            } else { html! {} }}

            {if let Some(outcome) = state.outcome.as_ref() {
                html! {
                    <div id="results" class="results">
                        <h3 id="results-title">{outcome.title()}</h3>
                        <div id="results-content">
                            {for result_cards(outcome).into_iter().map(|card| html! {
                                <div class="holiday-card">
                                    <h4>{card.heading}</h4>
                                    {for card.lines.into_iter().map(|line| html! { <p>{line}</p> })}
                                </div>
                            })}
                        </div>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn year_select() -> HtmlSelectElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let select = document
            .create_element("select")
            .unwrap()
            .dyn_into::<HtmlSelectElement>()
            .unwrap();
        select.set_inner_html(r#"<option value="">Select a year</option><option value="2025">2025</option>"#);
        select
    }

    #[wasm_bindgen_test]
    fn test_picking_a_date_clears_displayed_year() {
        let select = year_select();
        select.set_value("2025");

        sync_year_select(&select, None);
        assert_eq!(select.value(), "");

        sync_year_select(&select, Some(2025));
        assert_eq!(select.value(), "2025");
    }
}
