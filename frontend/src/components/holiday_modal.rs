use gloo::events::EventListener;
use shared::views::HolidayDetails;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HolidayModalProps {
    pub details: Option<HolidayDetails>,
    pub on_close: Callback<()>,
}

#[function_component(HolidayModal)]
pub fn holiday_modal(props: &HolidayModalProps) -> Html {
    // Escape closes the overlay while it is open
    {
        let on_close = props.on_close.clone();
        let is_open = props.details.is_some();
        use_effect_with(is_open, move |is_open| {
            let listener = is_open.then(|| {
                let document = gloo::utils::document();
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|e| e.key() == "Escape");
                    if is_escape {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let Some(details) = props.details.as_ref() else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="holiday-modal" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3>{"Holiday details"}</h3>
                    <button class="modal-close" onclick={on_close_click}>{"×"}</button>
                </div>
                <div class="modal-body">
                    <div class="holiday-detail">
                        <strong>{"Name: "}</strong>{&details.name}
                    </div>
                    <div class="holiday-detail">
                        <strong>{"Date: "}</strong>{&details.date_display}
                    </div>
                    {if let Some(year) = details.year {
                        html! {
                            <div class="holiday-detail">
                                <strong>{"Year: "}</strong>{year}
                            </div>
                        }
                    } else { html! {} }}
                </div>
            </div>
        </div>
    }
}
