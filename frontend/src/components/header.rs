use shared::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_section: Section,
    pub on_switch_section: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"📅 Market Holidays"}</h1>
                <nav class="nav">
                    {for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let class = if section == props.active_section {
                            "nav-btn active"
                        } else {
                            "nav-btn"
                        };
                        let on_click = {
                            let on_switch_section = props.on_switch_section.clone();
                            Callback::from(move |_: MouseEvent| on_switch_section.emit(section))
                        };
                        html! {
                            <button class={class} data-section={section.id()} onclick={on_click}>
                                {section.label()}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
