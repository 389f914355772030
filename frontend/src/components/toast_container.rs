use shared::views::{Notification, NotificationLevel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Notification>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div id="toast-container" class="toast-container">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_click = props.on_dismiss.reform(move |_: MouseEvent| id);
                let icon = match toast.level {
                    NotificationLevel::Success => "✅",
                    NotificationLevel::Error => "⚠️",
                };
                html! {
                    <div key={id} class={format!("toast {}", toast.level.css_class())} onclick={on_click}>
                        <span class="toast-icon">{icon}</span>
                        <span>{&toast.message}</span>
                    </div>
                }
            })}
        </div>
    }
}
