use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::Model;

/// Blocking notification for input rejections.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Programmatic click on a DOM element, used to open the hidden file
/// picker from the drop zone.
pub fn click_element(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
            html_element.click();
        }
    }
}

pub fn truncate_name(name: &str, max: usize) -> String {
    if name.len() > max && name.is_char_boundary(max.saturating_sub(3)) {
        format!("{}...", &name[..max.saturating_sub(3)])
    } else {
        name.to_string()
    }
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_truncated_with_ellipsis() {
        assert_eq!(truncate_name("short.png", 40), "short.png");
        assert_eq!(
            truncate_name("a_very_long_fundus_photograph_name_from_the_clinic.jpeg", 20),
            "a_very_long_fundu..."
        );
    }
}
