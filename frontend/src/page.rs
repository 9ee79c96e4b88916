use gloo_console::error;
use lacebolla_core::Redirect;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{platform::time::sleep, NodeRef};

pub fn navigate(target: &str) {
    if let Err(e) = gloo_utils::window().location().set_href(target) {
        error!(format!("could not navigate to {target}: {e:?}"));
    }
}

/// wait for the redirect delay, then leave the page
pub async fn follow(redirect: Redirect) {
    sleep(redirect.after).await;
    navigate(&redirect.target);
}

pub fn confirm(question: &str) -> bool {
    gloo_utils::window()
        .confirm_with_message(question)
        .unwrap_or(false)
}

/// current value of an input, select or textarea
pub fn field_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = node.cast::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

pub fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<web_sys::HtmlElement>() {
        if let Err(e) = element.focus() {
            error!(format!("could not focus field: {e:?}"));
        }
    }
}
