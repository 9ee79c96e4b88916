use chrono::Local;
use lacebolla_core::clock::{clock_text, Clock, SystemClock};
use yew::{function_component, html, use_state, Html};
use yew_hooks::use_interval;

use crate::config;

fn now_text() -> String {
    clock_text(SystemClock.now(), &Local)
}

#[function_component(CurrentTime)]
pub fn current_time() -> Html {
    let text = use_state(now_text);

    {
        let text = text.clone();
        let interval = config::load().clock_interval_millis();
        use_interval(
            move || {
                text.set(now_text());
            },
            interval,
        );
    }

    html! { {(*text).clone()} }
}
