use clock::CurrentTime;
use drafts::NewsBoard;
use login::LoginForm;
use register::RegisterForm;
use yew::html::BaseComponent;

mod api;
mod clock;
mod config;
mod draft_list;
mod drafts;
mod login;
mod page;
mod register;
mod status;
mod storage;

/// render `C` into the element with `id`, pages without it skip the widget
fn mount<C>(id: &str)
where
    C: BaseComponent,
    C::Properties: Default,
{
    if let Some(root) = gloo_utils::document().get_element_by_id(id) {
        log::info!("mounting widget on #{id}");
        yew::Renderer::<C>::with_root(root).render();
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    mount::<NewsBoard>("news-board");
    mount::<LoginForm>("login-root");
    mount::<RegisterForm>("register-root");
    mount::<CurrentTime>("current-time");
}
