use lacebolla_core::Status;
use yew::{classes, function_component, html, AttrValue, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub id: AttrValue,
    pub status: Status,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let status = &props.status;

    html! {
      <p
        id={props.id.clone()}
        class={classes!("form-status", status.kind.class())}
        role="status"
        hidden={status.is_hidden()}
      >
        {&status.message}
      </p>
    }
}
