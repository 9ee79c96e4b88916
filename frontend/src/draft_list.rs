use lacebolla_core::drafts::DraftListing;
use yew::{function_component, html, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct DraftListProps {
    pub listing: DraftListing,
}

#[function_component(DraftList)]
pub fn list(props: &DraftListProps) -> Html {
    let items = match &props.listing {
        DraftListing::Empty { placeholder } => html! {
          <li class="card">{*placeholder}</li>
        },
        DraftListing::Entries(entries) => entries
            .iter()
            .map(|entry| {
                html! {
                  <li key={entry.id.clone()} class="card submission-item">
                    <span class="tag" data-role="submission-tag">{entry.label}</span>
                    <h3 data-role="submission-title">{&entry.title}</h3>
                    <p data-role="submission-excerpt">{&entry.excerpt}</p>
                    <p class="meta" data-role="submission-meta">{&entry.saved_on}</p>
                  </li>
                }
            })
            .collect(),
    };

    html! {
      <ul id="submission-list" class="submission-list">
        {items}
      </ul>
    }
}
