use chrono::Local;
use gloo_console::error;
use lacebolla_core::{
    clock::SystemClock,
    drafts::{DraftBoard, DraftInput, DraftRepository, Submission, STORAGE_DISABLED},
    Section, Status,
};
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::{
    config,
    draft_list::DraftList,
    page::{confirm, field_value, focus},
    status::StatusLine,
    storage::BrowserStorage,
};

pub enum Msg {
    Submit(SubmitEvent),
    Clear,
}

/// The news submission form with the list of locally saved drafts.
pub struct NewsBoard {
    // `None` when local storage is unusable, the form stays inert
    board: Option<DraftBoard<BrowserStorage, SystemClock>>,
    status: Status,
    form: NodeRef,
    title: NodeRef,
    section: NodeRef,
    body: NodeRef,
}

impl NewsBoard {
    fn read_input(&self) -> DraftInput {
        DraftInput {
            title: field_value(&self.title),
            section: field_value(&self.section),
            body: field_value(&self.body),
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
        focus(&self.title);
    }
}

impl Component for NewsBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();
        let repository = DraftRepository::new(BrowserStorage::local(), config.drafts_key);

        let (board, status) = match DraftBoard::open(repository, SystemClock) {
            Ok(board) => (Some(board), Status::default()),
            Err(e) => {
                error!(format!("draft board disabled: {e}"));
                (None, Status::error(STORAGE_DISABLED))
            }
        };

        Self {
            board,
            status,
            form: NodeRef::default(),
            title: NodeRef::default(),
            section: NodeRef::default(),
            body: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        // the page must never reload, even when the board is inert
        if let Msg::Submit(event) = &msg {
            event.prevent_default();
        }

        let Some(board) = &self.board else {
            return false;
        };

        match msg {
            Msg::Submit(_) => {
                match board.submit(self.read_input()) {
                    Ok(Submission::Saved(status)) => {
                        self.reset_form();
                        self.status = status;
                    }
                    Ok(Submission::Rejected(status)) => {
                        self.status = status;
                    }
                    Err(e) => {
                        error!(format!("could not store draft: {e}"));
                        return false;
                    }
                }
            }
            Msg::Clear => match board.clear(confirm) {
                Ok(Some(status)) => {
                    self.status = status;
                }
                Ok(None) => return false,
                Err(e) => {
                    error!(format!("could not clear drafts: {e}"));
                    return false;
                }
            },
        };

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let disabled = self.board.is_none();

        html! {
          <>
            <form
              id="news-form"
              ref={self.form.clone()}
              onsubmit={link.callback(Msg::Submit)}
            >
              <label>
                {"Título"}
                <input ref={self.title.clone()} name="title" type="text" />
              </label>
              <label>
                {"Sección"}
                <select ref={self.section.clone()} name="section">
                  <option value="">{"Elige una sección"}</option>
                  {for Section::ALL.iter().map(|section| html! {
                    <option value={section.key()}>{section.label()}</option>
                  })}
                </select>
              </label>
              <label>
                {"Texto"}
                <textarea ref={self.body.clone()} name="body" rows="8" />
              </label>
              <button type="submit" disabled={disabled}>{"Guardar borrador"}</button>
            </form>
            <StatusLine id="form-status" status={self.status.clone()} />
            <div class="submission-header">
              <h2>{"Tus borradores"}</h2>
              <button
                id="clear-submissions"
                type="button"
                disabled={disabled}
                onclick={link.callback(|_| Msg::Clear)}
              >
                {"Borrar borradores"}
              </button>
            </div>
            if let Some(board) = &self.board {
              <DraftList listing={board.render(&Local)} />
            }
          </>
        }
    }
}
