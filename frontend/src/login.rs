use lacebolla_core::{
    login::{self, LoginFlow, LoginInput},
    session::SessionStore,
    FormOutcome, Status, SubmitControl,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::{
    api::HttpAuthApi,
    config,
    page::{field_value, follow},
    status::StatusLine,
    storage::BrowserStorage,
};

pub enum Msg {
    Submit(SubmitEvent),
    Finished(FormOutcome),
}

pub struct LoginForm {
    flow: Rc<LoginFlow<HttpAuthApi, BrowserStorage>>,
    control: SubmitControl,
    status: Status,
    email: NodeRef,
    password: NodeRef,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();
        let sessions = SessionStore::new(BrowserStorage::local(), &config);

        Self {
            flow: Rc::new(LoginFlow::new(HttpAuthApi::new(&config), sessions, &config)),
            control: login::submit_control(),
            status: Status::default(),
            email: NodeRef::default(),
            password: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(event) => {
                event.prevent_default();
                if self.control.disabled() {
                    return false;
                }

                let input = LoginInput {
                    email: field_value(&self.email),
                    password: field_value(&self.password),
                };

                match input.validate() {
                    Ok(credentials) => {
                        self.control.begin();
                        self.status = Status::default();

                        let flow = self.flow.clone();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let outcome = flow.authenticate(credentials).await;
                            link.send_message(Msg::Finished(outcome));
                        });
                    }
                    Err(status) => {
                        self.status = status;
                    }
                }
            }
            Msg::Finished(outcome) => {
                self.control.finish();
                self.status = outcome.status;

                if let Some(redirect) = outcome.redirect {
                    spawn_local(follow(redirect));
                }
            }
        };

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
          <form id="login-form" onsubmit={ctx.link().callback(Msg::Submit)}>
            <label>
              {"Correo electrónico"}
              <input ref={self.email.clone()} name="email" type="email" autocomplete="email" />
            </label>
            <label>
              {"Contraseña"}
              <input
                ref={self.password.clone()}
                name="password"
                type="password"
                autocomplete="current-password"
              />
            </label>
            <button type="submit" disabled={self.control.disabled()}>
              {self.control.label()}
            </button>
            <StatusLine id="login-message" status={self.status.clone()} />
          </form>
        }
    }
}
