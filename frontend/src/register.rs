use lacebolla_core::{
    register::{self, RegisterFlow, RegistrationInput},
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
};

pub enum Msg {
    Submit(SubmitEvent),
    Finished(FormOutcome),
}

pub struct RegisterForm {
    flow: Rc<RegisterFlow<HttpAuthApi>>,
    control: SubmitControl,
    status: Status,
    username: NodeRef,
    email: NodeRef,
    password: NodeRef,
}

impl RegisterForm {
    fn read_input(&self) -> RegistrationInput {
        RegistrationInput {
            username: field_value(&self.username),
            email: field_value(&self.email),
            password: field_value(&self.password),
        }
    }
}

impl Component for RegisterForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = config::load();

        Self {
            flow: Rc::new(RegisterFlow::new(HttpAuthApi::new(&config), &config)),
            control: register::submit_control(),
            status: Status::default(),
            username: NodeRef::default(),
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

                match self.read_input().validate() {
                    Ok(registration) => {
                        self.control.begin();
                        self.status = Status::default();

                        let flow = self.flow.clone();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let outcome = flow.register(registration).await;
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
          <form id="register-form" onsubmit={ctx.link().callback(Msg::Submit)}>
            <label>
              {"Nombre de usuario"}
              <input ref={self.username.clone()} name="username" type="text" autocomplete="username" />
            </label>
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
                autocomplete="new-password"
              />
            </label>
            <button type="submit" disabled={self.control.disabled()}>
              {self.control.label()}
            </button>
            <StatusLine id="register-message" status={self.status.clone()} />
          </form>
        }
    }
}
