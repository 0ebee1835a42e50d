#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

mod common;
use crate::common::{
    config::{CONFIG, load_config},
    style::DASHBOARD_STYLES,
    toast::ToastHost,
};

mod components;
use components::navigation::NavBar;

mod modal;
use modal::{MODAL_STACK, ModalHost};

mod admins;
use admins::Admins;

mod broadcasts;
use broadcasts::Broadcasts;

mod catalog;
use catalog::Catalog;

mod clients;
use clients::Clients;

mod overview;
use overview::Overview;

mod plans;
use plans::Plans;

mod settings;
use settings::Settings;

fn main() {
    dioxus_logger::init(load_config().level()).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Overview {},
        #[route("/clients")]
        Clients {},
        #[route("/plans")]
        Plans {},
        #[route("/catalog")]
        Catalog {},
        #[route("/broadcasts")]
        Broadcasts {},
        #[route("/admins")]
        Admins {},
        #[route("/settings")]
        Settings {},
}

// the modal host and the toasts sit outside the router so that they are shared by every
// page and drawn above all of them
#[component]
pub fn App() -> Element {
    use_hook(|| {
        let defaults = CONFIG.peek().modal.clone();
        MODAL_STACK.with_mut(|stack| stack.set_defaults(defaults));
    });

    rsx! {
        style { "{DASHBOARD_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
        ModalHost {}
        ToastHost {}
    }
}
