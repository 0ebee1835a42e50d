use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{Route, modal::close_all_modals};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path.is_child_of(&target) || current_path == (target) { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Overview {}, "Family Admin" }
                }

                nav { class: "nav-links",
                    NavBarButton {
                        name: "Clients".to_owned(),
                        target: Route::Clients {},
                    }
                    NavBarButton {
                        name: "Plans".to_owned(),
                        target: Route::Plans {},
                    }
                    NavBarButton {
                        name: "Catalog".to_owned(),
                        target: Route::Catalog {},
                    }
                    NavBarButton {
                        name: "Broadcasts".to_owned(),
                        target: Route::Broadcasts {},
                    }
                    NavBarButton {
                        name: "Admins".to_owned(),
                        target: Route::Admins {},
                    }
                    NavBarButton {
                        name: "Settings".to_owned(),
                        target: Route::Settings {},
                    }
                }
            }
        }
    }
}

// dialogs belong to the page that opened them, so leaving a page clears the stack
#[component]
pub fn NavBar() -> Element {
    let route: Route = use_route();

    use_effect(use_reactive!(|route| {
        debug!({ route = %route }, "route changed, clearing modal stack");
        close_all_modals();
    }));

    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
