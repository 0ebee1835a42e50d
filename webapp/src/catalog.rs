use dioxus::prelude::*;

use crate::{
    components::actions::{confirm_delete, reload_on_save},
    modal::open_modal,
};
use api::{
    app::{App, DeleteAppReq, ListAppsReq, delete_app, list_apps},
    category::{Category, CategoryUuid, DeleteCategoryReq, ListCategoriesReq, delete_category, list_categories},
};
use common::modal::{Layout, ModalConfig, Size};

fn open_category_form(category: Option<Category>, update_signal: Signal<()>) {
    let title = match &category {
        Some(category) => format!("Edit category \"{}\"", category.name),
        None => String::from("New category"),
    };

    open_modal(
        ModalConfig::new(Layout::CategoryForm(category))
            .title(title)
            .size(Size::Md)
            .confirm_text("Save")
            .on_data_received(reload_on_save(update_signal)),
    );
}

fn open_app_form(app: Option<App>, update_signal: Signal<()>) {
    let title = match &app {
        Some(app) => format!("Edit app \"{}\"", app.name),
        None => String::from("New app"),
    };

    open_modal(
        ModalConfig::new(Layout::AppForm(app))
            .title(title)
            .size(Size::Md)
            .confirm_text("Save")
            .on_data_received(reload_on_save(update_signal)),
    );
}

// Catalog
//
// the app categories and the apps filed under them.  both lists share one reload signal
// since deleting a category also moves its apps to uncategorized.
#[component]
pub fn Catalog() -> Element {
    let update_signal = use_signal(|| ());
    let mut category_filter = use_signal(|| None::<CategoryUuid>);

    let categories = use_resource(move || async move {
        update_signal();
        list_categories(&ListCategoriesReq {}).await
    });

    let apps = use_resource(move || async move {
        update_signal();

        list_apps(&ListAppsReq {
            category_uuid: category_filter(),
        })
        .await
    });

    let category_names: Vec<(CategoryUuid, String)> = match &*categories.read() {
        Some(Ok(resp)) => resp
            .categories
            .iter()
            .map(|category| (category.category_uuid, category.name.clone()))
            .collect(),
        _ => Vec::new(),
    };

    let category_body = match &*categories.read() {
        Some(Ok(resp)) if resp.categories.is_empty() => rsx! {
            div { class: "empty-state", "No categories yet." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Description" }
                        th { "Default" }
                        th {}
                    }
                }
                tbody {
                    for category in resp.categories.iter() {
                        CategoryRow {
                            key: "{category.category_uuid}",
                            category: category.clone(),
                            update_signal,
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "empty-state status-error", "Error: {err}" }
        },
        None => rsx! {
            div { class: "loading-state", "Loading..." }
        },
    };

    let app_body = match &*apps.read() {
        Some(Ok(resp)) if resp.apps.is_empty() => rsx! {
            div { class: "empty-state", "No apps here." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Package" }
                        th { "Category" }
                        th {}
                    }
                }
                tbody {
                    for app in resp.apps.iter() {
                        AppRow {
                            key: "{app.app_uuid}",
                            app: app.clone(),
                            category: app
                                .category_uuid
                                .and_then(|uuid| {
                                    category_names
                                        .iter()
                                        .find(|(category_uuid, _)| *category_uuid == uuid)
                                        .map(|(_, name)| name.clone())
                                }),
                            update_signal,
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "empty-state status-error", "Error: {err}" }
        },
        None => rsx! {
            div { class: "loading-state", "Loading..." }
        },
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Catalog" }
            }

            div { class: "section",
                div { class: "page-header",
                    h2 { class: "section-title", "Categories" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| open_category_form(None, update_signal),
                        "New category"
                    }
                }
                {category_body}
            }

            div { class: "section",
                div { class: "page-header",
                    h2 { class: "section-title", "Apps" }
                    div { class: "row-actions",
                        select {
                            class: "form-select",
                            onchange: move |evt| category_filter.set(evt.value().parse().ok()),
                            option { value: "", selected: category_filter().is_none(), "All categories" }
                            for (category_uuid, name) in category_names.iter() {
                                option {
                                    key: "{category_uuid}",
                                    value: "{category_uuid}",
                                    selected: category_filter() == Some(*category_uuid),
                                    "{name}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| open_app_form(None, update_signal),
                            "New app"
                        }
                    }
                }
                {app_body}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CategoryRowProps {
    category: Category,
    update_signal: Signal<()>,
}

#[component]
fn CategoryRow(props: CategoryRowProps) -> Element {
    let category = props.category;
    let update_signal = props.update_signal;
    let category_uuid = category.category_uuid;

    let edit = {
        let category = category.clone();
        move |_| open_category_form(Some(category.clone()), update_signal)
    };

    let delete = {
        let name = category.name.clone();
        move |_| {
            confirm_delete("category", name.clone(), update_signal, move || async move {
                delete_category(&DeleteCategoryReq { category_uuid })
                    .await
                    .map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{category.name}" }
            td { "{category.description}" }
            td {
                if category.blocked_by_default {
                    span { class: "badge badge-danger", "blocked" }
                } else {
                    span { class: "badge badge-success", "allowed" }
                }
            }
            td { class: "row-actions",
                button { class: "btn btn-small btn-secondary", onclick: edit, "Edit" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AppRowProps {
    app: App,
    #[props(!optional)]
    category: Option<String>,
    update_signal: Signal<()>,
}

#[component]
fn AppRow(props: AppRowProps) -> Element {
    let app = props.app;
    let update_signal = props.update_signal;
    let app_uuid = app.app_uuid;

    let category = props
        .category
        .unwrap_or_else(|| String::from("Uncategorized"));

    let edit = {
        let app = app.clone();
        move |_| open_app_form(Some(app.clone()), update_signal)
    };

    let delete = {
        let name = app.name.clone();
        move |_| {
            confirm_delete("app", name.clone(), update_signal, move || async move {
                delete_app(&DeleteAppReq { app_uuid }).await.map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{app.name}" }
            td {
                code { "{app.package}" }
            }
            td { "{category}" }
            td { class: "row-actions",
                button { class: "btn btn-small btn-secondary", onclick: edit, "Edit" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
