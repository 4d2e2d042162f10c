use dioxus::prelude::*;

use crate::core::notifications::{
    filter_by_tab, mark_all_read, mark_read, sample_feed, unread_count, NotificationTab,
};
use crate::routes::Route;
use crate::t;

#[component]
pub fn Notifications() -> Element {
    let nav = navigator();
    let mut feed = use_signal(sample_feed);
    let mut tab = use_signal(|| NotificationTab::All);

    let unread = unread_count(&feed.read()) as i64;
    let visible = filter_by_tab(&feed.read(), tab());

    rsx! {
        section { class: "page page-notifications",
            header { class: "page__header",
                h1 { {t!("notifications-title")} }
                if unread > 0 {
                    span { class: "badge", {t!("notifications-unread", count = unread)} }
                }
                div { class: "page__actions",
                    button {
                        class: "button button--ghost",
                        disabled: unread == 0,
                        onclick: move |_| mark_all_read(&mut feed.write()),
                        {t!("notifications-mark-all")}
                    }
                    button {
                        class: "button button--ghost",
                        disabled: feed.read().is_empty(),
                        onclick: move |_| feed.write().clear(),
                        {t!("notifications-clear-all")}
                    }
                }
            }

            nav { class: "tabs",
                for option in NotificationTab::ALL {
                    button {
                        key: "{option:?}",
                        class: if option == tab() { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        onclick: move |_| tab.set(option),
                        {option.label()}
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state",
                    h2 { {t!("notifications-empty-title")} }
                    p { {t!("notifications-empty-body")} }
                }
            } else {
                ul { class: "notification-list",
                    for item in visible {
                        {
                            let id = item.id.clone();
                            let target = item.action.as_deref().and_then(Route::from_action);
                            let row_class = if item.read { "notification" } else { "notification notification--unread" };
                            let priority_class = format!("priority {}", item.priority.css_class());
                            rsx! {
                                li {
                                    key: "{item.id}",
                                    class: "{row_class}",
                                    onclick: move |_| {
                                        mark_read(&mut feed.write(), &id);
                                        if let Some(route) = target.clone() {
                                            nav.push(route);
                                        }
                                    },
                                    span { class: "notification__icon", aria_hidden: "true", {item.category.icon()} }
                                    div { class: "notification__body",
                                        div { class: "notification__top",
                                            strong { "{item.title}" }
                                            span { class: "{priority_class}", {item.priority.label()} }
                                        }
                                        p { "{item.message}" }
                                        span { class: "notification__time", "{item.timestamp}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
