use dioxus::prelude::*;

use crate::core::messages::{search, total_unread, ConversationKind, INBOX};
use crate::routes::Route;
use crate::t;

/// Support threads open the live chat; the rest have no thread view yet.
fn conversation_route(kind: ConversationKind) -> Route {
    match kind {
        ConversationKind::Support => Route::LiveChat {},
        ConversationKind::Property | ConversationKind::General => Route::Messages {},
    }
}

#[component]
pub fn Messages() -> Element {
    let mut query = use_signal(String::new);
    let unread = i64::from(total_unread(&INBOX));
    let hits = search(&INBOX, &query());

    rsx! {
        section { class: "page page-messages",
            header { class: "page__header",
                h1 { {t!("messages-title")} }
                if unread > 0 {
                    span { class: "badge", {t!("messages-unread", count = unread)} }
                }
            }
            input {
                r#type: "search",
                class: "search-bar__input",
                placeholder: t!("messages-search-placeholder"),
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            if hits.is_empty() {
                div { class: "empty-state",
                    h2 { {t!("messages-empty-title")} }
                    p { {t!("messages-empty-body")} }
                }
            } else {
                ul { class: "conversation-list",
                    for conversation in hits {
                        li { key: "{conversation.id}", class: "conversation",
                            Link {
                                class: "conversation__link",
                                to: conversation_route(conversation.kind),
                                div { class: "conversation__avatar",
                                    img { src: "{conversation.avatar}", alt: "" }
                                    if conversation.online {
                                        span { class: "conversation__online", aria_label: t!("messages-online") }
                                    }
                                }
                                div { class: "conversation__body",
                                    div { class: "conversation__top",
                                        strong { "{conversation.name}" }
                                        span { class: "conversation__time", "{conversation.timestamp}" }
                                    }
                                    if let Some(title) = conversation.property_title {
                                        span { class: "conversation__property", "{title}" }
                                    }
                                    p { class: "conversation__preview", "{conversation.last_message}" }
                                }
                                if conversation.unread > 0 {
                                    span { class: "badge", "{conversation.unread}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
