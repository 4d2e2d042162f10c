use dioxus::prelude::*;

use crate::core::chat::{ChatSession, ChatState, MessageKind, Sender, QUICK_REPLIES, SUPPORT_AGENT};
use crate::core::format::{clock_label, now_local};
use crate::core::timing;
use crate::routes::Route;
use crate::t;

fn stamp() -> String {
    clock_label(now_local())
}

#[component]
pub fn LiveChat() -> Element {
    let mut session = use_signal(|| ChatSession::new(rand::random(), &stamp()));
    let mut draft = use_signal(String::new);

    // Reply tasks are spawned from this component, so leaving the screen
    // drops them before they can touch the session.
    let mut send = move || {
        let text = draft();
        let Some(pending) = session.write().submit(&text, &stamp()) else {
            return;
        };
        draft.set(String::new());
        spawn(async move {
            timing::sleep_ms(pending.delay_ms).await;
            session.write().deliver(pending.ticket, &stamp());
        });
    };

    let typing = session.read().state() == ChatState::AgentTyping;
    let messages = session.read().messages().to_vec();

    rsx! {
        section { class: "page page-chat",
            header { class: "chat-header",
                Link { class: "button button--ghost", to: Route::Support {}, "‹" }
                img { class: "chat-header__avatar", src: "{SUPPORT_AGENT.avatar}", alt: "" }
                div {
                    strong { "{SUPPORT_AGENT.name}" }
                    p { class: "chat-header__title", "{SUPPORT_AGENT.title}" }
                    if SUPPORT_AGENT.online {
                        span { class: "chat-header__status", {t!("chat-online")} }
                    }
                }
            }

            ol { class: "chat-log", aria_live: "polite",
                for message in messages {
                    {
                        let class = match (message.kind, message.sender) {
                            (MessageKind::System, _) => "bubble bubble--system",
                            (MessageKind::Text, Sender::User) => "bubble bubble--user",
                            (MessageKind::Text, Sender::Agent) => "bubble bubble--agent",
                        };
                        rsx! {
                            li { key: "{message.id}", class: "{class}",
                                if message.kind == MessageKind::Text && message.sender == Sender::Agent {
                                    span { class: "bubble__sender", "{message.sender_name}" }
                                }
                                p { class: "bubble__text", "{message.text}" }
                                span { class: "bubble__time", "{message.timestamp}" }
                            }
                        }
                    }
                }
                if typing {
                    li { class: "bubble bubble--agent bubble--typing",
                        {t!("chat-typing", name = SUPPORT_AGENT.name)}
                    }
                }
            }

            div { class: "quick-replies",
                for reply in QUICK_REPLIES {
                    button {
                        key: "{reply}",
                        class: "chip",
                        onclick: move |_| draft.set(reply.to_string()),
                        "{reply}"
                    }
                }
            }

            form {
                class: "chat-input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send();
                },
                input {
                    class: "chat-input__field",
                    placeholder: t!("chat-placeholder"),
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: draft().trim().is_empty(),
                    {t!("chat-send")}
                }
            }
        }
    }
}
