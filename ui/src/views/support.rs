use dioxus::prelude::*;

use crate::core::timing::{self, TOAST_MS};
use crate::routes::Route;
use crate::t;

struct Channel {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    href: &'static str,
}

const CHANNELS: [Channel; 3] = [
    Channel {
        icon: "☎",
        title: "Call Us",
        detail: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    Channel {
        icon: "✉",
        title: "Email Support",
        detail: "support@findmyhome.com",
        href: "mailto:support@findmyhome.com",
    },
    Channel {
        icon: "⌚",
        title: "Support Hours",
        detail: "Mon-Fri, 8am - 8pm",
        href: "#",
    },
];

const HELP_CATEGORIES: [(&str, &str); 4] = [
    ("Account & Profile", "Manage your account settings and profile"),
    ("Property Listings", "Create, edit and manage your listings"),
    ("Payments & Billing", "Payment methods, invoices and refunds"),
    ("Safety & Security", "Protect your account and report issues"),
];

const FAQS: [(&str, &str); 5] = [
    (
        "How do I list my property?",
        "Open Add Listing from the bottom bar, fill in the property details, upload photos and publish. Your listing goes live immediately.",
    ),
    (
        "How do I contact a property owner?",
        "Open the property and use Call, Email or Message in the owner card.",
    ),
    (
        "Is my payment information secure?",
        "Card details are handled by our payment partner and never stored on your device.",
    ),
    (
        "How do I save properties to favorites?",
        "Tap the heart on any property card. Saved properties appear under Favorites.",
    ),
    (
        "Can I change my account type?",
        "Yes. Sign out and pick a different account type during onboarding.",
    ),
];

#[component]
pub fn Support() -> Element {
    let mut open_faq = use_signal(|| None::<usize>);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if message().trim().is_empty() {
            return;
        }
        tracing::info!(chars = message().len(), "support message queued");
        message.set(String::new());
        sent.set(true);
        spawn(async move {
            timing::sleep_ms(TOAST_MS).await;
            sent.set(false);
        });
    };

    rsx! {
        section { class: "page page-support",
            h1 { {t!("support-title")} }
            p { {t!("support-subtitle")} }

            div { class: "quick-actions",
                Link { class: "button button--primary", to: Route::LiveChat {}, {t!("support-start-chat")} }
                Link { class: "button button--ghost", to: Route::Messages {}, {t!("support-my-messages")} }
            }

            section { class: "support__section",
                h2 { {t!("support-contact-title")} }
                ul { class: "channel-list",
                    for channel in CHANNELS.iter() {
                        li { key: "{channel.title}", class: "channel",
                            a { href: "{channel.href}",
                                span { class: "channel__icon", aria_hidden: "true", "{channel.icon}" }
                                strong { "{channel.title}" }
                                span { class: "channel__detail", "{channel.detail}" }
                            }
                        }
                    }
                }
            }

            section { class: "support__section",
                h2 { {t!("support-categories-title")} }
                div { class: "category-grid",
                    for (title, blurb) in HELP_CATEGORIES {
                        div { key: "{title}", class: "category-grid__item",
                            strong { "{title}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }

            section { class: "support__section",
                h2 { {t!("support-faq-title")} }
                ul { class: "faq",
                    for (index, (question, answer)) in FAQS.into_iter().enumerate() {
                        li { key: "{index}", class: "faq__item",
                            button {
                                class: "faq__question",
                                aria_expanded: open_faq() == Some(index),
                                onclick: move |_| {
                                    let next = if open_faq() == Some(index) { None } else { Some(index) };
                                    open_faq.set(next);
                                },
                                "{question}"
                            }
                            if open_faq() == Some(index) {
                                p { class: "faq__answer", "{answer}" }
                            }
                        }
                    }
                }
            }

            section { class: "support__section",
                h2 { {t!("support-message-title")} }
                form { class: "form", onsubmit: submit,
                    textarea {
                        rows: "4",
                        placeholder: t!("support-message-placeholder"),
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: message().trim().is_empty(),
                        {t!("support-send")}
                    }
                    if sent() {
                        p { class: "toast", role: "status", {t!("support-sent")} }
                    }
                }
            }
        }
    }
}
