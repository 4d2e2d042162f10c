//! Domain logic shared by every screen. Nothing in here touches Dioxus.

pub mod auth;
pub mod carousel;
pub mod catalog;
pub mod chat;
pub mod favorites;
pub mod filter;
pub mod format;
pub mod gallery;
pub mod listing;
pub mod messages;
pub mod notifications;
pub mod onboarding;
pub mod share;
pub mod storage;
pub mod timing;
