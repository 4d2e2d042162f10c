//! One module per screen.

mod browse;
mod create_listing;
mod favorites;
mod history;
mod home;
mod live_chat;
mod login;
mod messages;
mod my_properties;
mod not_found;
mod notifications;
mod onboarding;
mod profile;
mod property_detail;
mod splash;
mod support;

pub use browse::Browse;
pub use create_listing::CreateListing;
pub use favorites::Favorites;
pub use history::History;
pub use home::Home;
pub use live_chat::LiveChat;
pub use login::Login;
pub use messages::Messages;
pub use my_properties::MyProperties;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use onboarding::Onboarding;
pub use profile::{
    Profile, ProfileEdit, ProfileLanguage, ProfileNotifications, ProfilePayments, ProfileSecurity,
    ProfileSettings,
};
pub use property_detail::PropertyDetail;
pub use splash::Splash;
pub use support::Support;
