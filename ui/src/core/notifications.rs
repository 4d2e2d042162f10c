//! Notification feed shown on `/notifications`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Property,
    Favorite,
    Price,
    System,
    Reminder,
}

impl Category {
    pub fn icon(self) -> &'static str {
        match self {
            Category::Property => "🏠",
            Category::Favorite => "♥",
            Category::Price => "📈",
            Category::System => "ℹ",
            Category::Reminder => "⚠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Priority::High => "priority--high",
            Priority::Medium => "priority--medium",
            Priority::Low => "priority--low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    pub category: Category,
    pub priority: Priority,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTab {
    All,
    Unread,
    Properties,
    System,
}

impl NotificationTab {
    pub const ALL: [NotificationTab; 4] = [
        NotificationTab::All,
        NotificationTab::Unread,
        NotificationTab::Properties,
        NotificationTab::System,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationTab::All => "All",
            NotificationTab::Unread => "Unread",
            NotificationTab::Properties => "Properties",
            NotificationTab::System => "System",
        }
    }

    pub fn includes(self, notification: &Notification) -> bool {
        match self {
            NotificationTab::All => true,
            NotificationTab::Unread => !notification.read,
            NotificationTab::Properties => matches!(
                notification.category,
                Category::Property | Category::Favorite | Category::Price | Category::Reminder
            ),
            NotificationTab::System => notification.category == Category::System,
        }
    }
}

pub fn filter_by_tab(feed: &[Notification], tab: NotificationTab) -> Vec<Notification> {
    feed.iter().filter(|n| tab.includes(n)).cloned().collect()
}

pub fn unread_count(feed: &[Notification]) -> usize {
    feed.iter().filter(|n| !n.read).count()
}

pub fn mark_all_read(feed: &mut [Notification]) {
    for notification in feed.iter_mut() {
        notification.read = true;
    }
}

pub fn mark_read(feed: &mut [Notification], id: &str) {
    if let Some(notification) = feed.iter_mut().find(|n| n.id == id) {
        notification.read = true;
    }
}

fn entry(
    id: &str,
    title: &str,
    message: &str,
    timestamp: &str,
    read: bool,
    category: Category,
    priority: Priority,
    action: Option<&str>,
) -> Notification {
    Notification {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        timestamp: timestamp.into(),
        read,
        category,
        priority,
        action: action.map(str::to_string),
    }
}

pub fn sample_feed() -> Vec<Notification> {
    vec![
        entry(
            "1",
            "New Property Match",
            "A new apartment in Downtown Seattle matches your saved search criteria.",
            "5 minutes ago",
            false,
            Category::Property,
            Priority::High,
            Some("/property/1"),
        ),
        entry(
            "2",
            "Price Drop Alert",
            "The Luxury Family House you favorited has dropped in price by ₦25,000,000.",
            "1 hour ago",
            false,
            Category::Price,
            Priority::High,
            Some("/property/2"),
        ),
        entry(
            "3",
            "Property Saved to Favorites",
            "Modern Downtown Apartment has been added to your favorites.",
            "3 hours ago",
            true,
            Category::Favorite,
            Priority::Low,
            None,
        ),
        entry(
            "4",
            "Viewing Reminder",
            "Don't forget your property viewing tomorrow at 2:00 PM for Cozy Studio Loft.",
            "1 day ago",
            false,
            Category::Reminder,
            Priority::Medium,
            Some("/calendar"),
        ),
        entry(
            "5",
            "System Update",
            "Findmyhome has been updated with new features and improvements.",
            "2 days ago",
            true,
            Category::System,
            Priority::Low,
            None,
        ),
        entry(
            "6",
            "New Message",
            "Sarah Johnson sent you a message about your property listing.",
            "3 days ago",
            true,
            Category::Property,
            Priority::Medium,
            Some("/messages"),
        ),
        entry(
            "7",
            "Market Report Available",
            "Your monthly market report for Seattle area is now available.",
            "1 week ago",
            true,
            Category::System,
            Priority::Low,
            Some("/reports"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(feed: &[Notification]) -> Vec<&str> {
        feed.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn tabs_partition_the_feed() {
        let feed = sample_feed();
        assert_eq!(filter_by_tab(&feed, NotificationTab::All).len(), 7);
        assert_eq!(ids(&filter_by_tab(&feed, NotificationTab::Unread)), vec!["1", "2", "4"]);
        assert_eq!(
            ids(&filter_by_tab(&feed, NotificationTab::Properties)),
            vec!["1", "2", "3", "4", "6"]
        );
        assert_eq!(ids(&filter_by_tab(&feed, NotificationTab::System)), vec!["5", "7"]);
    }

    #[test]
    fn marking_read_updates_unread_count() {
        let mut feed = sample_feed();
        assert_eq!(unread_count(&feed), 3);
        mark_read(&mut feed, "2");
        assert_eq!(unread_count(&feed), 2);
        mark_all_read(&mut feed);
        assert_eq!(unread_count(&feed), 0);
        assert!(filter_by_tab(&feed, NotificationTab::Unread).is_empty());
    }

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::Low.css_class(), "priority--low");
    }
}
