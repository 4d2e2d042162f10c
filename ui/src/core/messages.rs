//! Conversation inbox for `/messages`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    Property,
    Support,
    General,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub last_message: &'static str,
    pub timestamp: &'static str,
    pub unread: u32,
    pub property_title: Option<&'static str>,
    pub online: bool,
    pub kind: ConversationKind,
}

pub const INBOX: [Conversation; 6] = [
    Conversation {
        id: "1",
        name: "Sarah Johnson",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b95b2b7e?w=100",
        last_message: "Is the apartment still available for viewing this weekend?",
        timestamp: "10:30 AM",
        unread: 2,
        property_title: Some("Modern Downtown Apartment"),
        online: true,
        kind: ConversationKind::Property,
    },
    Conversation {
        id: "2",
        name: "Customer Support",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100",
        last_message: "Thank you for contacting us. How can we help you today?",
        timestamp: "Yesterday",
        unread: 0,
        property_title: None,
        online: true,
        kind: ConversationKind::Support,
    },
    Conversation {
        id: "3",
        name: "Michael Chen",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100",
        last_message: "The property looks great! Can we schedule a viewing?",
        timestamp: "Yesterday",
        unread: 1,
        property_title: Some("Luxury Family House"),
        online: false,
        kind: ConversationKind::Property,
    },
    Conversation {
        id: "4",
        name: "Emma Wilson",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100",
        last_message: "Thanks for the quick response about the lease terms.",
        timestamp: "2 days ago",
        unread: 0,
        property_title: Some("Cozy Studio Loft"),
        online: false,
        kind: ConversationKind::Property,
    },
    Conversation {
        id: "5",
        name: "Property Manager",
        avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=100",
        last_message: "Your property listing has been approved and is now live.",
        timestamp: "3 days ago",
        unread: 0,
        property_title: None,
        online: true,
        kind: ConversationKind::General,
    },
    Conversation {
        id: "6",
        name: "David Rodriguez",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100",
        last_message: "Could you provide more details about the parking situation?",
        timestamp: "1 week ago",
        unread: 0,
        property_title: Some("Spacious Townhouse"),
        online: false,
        kind: ConversationKind::Property,
    },
];

/// Case-insensitive match on name, last message or property title.
pub fn search<'a>(inbox: &'a [Conversation], query: &str) -> Vec<&'a Conversation> {
    let needle = query.trim().to_lowercase();
    inbox
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.last_message.to_lowercase().contains(&needle)
                || c.property_title
                    .map(|t| t.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

pub fn total_unread(inbox: &[Conversation]) -> u32 {
    inbox.iter().map(|c| c.unread).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(hits: &[&Conversation]) -> Vec<&'static str> {
        hits.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_query_lists_everything() {
        assert_eq!(search(&INBOX, "  ").len(), INBOX.len());
    }

    #[test]
    fn searches_name_message_and_property() {
        assert_eq!(ids(&search(&INBOX, "MICHAEL")), vec!["3"]);
        assert_eq!(ids(&search(&INBOX, "parking")), vec!["6"]);
        assert_eq!(ids(&search(&INBOX, "studio loft")), vec!["4"]);
        assert!(search(&INBOX, "zzz").is_empty());
    }

    #[test]
    fn unread_badge_sums_conversations() {
        assert_eq!(total_unread(&INBOX), 3);
    }
}
