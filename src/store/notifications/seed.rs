use super::state::{NotificationOption, NotificationPreference, NotificationsState};

fn option(id: &str, label: &str, is_enabled: bool) -> NotificationOption {
    NotificationOption {
        id: id.to_string(),
        label: label.to_string(),
        is_enabled,
    }
}

fn preference(id: &str, title: &str, description: &str, options: Vec<NotificationOption>) -> NotificationPreference {
    NotificationPreference {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        is_enabled: true,
        options,
    }
}

impl NotificationsState {
    pub fn seeded() -> Self {
        Self::new(vec![
            preference(
                "strikeouts",
                "Strikeout Alerts",
                "Get notifications when Yamamoto records a strikeout",
                vec![
                    option("strikeout-sound", "Custom strikeout sound", true),
                    option("strikeout-vibration", "Vibration feedback", true),
                    option("strikeout-milestones", "Only milestone strikeouts (5, 10, etc.)", false),
                ],
            ),
            preference(
                "games",
                "Game Notifications",
                "Get notifications about Yamamoto's upcoming and live games",
                vec![
                    option("game-start", "Game starting soon", true),
                    option("game-results", "Game results", true),
                    option("schedule-changes", "Schedule changes", true),
                ],
            ),
            preference(
                "news",
                "News & Updates",
                "Get the latest news and updates about Yamamoto",
                vec![
                    option("news-articles", "News articles", true),
                    option("video-content", "Video content", true),
                    option("social-media", "Social media updates", false),
                ],
            ),
        ])
    }
}
