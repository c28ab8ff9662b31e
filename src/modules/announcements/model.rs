use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A public announcement. Stored records carry an id and the `visible`
/// flag; the static fallback items carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Announcement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// The fixed feed served when the store cannot answer. The public
/// announcements surface never hard-fails.
pub fn fallback_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: None,
            title: "Welcome to Campus Scheduler".to_string(),
            body: "Plan classes, labs, study sessions in one place.".to_string(),
            visible: None,
        },
        Announcement {
            id: None,
            title: "Tip".to_string(),
            body: "Drag across the grid to create a block of study time.".to_string(),
            visible: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_two_fixed_items() {
        let items = fallback_announcements();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Welcome to Campus Scheduler");
        assert_eq!(items[1].title, "Tip");
    }

    #[test]
    fn fallback_items_serialize_without_id_or_visible() {
        let json = serde_json::to_value(fallback_announcements()).unwrap();
        assert!(json[0].get("id").is_none());
        assert!(json[0].get("visible").is_none());
        assert!(json[0].get("title").is_some());
    }
}
