use crate::model::LocationStory;

/// A story tile with its collapsible highlights section.
#[derive(Debug, Clone)]
pub struct StoryCard {
    story: LocationStory,
    expanded: bool,
}

impl StoryCard {
    pub fn new(story: LocationStory) -> Self {
        Self {
            story,
            expanded: false,
        }
    }

    pub fn story(&self) -> &LocationStory {
        &self.story
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Highlights to draw; empty while collapsed.
    pub fn visible_highlights(&self) -> &[String] {
        if self.expanded {
            &self.story.highlights
        } else {
            &[]
        }
    }

    /// True if `key` is this story's id or its name (case-insensitive).
    pub fn matches(&self, key: &str) -> bool {
        key.parse::<u32>().is_ok_and(|id| id == self.story.id)
            || self.story.name.eq_ignore_ascii_case(key.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn reykjavik() -> StoryCard {
        let story = catalog::featured_stories()
            .into_iter()
            .find(|s| s.name == "Reykjavik")
            .expect("sample story");
        StoryCard::new(story)
    }

    #[test]
    fn starts_collapsed() {
        let card = reykjavik();
        assert!(!card.is_expanded());
        assert!(card.visible_highlights().is_empty());
    }

    #[test]
    fn toggle_reveals_and_hides_highlights() {
        let mut card = reykjavik();
        card.toggle();
        assert_eq!(card.visible_highlights()[0], "Northern Lights");
        card.toggle();
        assert!(card.visible_highlights().is_empty());
    }

    #[test]
    fn matches_by_id_or_name() {
        let card = reykjavik();
        assert!(card.matches("2"));
        assert!(card.matches("reykjavik"));
        assert!(!card.matches("1"));
        assert!(!card.matches("Tokyo"));
    }
}
