#![forbid(unsafe_code)]

//! Deck construction: deterministic index → image-URL mapping.
//!
//! The deck is generated once per session from a count and a URL template.
//! Fetching, caching, and rendering of the images are presentation concerns;
//! this module only produces the addresses.

/// Parameters for a cataas.com cat-image deck.
#[derive(Debug, Clone)]
pub struct CatCatalog {
    /// Number of cards in the deck (default: 20).
    pub count: usize,
    /// Requested image width in pixels (default: 720).
    pub width: u32,
    /// Requested image height in pixels (default: 960).
    pub height: u32,
}

impl Default for CatCatalog {
    fn default() -> Self {
        Self {
            count: 20,
            width: 720,
            height: 960,
        }
    }
}

impl CatCatalog {
    /// URL for the card at `index`. Seeded with `index + 1` so the same
    /// index always resolves to the same image within a deck.
    #[must_use]
    pub fn url_for(&self, index: usize) -> String {
        format!(
            "https://cataas.com/cat?width={}&height={}&random={}",
            self.width,
            self.height,
            index + 1
        )
    }

    /// Build the full item sequence for a session.
    #[must_use]
    pub fn build(&self) -> Vec<String> {
        (0..self.count).map(|i| self.url_for(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deck_has_twenty_cards() {
        let deck = CatCatalog::default().build();
        assert_eq!(deck.len(), 20);
    }

    #[test]
    fn urls_are_deterministic_and_seeded_from_one() {
        let catalog = CatCatalog::default();
        assert_eq!(
            catalog.url_for(0),
            "https://cataas.com/cat?width=720&height=960&random=1"
        );
        assert_eq!(catalog.url_for(19), catalog.url_for(19));
        assert_ne!(catalog.url_for(0), catalog.url_for(1));
    }

    #[test]
    fn dimensions_flow_into_urls() {
        let catalog = CatCatalog {
            count: 2,
            width: 100,
            height: 150,
        };
        assert_eq!(
            catalog.build(),
            vec![
                "https://cataas.com/cat?width=100&height=150&random=1",
                "https://cataas.com/cat?width=100&height=150&random=2",
            ]
        );
    }
}
