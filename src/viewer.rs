//! Viewer session: the one card currently on display, its carousel and the
//! selected poster format.

use crate::carousel::Carousel;
use crate::render::{render, ViewDescription};
use crate::schema::Card;
use crate::storage::{load_card, save_card, CardStore};
use crate::{Result, DEFAULT_FORMAT};

#[derive(Debug, Clone)]
pub struct Viewer {
    card: Option<Card>,
    carousel: Option<Carousel>,
    format_id: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl Viewer {
    pub fn new(format_id: impl Into<String>) -> Self {
        Self {
            card: None,
            carousel: None,
            format_id: format_id.into(),
        }
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn format_id(&self) -> &str {
        &self.format_id
    }

    pub fn set_format(&mut self, format_id: impl Into<String>) {
        self.format_id = format_id.into();
    }

    /// Current index, `None` when there is nothing to navigate
    pub fn index(&self) -> Option<usize> {
        self.carousel.map(|c| c.current())
    }

    /// Swap in a new card and start from its first item. The previous card
    /// is dropped; an empty card leaves the viewer without a carousel.
    pub fn replace(&mut self, card: Card) -> Option<Card> {
        let carousel = Carousel::new(card.len()).ok();
        if carousel.is_none() {
            log::debug!("card '{}' has no items", card.title);
        }
        self.carousel = carousel;
        self.card.replace(card)
    }

    pub fn clear(&mut self) {
        self.card = None;
        self.carousel = None;
    }

    pub fn next(&mut self) -> Option<usize> {
        self.carousel.as_mut().map(Carousel::next)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.carousel.as_mut().map(Carousel::prev)
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        match self.carousel.as_mut() {
            Some(c) => c.go_to(index),
            None => Err(crate::Error::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// View for the current position; `None` is the "no content" state.
    pub fn view(&self) -> Result<Option<ViewDescription>> {
        match (&self.card, &self.carousel) {
            (Some(card), Some(carousel)) => render(card, carousel.current(), &self.format_id).map(Some),
            _ => Ok(None),
        }
    }

    /// Replace the displayed card with the one stored under `key`, if any
    pub fn load_from(&mut self, store: &dyn CardStore, key: &str) -> Result<bool> {
        match load_card(store, key)? {
            Some(card) => {
                self.replace(card);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save_to(&self, store: &dyn CardStore, key: &str) -> Result<()> {
        match &self.card {
            Some(card) => save_card(store, key, card),
            None => store.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BasicItem, CardBody};
    use crate::storage::MemoryStore;

    fn card(n: u64) -> Card {
        Card::new(
            "T",
            CardBody::Basic {
                items: (0..n).map(|i| BasicItem::new(i, format!("item {}", i), "")).collect(),
            },
        )
    }

    #[test]
    fn replacing_resets_index() {
        let mut viewer = Viewer::default();
        viewer.replace(card(3));
        viewer.next();
        viewer.next();
        assert_eq!(viewer.index(), Some(2));
        let old = viewer.replace(card(2));
        assert_eq!(old.map(|c| c.len()), Some(3));
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn empty_card_shows_no_content() {
        let mut viewer = Viewer::default();
        assert!(viewer.view().unwrap().is_none());
        viewer.replace(card(0));
        assert_eq!(viewer.next(), None);
        assert!(viewer.view().unwrap().is_none());
    }

    #[test]
    fn view_follows_navigation() {
        let mut viewer = Viewer::new("simple-1");
        viewer.replace(card(2));
        viewer.prev();
        let view = viewer.view().unwrap().unwrap();
        assert_eq!(view.position.index, 1);
        assert_eq!(view.body[0], crate::render::Block::Heading { text: "item 1".into(), level: 2 });
    }

    #[test]
    fn store_round_trip_through_viewer() {
        let store = MemoryStore::new();
        let mut viewer = Viewer::default();
        viewer.replace(card(2));
        viewer.save_to(&store, "k").unwrap();

        let mut other = Viewer::default();
        assert!(other.load_from(&store, "k").unwrap());
        assert_eq!(other.card(), viewer.card());
        assert!(!other.load_from(&store, "missing").unwrap());
    }
}
