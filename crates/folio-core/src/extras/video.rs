//! Video card play-button placeholder. Clicks are only logged for now.

use tracing::info;

use crate::dom::Element;

pub struct VideoPlayers<E> {
    buttons: Vec<E>,
    card_selector: String,
}

impl<E: Element> VideoPlayers<E> {
    pub fn new(buttons: Vec<E>, card_selector: impl Into<String>) -> Self {
        Self {
            buttons,
            card_selector: card_selector.into(),
        }
    }

    pub fn buttons(&self) -> &[E] {
        &self.buttons
    }

    /// Card enclosing `button`, if any.
    pub fn card_for(&self, button: &E) -> Option<E> {
        button.closest(&self.card_selector)
    }

    pub fn on_play_click(&self, button: &E) {
        let card = self.card_for(button);
        let card_id = card.as_ref().and_then(|c| c.attribute("id"));
        info!(
            found = card.is_some(),
            card = card_id.as_deref().unwrap_or(""),
            "Play video"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn finds_enclosing_card() {
        let card = FakeElement::new("article").with_class("video-card").with_id("reel-1");
        let button = FakeElement::new("button").with_class("play-button").with_parent(&card);
        let players = VideoPlayers::new(vec![button.clone()], ".video-card");

        assert_eq!(players.card_for(&button), Some(card));
        players.on_play_click(&button);
    }

    #[test]
    fn orphan_button_has_no_card() {
        let button = FakeElement::new("button").with_class("play-button");
        let players = VideoPlayers::new(vec![button.clone()], ".video-card");
        assert_eq!(players.card_for(&button), None);
        players.on_play_click(&button);
    }
}
