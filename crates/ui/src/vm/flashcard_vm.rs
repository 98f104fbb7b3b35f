use std::collections::BTreeSet;

use quiz_core::model::Flashcard;

/// Which cards of a topic currently show their back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: BTreeSet<usize>,
}

impl FlipState {
    pub fn toggle(&mut self, index: usize) {
        if !self.flipped.remove(&index) {
            self.flipped.insert(index);
        }
    }

    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }
}

#[must_use]
pub fn card_face(card: &Flashcard, flipped: bool) -> &str {
    if flipped { &card.back } else { &card.front }
}
