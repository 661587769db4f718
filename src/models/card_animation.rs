/// Hover animation state of a single feature card.
///
/// A card starts `Idle`, switches to `Animating` when the pointer enters it
/// and returns to `Idle` once the browser reports the animation finished, so
/// the next hover can play it again.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CardAnimation {
    #[default]
    Idle,
    Animating,
}

impl CardAnimation {
    /// CSS class that plays the jello effect on the card icon.
    pub const CLASS: &'static str = "animate__jello";

    pub fn pointer_enter(self) -> Self {
        Self::Animating
    }

    pub fn animation_end(self) -> Self {
        Self::Idle
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Self::Animating)
    }
}
