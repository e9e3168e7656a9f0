use crate::{
    GameError, MaskSource, PlacementGenerator, Raster, Result, Rgba, RoundState, SizeU,
    SpotlightGame, Touch, TouchOutcome,
};

/// The view-lifecycle interface: three operations invoked by an external
/// host in response to layout, input, and redraw callbacks.
pub trait GameSurface {
    /// The host view was laid out or resized.
    fn resized(&mut self, view: SizeU);

    /// One pointer sample in view-local coordinates. The returned outcome's
    /// `has_update` tells the host whether a repaint is needed.
    fn touch(&mut self, touch: Touch) -> TouchOutcome;

    /// Compose the current frame into `frame`, which the host sizes to the
    /// view.
    fn draw(&self, frame: &mut Raster);
}

/// The spotlight view: owns the hidden image and the punched mask source,
/// and renders the game state without any renderer dependency.
#[derive(Clone, Debug)]
pub struct SpotlightScene<P> {
    game: SpotlightGame<P>,
    hidden: Raster,
    mask: MaskSource,
}

impl<P: PlacementGenerator> SpotlightScene<P> {
    /// Build the scene from the two raster assets. The mask is composited
    /// into its punched-out form once, here; afterwards it is only ever
    /// translated.
    pub fn new(hidden: Raster, mask: &Raster, placer: P) -> Result<Self> {
        if hidden.size().is_empty() {
            return Err(GameError::EmptyImage);
        }
        let mask = MaskSource::new(Rgba::BLACK, mask)?;
        let game = SpotlightGame::new(hidden.size(), placer);
        Ok(Self { game, hidden, mask })
    }

    pub fn game(&self) -> &SpotlightGame<P> {
        &self.game
    }
}

impl<P: PlacementGenerator> GameSurface for SpotlightScene<P> {
    fn resized(&mut self, view: SizeU) {
        self.game.resized(view);
    }

    fn touch(&mut self, touch: Touch) -> TouchOutcome {
        let outcome = self.game.touch(touch);
        self.mask.center_on(self.game.spot_center());
        outcome
    }

    fn draw(&self, frame: &mut Raster) {
        frame.fill(Rgba::WHITE);
        let rect = self.game.win_rect();
        frame.blit_over(&self.hidden, rect.left as i32, rect.top as i32);

        match self.game.state() {
            // The round is over: leave the image fully revealed.
            RoundState::Won => {}
            RoundState::Scanning => self.mask.composite_over(frame),
            RoundState::Covered => frame.fill(Rgba::BLACK),
        }
    }
}
