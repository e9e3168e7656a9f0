use serde::{Deserialize, Serialize};

use crate::{PlacementGenerator, PointF, RectF, SizeU};

/// Lifecycle of a round.
///
/// Valid transitions:
/// - Covered -> Scanning (pointer down)
/// - Scanning -> Covered (pointer up over empty background)
/// - Scanning -> Won (pointer up over the hidden image)
/// - Won -> Scanning (pointer down, which also starts a fresh round)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// Everything is hidden behind the cover, waiting for a touch.
    Covered,
    /// The pointer is down and the spotlight is sweeping the view.
    Scanning,
    /// The last release landed on the hidden image.
    Won,
}

impl RoundState {
    pub const fn spotlight_visible(self) -> bool {
        matches!(self, Self::Scanning)
    }

    pub const fn round_over(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Covered
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

/// One pointer sample delivered by the host, in view-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub phase: TouchPhase,
    pub pos: PointF,
}

impl Touch {
    pub const fn new(phase: TouchPhase, pos: PointF) -> Self {
        Self { phase, pos }
    }
}

/// Outcome of feeding one touch sample into the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    NoChange,
    /// The spotlight recentered on the pointer.
    SpotMoved,
    /// The spotlight switched on (restarting the round first if it was over).
    SpotlightShown,
    /// The spotlight switched off over empty background.
    Missed,
    /// The spotlight switched off inside the win rectangle.
    Won,
}

impl TouchOutcome {
    /// Whether this outcome could have changed the rendered frame.
    pub const fn has_update(self) -> bool {
        use TouchOutcome::*;
        match self {
            NoChange => false,
            SpotMoved => true,
            SpotlightShown => true,
            Missed => true,
            Won => true,
        }
    }
}

/// Host-agnostic spotlight state machine: tracks the round state, the
/// randomized win rectangle, and the last known pointer position.
#[derive(Clone, Debug)]
pub struct SpotlightGame<P> {
    placer: P,
    view: SizeU,
    image: SizeU,
    win_rect: RectF,
    spot_center: PointF,
    state: RoundState,
}

impl<P: PlacementGenerator> SpotlightGame<P> {
    /// The placement stays degenerate until the host reports a view size.
    pub fn new(image: SizeU, placer: P) -> Self {
        Self {
            placer,
            view: SizeU::default(),
            image,
            win_rect: RectF::default(),
            spot_center: PointF::default(),
            state: RoundState::default(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn view_size(&self) -> SizeU {
        self.view
    }

    pub fn image_size(&self) -> SizeU {
        self.image
    }

    pub fn win_rect(&self) -> RectF {
        self.win_rect
    }

    /// Last known pointer position; the mask is always centered here.
    pub fn spot_center(&self) -> PointF {
        self.spot_center
    }

    /// Called whenever the host view changes size, including the first layout.
    pub fn resized(&mut self, view: SizeU) {
        self.view = view;
        self.randomize_placement();
    }

    pub fn touch(&mut self, touch: Touch) -> TouchOutcome {
        use TouchPhase::*;

        let outcome = match touch.phase {
            Down => {
                if self.state.round_over() {
                    self.randomize_placement();
                }
                self.state = RoundState::Scanning;
                TouchOutcome::SpotlightShown
            }
            Move if touch.pos == self.spot_center => TouchOutcome::NoChange,
            Move => TouchOutcome::SpotMoved,
            Up => {
                let won = self.win_rect.contains(touch.pos);
                self.state = if won {
                    RoundState::Won
                } else {
                    RoundState::Covered
                };
                if won {
                    log::debug!("hidden image found at {:?}", touch.pos);
                    TouchOutcome::Won
                } else {
                    TouchOutcome::Missed
                }
            }
        };

        // Every sample recenters the spotlight, whatever the phase.
        self.spot_center = touch.pos;
        outcome
    }

    fn randomize_placement(&mut self) {
        self.win_rect = self.placer.place(self.view, self.image);
        log::debug!("hidden image placed at {:?}", self.win_rect);
    }
}
