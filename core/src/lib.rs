pub use compositor::*;
pub use error::*;
pub use game::*;
pub use placement::*;
pub use raster::*;
pub use scene::*;
pub use types::*;

mod compositor;
mod error;
mod game;
mod placement;
mod raster;
mod scene;
mod types;
