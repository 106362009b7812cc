pub mod app;
pub mod constants;
pub mod geometry;
pub mod host;
pub mod placement;
pub mod planes;
pub mod scene;
pub mod state;

pub use app::*;
pub use constants::*;
pub use geometry::*;
pub use host::*;
pub use placement::*;
pub use planes::*;
pub use scene::*;
pub use state::*;
