pub mod camera;
pub mod constants;
pub mod error;
pub mod host;
pub mod scenario;

pub use camera::*;
pub use error::SimError;
pub use host::*;
pub use scenario::*;
