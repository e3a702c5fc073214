pub mod ai;
pub mod collision;
pub mod effects;
pub mod input;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use effects::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
