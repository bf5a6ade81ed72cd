mod game;
mod player;
pub use game::*;
pub use player::*;
