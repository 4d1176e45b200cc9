//! Entity model: capability traits and the concrete field objects.

pub mod hostile;
pub mod item;
pub mod object;
pub mod player;

pub use hostile::{Boss, Enemy, Hostile};
pub use item::Item;
pub use object::{Combatant, GameObject, Movable, Position};
pub use player::Player;
