//! Ball and paddle simulation
//!
//! Pure game logic, no rendering or platform dependencies:
//! - Elapsed-time (Euler) integration in playfield units per millisecond
//! - Axis-aligned rectangle collision only
//! - Serves drawn from a seeded RNG owned by the match

pub mod ball;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use paddle::{Control, Paddle};
pub use rect::Rect;
pub use state::{GameMode, GameState, Playfield, Score, Seats, Side};
pub use tick::tick;
