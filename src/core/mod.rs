pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use controller::{Button, Controller, Direction, InputState};
pub use input_adapter::WinitController;
pub use timer::{FixedHz, FpsCounter};
