// Engine-side helpers: frame timing and countdown timers

pub mod frame_clock;
pub mod timer;

pub use frame_clock::FrameClock;
pub use timer::CountdownTimer;
