//! State Module - Input state tracked across frames
//!
//! - **Keyboard** - Down state and consume-on-read changed latches
//! - **Mouse** - Button snapshots, cursor position/delta, scroll delta
//! - **Events** - One-shot records cleared every frame
//! - **Callbacks** - Bounded user handler registries
//! - **InputState** - The context object tying them together

mod callbacks;
mod events;
mod input_state;
mod keyboard;
mod mouse;

pub use callbacks::*;
pub use events::*;
pub use input_state::*;
pub use keyboard::*;
pub use mouse::*;
