mod accounts;
mod events;
mod misc;
mod music;
mod saved_events;
mod videos;
mod weather;

pub use accounts::*;
pub use events::*;
pub use misc::*;
pub use music::*;
pub use saved_events::*;
pub use videos::*;
pub use weather::*;
