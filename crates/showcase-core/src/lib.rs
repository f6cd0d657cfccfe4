//! Engine behind the media showcase carousels.
//!
//! The crate has no UI dependency. A shell (the `iced` desktop app, or a
//! browser build using `player::IframeFrame`) feeds it viewport widths,
//! wheel and touch input and clicks, and renders from the state it exposes.
//! Timers are the shell's job: gesture locks and resize debouncing hand out
//! tickets that the shell releases when its timer fires.

pub mod carousel;
pub mod content;
pub mod embed;
pub mod gesture;
pub mod item;
pub mod pager;
pub mod player;
pub mod viewport;

pub use carousel::{CardLayout, Carousel, ChunkPolicy, PageSlot, Transition};
pub use content::{Catalog, parse_catalog};
pub use gesture::{GestureSettings, Intent, LockTicket, TouchPoint};
pub use item::{Difficulty, Item};
pub use player::{ChannelFrame, FrameHandle, PlayerCommand};
pub use viewport::{SettleTicket, ViewportClass, ViewportMonitor};
