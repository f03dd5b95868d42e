//! Hinge Runtime
//!
//! Single-threaded scheduling primitives: a virtual-clock timer loop and
//! named message channels. Nothing here blocks or spawns threads; the
//! owner drives time forward explicitly.

mod channel;
mod event_loop;

pub use channel::{ChannelMessage, MessageChannel, SubscriptionId};
pub use event_loop::{EventLoop, TimerId};
