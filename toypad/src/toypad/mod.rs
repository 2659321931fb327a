// toypad/src/toypad/mod.rs

//! Pad orchestration: resident tokens, the box table, the host session
//! and the command dispatcher, behind the [`ToyPad`] facade.

pub mod boxes;
pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod events;
pub mod handle;
pub mod session;
pub mod shared;
pub mod slots;
pub mod state;

#[cfg(feature = "async")]
pub mod async_pad;

pub use boxes::{BoxInfo, pad_for_box};
pub use builder::ToyPadBuilder;
pub use config::{DeviceIdentity, ToyPadConfig};
pub use dispatcher::Dispatcher;
pub use events::{EventQueue, EventSink, ToyPadEvent};
pub use handle::ToyPad;
pub use session::{Session, SessionState};
pub use shared::SharedToyPad;
pub use slots::SlotManager;
pub use state::{Layout, ToyPadState};

#[cfg(feature = "async")]
pub use async_pad::AsyncToyPad;
