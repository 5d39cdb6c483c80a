//! AR Block Editor Library.
//! Interaktions-Engine für AR-Block-Platzierung: Session-Lifecycle,
//! Zwei-Finger-Gesten und Platzierungs-Store als Library exportiert.

pub mod app;
pub mod core;
pub mod runtime;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, GestureState, SessionPhase,
    SessionState,
};
pub use core::{
    pinch_scale_ratio, rotation_delta, ArMode, BlockCatalog, BlockDefinition, BlockShape,
    BlockSize, InMemoryCatalog, PlacedBlock, PlacedBlockStore, PlacedBlockUpdate, TouchPair,
};
pub use runtime::{ArRuntime, RuntimeEvent, SessionEpoch, SessionId};
pub use shared::{ArOptions, BlockInstance, RenderScene, ReticleInstance};
