//! Core-Domänentypen: Katalog, platzierte Blöcke, Gesten-Mathematik.

pub mod catalog;
pub mod gestures;
pub mod placed;

pub use catalog::{BlockCatalog, BlockDefinition, BlockShape, BlockSize, InMemoryCatalog};
pub use gestures::{pinch_scale_ratio, rotation_delta, TouchPair};
pub use placed::{ArMode, PlacedBlock, PlacedBlockStore, PlacedBlockUpdate};
