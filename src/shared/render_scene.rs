//! Render-Snapshot-Typen für die Rendering-Schicht.
//!
//! Die Rendering-Schicht ist ein reiner Leser dieses Zustands; sie
//! erzeugt aus `RenderScene` die Geometrie pro Form und das Reticle.

use glam::Vec3;

use crate::core::{BlockShape, BlockSize};

/// Ein renderbarer platzierter Block (Definition bereits aufgelöst).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInstance {
    /// Id des platzierten Blocks (für Pick-Selektion im Renderer)
    pub id: u64,
    /// Grundform
    pub shape: BlockShape,
    /// Farbe (RGBA), bei Selektion bereits hervorgehoben
    pub color: [f32; 4],
    /// Abmessungen in Metern
    pub size: BlockSize,
    /// Welt-Position
    pub position: Vec3,
    /// Euler-Rotation in Radiant
    pub rotation: Vec3,
    /// Uniformer Skalierungsfaktor
    pub scale: f32,
    /// Ob der Block aktuell selektiert ist
    pub selected: bool,
}

/// Das Platzierungs-Reticle auf der letzten Hit-Position.
#[derive(Debug, Clone, PartialEq)]
pub struct ReticleInstance {
    /// Welt-Position (letzte Hit-Test-Position)
    pub position: Vec3,
    /// Innenradius in Welteinheiten
    pub inner_radius: f32,
    /// Außenradius in Welteinheiten
    pub outer_radius: f32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

/// Vollständige Szene für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Renderbare Blöcke in Platzierungs-Reihenfolge
    pub blocks: Vec<BlockInstance>,
    /// Reticle; nur im Place-Modus mit aktiver Session und Hit-Probe
    pub reticle: Option<ReticleInstance>,
}
