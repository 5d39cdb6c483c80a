//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Rendering-Schicht des Hosts
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::ArOptions;
pub use render_scene::{BlockInstance, RenderScene, ReticleInstance};
