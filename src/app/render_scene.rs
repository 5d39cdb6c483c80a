//! Baut den Render-Snapshot aus AppState und Katalog.

use crate::app::AppState;
use crate::core::{ArMode, BlockCatalog};
use crate::shared::{BlockInstance, RenderScene, ReticleInstance};

/// Baut die `RenderScene` für den aktuellen Frame.
///
/// Reiner Lesepfad: platzierte Blöcke, deren Definition noch im Katalog
/// auflösbar ist (dangelnde Referenzen werden still übersprungen), plus
/// das Reticle im Place-Modus.
pub fn build(state: &AppState, catalog: &dyn BlockCatalog) -> RenderScene {
    let options = &state.options;

    let mut blocks = Vec::with_capacity(state.placed.len());
    for placed in state.placed.blocks() {
        let Some(definition) = catalog.get(&placed.definition_id) else {
            // Katalog-Eintrag wurde gelöscht: Block nicht renderbar
            continue;
        };
        let selected = state.placed.selected_id() == Some(placed.id);
        blocks.push(BlockInstance {
            id: placed.id,
            shape: definition.shape,
            color: if selected {
                options.selection_highlight_color
            } else {
                definition.color
            },
            size: definition.size,
            position: placed.position,
            rotation: placed.rotation,
            scale: placed.scale,
            selected,
        });
    }

    // Reticle nur im Place-Modus mit aktiver Session und Hit-Probe
    let reticle = match (
        state.session.is_active(),
        state.placed.mode(),
        state.placed.hit_position(),
    ) {
        (true, ArMode::Place, Some(position)) => Some(ReticleInstance {
            position,
            inner_radius: options.reticle_inner_radius,
            outer_radius: options.reticle_outer_radius,
            color: options.reticle_color,
        }),
        _ => None,
    };

    RenderScene { blocks, reticle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SessionPhase;
    use crate::core::InMemoryCatalog;
    use crate::runtime::SessionId;
    use glam::Vec3;

    fn active_state() -> AppState {
        let mut state = AppState::new();
        state.session.phase = SessionPhase::Active {
            session: SessionId(1),
            frames_since_liveness_poll: 0,
        };
        state
    }

    #[test]
    fn dangling_definition_is_skipped_silently() {
        let catalog = InMemoryCatalog::with_seed_blocks();
        let mut state = active_state();
        state.placed.place("seed-red-cube", Vec3::ZERO);
        state.placed.place("deleted-definition", Vec3::ONE);

        let scene = build(&state, &catalog);

        assert_eq!(scene.blocks.len(), 1);
        assert_eq!(scene.blocks[0].shape, crate::core::BlockShape::Cube);
    }

    #[test]
    fn selected_block_gets_highlight_color() {
        let catalog = InMemoryCatalog::with_seed_blocks();
        let mut state = active_state();
        let first = state.placed.place("seed-red-cube", Vec3::ZERO);
        state.placed.place("seed-green-sphere", Vec3::ONE);
        state.placed.select(Some(first));

        let scene = build(&state, &catalog);

        assert!(scene.blocks[0].selected);
        assert_eq!(
            scene.blocks[0].color,
            state.options.selection_highlight_color
        );
        assert!(!scene.blocks[1].selected);
    }

    #[test]
    fn reticle_requires_place_mode_active_session_and_hit() {
        let catalog = InMemoryCatalog::with_seed_blocks();

        let mut state = active_state();
        state.placed.set_hit_position(Some(Vec3::new(0.0, 1.0, 0.0)));
        assert!(build(&state, &catalog).reticle.is_some());

        // Anderer Modus: kein Reticle
        state.placed.set_mode(crate::core::ArMode::Scale);
        assert!(build(&state, &catalog).reticle.is_none());

        // Place-Modus, aber keine Session: kein Reticle
        let mut idle = AppState::new();
        idle.placed.set_hit_position(Some(Vec3::ZERO));
        idle.session.phase = SessionPhase::Idle;
        assert!(build(&idle, &catalog).reticle.is_none());

        // Aktive Session ohne Hit-Probe: kein Reticle
        let no_hit = active_state();
        assert!(build(&no_hit, &catalog).reticle.is_none());
    }
}
