//! Mapping von Host-/Touch-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Gesten-Interpretation: die Touch-Topologie (ein vs.
//! zwei Finger) wird gegen den aktuellen Modus und die Frame-Baseline
//! ausgewertet. Das Mapping selbst mutiert nichts.

use glam::Vec2;

use crate::core::{gestures, ArMode, TouchPair};

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::EnterArRequested => vec![AppCommand::StartSession],
        AppIntent::ExitArRequested => vec![AppCommand::EndSession],
        AppIntent::FrameTicked { hits } => vec![
            // Hit-Probe vor dem Session-Advance schreiben: Platzierungen
            // innerhalb desselben Frames lesen stets die frischeste Position
            AppCommand::SampleHitTest {
                position: hits.first().copied(),
            },
            AppCommand::AdvanceSession,
        ],
        AppIntent::TouchStarted { touches } => map_touch_started(state, &touches),
        AppIntent::TouchMoved { touches } => map_touch_moved(state, &touches),
        AppIntent::TouchEnded { touches } => {
            // Fällt die Fingerzahl unter 2, ist die Baseline hinfällig
            if touches.len() < 2 {
                vec![AppCommand::ClearGestureBaseline]
            } else {
                Vec::new()
            }
        }
        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::ArmDefinitionRequested { id } => vec![AppCommand::SetActiveDefinition { id }],
        AppIntent::PlacedPickRequested { id } => vec![AppCommand::SelectPlaced { id }],
        AppIntent::DeleteSelectedRequested => match state.placed.selected_id() {
            Some(id) => vec![AppCommand::DeletePlaced { id }],
            None => Vec::new(),
        },
        AppIntent::ClearAllRequested => vec![AppCommand::ClearPlaced],
    }
}

/// Touch-Start: Ein-Finger-Tap platziert (nur im Place-Modus), zwei Finger
/// etablieren eine frische Gesten-Baseline.
fn map_touch_started(state: &AppState, touches: &[Vec2]) -> Vec<AppCommand> {
    match *touches {
        [_] if state.placed.mode() == ArMode::Place => {
            // Platzierung nur bei scharfgeschaltetem Eintrag und vorhandener
            // Hit-Position; sonst bewusst gar nichts
            let (Some(definition_id), Some(position)) = (
                state.placed.active_definition_id(),
                state.placed.hit_position(),
            ) else {
                return Vec::new();
            };
            vec![AppCommand::PlaceBlock {
                definition_id: definition_id.to_string(),
                position,
            }]
        }
        [a, b] => vec![AppCommand::SetGestureBaseline { touches: [a, b] }],
        _ => Vec::new(),
    }
}

/// Touch-Move: Zwei-Finger-Bewegungen erzeugen Skalierungs- bzw.
/// Rotations-Updates gegen die Baseline des vorherigen Frames.
///
/// Die Baseline wird auf jedem Zwei-Finger-Move nachgezogen, auch ohne
/// Selektion: eine spätere Selektion setzt dann ohne Sprung fort.
/// Ein-Finger-Moves platzieren bewusst nicht (kein Dauer-Platzieren
/// beim Ziehen).
fn map_touch_moved(state: &AppState, touches: &[Vec2]) -> Vec<AppCommand> {
    let [a, b] = *touches else {
        return Vec::new();
    };
    let curr: TouchPair = [a, b];

    let Some(baseline) = state.gesture.baseline else {
        // Zweiter Finger kam ohne zugehörigen Touch-Start an: frisch aufsetzen
        return vec![AppCommand::SetGestureBaseline { touches: curr }];
    };

    let mut commands = Vec::new();
    if let Some(id) = state.placed.selected_id() {
        match state.placed.mode() {
            ArMode::Scale => commands.push(AppCommand::ScaleSelected {
                id,
                ratio: gestures::pinch_scale_ratio(&baseline, &curr),
            }),
            ArMode::Rotate => commands.push(AppCommand::RotateSelected {
                id,
                delta: gestures::rotation_delta(&baseline, &curr),
            }),
            ArMode::Place | ArMode::Move => {}
        }
    }
    commands.push(AppCommand::SetGestureBaseline { touches: curr });
    commands
}
