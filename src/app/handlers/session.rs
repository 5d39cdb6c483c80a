//! Handler für den Session-Lifecycle (Idle → Starting → Active).
//!
//! Die Zustandsmaschine wird einmal pro Frame über `AdvanceSession`
//! weitergeschaltet. Epoch-Guard: Anfrage-Ergebnisse eines überholten
//! Session-Versuchs bleiben wirkungslos; versehentlich geöffnete
//! verwaiste Sessions werden sofort geschlossen.

use glam::Vec3;

use crate::app::state::SessionPhase;
use crate::app::AppState;
use crate::core::{ArMode, BlockCatalog};
use crate::runtime::{ArRuntime, RuntimeEvent, SessionId};

/// Beginnt einen neuen Session-Versuch.
///
/// Zählt den Epoch hoch, setzt die Szene vollständig zurück und wartet
/// anschließend auf den Surface-Remount, bevor die Runtime-Anfrage
/// abgeschickt wird. Ein laufender älterer Versuch wird dabei überholt.
pub fn start(state: &mut AppState, runtime: &mut dyn ArRuntime, catalog: &dyn BlockCatalog) {
    if let Some(session) = state.session.active_session() {
        runtime.end_session(session);
    }

    state.session.epoch += 1;
    state.session.last_error = None;
    reset_scene(state);
    ensure_armed_definition(state, catalog);

    state.session.phase = SessionPhase::Starting {
        remount_frames_left: state.options.remount_wait_frames,
        request_sent: false,
    };
    log::info!("AR-Session-Start angefragt (Epoch {})", state.session.epoch);
}

/// Beendet die Session explizit und setzt die Szene zurück.
pub fn end(state: &mut AppState, runtime: &mut dyn ArRuntime) {
    if let Some(session) = state.session.active_session() {
        runtime.end_session(session);
    }
    transition_to_idle(state, "expliziter Exit");
}

/// Schaltet die Session-Zustandsmaschine um einen Frame weiter.
pub fn advance(state: &mut AppState, runtime: &mut dyn ArRuntime) {
    match state.session.phase {
        SessionPhase::Idle => {}
        SessionPhase::Starting { .. } => advance_starting(state, runtime),
        SessionPhase::Active { .. } => advance_active(state, runtime),
    }
}

/// Übernimmt die Hit-Test-Probe dieses Frames.
///
/// Nur während einer aktiven Session; Frames ohne Treffer behalten die
/// letzte bekannte Position (das Reticle bleibt stehen statt zu flackern).
pub fn sample_hit_test(state: &mut AppState, position: Option<Vec3>) {
    if !state.session.is_active() {
        return;
    }
    if let Some(position) = position {
        state.placed.set_hit_position(Some(position));
    }
}

/// Starting-Phase: Remount-Wartezeit, dann Anfrage abschicken, dann auf
/// das Runtime-Ergebnis pollen.
fn advance_starting(state: &mut AppState, runtime: &mut dyn ArRuntime) {
    let SessionPhase::Starting {
        remount_frames_left,
        request_sent,
    } = state.session.phase
    else {
        return;
    };

    if !request_sent {
        // Ein SurfaceReady-Ereignis beendet die Wartezeit sofort; der
        // Frame-Countdown ist der begrenzte Best-Effort-Fallback für
        // Runtimes ohne Ready-Signal.
        let surface_ready = runtime
            .drain_events()
            .iter()
            .any(|e| matches!(e, RuntimeEvent::SurfaceReady));
        let remaining = remount_frames_left.saturating_sub(1);

        if surface_ready || remaining == 0 {
            runtime.begin_session_request(state.session.epoch);
            state.session.phase = SessionPhase::Starting {
                remount_frames_left: 0,
                request_sent: true,
            };
            log::debug!(
                "Session-Anfrage abgeschickt (Epoch {}, surface_ready={surface_ready})",
                state.session.epoch
            );
        } else {
            state.session.phase = SessionPhase::Starting {
                remount_frames_left: remaining,
                request_sent: false,
            };
        }
        return;
    }

    runtime.drain_events();

    let Some((epoch, result)) = runtime.poll_session_request() else {
        return;
    };
    if epoch != state.session.epoch {
        discard_stale_result(runtime, epoch, result);
        return;
    }

    match result {
        Ok(session) => {
            state.session.phase = SessionPhase::Active {
                session,
                frames_since_liveness_poll: 0,
            };
            log::info!(
                "AR-Session aktiv: {session:?} (Epoch {})",
                state.session.epoch
            );
        }
        Err(e) => {
            // Runtime-Begründung für die UI aufheben, Zustand vollständig
            // zurücksetzen; erneutes "Enter" bleibt möglich
            state.session.last_error = Some(format!("{e:#}"));
            log::warn!("AR-Session-Start fehlgeschlagen: {e:#}");
            reset_scene(state);
            state.session.phase = SessionPhase::Idle;
        }
    }
}

/// Active-Phase: Push-Benachrichtigung auswerten, Liveness-Poll als
/// Fallback fahren.
fn advance_active(state: &mut AppState, runtime: &mut dyn ArRuntime) {
    let SessionPhase::Active {
        session,
        frames_since_liveness_poll,
    } = state.session.phase
    else {
        return;
    };

    // Späte Anfrage-Ergebnisse eines überholten Versuchs abräumen
    if let Some((epoch, result)) = runtime.poll_session_request() {
        discard_stale_result(runtime, epoch, result);
    }

    for event in runtime.drain_events() {
        if let RuntimeEvent::SessionEnded { session: ended } = event {
            if ended == session {
                transition_to_idle(state, "externe Beendigung (Push-Benachrichtigung)");
                return;
            }
            // SessionEnded einer fremden/alten Session: ignorieren
        }
    }

    let frames = frames_since_liveness_poll + 1;
    if frames >= state.options.liveness_poll_interval_frames {
        if !runtime.is_session_live(session) {
            transition_to_idle(state, "externe Beendigung (Liveness-Poll)");
            return;
        }
        state.session.phase = SessionPhase::Active {
            session,
            frames_since_liveness_poll: 0,
        };
    } else {
        state.session.phase = SessionPhase::Active {
            session,
            frames_since_liveness_poll: frames,
        };
    }
}

/// Verwirft das Ergebnis eines überholten Session-Versuchs.
/// Eine dabei dennoch geöffnete Session wird sofort geschlossen.
fn discard_stale_result(
    runtime: &mut dyn ArRuntime,
    epoch: u64,
    result: anyhow::Result<SessionId>,
) {
    if let Ok(orphan) = result {
        runtime.end_session(orphan);
    }
    log::debug!("Veraltetes Session-Ergebnis verworfen (Epoch {epoch})");
}

/// Gemeinsamer Reset-Pfad für explizites Ende und externe Beendigung.
fn transition_to_idle(state: &mut AppState, reason: &str) {
    reset_scene(state);
    state.session.phase = SessionPhase::Idle;
    log::info!("AR-Session -> Idle: {reason}");
}

/// Setzt die Szene auf den Session-Grenzzustand zurück:
/// keine Blöcke, keine Selektion, keine Hit-Position, Place-Modus,
/// keine Gesten-Baseline.
fn reset_scene(state: &mut AppState) {
    state.placed.clear_all();
    state.placed.set_mode(ArMode::Place);
    state.gesture.baseline = None;
}

/// Hält den scharfgeschalteten Katalog-Eintrag gültig: ohne (auflösbaren)
/// Eintrag wird der erste Katalog-Block scharfgeschaltet, damit die
/// Session nicht unplatzierbar startet.
fn ensure_armed_definition(state: &mut AppState, catalog: &dyn BlockCatalog) {
    let armed_is_valid = state
        .placed
        .active_definition_id()
        .is_some_and(|id| catalog.get(id).is_some());
    if armed_is_valid {
        return;
    }

    match catalog.blocks().first() {
        Some(first) => {
            log::info!("Katalog-Eintrag automatisch scharfgeschaltet: {}", first.name);
            state.placed.set_active_definition(Some(first.id.clone()));
        }
        None => {
            // Leerer Katalog: nichts scharfschaltbar
            state.placed.set_active_definition(None);
        }
    }
}
