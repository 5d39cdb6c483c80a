//! Zwei-Finger-Gesten-Mathematik (Pinch-Skalierung und Rotation).
//!
//! Reine Funktionen ohne Zustand: pro Touch-Move-Frame wird das
//! Touch-Paar des vorherigen Frames gegen das aktuelle verglichen.

use glam::Vec2;

/// Ein Zwei-Finger-Touch-Paar in Screen-Koordinaten.
pub type TouchPair = [Vec2; 2];

/// Abstand zwischen den beiden Touch-Punkten eines Paares.
fn pair_distance(pair: &TouchPair) -> f32 {
    (pair[1] - pair[0]).length()
}

/// Winkel (Radiant) des Vektors vom ersten zum zweiten Touch-Punkt.
fn pair_angle(pair: &TouchPair) -> f32 {
    let d = pair[1] - pair[0];
    d.y.atan2(d.x)
}

/// Berechnet das Pinch-Skalierungsverhältnis zwischen zwei Frames.
///
/// 1.0 = keine Änderung, >1 = Finger auseinander (vergrößern),
/// <1 = Finger zusammen (verkleinern).
///
/// Degeneriertes vorheriges Paar (Abstand exakt 0) liefert 1.0 statt
/// einer Division durch Null.
pub fn pinch_scale_ratio(prev: &TouchPair, curr: &TouchPair) -> f32 {
    let prev_dist = pair_distance(prev);
    if prev_dist == 0.0 {
        return 1.0;
    }
    pair_distance(curr) / prev_dist
}

/// Berechnet das Rotations-Delta (Radiant) zwischen zwei Frames.
///
/// Vorzeichenbehaftet und unnormalisiert: das Delta wird direkt auf die
/// akkumulierende Y-Rotation addiert (freie Rotation ohne Wrapping).
pub fn rotation_delta(prev: &TouchPair, curr: &TouchPair) -> f32 {
    pair_angle(curr) - pair_angle(prev)
}
