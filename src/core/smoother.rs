//! Reine Glättungs-Funktionen für die geschlossene Kurve.
//!
//! Layer-neutral und zustandslos: konsumiert eine Positionsfolge und liefert
//! die dichte Polylinie. Wann neu berechnet wird, entscheidet der Aufrufer —
//! nach jeder Mutation und jedem Physik-Schritt vollständig, nie inkrementell.

use glam::Vec2;

/// Wickelt einen (auch negativen) Index modulo `len` in den gültigen Bereich.
///
/// Explizit als `rem_euclid` ausgedrückt, statt sich auf Negativ-Index-
/// Semantik einer Sprache zu verlassen.
fn wrap(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Rekursive affine Kaskade über ein Fenster.
///
/// `degree == 0` liefert `window[0]`; sonst:
/// `window[degree] * alpha + blend(window, alpha, degree - 1) * (1 - alpha)`.
/// Das obere Fensterende trägt auf jeder Stufe das `alpha`-Gewicht. Diese
/// Asymmetrie ist formbestimmend und darf nicht durch eine symmetrische
/// Variante ersetzt werden.
pub fn blend(window: &[Vec2], alpha: f32, degree: usize) -> Vec2 {
    if degree == 0 {
        return window[0];
    }
    window[degree] * alpha + blend(window, alpha, degree - 1) * (1.0 - alpha)
}

/// Tastet ein 3-Punkt-Fenster mit `count` Zwischenpunkten ab.
fn sample_window(window: &[Vec2; 3], count: u32, out: &mut Vec<Vec2>) {
    for j in 0..count {
        let alpha = j as f32 / count as f32;
        out.push(blend(window, alpha, window.len() - 1));
    }
}

/// Leitet aus einer geschlossenen Kontrollpunkt-Folge die geglättete
/// Polylinie ab.
///
/// Unter 3 Punkten ist die Kurve nicht definiert und das Ergebnis leer
/// (definierter Randfall, kein Fehler). Sonst entsteht pro Kontrollpunkt
/// genau ein Fenster
/// `[Mittelpunkt(p[i], p[i+1]), p[i+1], Mittelpunkt(p[i+1], p[i+2])]`
/// mit zirkulärem Index (`i` startet bei −2, daher schließt sich die Kurve
/// zur Schleife), und jedes Fenster liefert `count` Punkte in `alpha`-
/// Reihenfolge. Die Gesamtlänge ist exakt `count * n`.
pub fn smooth(points: &[Vec2], count: u32) -> Vec<Vec2> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(n * count as usize);
    for i in -2..(n as isize - 2) {
        let p0 = points[wrap(i, n)];
        let p1 = points[wrap(i + 1, n)];
        let p2 = points[wrap(i + 2, n)];
        let window = [(p0 + p1) * 0.5, p1, (p1 + p2) * 0.5];
        sample_window(&window, count, &mut result);
    }
    result
}

/// Approximierte Länge einer Polylinie.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
