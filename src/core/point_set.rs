//! Die zentrale PointSet-Datenstruktur: Kontrollpunkte mit Bounce-Physik.

use super::{Bounds, ControlPoint, CurveError};
use glam::Vec2;

/// Standard-Segment-Auflösung pro Glättungsfenster.
pub const DEFAULT_SEGMENT_COUNT: u32 = 35;
/// Standard-Tempo-Faktor der Punktbewegung.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;

/// Geordnete Folge von Kontrollpunkten samt Physik-Parametern.
///
/// Die Reihenfolge ist bedeutungstragend: sie definiert die Topologie der
/// geschlossenen Kurve (nach dem letzten Punkt folgt wieder der erste).
#[derive(Debug, Clone)]
pub struct PointSet {
    /// Kontrollpunkte in Einfüge-Reihenfolge
    points: Vec<ControlPoint>,
    /// Globaler Tempo-Faktor, wird bei jedem Physik-Schritt auf alle
    /// Geschwindigkeiten angewendet (beliebige reelle Werte erlaubt)
    pub speed_multiplier: f32,
    /// Anzahl interpolierter Punkte pro Glättungsfenster (>= 1)
    segment_count: u32,
}

impl PointSet {
    /// Erstellt ein leeres PointSet mit Standard-Parametern.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            segment_count: DEFAULT_SEGMENT_COUNT,
        }
    }

    /// Hängt einen neuen Kontrollpunkt ans Ende der Reihenfolge an.
    ///
    /// Nicht-endliche Eingaben werden abgewiesen; das Set bleibt dann
    /// unverändert. Die Kurven-Neuableitung stößt der Aufrufer an,
    /// damit Physik und Geometrie entkoppelt bleiben.
    pub fn add_point(&mut self, position: Vec2, velocity: Vec2) -> Result<(), CurveError> {
        let point = ControlPoint::new(position, velocity)?;
        self.points.push(point);
        Ok(())
    }

    /// Entfernt den ersten Kontrollpunkt (in Reihenfolge), dessen Position
    /// in beiden Achsen unabhängig um weniger als `tolerance` von `near`
    /// abweicht (Kasten-Test pro Achse, kein euklidischer Abstand).
    ///
    /// `None` wenn kein Punkt innerhalb der Toleranz liegt.
    pub fn delete_point(&mut self, near: Vec2, tolerance: f32) -> Option<ControlPoint> {
        let index = self.points.iter().position(|p| {
            (p.position.x - near.x).abs() < tolerance
                && (p.position.y - near.y).abs() < tolerance
        })?;
        Some(self.points.remove(index))
    }

    /// Führt einen Physik-Schritt gegen die übergebene Begrenzung aus.
    ///
    /// Reihenfolge pro Punkt: erst bewegen, dann jede Achse unabhängig an
    /// der NEUEN Position prüfen und die betroffene Geschwindigkeits-
    /// Komponente negieren. Die Position wird nicht in die Box
    /// zurückgeschoben; ein ausgebrochener Punkt läuft pro Frame einen
    /// Schritt weiter nach außen, bis die Reflektion ihn zurückholt.
    pub fn step(&mut self, bounds: &Bounds) {
        for point in &mut self.points {
            point.position += point.velocity * self.speed_multiplier;
            if point.position.x > bounds.max_x || point.position.x < bounds.min_x {
                point.velocity.x = -point.velocity.x;
            }
            if point.position.y > bounds.max_y || point.position.y < bounds.min_y {
                point.velocity.y = -point.velocity.y;
            }
        }
    }

    /// Entfernt alle Kontrollpunkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt zurück, ob das Set leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Kontrollpunkte (read-only, in Reihenfolge).
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Die rohen Positionen in Reihenfolge (Eingabe für die Glättung).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Aktuelle Segment-Auflösung.
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Setzt die Segment-Auflösung.
    ///
    /// Werte unter 1 werden mit [`CurveError::InvalidConfiguration`]
    /// abgewiesen; das Set bleibt dann unverändert.
    pub fn set_segment_count(&mut self, count: u32) -> Result<(), CurveError> {
        if count == 0 {
            return Err(CurveError::InvalidConfiguration { count });
        }
        self.segment_count = count;
        Ok(())
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with_positions(positions: &[(f32, f32)]) -> PointSet {
        let mut set = PointSet::new();
        for &(x, y) in positions {
            set.add_point(Vec2::new(x, y), Vec2::new(1.0, 1.0))
                .expect("endliche Testpunkte");
        }
        set
    }

    #[test]
    fn test_add_point_appends_in_order() {
        let set = set_with_positions(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.points()[1].position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_add_point_rejects_non_finite_and_leaves_set_unchanged() {
        let mut set = set_with_positions(&[(0.0, 0.0)]);
        let result = set.add_point(Vec2::new(f32::NAN, 5.0), Vec2::ZERO);
        assert!(matches!(result, Err(CurveError::InvalidOperand { .. })));
        assert_eq!(set.len(), 1);
    }

    // ─── Bounce-Physik ───────────────────────────────────────────────

    #[test]
    fn test_step_reflects_after_move_without_clamping() {
        let bounds = Bounds::from_size(800.0, 600.0);
        let mut set = PointSet::new();
        set.add_point(Vec2::new(805.0, 300.0), Vec2::new(2.0, 0.0))
            .expect("endlicher Punkt");

        set.step(&bounds);

        // Erst bewegen (805 + 2 = 807), dann reflektieren — die Position
        // bleibt außerhalb der Box.
        let point = set.points()[0];
        assert_eq!(point.position, Vec2::new(807.0, 300.0));
        assert_eq!(point.velocity, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_step_reflects_y_axis_independently() {
        let bounds = Bounds::from_size(800.0, 600.0);
        let mut set = PointSet::new();
        set.add_point(Vec2::new(400.0, 599.0), Vec2::new(3.0, 4.0))
            .expect("endlicher Punkt");

        set.step(&bounds);

        let point = set.points()[0];
        assert_eq!(point.position, Vec2::new(403.0, 603.0));
        // Nur die Y-Komponente wird gespiegelt
        assert_eq!(point.velocity, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_step_applies_speed_multiplier() {
        let bounds = Bounds::from_size(800.0, 600.0);
        let mut set = PointSet::new();
        set.add_point(Vec2::new(100.0, 100.0), Vec2::new(2.0, -1.0))
            .expect("endlicher Punkt");
        set.speed_multiplier = 3.0;

        set.step(&bounds);

        assert_eq!(set.points()[0].position, Vec2::new(106.0, 97.0));
    }

    // ─── Löschen per Kasten-Test ─────────────────────────────────────

    #[test]
    fn test_delete_point_removes_first_match() {
        let mut set = set_with_positions(&[(10.0, 10.0), (50.0, 50.0), (90.0, 90.0)]);

        let removed = set.delete_point(Vec2::new(52.0, 51.0), 4.0);

        assert_eq!(
            removed.map(|p| p.position),
            Some(Vec2::new(50.0, 50.0)),
            "der mittlere Punkt muss getroffen werden"
        );
        assert_eq!(set.positions(), vec![Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0)]);
    }

    #[test]
    fn test_delete_point_miss_is_silent_noop() {
        let mut set = set_with_positions(&[(10.0, 10.0), (90.0, 90.0)]);
        assert!(set.delete_point(Vec2::new(50.0, 50.0), 4.0).is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_delete_point_uses_axis_wise_box_not_euclidean_distance() {
        let mut set = set_with_positions(&[(0.0, 0.0)]);
        // Euklidischer Abstand zu (3, 3) ist ~4.24 > 4, der Kasten-Test
        // trifft trotzdem (|dx| und |dy| jeweils < 4).
        assert!(set.delete_point(Vec2::new(3.0, 3.0), 4.0).is_some());
    }

    #[test]
    fn test_clear_empties_set() {
        let mut set = set_with_positions(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        set.clear();
        assert!(set.is_empty());
        assert!(set.positions().is_empty());
    }

    #[test]
    fn test_set_segment_count_rejects_zero_and_keeps_state() {
        let mut set = PointSet::new();
        let result = set.set_segment_count(0);
        assert!(matches!(
            result,
            Err(CurveError::InvalidConfiguration { count: 0 })
        ));
        assert_eq!(set.segment_count(), DEFAULT_SEGMENT_COUNT);
    }

    #[test]
    fn test_set_segment_count_accepts_one() {
        let mut set = PointSet::new();
        set.set_segment_count(1).expect("1 ist erlaubt");
        assert_eq!(set.segment_count(), 1);
    }
}
