use super::*;
use crate::core::profile::launch_profile;
use crate::core::IdentityTransform;
use crate::shared::{evaluate, find_parameter_for_x, SOLVER_TOLERANCE};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::DVec2;

fn line_model() -> CurveModel {
    let points = vec![DataPoint::new(0.0, 0.0), DataPoint::new(100.0, 100.0)];
    CurveModel::new(points, IdentityTransform).expect("gültige Punkte")
}

fn peak_model() -> CurveModel {
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(50.0, 10.0),
        DataPoint::new(100.0, 0.0),
    ];
    CurveModel::new(points, IdentityTransform).expect("gültige Punkte")
}

fn launch_model() -> CurveModel {
    CurveModel::with_chart(launch_profile(), &CurveOptions::default()).expect("gültiges Profil")
}

// ── Konstruktion ──

#[test]
fn test_new_has_no_control_points() {
    let model = line_model();
    assert!(model.control_points().is_empty());
    assert_eq!(model.segment_count(), 1);
    assert_eq!(model.expected_control_point_count(), 2);
    assert_eq!(model.revision(), 0);
    assert!(!model.has_pending_events());
}

#[test]
fn test_new_rejects_non_increasing_x() {
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(10.0, 1.0),
        DataPoint::new(10.0, 2.0),
    ];
    let err = CurveModel::new(points, IdentityTransform).unwrap_err();
    assert!(err.to_string().contains("streng steigen"));

    let points = vec![DataPoint::new(5.0, 0.0), DataPoint::new(1.0, 1.0)];
    assert!(CurveModel::new(points, IdentityTransform).is_err());
}

#[test]
fn test_new_rejects_non_finite_coordinates() {
    let points = vec![DataPoint::new(0.0, f64::NAN), DataPoint::new(1.0, 1.0)];
    assert!(CurveModel::new(points, IdentityTransform).is_err());
}

#[test]
fn test_with_chart_initializes() {
    let model = launch_model();
    assert_eq!(model.control_points().len(), 14);
    assert_eq!(model.x_range(), Some((-300.0, 530.0)));
}

// ── initialize_control_points ──

#[test]
fn test_initialize_places_quarter_points() {
    let mut model = line_model();
    model.initialize_control_points();
    assert_eq!(
        model.control_points(),
        &[DVec2::new(25.0, 25.0), DVec2::new(75.0, 75.0)]
    );
    assert_abs_diff_eq!(model.height_at_time(50.0), 50.0, epsilon = 0.01);
}

#[test]
fn test_initialize_is_idempotent() {
    let mut model = line_model();
    model.initialize_control_points();
    model.update_control_point(0, DVec2::new(10.0, 40.0));
    let before = model.control_points().to_vec();
    let revision = model.revision();

    model.initialize_control_points();

    assert_eq!(model.control_points(), before.as_slice());
    assert_eq!(model.revision(), revision);
}

#[test]
fn test_initialize_applies_transform() {
    let model = launch_model();
    let transform = model.transform();
    let points = model.points();
    for (i, cp) in model.control_points().iter().enumerate() {
        let factor = if i % 2 == 0 { 0.25 } else { 0.75 };
        let a = points[i / 2].position();
        let b = points[i / 2 + 1].position();
        let expected = transform.to_storage(a + (b - a) * factor);
        assert_relative_eq!(cp.x, expected.x);
        assert_relative_eq!(cp.y, expected.y);
    }
}

// ── update_control_point ──

#[test]
fn test_update_control_point_in_bounds() {
    let mut model = line_model();
    model.initialize_control_points();
    assert!(model.update_control_point(1, DVec2::new(60.0, 90.0)));
    assert_eq!(model.control_points()[1], DVec2::new(60.0, 90.0));
    assert_eq!(model.control_points()[0], DVec2::new(25.0, 25.0));
}

#[test]
fn test_update_control_point_out_of_bounds_is_ignored() {
    let mut model = line_model();
    model.initialize_control_points();
    model.take_events();
    let before = model.control_points().to_vec();

    assert!(!model.update_control_point(2, DVec2::new(1.0, 1.0)));
    assert!(!model.update_control_point(usize::MAX, DVec2::new(1.0, 1.0)));

    assert_eq!(model.control_points(), before.as_slice());
    assert!(!model.has_pending_events());
}

// ── smooth_curve ──

#[test]
fn test_smooth_replaces_all_control_points() {
    let mut model = peak_model();
    model.initialize_control_points();
    model.smooth_curve();

    let cps = model.control_points();
    assert_eq!(cps.len(), 4);
    assert_relative_eq!(cps[0].x, 50.0 / 6.0);
    assert_relative_eq!(cps[1].x, 50.0 - 100.0 / 6.0);
    assert_relative_eq!(cps[1].y, 10.0);
    assert_relative_eq!(cps[2].x, 50.0 + 100.0 / 6.0);
    assert_relative_eq!(cps[2].y, 10.0);
    assert_relative_eq!(cps[3].x, 100.0 - 50.0 / 6.0);
}

#[test]
fn test_smooth_is_symmetric_around_peak() {
    let mut model = peak_model();
    model.smooth_curve();
    let cps = model.control_points();
    let middle = model.points()[1].position();
    assert_relative_eq!(middle.x - cps[1].x, cps[2].x - middle.x, epsilon = 1e-9);
    assert_relative_eq!(cps[1].y, cps[2].y);
}

#[test]
fn test_smooth_is_idempotent() {
    let mut model = launch_model();
    model.smooth_curve();
    let first = model.control_points().to_vec();
    model.smooth_curve();
    assert_eq!(model.control_points(), first.as_slice());
}

#[test]
fn test_smooth_overrides_manual_edits() {
    let mut model = peak_model();
    model.smooth_curve();
    let smoothed = model.control_points().to_vec();

    model.update_control_point(2, DVec2::new(99.0, -50.0));
    model.smooth_curve();

    assert_eq!(model.control_points(), smoothed.as_slice());
}

#[test]
fn test_smooth_without_initialization_creates_control_points() {
    let mut model = peak_model();
    model.smooth_curve();
    assert_eq!(model.control_points().len(), 4);
}

// ── reset_control_point ──

#[test]
fn test_reset_restores_initial_value_only_at_index() {
    let mut model = launch_model();
    let initial = model.control_points().to_vec();
    model.smooth_curve();
    let smoothed = model.control_points().to_vec();

    assert!(model.reset_control_point(5));

    for (i, cp) in model.control_points().iter().enumerate() {
        if i == 5 {
            assert_relative_eq!(cp.x, initial[5].x);
            assert_relative_eq!(cp.y, initial[5].y);
        } else {
            assert_eq!(*cp, smoothed[i], "Steuerpunkt {} darf sich nicht ändern", i);
        }
    }
}

#[test]
fn test_reset_after_drag() {
    let mut model = line_model();
    model.initialize_control_points();
    model.update_control_point(0, DVec2::new(3.0, 90.0));
    model.update_control_point(1, DVec2::new(80.0, 10.0));

    model.reset_control_point(0);

    assert_eq!(model.control_points()[0], DVec2::new(25.0, 25.0));
    assert_eq!(model.control_points()[1], DVec2::new(80.0, 10.0));
}

#[test]
fn test_reset_out_of_bounds_is_ignored() {
    let mut model = line_model();
    assert!(!model.reset_control_point(0), "ohne Steuerpunkte kein Reset");

    model.initialize_control_points();
    model.take_events();
    assert!(!model.reset_control_point(2));
    assert!(!model.has_pending_events());
}

// ── Höhenabfrage ──

#[test]
fn test_height_passes_through_launch_profile_points() {
    let model = launch_model();
    let points = model.points();
    for (i, p) in points.iter().enumerate() {
        // Lineare Standardlage: dy/dx entspricht der Sehnensteigung
        let slope_before = i
            .checked_sub(1)
            .map(|j| ((p.y - points[j].y) / (p.x - points[j].x)).abs())
            .unwrap_or(0.0);
        let slope_after = points
            .get(i + 1)
            .map(|q| ((q.y - p.y) / (q.x - p.x)).abs())
            .unwrap_or(0.0);
        let tolerance = SOLVER_TOLERANCE * slope_before.max(slope_after) + 1e-6;

        let height = model.height_at_time(p.x);
        assert!(
            (height - p.y).abs() <= tolerance,
            "Punkt {}: Höhe {} statt {} (Toleranz {})",
            i,
            height,
            p.y,
            tolerance
        );
    }
}

#[test]
fn test_height_clamps_at_boundaries() {
    let mut model = launch_model();
    model.smooth_curve();
    assert_eq!(model.height_at_time(-1000.0), 0.0);
    assert_eq!(model.height_at_time(10_000.0), 27_600_000.0);
}

#[test]
fn test_height_of_smoothed_peak_is_continuous() {
    let mut model = peak_model();
    model.smooth_curve();
    let left = model.height_at_time(49.9);
    let right = model.height_at_time(50.1);
    let at = model.height_at_time(50.0);
    assert_abs_diff_eq!(at, 10.0, epsilon = 0.01);
    assert!((left - at).abs() < 0.05);
    assert!((right - at).abs() < 0.05);
}

#[test]
fn test_solver_converges_on_initialized_segments() {
    let model = launch_model();
    let domain_cps = model.domain_control_points();
    let points = model.points();
    for seg in 0..model.segment_count() {
        let p0 = points[seg].position();
        let p3 = points[seg + 1].position();
        let p1 = domain_cps[seg * 2];
        let p2 = domain_cps[seg * 2 + 1];
        for k in 0..=20 {
            let target = p0.x + (p3.x - p0.x) * k as f64 / 20.0;
            let t = find_parameter_for_x(target, p0, p1, p2, p3);
            let x = evaluate(t, p0, p1, p2, p3).x;
            assert!(
                (x - target).abs() < SOLVER_TOLERANCE,
                "Segment {}: x({}) = {} statt {}",
                seg,
                t,
                x,
                target
            );
        }
    }
}

#[test]
fn test_domain_control_points_round_trip() {
    let model = launch_model();
    let domain = model.domain_control_points();
    // Erstes Segment: ENGINE CHILL (-300, 0) → LIFTOFF (0, 0)
    assert_relative_eq!(domain[0].x, -225.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domain[0].y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(domain[1].x, -75.0, epsilon = 1e-9);
}

// ── Degenerierte Kurven ──

#[test]
fn test_single_point_model_is_inert() {
    let mut model =
        CurveModel::new(vec![DataPoint::new(3.0, 7.0)], IdentityTransform).expect("ein Punkt");
    model.initialize_control_points();
    model.smooth_curve();
    assert!(model.control_points().is_empty());
    assert!(!model.reset_control_point(0));
    assert_eq!(model.height_at_time(0.0), 7.0);
    assert_eq!(model.height_at_time(3.0), 7.0);
    assert_eq!(model.revision(), 0);
}

#[test]
fn test_empty_model_is_inert() {
    let mut model = CurveModel::new(Vec::new(), IdentityTransform).expect("leere Liste");
    model.smooth_curve();
    assert_eq!(model.segment_count(), 0);
    assert_eq!(model.x_range(), None);
    assert_eq!(model.height_at_time(1.0), 0.0);
}

// ── Segmente, Ersatz, Events ──

#[test]
fn test_segment_in_storage_space() {
    let model = launch_model();
    let segment = model.segment(1).expect("Segment 1");
    let transform = model.transform();
    assert_eq!(segment.p0, transform.to_storage(model.points()[1].position()));
    assert_eq!(segment.p1, model.control_points()[2]);
    assert_eq!(segment.p2, model.control_points()[3]);
    assert_eq!(segment.p3, transform.to_storage(model.points()[2].position()));
    assert_eq!(segment.evaluate(0.0), segment.p0);
    assert!(model.segment(7).is_none());
}

#[test]
fn test_replace_control_points_checks_length() {
    let mut model = line_model();
    model.initialize_control_points();
    assert!(!model.replace_control_points(vec![DVec2::ZERO]));
    assert!(model.replace_control_points(vec![DVec2::ZERO, DVec2::ONE]));
    assert_eq!(model.control_points(), &[DVec2::ZERO, DVec2::ONE]);
}

#[test]
fn test_events_are_queued_in_order() {
    let mut model = line_model();
    model.initialize_control_points();
    model.update_control_point(1, DVec2::new(70.0, 80.0));
    model.update_control_point(5, DVec2::new(70.0, 80.0));
    model.smooth_curve();
    model.reset_control_point(0);

    assert_eq!(model.revision(), 4);
    assert_eq!(
        model.take_events(),
        vec![
            CurveEvent::ControlPointsInitialized,
            CurveEvent::ControlPointMoved { index: 1 },
            CurveEvent::CurveSmoothed,
            CurveEvent::ControlPointReset { index: 0 },
        ]
    );
    assert!(model.take_events().is_empty());
}
