//! Unit tests for iso-solver.
//!
//! All oracles are closures or the offline speed model, so nothing here
//! touches the network.

#[cfg(test)]
mod helpers {
    use iso_core::{GeoPoint, IsoError, SolveConfig};

    use crate::{RoundReport, SolveObserver, Termination};

    pub const SHIBUYA: GeoPoint = GeoPoint::new(35.6595, 139.7005);

    pub fn config(target: f64, tolerance: f64, angles: usize, rounds: u32) -> SolveConfig {
        SolveConfig::new(target, tolerance, angles, rounds)
    }

    /// Observer that records every callback.
    #[derive(Default)]
    pub struct Recorder {
        pub starts:    Vec<u32>,
        pub reports:   Vec<RoundReport>,
        pub ends:      Vec<Termination>,
        pub locations: Vec<String>,
        pub failures:  Vec<(String, IsoError)>,
    }

    impl SolveObserver for Recorder {
        fn on_location(&mut self, name: &str) {
            self.locations.push(name.to_owned());
        }
        fn on_round_start(&mut self, round: u32) {
            self.starts.push(round);
        }
        fn on_round_end(&mut self, report: &RoundReport) {
            self.reports.push(*report);
        }
        fn on_solve_end(&mut self, _origin: GeoPoint, termination: &Termination) {
            self.ends.push(*termination);
        }
        fn on_location_failed(&mut self, name: &str, error: &IsoError) {
            self.failures.push((name.to_owned(), error.clone()));
        }
    }
}

// ── Angle state ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use crate::{Adjustment, AngleState};

    #[test]
    fn too_quick_pushes_outward() {
        let mut a = AngleState::new(90.0, 2.0);
        assert_eq!(a.adjust(10.0, (20.0, 40.0), 0.5), Adjustment::Outward);
        assert_eq!(a.radius_km, 3.0);
        assert!(!a.converged);
    }

    #[test]
    fn too_slow_pulls_inward() {
        let mut a = AngleState::new(90.0, 3.0);
        assert_eq!(a.adjust(50.0, (20.0, 40.0), 0.5), Adjustment::Inward);
        assert_eq!(a.radius_km, 2.0);
    }

    #[test]
    fn band_is_inclusive() {
        let mut a = AngleState::new(0.0, 3.0);
        assert_eq!(a.adjust(20.0, (20.0, 40.0), 0.5), Adjustment::Within);
        assert_eq!(a.adjust(40.0, (20.0, 40.0), 0.5), Adjustment::Within);
        assert_eq!(a.radius_km, 3.0);
        assert!(a.converged);
    }

    #[test]
    fn converged_flag_follows_latest_round() {
        let mut a = AngleState::new(0.0, 3.0);
        a.adjust(30.0, (20.0, 40.0), 0.5);
        assert!(a.converged);
        a.adjust(45.0, (20.0, 40.0), 0.5);
        assert!(!a.converged);
    }
}

// ── Polygon ordering ──────────────────────────────────────────────────────────

#[cfg(test)]
mod polygon {
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use iso_core::{GeoPoint, bearing, project};

    use super::helpers::SHIBUYA;
    use crate::{IsochronePolygon, order_by_bearing};

    #[test]
    fn shuffled_ring_comes_back_sorted() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut points: Vec<GeoPoint> = (0..36)
            .map(|i| project(SHIBUYA, i as f64 * 10.0, rng.gen_range(0.5..20.0)).unwrap())
            .collect();
        points.shuffle(&mut rng);

        let ordered = order_by_bearing(SHIBUYA, &points);
        assert_eq!(ordered.len(), points.len());
        let bearings: Vec<f64> = ordered.iter().map(|&p| bearing(SHIBUYA, p)).collect();
        assert!(bearings.windows(2).all(|w| w[0] <= w[1]), "{bearings:?}");
    }

    #[test]
    fn equal_bearings_keep_input_order() {
        // Points on the origin's meridian have a bearing of exactly 0.
        let near = project(SHIBUYA, 0.0, 1.0).unwrap();
        let far = project(SHIBUYA, 0.0, 2.0).unwrap();
        let east = project(SHIBUYA, 90.0, 1.0).unwrap();
        assert_eq!(bearing(SHIBUYA, near), 0.0);
        assert_eq!(bearing(SHIBUYA, far), 0.0);

        assert_eq!(order_by_bearing(SHIBUYA, &[far, east, near]), vec![far, near, east]);
        assert_eq!(order_by_bearing(SHIBUYA, &[east, near, far]), vec![near, far, east]);
    }

    #[test]
    fn empty_input() {
        assert!(order_by_bearing(SHIBUYA, &[]).is_empty());
        let poly = IsochronePolygon::from_points(SHIBUYA, &[]);
        assert!(poly.is_empty());
        assert!(poly.closed_ring().is_empty());
    }

    #[test]
    fn closed_ring_repeats_first_vertex() {
        let pts: Vec<GeoPoint> = [270.0, 0.0, 90.0, 180.0]
            .iter()
            .map(|&b| project(SHIBUYA, b, 3.0).unwrap())
            .collect();
        let poly = IsochronePolygon::from_points(SHIBUYA, &pts);
        let ring = poly.closed_ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0], pts[1]); // north first
        assert_eq!(poly.origin(), SHIBUYA);
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod solve {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use iso_core::{GeoPoint, IsoError, TravelMode, TravelOptions, bearing};
    use iso_oracle::{SpeedModelOracle, from_fn};

    use super::helpers::{Recorder, SHIBUYA, config};
    use crate::{NoopObserver, SolverBuilder, Termination, solve};

    #[test]
    fn shibuya_converges_in_first_round() {
        // 12 min per km is exactly the seed assumption.
        let oracle = from_fn(|origin: GeoPoint, dests: &[GeoPoint], _: &TravelOptions| {
            Ok(dests.iter().map(|&d| origin.distance_km(d) * 12.0).collect())
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 4, 15))
            .build()
            .unwrap();

        let sol = solver.solve(SHIBUYA, &mut NoopObserver).unwrap();

        assert_eq!(sol.termination, Termination::Converged { rounds: 1 });
        assert_eq!(sol.radii_km.len(), 4);
        for r in &sol.radii_km {
            assert!((r - 45.0 / 12.0).abs() < 1e-9, "radius {r}");
        }
        for d in &sol.durations_min {
            assert!((d - 45.0).abs() < 1e-6, "duration {d}");
        }

        let bearings = sol.polygon.bearings();
        assert_eq!(sol.polygon.len(), 4);
        for (got, want) in bearings.iter().zip([0.0, 90.0, 180.0, 270.0]) {
            assert!((got - want).abs() < 1e-6, "bearings {bearings:?}");
        }
    }

    #[test]
    fn monotone_oracle_converges_within_budget() {
        // 6 km/h: the seed (5 km/h) starts short and the radii oscillate
        // into the band as the step decays.
        let oracle = from_fn(|origin: GeoPoint, dests: &[GeoPoint], _: &TravelOptions| {
            Ok(dests.iter().map(|&d| origin.distance_km(d) * 10.0).collect())
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(30.0, 2.0, 12, 15))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        let sol = solver.solve(SHIBUYA, &mut rec).unwrap();

        assert!(sol.termination.is_converged(), "{:?}", sol.termination);
        assert!(sol.termination.rounds() <= 15);
        assert!(sol.durations_min.iter().all(|d| (28.0..=32.0).contains(d)));
        assert_eq!(rec.reports.last().map(|r| r.within), Some(12));
    }

    #[test]
    fn speed_model_walking_converges() {
        let solver = SolverBuilder::new(SpeedModelOracle::crow_flies())
            .config(config(20.0, 1.0, 20, 15))
            .mode(TravelMode::Walking)
            .build()
            .unwrap();
        let sol = solver.solve(SHIBUYA, &mut NoopObserver).unwrap();
        assert!(sol.termination.is_converged(), "{:?}", sol.termination);
        assert_eq!(sol.polygon.len(), 20);
    }

    #[test]
    fn never_convergeable_stops_exactly_at_budget() {
        let calls = AtomicUsize::new(0);
        let oracle = from_fn(|_, dests: &[GeoPoint], _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![45.0 + 100.0; dests.len()])
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 8, 7))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        let sol = solver.solve(SHIBUYA, &mut rec).unwrap();

        assert_eq!(sol.termination, Termination::BudgetExhausted { rounds: 7 });
        assert_eq!(calls.load(Ordering::SeqCst), 7);
        assert_eq!(rec.starts, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(rec.ends, vec![Termination::BudgetExhausted { rounds: 7 }]);
        assert!(rec.reports.iter().all(|r| r.inward == 8));
        // Every round pulled inward, so the returned radii are below the seed.
        assert!(sol.radii_km.iter().all(|&r| r < 45.0 / 12.0));
        assert_eq!(sol.polygon.len(), 8);
    }

    #[test]
    fn step_decays_between_rounds() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| Ok(vec![0.0; dests.len()]));
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 3, 4))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        solver.solve(SHIBUYA, &mut rec).unwrap();

        let steps: Vec<f64> = rec.reports.iter().map(|r| r.step).collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], 0.5);
        assert!((steps[1] - 0.5 / 1.025).abs() < 1e-12);
        assert!((steps[2] - 0.5 / 1.025 / 1.05).abs() < 1e-12);
        assert!((steps[3] - 0.5 / 1.025 / 1.05 / 1.075).abs() < 1e-12);
    }

    #[test]
    fn angles_adjust_independently() {
        // North is twice as slow as the model; every other direction is
        // exactly on target from the start.
        let oracle = from_fn(|origin: GeoPoint, dests: &[GeoPoint], _: &TravelOptions| {
            Ok(dests
                .iter()
                .map(|&d| {
                    let b = bearing(origin, d);
                    let factor = if !(1.0..=359.0).contains(&b) { 24.0 } else { 12.0 };
                    origin.distance_km(d) * factor
                })
                .collect())
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 6, 15))
            .build()
            .unwrap();

        let sol = solver.solve(SHIBUYA, &mut NoopObserver).unwrap();

        // 90 → 60 → 40.3 minutes: in band on round 3.
        assert_eq!(sol.termination, Termination::Converged { rounds: 3 });
        assert!(sol.radii_km[0] < 2.0, "north radius {}", sol.radii_km[0]);
        for r in &sol.radii_km[1..] {
            assert_eq!(*r, 45.0 / 60.0 * 5.0);
        }
    }

    #[test]
    fn two_angles_is_invalid() {
        let calls = AtomicUsize::new(0);
        let oracle = from_fn(|_, dests: &[GeoPoint], _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.0; dests.len()])
        });
        let err = solve(SHIBUYA, 45.0, 10.0, 2, 15, &oracle).unwrap_err();
        assert!(matches!(err, IsoError::InvalidArgument(_)), "{err:?}");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn invalid_override_is_rejected_at_solve() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| Ok(vec![0.0; dests.len()]));
        let solver = SolverBuilder::new(oracle).build().unwrap();
        let err = solver
            .solve_with(SHIBUYA, &config(45.0, 10.0, 2, 15), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, IsoError::InvalidArgument(_)));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| Ok(vec![0.0; dests.len()]));
        assert!(SolverBuilder::new(oracle).config(config(45.0, 10.0, 8, 0)).build().is_err());
    }

    #[test]
    fn non_finite_origin_is_invalid() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| Ok(vec![0.0; dests.len()]));
        let err = solve(GeoPoint::new(f64::NAN, 0.0), 45.0, 10.0, 4, 15, oracle).unwrap_err();
        assert!(matches!(err, IsoError::InvalidArgument(_)));
    }

    #[test]
    fn oracle_failure_aborts_the_solve() {
        let calls = AtomicUsize::new(0);
        let oracle = from_fn(|_, dests: &[GeoPoint], _| {
            if calls.fetch_add(1, Ordering::SeqCst) == 1 {
                Err(IsoError::unavailable("timeout"))
            } else {
                Ok(vec![0.0; dests.len()])
            }
        });
        let mut rec = Recorder::default();
        let err = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 4, 15))
            .build()
            .unwrap()
            .solve(SHIBUYA, &mut rec)
            .unwrap_err();

        assert_eq!(err, IsoError::unavailable("timeout"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(rec.ends.is_empty());
    }

    #[test]
    fn short_batch_is_unavailable() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| Ok(vec![45.0; dests.len() - 1]));
        let err = solve(SHIBUYA, 45.0, 10.0, 4, 15, oracle).unwrap_err();
        assert!(matches!(err, IsoError::TravelTimeUnavailable(_)), "{err:?}");
    }

    #[test]
    fn missing_element_is_unavailable() {
        let oracle = from_fn(|_, dests: &[GeoPoint], _| {
            let mut v = vec![45.0; dests.len()];
            v[2] = f64::NAN;
            Ok(v)
        });
        let err = solve(SHIBUYA, 45.0, 10.0, 4, 15, oracle).unwrap_err();
        assert!(matches!(err, IsoError::TravelTimeUnavailable(_)), "{err:?}");
    }

    #[test]
    fn options_reach_the_oracle() {
        let oracle = from_fn(|_, dests: &[GeoPoint], opts: &TravelOptions| {
            if opts.mode == TravelMode::Driving {
                Ok(vec![45.0; dests.len()])
            } else {
                Err(IsoError::unavailable("wrong mode"))
            }
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 4, 15))
            .mode(TravelMode::Driving)
            .build()
            .unwrap();
        assert!(solver.solve(SHIBUYA, &mut NoopObserver).is_ok());
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancel {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use iso_core::GeoPoint;
    use iso_oracle::from_fn;

    use super::helpers::{Recorder, SHIBUYA, config};
    use crate::{CancelToken, NoopObserver, SolverBuilder, Termination};

    #[test]
    fn cancelled_before_start_returns_seed_ring() {
        let calls = AtomicUsize::new(0);
        let oracle = from_fn(|_, dests: &[GeoPoint], _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.0; dests.len()])
        });
        let token = CancelToken::new();
        token.cancel();
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 6, 15))
            .cancel_token(token)
            .build()
            .unwrap();

        let sol = solver.solve(SHIBUYA, &mut NoopObserver).unwrap();

        assert_eq!(sol.termination, Termination::Cancelled { rounds: 0 });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(sol.polygon.len(), 6);
        assert!(sol.durations_min.is_empty());
        for v in sol.polygon.vertices() {
            assert!((SHIBUYA.distance_km(*v) - 3.75).abs() < 1e-9);
        }
    }

    #[test]
    fn cancel_mid_solve_stops_at_next_round() {
        let token = CancelToken::new();
        let remote = token.clone();
        let calls = AtomicUsize::new(0);
        let oracle = from_fn(move |_, dests: &[GeoPoint], _| {
            if calls.fetch_add(1, Ordering::SeqCst) == 1 {
                remote.cancel();
            }
            Ok(vec![0.0; dests.len()])
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(45.0, 10.0, 4, 15))
            .cancel_token(token.clone())
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        let sol = solver.solve(SHIBUYA, &mut rec).unwrap();

        assert!(token.is_cancelled());
        assert_eq!(sol.termination, Termination::Cancelled { rounds: 2 });
        assert_eq!(rec.starts, vec![1, 2]);
        assert_eq!(sol.durations_min, vec![0.0; 4]);
        assert!(!sol.termination.is_converged());
    }
}

// ── Multi-location driver ─────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use iso_core::{GeoPoint, IsoError, TravelOptions};
    use iso_oracle::{StaticGeocoder, from_fn};

    use super::helpers::{Recorder, SHIBUYA, config};
    use crate::{LocationQuery, LogObserver, SolverBuilder, solve_locations};

    const UENO: GeoPoint = GeoPoint::new(35.7141, 139.7774);

    fn geocoder() -> StaticGeocoder {
        StaticGeocoder::new()
            .with("Shibuya", SHIBUYA)
            .with("Ueno", UENO)
    }

    fn twelve_min_per_km(origin: GeoPoint, dests: &[GeoPoint], _: &TravelOptions) -> iso_core::IsoResult<Vec<f64>> {
        Ok(dests.iter().map(|&d| origin.distance_km(d) * 12.0).collect())
    }

    #[test]
    fn failures_are_isolated_per_location() {
        let solver = SolverBuilder::new(from_fn(twelve_min_per_km))
            .config(config(30.0, 5.0, 8, 15))
            .build()
            .unwrap();
        let queries = vec![
            LocationQuery::new("shibuya", "Shibuya"),
            LocationQuery::new("atlantis", "Atlantis"),
            LocationQuery::new("ueno", "Ueno"),
        ];

        let mut rec = Recorder::default();
        let out = solve_locations(&geocoder(), &solver, &queries, &mut rec);

        assert_eq!(out.len(), 3);
        assert!(out[0].is_ok());
        assert!(matches!(out[1].result, Err(IsoError::NotFound(_))));
        assert!(out[2].is_ok());
        assert_eq!(rec.locations, vec!["shibuya", "atlantis", "ueno"]);
        assert_eq!(rec.failures.len(), 1);
        assert_eq!(rec.failures[0].0, "atlantis");

        let ueno = out[2].result.as_ref().unwrap();
        assert_eq!(ueno.polygon.origin(), UENO);
    }

    #[test]
    fn oracle_outage_at_one_origin_does_not_abort_batch() {
        let oracle = from_fn(|origin: GeoPoint, dests: &[GeoPoint], opts: &TravelOptions| {
            if origin == UENO {
                Err(IsoError::unavailable("quota exceeded"))
            } else {
                twelve_min_per_km(origin, dests, opts)
            }
        });
        let solver = SolverBuilder::new(oracle)
            .config(config(30.0, 5.0, 8, 15))
            .build()
            .unwrap();
        let queries = vec![
            LocationQuery::new("ueno", "Ueno"),
            LocationQuery::new("shibuya", "Shibuya"),
        ];

        let out = solve_locations(&geocoder(), &solver, &queries, &mut LogObserver::default());

        assert!(matches!(out[0].result, Err(IsoError::TravelTimeUnavailable(_))));
        assert!(out[1].is_ok());
    }

    #[test]
    fn per_query_overrides_apply() {
        let solver = SolverBuilder::new(from_fn(twelve_min_per_km))
            .config(config(30.0, 5.0, 8, 15))
            .build()
            .unwrap();
        let queries = vec![
            LocationQuery::new("wide", "Shibuya").duration(45.0).angles(20),
            LocationQuery::new("bad", "Shibuya").angles(2),
        ];

        let out = solve_locations(&geocoder(), &solver, &queries, &mut LogObserver::default());

        let wide = out[0].result.as_ref().unwrap();
        assert_eq!(wide.polygon.len(), 20);
        assert!(wide.radii_km.iter().all(|r| (r - 3.75).abs() < 1e-9));
        assert!(matches!(out[1].result, Err(IsoError::InvalidArgument(_))));
    }
}
