#[cfg(test)]
mod tests {
    use crate::error::BasisError;
    use crate::kpoint::{kinetic, KPoint};
    use crate::plane_wave::{PlaneWave, PlaneWaveBuilder};
    use std::collections::HashSet;

    fn k_max(cutoff: f64) -> i32 {
        (cutoff * cutoff).ceil() as i32
    }

    #[test]
    fn test_mesh_is_sound_and_complete() {
        for &cutoff in &[0.0, 0.5, 1.0, 1.5, 2.0, 2.4, 3.0] {
            let pw = PlaneWave::new(cutoff).unwrap();
            let retained: HashSet<KPoint> = pw.iter().copied().collect();
            assert_eq!(retained.len(), pw.len(), "duplicate k-point at cutoff {}", cutoff);

            let k = k_max(cutoff);
            for n in -k..=k {
                for m in -k..=k {
                    for l in -k..=k {
                        let point = KPoint::new(n, m, l);
                        let inside = kinetic(&point) <= cutoff;
                        assert_eq!(
                            retained.contains(&point),
                            inside,
                            "k-point {} misclassified at cutoff {}",
                            point,
                            cutoff
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_mesh_sorted_by_kinetic_energy() {
        let pw = PlaneWave::new(3.3).unwrap();
        assert!(pw.is_sorted());
        for pair in pw.as_slice().windows(2) {
            assert!(kinetic(&pair[0]) <= kinetic(&pair[1]));
        }
        assert_eq!(pw[0], KPoint::new(0, 0, 0));
    }

    #[test]
    fn test_cutoff_2_4() {
        let pw = PlaneWave::new(2.4).unwrap();
        assert_eq!(pw.cutoff(), 2.4);
        let points: HashSet<KPoint> = pw.iter().copied().collect();

        assert!(points.contains(&KPoint::new(0, 0, 0)));
        for &(n, m, l) in &[
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
            (2, 1, 0),
            (-1, 0, -2),
            (2, 0, 0),
        ] {
            assert!(points.contains(&KPoint::new(n, m, l)), "missing ({n},{m},{l})");
        }
        // |(2,1,1)| = |(-1,-1,-2)| = sqrt(6) > 2.4, |(3,0,0)| = 3
        assert!(!points.contains(&KPoint::new(3, 0, 0)));
        assert!(!points.contains(&KPoint::new(-1, -1, -2)));
        assert!(!points.contains(&KPoint::new(0, 0, -3)));
        assert!(!points.contains(&KPoint::new(2, 1, 1)));
        assert!(!points.contains(&KPoint::new(2, 2, 0)));

        // shells: 1 + 6 + 12 + 8 + 6 + 24 (norm 0, 1, sqrt2, sqrt3, 2, sqrt5)
        assert_eq!(pw.len(), 57);
        assert_eq!(pw.max_kinetic(), Some(5.0_f64.sqrt()));
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        let pw = PlaneWave::new(1.0).unwrap();
        assert_eq!(pw.len(), 7);
        assert_eq!(pw.max_kinetic(), Some(1.0));

        let pw = PlaneWave::new(0.0).unwrap();
        assert_eq!(pw.len(), 1);
        assert_eq!(pw[0], KPoint::new(0, 0, 0));
    }

    #[test]
    fn test_negative_cutoff_rejected() {
        assert!(matches!(
            PlaneWave::new(-0.1),
            Err(BasisError::InvalidArgument(_))
        ));
        assert!(matches!(
            PlaneWaveBuilder::new(f64::NAN),
            Err(BasisError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let pw = PlaneWave::new(1.0).unwrap();
        assert!(pw.get(6).is_ok());
        assert_eq!(
            pw.get(7),
            Err(BasisError::OutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_set_cutoff_keeps_state_on_failure() {
        let mut builder = PlaneWaveBuilder::new(2.0).unwrap();
        builder.append(KPoint::new(1, 0, 0));

        assert!(builder.set_cutoff(-1.0).is_err());
        assert_eq!(builder.cutoff(), 2.0);
        assert_eq!(builder.len(), 1);

        builder.set_cutoff(0.5).unwrap();
        assert_eq!(builder.cutoff(), 0.5);
        // staged points are not re-filtered by a new cutoff
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_append_then_sort() {
        let mut builder = PlaneWaveBuilder::new(10.0).unwrap();
        for &(n, m, l) in &[(3, 0, 0), (0, 0, 0), (1, 1, 1), (0, -1, 0), (2, 2, 1)] {
            builder.append(KPoint::new(n, m, l));
        }
        builder.sort();
        let pw = builder.build();

        assert!(pw.is_sorted());
        let energies: Vec<f64> = pw.iter().map(kinetic).collect();
        assert_eq!(energies, vec![0.0, 1.0, 3.0_f64.sqrt(), 3.0, 3.0]);
    }

    #[test]
    fn test_builder_enumerate_after_cutoff_change() {
        let mut builder = PlaneWaveBuilder::new(3.0).unwrap();
        builder.set_cutoff(1.0).unwrap();
        builder.enumerate().unwrap();
        let pw = builder.build();
        assert_eq!(pw.cutoff(), 1.0);
        assert_eq!(pw.len(), 7);
    }

    #[test]
    fn test_iteration_matches_indexing() {
        let pw = PlaneWave::new(1.5).unwrap();
        for (i, k) in (&pw).into_iter().enumerate() {
            assert_eq!(pw.get(i).unwrap(), k);
        }
    }
}
