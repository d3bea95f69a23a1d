/// Integration tests for the coordinate transforms
/// Reference values match the ACA aspect tools for a pointing of
/// RA=10, Dec=20, Roll=30 and a target offset by (+0.5, -0.1) deg.
#[cfg(test)]
mod quatutil_tests {
    use ska_quatutil::{
        eci2radec, eci2radec_batch, radec2eci, radec2eci_batch, radec2yagzag, radec2yagzag_batch,
        yagzag2radec, yagzag2radec_batch, Attitude, Quat, QuatUtilError,
    };

    const RA1: f64 = 10.0;
    const DEC1: f64 = 20.0;
    const RA2: f64 = RA1 + 0.5;
    const DEC2: f64 = DEC1 - 0.1;
    const ROLL: f64 = 30.0;

    const YAG2: f64 = 0.35751029916939936;
    const ZAG2: f64 = -0.32107186086370215;

    fn q0() -> Quat {
        Quat::from_equatorial(RA1, DEC1, ROLL)
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual} (tol {tol})"
        );
    }

    mod test_radec_eci {
        use super::*;
        use ndarray::array;

        #[test]
        fn test_radec2eci() {
            let eci = radec2eci(RA1, DEC1);
            assert_close(eci[0], 0.92541658, 1e-8);
            assert_close(eci[1], 0.16317591, 1e-8);
            assert_close(eci[2], 0.34202014, 1e-8);
        }

        #[test]
        fn test_eci2radec() {
            let (ra, dec) = eci2radec(&[0.92541658, 0.16317591, 0.34202014]);
            assert_close(ra, 9.9999999129952908, 1e-10);
            assert_close(dec, 19.999999794004037, 1e-10);
        }

        #[test]
        fn test_vectorized_eci2radec() {
            let ecis = array![
                [0.92541658, 0.9248273],
                [0.16317591, -0.16307201],
                [0.34202014, 0.34365969]
            ];
            let (ras, decs) = eci2radec_batch(ecis.view()).unwrap();
            assert_close(ras[0], 9.9999999129952908, 1e-10);
            assert_close(ras[1], 349.9999997287627, 1e-10);
            assert_close(decs[0], 19.999999794004037, 1e-10);
            assert_close(decs[1], 20.099999743270516, 1e-10);
        }

        #[test]
        fn test_vectorized_radec() {
            let ras: Vec<f64> = (0..10).map(f64::from).collect();
            let decs: Vec<f64> = (0..10).map(f64::from).collect();
            let ecis = radec2eci_batch(&ras, &decs).unwrap();
            assert_eq!(ecis.shape(), &[3, 10]);

            let (ra1s, dec1s) = eci2radec_batch(ecis.view()).unwrap();
            for i in 0..10 {
                assert_close(ra1s[i], ras[i], 1e-10);
                assert_close(dec1s[i], decs[i], 1e-10);
            }
        }

        #[test]
        fn test_batch_matches_scalar_exactly() {
            let ras = [0.0, 45.0, 181.5, 270.25, 359.999];
            let decs = [-89.5, -10.0, 0.0, 33.3, 89.9];
            let ecis = radec2eci_batch(&ras, &decs).unwrap();
            let (ra1s, dec1s) = eci2radec_batch(ecis.view()).unwrap();
            for i in 0..ras.len() {
                let eci = radec2eci(ras[i], decs[i]);
                for k in 0..3 {
                    assert_eq!(ecis[[k, i]], eci[k]);
                }
                let (ra, dec) = eci2radec(&eci);
                assert_eq!(ra1s[i], ra);
                assert_eq!(dec1s[i], dec);
            }
        }

        #[test]
        fn test_round_trip_grid() {
            let mut ra = 0.0;
            while ra < 360.0 {
                let mut dec = -89.0;
                while dec <= 89.0 {
                    let (ra1, dec1) = eci2radec(&radec2eci(ra, dec));
                    assert_close(ra1, ra, 1e-9);
                    assert_close(dec1, dec, 1e-9);
                    dec += 7.25;
                }
                ra += 12.5;
            }
        }

        #[test]
        fn test_ra_wraps_into_range() {
            let (ra, _) = eci2radec(&radec2eci(-30.0, 5.0));
            assert_close(ra, 330.0, 1e-10);
            let (ra, _) = eci2radec(&radec2eci(400.0, 5.0));
            assert_close(ra, 40.0, 1e-10);
        }

        #[test]
        fn test_mismatched_lengths_error() {
            let err = radec2eci_batch(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
            assert!(matches!(err, QuatUtilError::ShapeMismatch { .. }));
            assert!(err.to_string().contains("ra has length 3"));
        }
    }

    mod test_yagzag {
        use super::*;

        #[test]
        fn test_radec2yagzag() {
            let (yag, zag) = radec2yagzag(RA2, DEC2, &q0());
            assert_close(yag, YAG2, 1e-10);
            assert_close(zag, ZAG2, 1e-10);
        }

        #[test]
        fn test_yagzag2radec() {
            let (ra, dec) = yagzag2radec(YAG2, ZAG2, &q0());
            assert_close(ra, RA2, 1e-10);
            assert_close(dec, DEC2, 1e-10);
        }

        #[test]
        fn test_transform_matrix_as_attitude() {
            let t = q0().transform();
            let (yag, zag) = radec2yagzag(RA2, DEC2, &t);
            assert_close(yag, YAG2, 1e-10);
            assert_close(zag, ZAG2, 1e-10);
        }

        #[test]
        fn test_vectorized_yagzag() {
            let ras: Vec<f64> = (1..11).map(f64::from).collect();
            let decs: Vec<f64> = (1..11).map(f64::from).collect();
            let q = q0();
            let (yags, zags) = radec2yagzag_batch(&ras, &decs, &q).unwrap();
            assert_eq!(yags.shape(), &[10]);
            assert_eq!(zags.shape(), &[10]);

            let (ra1s, dec1s) =
                yagzag2radec_batch(yags.as_slice().unwrap(), zags.as_slice().unwrap(), &q)
                    .unwrap();
            for i in 0..10 {
                assert_close(ra1s[i], ras[i], 1e-9);
                assert_close(dec1s[i], decs[i], 1e-9);
            }
        }

        #[test]
        fn test_batch_matches_scalar_exactly() {
            let q = Quat::from_equatorial(250.0, -60.0, 110.0);
            let ras = [249.0, 250.5, 252.0];
            let decs = [-61.0, -59.5, -60.2];
            let (yags, zags) = radec2yagzag_batch(&ras, &decs, &q).unwrap();
            for i in 0..ras.len() {
                let (yag, zag) = radec2yagzag(ras[i], decs[i], &q);
                assert_eq!(yags[i], yag);
                assert_eq!(zags[i], zag);
            }
        }

        #[test]
        fn test_round_trip_forward_hemisphere() {
            let pointings = [
                (0.0, 0.0, 0.0),
                (83.6, 22.0, 300.0),
                (200.0, -75.0, 45.0),
                (359.0, 85.0, 180.0),
            ];
            let offsets = [-2.0, -0.5, 0.0, 0.25, 1.5];
            for (ra0, dec0, roll0) in pointings {
                let q = Quat::from_equatorial(ra0, dec0, roll0);
                for yag in offsets {
                    for zag in offsets {
                        let (ra, dec) = yagzag2radec(yag, zag, &q);
                        let (yag1, zag1) = radec2yagzag(ra, dec, &q);
                        assert_close(yag1, yag, 1e-9);
                        assert_close(zag1, zag, 1e-9);
                    }
                }
            }
        }

        #[test]
        fn test_mismatched_lengths_error() {
            let err = radec2yagzag_batch(&[1.0], &[1.0, 2.0], &q0()).unwrap_err();
            assert_eq!(
                err,
                QuatUtilError::ShapeMismatch {
                    left_name: "ra",
                    left: 1,
                    right_name: "dec",
                    right: 2,
                }
            );
        }
    }
}
