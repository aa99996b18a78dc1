use twd97::{from_str, Error, LatLon, Twd97};

/// Round trips must recover the input within the third-order series
/// truncation tolerance everywhere over Taiwan's practical bounds.
#[test]
fn round_trip_within_taiwan() {
    for lat_step in 0..=20 {
        for lon_step in 0..=20 {
            let lat = 21.0 + f64::from(lat_step) * 0.25;
            let lon = 118.0 + f64::from(lon_step) * 0.25;

            let coord = LatLon::create(lat, lon).unwrap();
            let recovered = coord.to_twd97(false).unwrap().to_latlon(false).unwrap();

            assert!(
                (recovered.latitude() - lat).abs() < 1e-6,
                "latitude round trip failed at ({lat}, {lon}): {}",
                recovered.latitude()
            );
            assert!(
                (recovered.longitude() - lon).abs() < 1e-6,
                "longitude round trip failed at ({lat}, {lon}): {}",
                recovered.longitude()
            );
        }
    }
}

/// The equator crossing of the central meridian maps exactly to the false
/// origin, for both central meridians.
#[test]
fn false_origin_fixed_point() {
    for (lon, pkm) in [(121.0, false), (119.0, true)] {
        let coord = LatLon::create(0.0, lon).unwrap();
        let projected = coord.to_twd97(pkm).unwrap();

        assert!((projected.easting() - 250_000.0).abs() < 1e-6);
        assert!(projected.northing().abs() < 1e-6);
    }
}

#[test]
fn meridian_selection_changes_the_result() {
    let coord = LatLon::create(23.5, 120.0).unwrap();

    let standard = coord.to_twd97(false).unwrap();
    let outlying = coord.to_twd97(true).unwrap();

    // 120°E sits 1° east of one meridian and 1° west of the other, so the
    // two eastings differ by roughly two degrees of longitude.
    assert!((outlying.easting() - standard.easting() - 204_268.764_013_94).abs() < 1e-3);
    assert!((outlying.northing() - standard.northing()).abs() < 1e-6);
}

#[test]
fn forward_matches_reference_values() {
    let projected = LatLon::create(25.047924, 121.517081)
        .unwrap()
        .to_twd97(false)
        .unwrap();
    assert!((projected.easting() - 302_174.347_582_04).abs() < 1e-3);
    assert!((projected.northing() - 2_771_185.407_205_4).abs() < 1e-3);

    let projected = LatLon::create(23.5, 119.6).unwrap().to_twd97(true).unwrap();
    assert!((projected.easting() - 311_279.261_743_0).abs() < 1e-3);
    assert!((projected.northing() - 2_599_779.293_542_4).abs() < 1e-3);
}

#[test]
fn inverse_matches_reference_values() {
    let coord = Twd97::create(302_000.0, 2_771_000.0)
        .unwrap()
        .to_latlon(false)
        .unwrap();
    assert!((coord.latitude() - 25.046_256_158_694_72).abs() < 1e-8);
    assert!((coord.longitude() - 121.515_346_162_656_29).abs() < 1e-8);

    let coord = Twd97::create(180_000.0, 2_599_000.0)
        .unwrap()
        .to_latlon(true)
        .unwrap();
    assert!((coord.latitude() - 23.492_611_136_163_656).abs() < 1e-8);
    assert!((coord.longitude() - 118.314_653_984_929_11).abs() < 1e-8);

    // A point on the central meridian keeps its longitude exactly.
    let coord = Twd97::create(250_000.0, 2_544_283.0)
        .unwrap()
        .to_latlon(false)
        .unwrap();
    assert!((coord.latitude() - 22.999_998_875_685_034).abs() < 1e-8);
    assert!((coord.longitude() - 121.0).abs() < 1e-12);
}

/// Coordinates absurdly far from the false origin push the hyperbolic
/// harmonics past overflow; the failure must be explicit, not a NaN.
#[test]
fn far_from_origin_inverse_fails_loudly() {
    let coord = Twd97::create(1e12, 1e12).unwrap();

    assert!(matches!(coord.to_latlon(false), Err(Error::SingularCoord(_))));
}

#[test]
fn parses_heterogeneous_wgs84_input() {
    let coord: LatLon = from_str("24°14'13.456\", 121°32'6.0\"").unwrap();
    assert!((coord.latitude() - 24.237_071_111_111_113).abs() < 1e-12);
    assert!((coord.longitude() - 121.535).abs() < 1e-12);

    let coord: LatLon = from_str("24°14.227' , 121.5").unwrap();
    assert!((coord.latitude() - 24.237_116_666_666_665).abs() < 1e-12);
    assert!((coord.longitude() - 121.5).abs() < 1e-12);

    let coord: Twd97 = from_str("302000, 2771000").unwrap();
    assert_eq!(coord.easting(), 302_000.0);
    assert_eq!(coord.northing(), 2_771_000.0);

    assert!(from_str::<_, LatLon>("no comma here").is_err());
    assert!(from_str::<_, LatLon>("24.0,not-a-longitude").is_err());
    assert!(from_str::<_, Twd97>("302000,abc").is_err());
}
