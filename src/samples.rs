//! Reference curves that exercise the approximation's special cases.

use crate::geometry::curve::CubicBezier;
use crate::math::Point2;

/// A labeled test curve.
#[derive(Debug, Clone, Copy)]
pub struct SampleCurve {
    pub label: &'static str,
    pub bezier: CubicBezier,
}

const SAMPLES: [(&str, [(f64, f64); 4]); 15] = [
    (
        "convex",
        [(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (350.0, 350.0)],
    ),
    (
        "shallow convex",
        [(100.0, 500.0), (250.0, 350.0), (450.0, 350.0), (500.0, 500.0)],
    ),
    (
        "one inflexion",
        [(150.0, 500.0), (100.0, 100.0), (500.0, 350.0), (350.0, 150.0)],
    ),
    (
        "two inflexions",
        [(100.0, 500.0), (350.0, 100.0), (100.0, 200.0), (500.0, 400.0)],
    ),
    (
        "short bend",
        [
            (233.898_31, 285.016_900_000_000_1),
            (233.898_31, 293.016_900_000_000_1),
            (230.564_976_666_666_8, 301.016_900_000_000_1),
            (223.898_31, 309.016_900_000_000_1),
        ],
    ),
    (
        "short bend with level end",
        [
            (204.898_31, 328.0169),
            (198.898_31, 334.0169),
            (191.231_643_333_333_4, 337.0169),
            (181.898_31, 337.0169),
        ],
    ),
    (
        "nearly straight hook",
        [(199.0, 135.0), (199.0, 134.0), (210.0, 134.0), (211.0, 134.0)],
    ),
    (
        "nearly closed loop",
        [(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (100.0, 501.0)],
    ),
    (
        "closed loop",
        [(100.0, 500.0), (150.0, 100.0), (500.0, 150.0), (100.0, 500.0)],
    ),
    (
        "start control on start point",
        [
            (692.609_187_628_346_6, 499.299_990_236_220_5),
            (692.609_187_628_346_6, 499.299_990_236_220_5),
            (707.160_642_746_456_8, 519.827_445_354_330_7),
            (707.160_642_746_456_8, 525.381_735_118_110_2),
        ],
    ),
    (
        "end control on end point",
        [
            (218.920_273_323_420_6, 270.316_658_267_716_55),
            (214.461_116_108_362_38, 268.534_094_173_228_37),
            (187.887_335_203_899_4, 259.043_473_700_787_44),
            (187.887_335_203_899_4, 259.043_473_700_787_44),
        ],
    ),
    (
        "end control on end point, steep",
        [
            (707.160_642_746_456_8, 525.381_735_118_110_2),
            (707.160_642_746_456_8, 530.936_024_881_889_8),
            (705.510_785_423_622_2, 566.190_087_874_015_7),
            (705.510_785_423_622_2, 566.190_087_874_015_7),
        ],
    ),
    (
        "small inflected corner",
        [
            (587.889_221_329_134, 482.321_483_149_606_25),
            (587.889_221_329_134, 485.321_473_700_787_35),
            (585.639_221_329_134, 486.071_464_251_968_45),
            (584.889_230_777_952_9, 488.321_464_251_968_45),
        ],
    ),
    (
        "parallel control lines",
        [(600.0, 400.0), (500.0, 400.0), (500.0, 476.0), (600.0, 476.0)],
    ),
    (
        "inflexion at a third",
        [(460.0, 365.0), (440.0, 365.0), (400.0, 466.0), (400.0, 365.0)],
    ),
];

/// Returns the reference curves in a fixed order.
#[must_use]
pub fn sample_curves() -> Vec<SampleCurve> {
    SAMPLES
        .iter()
        .map(|&(label, points)| {
            let [p1, c1, c2, p2] = points.map(|(x, y)| Point2::new(x, y));
            SampleCurve {
                label,
                bezier: CubicBezier::new(p1, c1, c2, p2),
            }
        })
        .collect()
}
