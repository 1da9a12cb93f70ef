#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrim_widgets::CubicBezier;

#[derive(Debug, Arbitrary)]
struct Input {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    samples: Vec<f32>,
}

// Control x coordinates must stay in [0, 1] so sample_x is monotone; that is
// the domain the solver is defined over.
fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.5 }
}

// Output control points may overshoot [0, 1] but stay bounded so the cubic
// cannot blow up to infinity.
fn bounded(v: f32) -> f32 {
    if v.is_finite() { v.clamp(-8.0, 8.0) } else { 0.0 }
}

fuzz_target!(|input: Input| {
    let curve = CubicBezier::new(
        unit(input.x1),
        bounded(input.y1),
        unit(input.x2),
        bounded(input.y2),
    );

    assert_eq!(curve.eval(0.0), 0.0);
    assert_eq!(curve.eval(1.0), 1.0);

    for &raw in &input.samples {
        let x = if raw.is_finite() { raw } else { 0.0 };
        let y = curve.eval(x);
        assert!(y.is_finite(), "eval({x}) produced a non-finite value");
        // Bernstein weights peak at 4/9, so |y| <= 4/9 * (8 + 8) + 1.
        assert!(
            (-9.0..=9.0).contains(&y),
            "eval({x}) escaped its bound: {y}"
        );
    }
});
