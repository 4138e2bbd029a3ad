//! Adaptive Simpson quadrature.

const REL_TOLERANCE: f64 = 1e-9;
const ABS_TOLERANCE: f64 = 1e-14;
const MAX_DEPTH: u32 = 48;

/// Integrate `f` over `[a, b]`.
///
/// Integrable endpoint singularities such as `sqrt(x)` at zero are handled by
/// subdividing. A NaN anywhere in the integrand makes the result NaN.
pub fn integrate<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return 0.0;
    }
    let (fa, fm, fb) = (f(a), f(0.5 * (a + b)), f(b));
    let whole = simpson(a, b, fa, fm, fb);
    if !whole.is_finite() {
        return whole;
    }
    let tolerance = (REL_TOLERANCE * whole.abs()).max(ABS_TOLERANCE);
    refine(&f, Segment { a, b, fa, fm, fb, whole }, tolerance, MAX_DEPTH)
}

#[derive(Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F>(f: &F, seg: Segment, tolerance: f64, depth: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (seg.a + seg.b);
    let flm = f(0.5 * (seg.a + m));
    let frm = f(0.5 * (m + seg.b));
    let left = simpson(seg.a, m, seg.fa, flm, seg.fm);
    let right = simpson(m, seg.b, seg.fm, frm, seg.fb);
    let delta = left + right - seg.whole;

    if !delta.is_finite() {
        return left + right;
    }
    if depth == 0 || delta.abs() <= 15.0 * tolerance {
        return left + right + delta / 15.0;
    }

    let left_seg = Segment {
        a: seg.a,
        b: m,
        fa: seg.fa,
        fm: flm,
        fb: seg.fm,
        whole: left,
    };
    let right_seg = Segment {
        a: m,
        b: seg.b,
        fa: seg.fm,
        fm: frm,
        fb: seg.fb,
        whole: right,
    };
    refine(f, left_seg, tolerance / 2.0, depth - 1) + refine(f, right_seg, tolerance / 2.0, depth - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1e-300)
    }

    #[test]
    fn test_polynomial_is_exact() {
        let value = integrate(|x| 3.0 * x * x + 2.0 * x + 1.0, 0.0, 2.0);
        assert!(close(value, 14.0, 1e-12), "{value}");
    }

    #[test]
    fn test_empty_and_reversed_interval() {
        assert_eq!(integrate(f64::sin, 1.0, 1.0), 0.0);
        let forward = integrate(f64::exp, 0.0, 1.0);
        let backward = integrate(f64::exp, 1.0, 0.0);
        assert!(close(forward, std::f64::consts::E - 1.0, 1e-9));
        assert!(close(backward, -forward, 1e-12));
    }

    #[test]
    fn test_sqrt_singularity() {
        let value = integrate(f64::sqrt, 0.0, 1.0);
        assert!(close(value, 2.0 / 3.0, 1e-8), "{value}");
    }

    #[test]
    fn test_nan_propagates() {
        assert!(integrate(|_| f64::NAN, 0.0, 1.0).is_nan());
        assert!(integrate(|x| if x > 0.7 { f64::NAN } else { x }, 0.0, 1.0).is_nan());
    }
}
