/// `sin^2(1/x) / x^2`, the benchmark target on `[1, 1000]`.
///
/// Substituting `u = 1/x` gives `integral sin^2(u) du` over `[1/b, 1/a]`.
#[inline]
pub fn oscillating(x: f64) -> f64 {
    let s = (1.0 / x).sin();
    1.0 / (x * x) * s * s
}

/// `4 / (1 + x^2)`, integrates to pi over `[0, 1]`.
#[inline]
pub fn arctan_kernel(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}
