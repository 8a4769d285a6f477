/// Probability that a banana offered at `price` is bought.
///
/// `p(x) = (1 + e) / (1 + e^(x + 1))`. The curve is strictly decreasing and
/// tends to zero for large prices. At `x = 0` numerator and denominator are the
/// same number, so a free banana is always taken.
#[must_use]
pub fn sale_chance(price: f64) -> f64 {
    let e = 1f64.exp();
    (1.0 + e) / (1.0 + (price + 1.0).exp())
}
