//! Single-pair efficiency: linear decay of a neighbour's power with distance.
//!
//! The power applies in full at distance 1 and fades to nothing at
//! `sqrt(2) * radius + 1`. Positive power can only raise efficiency, and
//! never by more than the power itself. Negative power (a debuff) is
//! unclamped and may push efficiency below base.

/// Efficiency of a building with `base_efficiency` given one neighbour at
/// `distance` exerting `power`. `None` means the neighbour is out of range,
/// which leaves the base unchanged.
pub fn pair_efficiency(distance: Option<f64>, radius: u32, power: i32, base_efficiency: f64) -> f64 {
    let dist = match distance {
        Some(dist) => dist,
        None => return base_efficiency,
    };

    if radius == 0 {
        return base_efficiency;
    }

    let debuff = power < 0;
    let power = f64::from(power);

    let radius_diagonal = std::f64::consts::SQRT_2 * f64::from(radius);
    let dist_factor = power / radius_diagonal;

    let mut raw = power - (dist - 1.0) * dist_factor;
    if !debuff && raw > power {
        raw = power;
    }

    let efficiency = base_efficiency + raw;
    if !debuff && efficiency < base_efficiency {
        return base_efficiency;
    }

    efficiency
}

/// Change in efficiency contributed by one neighbour.
pub fn pair_delta(distance: Option<f64>, radius: u32, power: i32, base_efficiency: f64) -> f64 {
    pair_efficiency(distance, radius, power, base_efficiency) - base_efficiency
}
