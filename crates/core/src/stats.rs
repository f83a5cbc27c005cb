//! Reductions over `f64` slices. Every function returns `None` for an empty
//! slice instead of producing `NaN`.

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Slope of the ordinary least-squares line through `(i, values[i])`.
///
/// A single point has no defined slope; `0.0` is returned, which is also the
/// minimum-norm least-squares answer.
pub fn linear_slope(values: &[f64]) -> Option<f64> {
    let y_mean = mean(values)?;
    let x_mean = (values.len() - 1) as f64 / 2.0;

    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den == 0.0 {
        return Some(0.0);
    }
    Some(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_slices_yield_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(linear_slope(&[]), None);
    }

    #[test]
    fn mean_min_max() {
        let v = [3.0, 1.0, 4.0, 1.5];
        assert!((mean(&v).unwrap() - 2.375).abs() < EPS);
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(4.0));
    }

    #[test]
    fn slope_of_exact_line() {
        let v: Vec<f64> = (0..10).map(|i| 2.5 * i as f64 - 7.0).collect();
        assert!((linear_slope(&v).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn slope_of_two_points() {
        assert!((linear_slope(&[10.0, 4.0]).unwrap() + 6.0).abs() < EPS);
    }

    #[test]
    fn slope_of_single_point_is_zero() {
        assert_eq!(linear_slope(&[42.0]), Some(0.0));
    }

    #[test]
    fn slope_of_noisy_data() {
        // Least-squares fit of (0,1) (1,3) (2,2) (3,6): slope = 1.4.
        assert!((linear_slope(&[1.0, 3.0, 2.0, 6.0]).unwrap() - 1.4).abs() < EPS);
    }
}
