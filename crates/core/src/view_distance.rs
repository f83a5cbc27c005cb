use crate::{stats, PerfError, Result};

/// Fraction of the mean FPS below which a reading counts as a drop.
pub const THRESHOLD_FACTOR: f64 = 0.9;

/// Pick a view distance that kept the frame rate acceptable.
///
/// `fps_samples[i]` is the frame rate measured at `candidate_distances[i]`.
/// The first reading below 90 % of the mean FPS stops the scan and yields
/// that reading's distance minus one. When no reading drops below the
/// threshold the last (most generous) distance is returned.
///
/// # Errors
///
/// [`PerfError::InvalidArgument`] if the slices differ in length or are
/// empty. Both checks run before any computation.
pub fn recommend_view_distance(fps_samples: &[f64], candidate_distances: &[i64]) -> Result<i64> {
    if fps_samples.len() != candidate_distances.len() {
        return Err(PerfError::InvalidArgument(format!(
            "counts must match: {} FPS samples, {} distances",
            fps_samples.len(),
            candidate_distances.len()
        )));
    }

    let (Some(mean), Some(&last)) = (stats::mean(fps_samples), candidate_distances.last()) else {
        return Err(PerfError::InvalidArgument(
            "at least one FPS sample is required".to_string(),
        ));
    };

    let threshold = mean * THRESHOLD_FACTOR;
    let recommended = fps_samples
        .iter()
        .zip(candidate_distances)
        .find(|&(&fps, _)| fps < threshold)
        .map_or(last, |(_, &distance)| distance - 1);

    tracing::debug!(threshold, recommended, "view distance recommendation");
    Ok(recommended)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backs_off_from_first_drop() {
        let fps = [100.0, 100.0, 100.0, 50.0];
        let distances = [10, 20, 30, 40];
        assert_eq!(recommend_view_distance(&fps, &distances).unwrap(), 39);
    }

    #[test]
    fn returns_last_distance_without_drop() {
        let fps = [100.0, 100.0, 100.0];
        let distances = [10, 20, 30];
        assert_eq!(recommend_view_distance(&fps, &distances).unwrap(), 30);
    }

    #[test]
    fn stops_at_first_drop_not_worst() {
        // mean = 80, threshold = 72
        let fps = [100.0, 70.0, 100.0, 50.0];
        let distances = [10, 20, 30, 40];
        assert_eq!(recommend_view_distance(&fps, &distances).unwrap(), 19);
    }

    #[test]
    fn reading_equal_to_threshold_is_acceptable() {
        // mean = 100, threshold = 90; 90 is not below it.
        let fps = [110.0, 100.0, 90.0];
        let distances = [1, 2, 3];
        assert_eq!(recommend_view_distance(&fps, &distances).unwrap(), 3);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = recommend_view_distance(&[60.0, 60.0], &[10]).unwrap_err();
        assert!(matches!(err, PerfError::InvalidArgument(_)));
        assert!(err.to_string().contains("counts must match"));
    }

    #[test]
    fn empty_inputs_fail() {
        let err = recommend_view_distance(&[], &[]).unwrap_err();
        assert!(matches!(err, PerfError::InvalidArgument(_)));
    }
}
