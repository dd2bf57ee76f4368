use crate::model::VisualProgress;

/// Reduce the progress curve to the Speed Index: the discretized integral
/// of the un-painted fraction over time. An instant full paint scores 0; a
/// slow or partial paint accumulates area under `1 − progress`.
///
/// An empty curve means the page had no paintable area; first paint itself
/// is the metric then. No clamping or rounding is applied.
pub fn integrate(progress: &VisualProgress, first_paint: f64) -> f64 {
    if progress.is_empty() {
        return first_paint;
    }

    let mut last_time = 0.0;
    let mut last_progress = 0.0;
    let mut speed_index = 0.0;
    for point in &progress.points {
        let elapsed = point.time - last_time;
        if elapsed > 0.0 && last_progress < 1.0 {
            speed_index += elapsed * (1.0 - last_progress);
        }
        last_time = point.time;
        last_progress = point.progress;
    }
    speed_index
}
