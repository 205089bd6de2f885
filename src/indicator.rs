use crate::scroll::sanitize_progress;

/// Filled arc of the progress ring.
pub fn arc_length(progress: f64, total_arc: f64) -> f64 {
    sanitize_progress(progress) * total_arc
}

/// Value for the ring's `stroke-dasharray`: the filled arc followed by the full circumference.
pub fn dash_array(progress: f64, total_arc: f64) -> String {
    format!("{} {}", arc_length(progress, total_arc), total_arc)
}

pub fn percentage_label(progress: f64) -> String {
    format!("{}%", (sanitize_progress(progress) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARC: f64 = 283.0;

    #[test]
    fn test_arc_length_is_linear() {
        assert_eq!(arc_length(0.0, ARC), 0.0);
        assert_eq!(arc_length(0.5, ARC), 141.5);
        assert_eq!(arc_length(1.0, ARC), 283.0);
        assert_eq!(arc_length(0.25, ARC) * 2.0, arc_length(0.5, ARC));
    }

    #[test]
    fn test_percentage_label() {
        assert_eq!(percentage_label(0.0), "0%");
        assert_eq!(percentage_label(0.5), "50%");
        assert_eq!(percentage_label(1.0), "100%");
        assert_eq!(percentage_label(0.6), "60%");
        assert_eq!(percentage_label(0.004), "0%");
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(percentage_label(f64::NAN), "0%");
        assert_eq!(percentage_label(-0.2), "0%");
        assert_eq!(percentage_label(1.3), "100%");
        assert_eq!(arc_length(2.0, ARC), ARC);
    }

    #[test]
    fn test_dash_array() {
        assert_eq!(dash_array(0.0, ARC), "0 283");
        assert_eq!(dash_array(1.0, ARC), "283 283");
    }
}
