mod tests {
    use saber_blade::easing::{
        blade_threshold, ease_linear, ease_out_quad, ease_sqrt, session_progress,
    };

    #[test]
    fn test_ease_sqrt() {
        assert_eq!(ease_sqrt(0.0), 0.0);
        assert_eq!(ease_sqrt(0.25), 0.5);
        assert_eq!(ease_sqrt(1.0), 1.0);
        assert!((ease_sqrt(0.75) - 0.866).abs() < 0.001);
    }

    #[test]
    fn test_other_curves() {
        assert_eq!(ease_linear(0.3), 0.3);
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn test_session_progress() {
        assert_eq!(session_progress(0, 980), 0.0);
        assert_eq!(session_progress(245, 980), 0.25);
        assert_eq!(session_progress(980, 980), 1.0);
        assert_eq!(session_progress(1500, 980), 1.0);
        assert_eq!(session_progress(0, 0), 1.0);
    }

    #[test]
    fn test_blade_threshold() {
        assert_eq!(blade_threshold(0.0, 50), 0);
        assert_eq!(blade_threshold(0.5, 50), 25);
        assert_eq!(blade_threshold(ease_sqrt(0.75), 50), 43);
        assert_eq!(blade_threshold(1.0, 50), 50);
    }

    #[test]
    fn test_blade_threshold_rounds_half_up() {
        assert_eq!(blade_threshold(0.5, 5), 3);
        assert_eq!(blade_threshold(0.49, 5), 2);
    }

    #[test]
    fn test_blade_threshold_is_clamped() {
        assert_eq!(blade_threshold(1.5, 50), 50);
        assert_eq!(blade_threshold(-0.5, 50), 0);
        assert_eq!(blade_threshold(f32::NAN, 50), 0);
        assert_eq!(blade_threshold(0.7, 0), 0);
    }
}
