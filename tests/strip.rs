mod tests {
    use saber_blade::strip::DEFAULT_PIXEL_COUNT;
    use saber_blade::{FrameStrip, OutputDriver, PixelStrip, Rgb};

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 20 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_nothing_is_written_before_show() {
        let mut strip = FrameStrip::<_, 8>::new(RecordingDriver::default());
        strip.set_pixel(0, BLUE);
        assert!(strip.driver().frames.is_empty());

        strip.show();
        assert_eq!(strip.driver().frames.len(), 1);
        assert_eq!(strip.driver().frames[0][0], BLUE);
    }

    #[test]
    fn test_active_length() {
        let mut strip =
            FrameStrip::<_, 64>::with_len(RecordingDriver::default(), DEFAULT_PIXEL_COUNT);
        assert_eq!(strip.len(), 50);
        strip.show();
        assert_eq!(strip.driver().frames[0].len(), 50);

        let strip = FrameStrip::<_, 4>::with_len(RecordingDriver::default(), 10);
        assert_eq!(strip.len(), 4);
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut strip = FrameStrip::<_, 8>::with_len(RecordingDriver::default(), 4);
        strip.set_pixel(4, BLUE);
        strip.set_pixel(100, BLUE);
        assert!(strip.pixels().iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_clear() {
        let mut strip = FrameStrip::<_, 4>::new(RecordingDriver::default());
        for index in 0..4 {
            strip.set_pixel(index, BLUE);
        }
        strip.clear();
        strip.show();
        assert_eq!(strip.driver().frames[0], [BLACK; 4]);
    }
}
