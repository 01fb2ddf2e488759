mod tests {
    use hikari_slab::color::{Hsv, Rgb, hsv2rgb, rgb2hsv};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// `rgb2hsv` reports saturation and value on a 0-100 scale
    fn rescale(hsv: Hsv) -> Hsv {
        Hsv::new(hsv.h, hsv.s / 100.0, hsv.v / 100.0)
    }

    #[test]
    fn test_hsv2rgb_primaries() {
        assert_eq!(hsv2rgb(Hsv::new(0.0, 1.0, 1.0)), RED);
        assert_eq!(hsv2rgb(Hsv::new(120.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv2rgb(Hsv::new(240.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv2rgb(Hsv::new(60.0, 1.0, 1.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsv2rgb(Hsv::new(360.0, 1.0, 1.0)), RED);
    }

    #[test]
    fn test_hsv2rgb_full_turn_wraps() {
        for (s, v) in [(1.0, 1.0), (0.5, 0.8), (0.25, 0.3)] {
            assert_eq!(hsv2rgb(Hsv::new(360.0, s, v)), hsv2rgb(Hsv::new(0.0, s, v)));
        }
    }

    #[test]
    fn test_hsv2rgb_out_of_range_is_black() {
        assert_eq!(hsv2rgb(Hsv::new(361.0, 1.0, 1.0)), BLACK);
        assert_eq!(hsv2rgb(Hsv::new(-1.0, 1.0, 1.0)), BLACK);
        assert_eq!(hsv2rgb(Hsv::new(0.0, 1.5, 1.0)), BLACK);
        assert_eq!(hsv2rgb(Hsv::new(0.0, 1.0, 100.0)), BLACK);
    }

    #[test]
    fn test_rgb2hsv_scales() {
        let hsv = rgb2hsv(RED);
        assert!(approx(hsv.h, 0.0));
        assert!(approx(hsv.s, 100.0));
        assert!(approx(hsv.v, 100.0));

        let hsv = rgb2hsv(Rgb::new(0, 0, 255));
        assert!(approx(hsv.h, 240.0));

        let hsv = rgb2hsv(BLACK);
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_gray_round_trip() {
        for level in [0u8, 1, 64, 128, 200, 255] {
            let gray = Rgb::new(level, level, level);
            let hsv = rgb2hsv(gray);
            assert!(approx(hsv.h, 0.0));
            assert!(approx(hsv.s, 0.0));
            assert_eq!(hsv2rgb(rescale(hsv)), gray);
        }
    }

    #[test]
    fn test_red_round_trip() {
        assert_eq!(hsv2rgb(rescale(rgb2hsv(RED))), RED);
    }
}
