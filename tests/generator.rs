mod tests {
    use hikari_slab::generator::{GlowConfig, GlowFunc, WaveConfig, WaveFunc};

    const WAVE: WaveConfig = WaveConfig {
        period_ms: 200,
        ym: 0.4,
        yd: 0.2,
    };

    const GLOW: GlowConfig = GlowConfig {
        a: 0.1,
        b: 1.0,
        ym: 0.5,
        yd: 0.3,
    };

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_wave_first_sample_is_bottom() {
        let mut wave = WaveFunc::new(WAVE);
        assert!(approx(wave.process(100), 0.2));
    }

    #[test]
    fn test_wave_triangle() {
        let mut wave = WaveFunc::new(WAVE);
        assert!(approx(wave.process(1000), 0.2));
        assert!(approx(wave.process(1100), 0.4));
        assert!(approx(wave.process(1200), 0.6));
        assert!(approx(wave.process(1300), 0.4));
        // Two periods after the anchor the wave starts over
        assert!(approx(wave.process(1400), 0.2));
        assert!(approx(wave.process(1450), 0.3));
    }

    #[test]
    fn test_wave_bounds() {
        let mut wave = WaveFunc::new(WAVE);
        for t in (0..5000).step_by(7) {
            let y = wave.process(t);
            assert!((0.2 - 1e-4..=0.6 + 1e-4).contains(&y), "t={t} y={y}");
        }
    }

    #[test]
    fn test_wave_time_going_backwards() {
        let mut wave = WaveFunc::new(WAVE);
        wave.process(1000);
        assert!(approx(wave.process(900), 0.2));
    }

    #[test]
    fn test_wave_reset() {
        let mut wave = WaveFunc::new(WAVE);
        wave.process(0);
        wave.process(150);
        wave.reset();
        assert!(approx(wave.process(150), 0.2));
    }

    #[test]
    fn test_glow_first_sample_is_middle() {
        let mut glow = GlowFunc::new(GLOW);
        assert!(approx(glow.process(500, 0.9), 0.5));
    }

    #[test]
    fn test_glow_step() {
        let mut glow = GlowFunc::new(GLOW);
        glow.process(0, 0.5);
        // dt = 0.1: y = 0.5 + 0.1 * 1.1 * 0 + 0.1 * 1 * 0.3 * 0.5
        assert!(approx(glow.process(100, 1.0), 0.515));
    }

    #[test]
    fn test_glow_time_going_backwards() {
        let mut glow = GlowFunc::new(GLOW);
        glow.process(1000, 0.5);
        // dt = -0.1: y = 0.5 + (-0.1) * 1 * 0.3 * 0.5
        assert!(approx(glow.process(900, 1.0), 0.485));
        assert_eq!(glow.last_time(), Some(900));
    }

    #[test]
    fn test_glow_invalid_sample_is_pure_low_pass() {
        let mut glow = GlowFunc::new(GLOW);
        glow.process(0, 0.5);
        assert!(approx(glow.process(100, 7.0), 0.5));
        assert!(approx(glow.process(200, -1.0), 0.5));
    }

    #[test]
    fn test_glow_reset_with() {
        let mut glow = GlowFunc::new(GLOW);
        glow.process(0, 0.5);
        glow.process(100, 1.0);

        let conf = GlowConfig { ym: 0.8, ..GLOW };
        glow.reset_with(conf);
        assert_eq!(glow.config(), &conf);
        assert!(approx(glow.process(300, 0.1), 0.8));
    }
}
