use pal_nes::pal::*;
use pal_nes::types::{Ire, PixelCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn encode_once(
    data: &[u16],
    width: usize,
    height: usize,
    settings: &mut EncoderSettings,
) -> (AnalogSignal, BurstCalibration) {
    let frame = SourceFrame::new(width, height, data).unwrap();
    let mut signal = AnalogSignal::new();
    let calibration = PalEncoder::nes().encode(&mut signal, settings, &frame);
    (signal, calibration)
}

/// Whether sample `t` of line `n` is written per frame rather than by the sync skeleton.
fn is_per_frame(window: &ActiveWindow, n: usize, t: usize) -> bool {
    let in_rows = (window.y()..window.y() + window.height()).contains(&n);
    let in_active = (window.x()..window.x() + window.width()).contains(&t);
    let in_burst = (BW_BEG..CB_BEG + CB_LEN).contains(&t);
    in_rows && (in_active || in_burst)
}

#[test]
fn grey_frame_is_uniform() {
    init_logging();

    let data = vec![0u16; 256 * 240];
    let mut settings = EncoderSettings::new();
    let (signal, _) = encode_once(&data, 256, 240, &mut settings);

    let expected = {
        let ire = 4 * NES_PAL_IRE[8];
        ((ire * 100 / 110) >> 12) as i8
    };
    assert_eq!(expected, 38);

    let window = *settings.window();
    for n in window.y()..window.y() + window.height() {
        let line = signal.line(n);
        let active = &line[window.x()..window.x() + window.width()];
        assert!(active.iter().all(|&s| s == expected), "line {n}");
    }
}

#[test]
fn samples_stay_within_signal_levels() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(0x5a1);
    let data: Vec<u16> = (0..256 * 240).map(|_| rng.gen_range(0..512)).collect();

    for (black_point, white_point) in [(0, 100), (-(1 << 16), 1000), (1 << 16, 1000), (0, 0)] {
        let mut settings = EncoderSettings::new()
            .with_hue(rng.gen_range(-MAX_HUE..=MAX_HUE))
            .unwrap()
            .with_levels(black_point, white_point)
            .unwrap();
        let (signal, _) = encode_once(&data, 256, 240, &mut settings);

        assert!(signal
            .samples()
            .iter()
            .all(|&s| (SYNC_LEVEL..=WHITE_LEVEL).contains(&s)));
    }
}

#[test]
fn skeleton_is_untouched_outside_the_window() {
    init_logging();

    let data: Vec<u16> = (0..256 * 240).map(|i| (i % 512) as u16).collect();
    let mut settings = EncoderSettings::new();
    let (signal, _) = encode_once(&data, 256, 240, &mut settings);

    let mut skeleton = AnalogSignal::filled(99);
    setup_field(&mut skeleton);

    let window = *settings.window();
    for n in 0..PAL_VRES {
        for t in 0..PAL_HRES {
            if !is_per_frame(&window, n, t) {
                assert_eq!(signal.line(n)[t], skeleton.line(n)[t], "line {n} sample {t}");
            }
        }
    }
}

#[test]
fn second_encode_keeps_the_skeleton() {
    init_logging();

    let data = vec![0x21u16; 256 * 240];
    let frame = SourceFrame::new(256, 240, &data).unwrap();
    let encoder = PalEncoder::nes();
    let mut signal = AnalogSignal::new();
    let mut settings = EncoderSettings::new();

    encoder.encode(&mut signal, &mut settings, &frame);
    let first = signal.clone();
    encoder.encode(&mut signal, &mut settings, &frame);
    assert_eq!(signal, first);

    // With the latch set the skeleton isn't written again, so a scribble survives.
    signal.line_mut(0)[0] = WHITE_LEVEL;
    encoder.encode(&mut signal, &mut settings, &frame);
    assert_eq!(signal.line(0)[0], WHITE_LEVEL);

    // Until the settings are told the field is gone.
    settings.invalidate_field();
    encoder.encode(&mut signal, &mut settings, &frame);
    assert_eq!(signal.line(0)[0], SYNC_LEVEL);
    assert_eq!(signal, first);
}

#[test]
fn reset_clears_to_blank() {
    let data = vec![0x30u16; 16 * 16];
    let mut settings = EncoderSettings::new();
    let (mut signal, _) = encode_once(&data, 16, 16, &mut settings);

    signal.reset();
    settings.invalidate_field();
    assert!(signal.samples().iter().all(|&s| s == BLANK_LEVEL));
    assert!(!settings.is_field_initialized());
}

#[test]
fn calibration_matches_written_burst() {
    init_logging();

    for hue in [0, 45, -120, 333] {
        let data = vec![0x2au16; 64 * 60];
        let mut settings = EncoderSettings::new().with_hue(hue).unwrap();
        let (signal, calibration) = encode_once(&data, 64, 60, &mut settings);

        assert_eq!(calibration.period, CC_PERIOD);

        let window = *settings.window();
        for n in window.y()..window.y() + window.height() {
            let line = signal.line(n);
            let group = n % 6;
            for t in CB_BEG..CB_BEG + CB_LEN {
                let written = line[t] as Ire;
                assert_eq!(
                    calibration.ccf[group][t & 3],
                    written << CALIBRATION_SHIFT,
                    "hue {hue} line {n} sample {t}"
                );
            }
            assert!(line[BW_BEG..CB_BEG].iter().all(|&s| s == SYNC_LEVEL));
        }
    }
}

#[test]
fn downsampling_picks_columns_by_floor_division() {
    init_logging();

    // Only source column 127 carries white, everything else is forced black.
    let black = PixelCode::from_parts(0, 0, 0x0f).raw();
    let white = PixelCode::from_parts(0, 3, 0x00).raw();
    let data: Vec<u16> = (0..256 * 240)
        .map(|i| if i % 256 == 127 { white } else { black })
        .collect();

    let window = ActiveWindow::new(AV_BEG, PAL_TOP, 282, PAL_LINES).unwrap();
    let mut settings = EncoderSettings::new().with_window(window);
    let (signal, _) = encode_once(&data, 256, 240, &mut settings);

    let white_columns: Vec<usize> = (0..window.width())
        .filter(|&x| signal.line(PAL_TOP)[window.x() + x] == WHITE_LEVEL)
        .collect();

    assert!(white_columns.contains(&140));
    assert!(white_columns.iter().all(|&x| x * 256 / 282 == 127));
}

#[test]
fn upscaling_repeats_source_rows() {
    init_logging();

    // Two rows: white on top, black below, stretched over the whole window.
    let white = PixelCode::from_parts(0, 3, 0x00).raw();
    let black = PixelCode::from_parts(0, 0, 0x0e).raw();
    let data = [white, white, black, black];
    let mut settings = EncoderSettings::new();
    let (signal, _) = encode_once(&data, 2, 2, &mut settings);

    let window = *settings.window();
    let half = window.height() / 2;
    for y in 0..window.height() {
        let line = signal.line(window.y() + y);
        let expected = if y < half { WHITE_LEVEL } else { BLACK_LEVEL as i8 };
        assert!(
            line[window.x()..window.x() + window.width()]
                .iter()
                .all(|&s| s == expected),
            "row {y}"
        );
    }
}

#[test]
fn colored_pixels_carry_chroma() {
    let data = vec![0x16u16; 8 * 8];
    let mut settings = EncoderSettings::new();
    let (signal, _) = encode_once(&data, 8, 8, &mut settings);

    let window = *settings.window();
    let line = signal.line(window.y());
    let active = &line[window.x()..window.x() + window.width()];

    // Four samples per subcarrier cycle: the pattern repeats with period 4 and isn't flat.
    assert!(active.windows(5).all(|w| w[0] == w[4]));
    assert!(active[..4].iter().any(|&s| s != active[0]));
}

#[test]
fn custom_modulator_is_used() {
    struct Flat;

    impl PixelModulator for Flat {
        fn sample(&self, _pixel: PixelCode, _phase: i32) -> Ire {
            // 4 * 22528 * 100 / 110 >> 12 == 20
            22528
        }
    }

    let data = vec![0u16; 4];
    let frame = SourceFrame::new(2, 2, &data).unwrap();
    let mut signal = AnalogSignal::new();
    let mut settings = EncoderSettings::new();
    PalEncoder::new(Flat).encode(&mut signal, &mut settings, &frame);

    let window = *settings.window();
    let line = signal.line(window.y() + 10);
    assert!(line[window.x()..window.x() + window.width()]
        .iter()
        .all(|&s| s == 20));
}
