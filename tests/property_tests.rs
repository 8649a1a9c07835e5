use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};
use img_mono::config::{parse_quality, resolve_quality};
use img_mono::pipeline::ModeChoice;
use img_mono::threshold::{binarize, luma_bt601, threshold_image};
use img_mono::validation::{is_single_component, secure_filename};
use proptest::prelude::*;

proptest! {
    #[test]
    fn quality_in_range_is_kept(quality in 1i64..=100i64) {
        prop_assert_eq!(resolve_quality(Some(&quality.to_string())), (quality as u8, None));
    }

    #[test]
    fn quality_out_of_range_defaults_to_90(
        quality in prop_oneof![i64::MIN..1i64, 101i64..i64::MAX]
    ) {
        let (effective, fallback) = resolve_quality(Some(&quality.to_string()));
        prop_assert_eq!(effective, 90);
        prop_assert!(fallback.is_some());
    }

    #[test]
    fn non_numeric_quality_defaults_to_90(text in "[a-zA-Z ]{0,12}") {
        prop_assert!(parse_quality(&text).is_err());
        prop_assert_eq!(resolve_quality(Some(&text)).0, 90);
    }

    #[test]
    fn binarize_matches_strict_threshold(
        values in prop::collection::vec(any::<u8>(), 1..64),
        threshold in any::<u8>()
    ) {
        let width = values.len() as u32;
        let mut gray = GrayImage::from_raw(width, 1, values.clone()).unwrap();
        binarize(&mut gray, threshold);

        for (before, after) in values.iter().zip(gray.into_raw()) {
            let expected = if *before > threshold { 255 } else { 0 };
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn threshold_image_is_two_tone_and_keeps_dimensions(
        width in 1u32..=32u32,
        height in 1u32..=32u32,
        seed in any::<u32>(),
        threshold in any::<u8>()
    ) {
        let rgb = RgbImage::from_fn(width, height, |x, y| {
            let v = seed ^ x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B);
            image::Rgb([v as u8, (v >> 8) as u8, (v >> 16) as u8])
        });
        let img = DynamicImage::ImageRgb8(rgb);
        let bw = threshold_image(&img, threshold);

        prop_assert_eq!(bw.dimensions(), img.dimensions());
        prop_assert!(bw.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn luma_stays_between_channel_extremes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let luma = luma_bt601(r, g, b);
        prop_assert!(luma >= r.min(g).min(b));
        prop_assert!(luma <= r.max(g).max(b));
    }

    #[test]
    fn only_menu_digits_are_modes(input in "\\PC{0,4}") {
        let parsed = input.parse::<ModeChoice>();
        let expected = matches!(input.trim(), "1" | "2" | "3");
        prop_assert_eq!(parsed.is_ok(), expected);
    }

    #[test]
    fn secure_filename_is_a_plain_component(name in "\\PC{0,40}") {
        if let Some(clean) = secure_filename(&name) {
            prop_assert!(is_single_component(&clean));
            prop_assert!(!clean.starts_with('.'));
            prop_assert!(clean
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
        }
    }
}
