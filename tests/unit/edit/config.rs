use super::*;

fn config_err(opts: EditOptions) -> String {
    match opts.validate() {
        Err(LoopError::Configuration(msg)) => msg,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn defaults_validate_to_default_config() {
    let cfg = EditOptions::default().validate().unwrap();
    assert_eq!(cfg, EditConfig::default());
    assert_eq!(cfg.stitch, Stitch::Mirror);
}

#[test]
fn negative_counts_are_rejected() {
    for opts in [
        EditOptions {
            trim_edges: -1,
            ..EditOptions::default()
        },
        EditOptions {
            trim_start: -1,
            ..EditOptions::default()
        },
        EditOptions {
            trim_end: -2,
            ..EditOptions::default()
        },
        EditOptions {
            window: -3,
            ..EditOptions::default()
        },
    ] {
        assert!(config_err(opts).contains("cannot be negative"));
    }
}

#[test]
fn cut_interval_of_one_or_negative_is_rejected() {
    for cut in [1, -1] {
        let msg = config_err(EditOptions {
            cut_interval: cut,
            ..EditOptions::default()
        });
        assert!(msg.contains("cut interval"));
    }
}

#[test]
fn unknown_stitch_is_rejected() {
    config_err(EditOptions {
        stitch: "Sideways".into(),
        ..EditOptions::default()
    });
}

#[test]
fn zero_or_non_finite_scale_is_rejected() {
    for scale in [0.0, f64::NAN, f64::INFINITY] {
        config_err(EditOptions {
            scale_delay: scale,
            ..EditOptions::default()
        });
    }
}

#[test]
fn negative_scale_means_reverse() {
    let cfg = EditOptions {
        scale_delay: -2.5,
        ..EditOptions::default()
    }
    .validate()
    .unwrap();
    assert!(cfg.reverse);
    assert_eq!(cfg.delay_factor, 2.5);
}

#[test]
fn trim_edges_adds_to_both_ends() {
    let cfg = EditOptions {
        trim_edges: 2,
        trim_start: 1,
        ..EditOptions::default()
    }
    .validate()
    .unwrap();
    assert_eq!(cfg.reduction.trim_start, 3);
    assert_eq!(cfg.reduction.trim_end, 2);
}

#[test]
fn fade_is_enabled_by_a_color() {
    let cfg = EditOptions {
        fade_color: Some("#ff8000".into()),
        fade_rate: 0.5,
        ..EditOptions::default()
    }
    .validate()
    .unwrap();
    assert_eq!(
        cfg.fade,
        Some(Fade {
            color: [0xff, 0x80, 0x00],
            rate: 0.5
        })
    );
}

#[test]
fn hex_colors_accept_common_prefixes() {
    assert_eq!(parse_hex_rgb("0x102030").unwrap(), [0x10, 0x20, 0x30]);
    assert_eq!(parse_hex_rgb("#A0B0C0").unwrap(), [0xa0, 0xb0, 0xc0]);
    assert_eq!(parse_hex_rgb("000000").unwrap(), [0, 0, 0]);
    for bad in ["", "0x12345", "#1234567", "zzzzzz", "0x+12345"] {
        assert!(parse_hex_rgb(bad).is_err(), "{bad}");
    }
}

#[test]
fn bad_fade_rate_is_rejected_only_when_fading() {
    let opts = EditOptions {
        fade_rate: -1.0,
        ..EditOptions::default()
    };
    assert!(opts.validate().is_ok());
    config_err(EditOptions {
        fade_color: Some("000000".into()),
        ..opts
    });
}

#[test]
fn loop_count_flag_is_validated() {
    let cfg = EditOptions {
        loop_count: -1,
        ..EditOptions::default()
    }
    .validate()
    .unwrap();
    assert_eq!(cfg.loop_count, LoopCount::Once);
    config_err(EditOptions {
        loop_count: -5,
        ..EditOptions::default()
    });
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: EditOptions =
        serde_json::from_str(r#"{ "stitch": "PanV", "window": 4, "fade_color": "112233" }"#)
            .unwrap();
    assert_eq!(opts.stitch, "PanV");
    assert_eq!(opts.window, 4);
    assert_eq!(opts.scale_delay, 1.0);
    assert_eq!(opts.fade_rate, 1.0);

    assert!(serde_json::from_str::<EditOptions>(r#"{ "windw": 4 }"#).is_err());
}
