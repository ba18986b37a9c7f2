use super::*;

#[test]
fn needs_update_correctness_table() {
    assert!(needs_update("2.1.0.0", "2.0.9.9"));
    assert!(!needs_update("1.0", "1.0.0.0"));
    assert!(!needs_update("1.2.3", "1.2.3.4"));
    assert!(!needs_update("garbage", "1.0.0.0"));
    assert!(needs_update("2.0.0.0", "garbage"));
}

#[test]
fn needs_update_is_false_for_equal_versions() {
    assert!(!needs_update("6.3.1.2", "6.3.1.2"));
}

#[test]
fn needs_update_treats_missing_current_as_unknown() {
    assert!(needs_update("6.3.1.2", ""));
    assert!(!needs_update("", ""));
}

#[test]
fn needs_update_compares_components_numerically() {
    assert!(needs_update("1.10", "1.9.9.9"));
    assert!(!needs_update("1.9", "1.10"));
    assert!(needs_update("10.0", "9.99.99.99"));
}

#[test]
fn needs_update_is_total_over_odd_inputs() {
    let samples = [
        "",
        ".",
        "1",
        "1.",
        ".1",
        "1..2",
        "1.2.3.4.5",
        "1.2.a",
        "-1.2",
        "+1.2",
        " 1.2",
        "1.2 ",
        "18446744073709551616.0",
        "18446744073709551615.0",
        "1.2.3.4",
        "0.0",
        "v1.2",
        "１.２",
    ];
    for latest in samples {
        for current in samples {
            let forward = needs_update(latest, current);
            let backward = needs_update(current, latest);
            if VersionTuple::parse(latest).is_some() && VersionTuple::parse(current).is_some() {
                assert!(
                    !(forward && backward),
                    "strict ordering must be asymmetric for {latest:?} vs {current:?}"
                );
            }
        }
    }
}

#[test]
fn version_tuple_defaults_missing_components_to_zero() {
    let parsed = VersionTuple::parse("6.3").expect("must parse two components");
    assert_eq!(
        parsed,
        VersionTuple {
            major: 6,
            minor: 3,
            release: 0,
            patch: 0,
        }
    );
}

#[test]
fn version_tuple_rejects_malformed_strings() {
    for input in ["6", "6.3.1.2.9", "6.x", "6.3-beta", "", "6..3", " 6.3"] {
        assert!(
            VersionTuple::parse(input).is_none(),
            "{input:?} must not parse"
        );
    }
}

#[test]
fn version_tuple_rejects_component_overflow() {
    assert!(VersionTuple::parse("99999999999999999999.1").is_none());
}

#[test]
fn version_record_round_trip() {
    let record = VersionRecord::new("6.3.1.2", ReleaseLine::Official);
    let rendered = record.render();
    assert_eq!(rendered, "6.3.1.2\nOfficial");
    assert_eq!(
        VersionRecord::parse(&rendered).expect("must parse rendered record"),
        record
    );
}

#[test]
fn version_record_tolerates_trailing_newline_and_whitespace() {
    let record = VersionRecord::parse("1.1.0.4 \nRankynBass\n").expect("must parse");
    assert_eq!(record.version, "1.1.0.4");
    assert_eq!(record.release, ReleaseLine::RankynBass);
}

#[test]
fn version_record_rejects_unknown_tag() {
    let err = VersionRecord::parse("1.0.0.0\nofficial").expect_err("tag match is exact");
    assert!(
        err.to_string().contains("unrecognized release tag 'official'"),
        "unexpected error: {err}"
    );
}

#[test]
fn version_record_rejects_missing_tag_line() {
    let err = VersionRecord::parse("1.0.0.0\n").expect_err("tag line is required");
    assert!(err.to_string().contains("missing release tag line"));
}

#[test]
fn release_line_tags_are_distinct_and_round_trip() {
    for line in ReleaseLine::ALL {
        assert_eq!(ReleaseLine::from_tag(line.tag()), Some(line));
    }
    assert_ne!(ReleaseLine::Official.tag(), ReleaseLine::RankynBass.tag());
    assert_eq!(ReleaseLine::from_tag("RB"), None);
}

#[test]
fn release_line_archive_names_follow_title() {
    assert_eq!(
        ReleaseLine::Official.archive_file_name(),
        "XIVLauncher.tar.gz"
    );
    assert_eq!(
        ReleaseLine::RankynBass.archive_file_name(),
        "XIVLauncher-RB.tar.gz"
    );
}

#[test]
fn release_line_archive_url_follows_requested_tag() {
    assert_eq!(
        ReleaseLine::Official.archive_url(),
        "https://github.com/goatcorp/XIVLauncher.Core/releases/latest/download/XIVLauncher.Core.tar.gz"
    );
    assert_eq!(
        ReleaseLine::RankynBass.archive_url_for(Some("1.1.0.4")),
        "https://github.com/rankynbass/XIVLauncher.Core/releases/download/1.1.0.4/XIVLauncher.Core.tar.gz"
    );
    assert_eq!(
        ReleaseLine::Official.archive_url_for(None),
        ReleaseLine::Official.archive_url()
    );
}

#[test]
fn validate_version_rejects_what_a_record_cannot_hold() {
    validate_version("6.3.1.2").expect("dotted version must be accepted");
    validate_version("beta-7").expect("free-form single line must be accepted");

    for bad in ["", "   ", "6.3\n1.2", "6.3.1.2\r", " 6.3.1.2"] {
        assert!(validate_version(bad).is_err(), "{bad:?} must be rejected");
    }
}

#[test]
fn empty_version_record_does_not_round_trip() {
    let rendered = VersionRecord::new("", ReleaseLine::Official).render();
    assert!(VersionRecord::parse(&rendered).is_err());
}

#[test]
fn target_kind_steam_slots() {
    assert!(TargetKind::Steam.is_steam_slot());
    assert!(TargetKind::Flatpak.is_steam_slot());
    assert!(!TargetKind::Local.is_steam_slot());
    assert!(!TargetKind::Custom.is_steam_slot());
    assert!(!TargetKind::Update.is_steam_slot());
}
