use super::*;

#[test]
fn parses_accepted_spellings() {
    let cases = [
        ("1", Level::One),
        ("level-2", Level::Two),
        ("level_3", Level::Three),
        ("LEVEL-4", Level::Four),
        ("Level_5", Level::Five),
    ];
    for (input, expected) in cases {
        assert_eq!(Level::parse(input), Ok(expected), "input '{}'", input);
    }
}

#[test]
fn rejects_unknown_levels() {
    for input in ["", "0", "6", "level3", "level-", "one", "level-1-2"] {
        assert!(!Level::is_valid(input), "'{}' should be rejected", input);
    }
}

#[test]
fn error_message_names_the_input() {
    let err = Level::parse("level-9").unwrap_err();
    assert_eq!(err.to_string(), "level-9 is not a supported ROM pack name.");
}

#[test]
fn level_one_order_is_fixed() {
    let systems = Level::One.systems();
    assert_eq!(systems.len(), 14);
    assert_eq!(systems[0], System::ArcadeFinalBurnNeo);
    assert_eq!(systems[1], System::Pico8);
    assert_eq!(systems[13], System::SnkNeoGeoPocketColor);
}

#[test]
fn levels_are_cumulative() {
    let sizes: Vec<usize> = Level::all().iter().map(|l| l.systems().len()).collect();
    assert_eq!(sizes, vec![14, 15, 19, 21, 24]);

    for pair in Level::all().windows(2) {
        let lower = pair[0].systems();
        let upper = pair[1].systems();
        assert_eq!(&upper[..lower.len()], &lower[..], "{} prefixes {}", pair[0], pair[1]);
    }
}

#[test]
fn higher_levels_append_in_order() {
    let systems = Level::Five.systems();
    assert_eq!(systems[14], System::SonyPlayStation);
    assert_eq!(
        &systems[15..19],
        &[
            System::Nintendo64,
            System::SegaDreamcast,
            System::SegaSaturn,
            System::SnkNeoGeoCd,
        ]
    );
    assert_eq!(
        &systems[21..],
        &[
            System::NintendoSwitch,
            System::NintendoWiiU,
            System::SonyPlayStation3,
        ]
    );
}

#[test]
fn display_uses_level_prefix() {
    assert_eq!(Level::Three.to_string(), "level-3");
    assert_eq!(Level::parse(&Level::Three.to_string()), Ok(Level::Three));
}
