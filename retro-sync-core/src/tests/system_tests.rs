use super::*;
use std::collections::{HashMap, HashSet};

#[test]
fn all_has_50_variants() {
    assert_eq!(System::all().len(), 50);
}

#[test]
fn ids_round_trip() {
    for &system in System::all() {
        let parsed: System = system.id().parse().unwrap();
        assert_eq!(parsed, system, "round-trip failed for {:?}", system);
        assert_eq!(System::from_id(system.id()), Some(system));
    }
}

#[test]
fn id_is_first_alias() {
    for &system in System::all() {
        assert_eq!(
            system.id(),
            system.aliases()[0],
            "id should be first alias for {:?}",
            system,
        );
    }
}

#[test]
fn aliases_are_unique_across_systems() {
    let mut seen = HashSet::new();
    for &system in System::all() {
        for alias in system.aliases() {
            assert!(seen.insert(*alias), "alias '{}' used twice", alias);
        }
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("gba", System::NintendoGameBoyAdvance),
        ("psx", System::SonyPlayStation),
        ("megadrive", System::SegaGenesis),
        ("pce", System::NecTurboGrafx16),
        ("fbneo", System::ArcadeFinalBurnNeo),
        ("pico-8", System::Pico8),
        ("ngpc", System::SnkNeoGeoPocketColor),
        ("gc", System::NintendoGameCube),
    ];
    for (input, expected) in cases {
        let parsed: System = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn case_insensitive_parsing() {
    let parsed: System = "SNES".parse().unwrap();
    assert_eq!(parsed, System::NintendoSnes);
    let parsed: System = "Sega_Saturn".parse().unwrap();
    assert_eq!(parsed, System::SegaSaturn);
}

#[test]
fn unknown_string_returns_err() {
    let err = "amiga".parse::<System>().unwrap_err();
    assert_eq!(err.to_string(), "unknown system: 'amiga'");
}

#[test]
fn from_id_rejects_aliases() {
    assert_eq!(System::from_id("snes"), None);
    assert_eq!(System::from_id("nintendo_snes"), Some(System::NintendoSnes));
}

#[test]
fn display_returns_display_name() {
    assert_eq!(System::NintendoNes.to_string(), "Nintendo Entertainment System");
    assert_eq!(System::Pico8.to_string(), "PICO-8");
}

#[test]
fn deserializes_map_keys_from_ids() {
    let yaml = "nintendo_snes: SNES\nsony_playstation: PS1\n";
    let map: HashMap<System, String> = serde_yml::from_str(yaml).unwrap();
    assert_eq!(map[&System::NintendoSnes], "SNES");
    assert_eq!(map[&System::SonyPlayStation], "PS1");
}

#[test]
fn deserialize_rejects_unknown_id() {
    let result: Result<HashMap<System, String>, _> = serde_yml::from_str("sega_pico: x\n");
    assert!(result.is_err());
}

#[test]
fn serializes_as_id() {
    let yaml = serde_yml::to_string(&System::SegaSg1000).unwrap();
    assert_eq!(yaml.trim(), "sega_sg_1000");
}
