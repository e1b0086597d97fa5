use super::*;
use std::collections::HashSet;

fn frontend(kind: FrontendKind) -> LayoutFrontend {
    kind.create("/media/sd")
}

#[test]
fn batocera_paths() {
    let fe = frontend(FrontendKind::Batocera);
    assert_eq!(fe.name(), "Batocera");
    assert_eq!(
        fe.bios_directory(System::SonyPlayStation).as_deref(),
        Some("/media/sd/bios")
    );
    assert_eq!(
        fe.roms_directory(System::SegaGenesis).as_deref(),
        Some("/media/sd/roms/megadrive")
    );
    assert_eq!(fe.roms_directory(System::NintendoVirtualBoy), None);
}

#[test]
fn knulli_shares_batocera_layout() {
    let knulli = frontend(FrontendKind::Knulli);
    let batocera = frontend(FrontendKind::Batocera);
    assert_eq!(knulli.name(), "Knulli");
    for &system in System::all() {
        assert_eq!(knulli.roms_directory(system), batocera.roms_directory(system));
        assert_eq!(knulli.bios_directory(system), batocera.bios_directory(system));
    }
}

#[test]
fn emudeck_paths() {
    let fe = frontend(FrontendKind::EmuDeck);
    assert_eq!(
        fe.bios_directory(System::Nintendo64).as_deref(),
        Some("/media/sd/Emulation/bios")
    );
    assert_eq!(
        fe.roms_directory(System::NintendoWiiU).as_deref(),
        Some("/media/sd/Emulation/roms/wiiu/roms")
    );
    assert_eq!(fe.roms_directory(System::ArcadeFinalBurnNeo), None);
}

#[test]
fn esde_paths() {
    let fe = frontend(FrontendKind::EsDe);
    assert_eq!(fe.name(), "ES-DE");
    assert_eq!(fe.bios_directory(System::SegaCd).as_deref(), Some("/media/sd/BIOS"));
    assert_eq!(
        fe.roms_directory(System::NintendoGameCube).as_deref(),
        Some("/media/sd/ROMs/gc")
    );
}

#[test]
fn minui_bios_is_per_system() {
    let fe = frontend(FrontendKind::MinUi);
    assert_eq!(
        fe.bios_directory(System::NintendoGameBoyAdvance).as_deref(),
        Some("/media/sd/Bios/GBA")
    );
    assert_eq!(
        fe.bios_directory(System::SegaDreamcast).as_deref(),
        Some("/media/sd/Bios")
    );
    assert_eq!(fe.bios_directory(System::SegaGenesis), None);
    assert_eq!(
        fe.roms_directory(System::NintendoPokemonMini).as_deref(),
        Some("/media/sd/Roms/Pokémon mini (PKM)")
    );
}

#[test]
fn muos_paths() {
    let fe = frontend(FrontendKind::MuOs);
    assert_eq!(
        fe.bios_directory(System::SonyPlayStation).as_deref(),
        Some("/media/sd/MUOS/Bios")
    );
    assert_eq!(
        fe.roms_directory(System::SegaCd).as_deref(),
        Some("/media/sd/ROMS/Sega Mega CD - Sega CD")
    );
}

#[test]
fn rocknix_uses_esde_table_at_root() {
    let fe = FrontendKind::Rocknix.create("root@handheld:/storage/roms");
    assert_eq!(
        fe.bios_directory(System::NintendoSnes).as_deref(),
        Some("root@handheld:/storage/roms/bios")
    );
    assert_eq!(
        fe.roms_directory(System::NintendoSnes).as_deref(),
        Some("root@handheld:/storage/roms/snes")
    );
    let esde = frontend(FrontendKind::EsDe);
    assert_eq!(fe.supported_systems(), esde.supported_systems());
}

#[test]
fn onion_and_spruce_differ_only_in_renamed_folders() {
    let onion = frontend(FrontendKind::Onion);
    let spruce = frontend(FrontendKind::Spruce);
    assert_eq!(onion.supported_systems(), spruce.supported_systems());

    let differing: Vec<System> = onion
        .supported_systems()
        .into_iter()
        .filter(|&s| onion.roms_directory(s) != spruce.roms_directory(s))
        .collect();
    assert_eq!(differing, vec![System::ArcadeMame2003Plus, System::Pico8]);
    assert_eq!(
        spruce.roms_directory(System::Pico8).as_deref(),
        Some("/media/sd/Roms/PICO8")
    );
}

#[test]
fn supported_systems_follow_table_order() {
    let fe = frontend(FrontendKind::MuOs);
    let systems = fe.supported_systems();
    assert_eq!(systems.len(), 17);
    assert_eq!(systems[0], System::Pico8);
    assert_eq!(systems[16], System::SonyPlayStation);
}

#[test]
fn tables_have_no_duplicate_systems() {
    for kind in FrontendKind::all() {
        let layout = kind.layout();
        let unique: HashSet<System> = layout.roms.iter().map(|(s, _)| *s).collect();
        assert_eq!(unique.len(), layout.roms.len(), "duplicate system in {}", kind);
    }
}

#[test]
fn relative_destination_stays_relative() {
    let fe = FrontendKind::Onion.create("ONION");
    assert_eq!(fe.roms_directory(System::NintendoNes).as_deref(), Some("ONION/Roms/FC"));
}

#[test]
fn kind_parsing_is_case_insensitive() {
    assert_eq!("ESDE".parse::<FrontendKind>().unwrap(), FrontendKind::EsDe);
    assert_eq!("MinUI".parse::<FrontendKind>().unwrap(), FrontendKind::MinUi);
    for kind in FrontendKind::all() {
        assert_eq!(kind.key().parse::<FrontendKind>().unwrap(), *kind);
    }
}

#[test]
fn unknown_kind_is_an_error() {
    let err = "retroarch".parse::<FrontendKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "retroarch is not a supported destination OS/application."
    );
    assert!(create("retroarch", "/tmp").is_err());
}

#[test]
fn available_lists_every_key_in_order() {
    assert_eq!(
        FrontendKind::available(),
        "batocera, knulli, emudeck, esde, minui, muos, rocknix, onion, spruce"
    );
}

#[test]
fn boxed_create_returns_named_frontend() {
    let fe = create("spruce", "/mnt/SDCARD").unwrap();
    assert_eq!(fe.name(), "Spruce");
    assert_eq!(
        fe.bios_directory(System::NintendoGameBoy).as_deref(),
        Some("/mnt/SDCARD/BIOS")
    );
}
