use std::fs;

use retro_sync_lib::{FileCopier, FrontendKind, Level, RecordingRunner, SourceConfig, System};
use tempfile::TempDir;

const CONFIG: &str = r#"
source_bios_dir: /srv/retro/bios
source_roms_dir: /srv/retro/roms
source_batocera_art_dir: /srv/retro/art
remote_hostname: library
bios_subdirs:
  sony_playstation: psx
  sega_cd: segacd
  nintendo_game_boy_advance: gba
roms_subdirs:
  arcade_finalburnneo: fbneo
  pico_8: pico8
  nec_turbografx_16: pce
  nec_turbografx_cd: pcecd
  nintendo_game_boy: gb
  nintendo_game_boy_advance: gba
  nintendo_game_boy_color: gbc
  nintendo_nes: nes
  nintendo_snes: snes
  sega_32x: 32x
  sega_cd: segacd
  sega_game_gear: gg
  sega_genesis: md
  snk_neo_geo_pocket_color: ngpc
  sony_playstation: psx
"#;

fn load_source(tmp: &TempDir) -> SourceConfig {
    let path = tmp.path().join("source_config.yaml");
    fs::write(&path, CONFIG).unwrap();
    SourceConfig::load(&path).unwrap()
}

#[test]
fn level_one_to_esde_copies_every_system() {
    let tmp = TempDir::new().unwrap();
    let source = load_source(&tmp);
    let frontend = FrontendKind::EsDe.create("/run/media/deck/SD");
    let mut copier = FileCopier::new(&frontend, &source, RecordingRunner::new());

    let systems = Level::One.systems();
    let bios = copier.copy_bios_files(&systems).unwrap();
    let roms = copier.copy_rom_files(&systems, false).unwrap();

    // PlayStation BIOS is not part of level 1.
    assert_eq!(bios.succeeded, 2);
    assert_eq!(roms.succeeded, 14);

    let runner = copier.into_runner();
    let first_rom = &runner.commands[2];
    assert_eq!(
        first_rom.args()[2..],
        ["library:/srv/retro/roms/fbneo//", "/run/media/deck/SD/ROMs/fbneo"]
    );
    for cmd in &runner.commands {
        assert_eq!(cmd.program(), "rsync");
        assert_eq!(&cmd.args()[..2], &["-avP", "--size-only"]);
    }
}

#[test]
fn level_one_to_muos_skips_unsupported_arcade() {
    let tmp = TempDir::new().unwrap();
    let source = load_source(&tmp);
    let frontend = FrontendKind::MuOs.create("/mnt/mmc");
    let copier = FileCopier::new(&frontend, &source, RecordingRunner::new());

    let jobs = copier.plan_roms(&Level::One.systems(), false);
    assert_eq!(jobs.len(), 13);
    assert!(jobs.iter().all(|j| j.system != System::ArcadeFinalBurnNeo));
    assert!(jobs.iter().all(|j| j.destination.starts_with("/mnt/mmc/ROMS/")));
}

#[test]
fn every_frontend_bios_destination_ends_with_slash() {
    let tmp = TempDir::new().unwrap();
    let source = load_source(&tmp);
    for kind in FrontendKind::all() {
        let frontend = kind.create("/dest");
        let copier = FileCopier::new(&frontend, &source, RecordingRunner::new());
        for job in copier.plan_bios(&Level::Five.systems()) {
            assert!(job.destination.ends_with('/'), "{}: {}", kind, job.destination);
            assert!(!job.destination.ends_with("//"), "{}: {}", kind, job.destination);
            assert!(job.source.ends_with('/') && !job.source.ends_with("//"));
        }
    }
}
