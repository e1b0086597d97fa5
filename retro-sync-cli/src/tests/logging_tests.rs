use super::*;

use std::sync::{Arc, Mutex};

use log::Log;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn log_info(logger: &env_logger::Logger, message: &str) {
    logger.log(
        &log::Record::builder()
            .args(format_args!("{message}"))
            .level(log::Level::Info)
            .target("retro_sync")
            .build(),
    );
    logger.flush();
}

#[test]
fn verbose_beats_quiet() {
    assert_eq!(level_filter(false, false), LevelFilter::Info);
    assert_eq!(level_filter(true, false), LevelFilter::Warn);
    assert_eq!(level_filter(false, true), LevelFilter::Debug);
    assert_eq!(level_filter(true, true), LevelFilter::Debug);
}

#[test]
fn tee_writer_strips_ansi_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    let mut tee = TeeWriter {
        file: File::create(&path).unwrap(),
    };

    let line = b"\x1b[1mDone:\x1b[0m \x1b[32m3 transferred\x1b[0m\n";
    assert_eq!(tee.write(line).unwrap(), line.len());
    tee.flush().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Done: 3 transferred\n");
}

#[test]
fn piped_output_keeps_colour_codes() {
    let capture = Capture::default();
    let mut builder = Builder::new();
    configure(&mut builder, false, false);
    pipe_to(&mut builder, capture.clone());
    let logger = builder.build();

    log_info(&logger, "\x1b[32mgreen\x1b[0m");

    let written = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert_eq!(written, "\x1b[32mgreen\x1b[0m\n");
}

#[test]
fn logfile_gets_plain_text_through_the_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    let mut builder = Builder::new();
    configure(&mut builder, false, false);
    pipe_to(
        &mut builder,
        TeeWriter {
            file: File::create(&path).unwrap(),
        },
    );
    let logger = builder.build();

    log_info(&logger, "\x1b[1mDone:\x1b[0m 2 transferred");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Done: 2 transferred\n");
}

#[test]
fn quiet_logger_drops_info() {
    let capture = Capture::default();
    let mut builder = Builder::new();
    configure(&mut builder, true, false);
    pipe_to(&mut builder, capture.clone());
    let logger = builder.build();

    log_info(&logger, "hidden");
    assert!(capture.0.lock().unwrap().is_empty());
}
