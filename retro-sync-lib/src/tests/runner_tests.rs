use super::*;

#[test]
fn display_quotes_only_marked_args() {
    let cmd = CommandSpec::new("rsync")
        .arg("-avP")
        .arg("--size-only")
        .quoted_arg("nas:/roms/Game Boy/")
        .quoted_arg("/media/sd/roms/gb");
    assert_eq!(
        cmd.display(),
        r#"rsync -avP --size-only "nas:/roms/Game Boy/" "/media/sd/roms/gb""#
    );
    assert_eq!(
        cmd.args(),
        vec!["-avP", "--size-only", "nas:/roms/Game Boy/", "/media/sd/roms/gb"]
    );
}

#[test]
fn dry_run_never_executes() {
    let mut runner = DryRunRunner;
    let cmd = CommandSpec::new("definitely-not-a-real-program-xyz");
    assert_eq!(runner.run(&cmd).unwrap(), RunOutcome::Skipped);
}

#[test]
fn recording_runner_keeps_commands_in_order() {
    let mut runner = RecordingRunner::with_outcome(RunOutcome::Failed(Some(23)));
    runner.run(&CommandSpec::new("a")).unwrap();
    let outcome = runner.run(&CommandSpec::new("b")).unwrap();
    assert_eq!(outcome, RunOutcome::Failed(Some(23)));
    let programs: Vec<&str> = runner.commands.iter().map(|c| c.program()).collect();
    assert_eq!(programs, vec!["a", "b"]);
}

#[test]
fn boxed_runner_delegates() {
    let mut runner: Box<dyn CommandRunner> = Box::new(DryRunRunner);
    assert_eq!(runner.run(&CommandSpec::new("x")).unwrap(), RunOutcome::Skipped);
}

#[test]
fn missing_program_is_a_spawn_error() {
    let mut runner = ProcessRunner;
    let err = runner
        .run(&CommandSpec::new("definitely-not-a-real-program-xyz"))
        .unwrap_err();
    assert!(matches!(err, SyncError::Spawn { .. }));
    assert!(err.to_string().contains("definitely-not-a-real-program-xyz"));
}

#[cfg(unix)]
#[test]
fn process_runner_reports_exit_codes() {
    let mut runner = ProcessRunner;
    let ok = CommandSpec::new("sh").arg("-c").arg("exit 0");
    assert_eq!(runner.run(&ok).unwrap(), RunOutcome::Success);
    let failed = CommandSpec::new("sh").arg("-c").arg("exit 3");
    assert_eq!(runner.run(&failed).unwrap(), RunOutcome::Failed(Some(3)));
}

#[cfg(unix)]
#[test]
fn capture_stdout_returns_output_and_outcome() {
    let cmd = CommandSpec::new("sh").arg("-c").arg("echo '12G\ttotal'; exit 1");
    let (outcome, stdout) = capture_stdout(&cmd).unwrap();
    assert_eq!(outcome, RunOutcome::Failed(Some(1)));
    assert_eq!(stdout, "12G\ttotal\n");
}

#[test]
fn capture_stdout_missing_program_is_a_spawn_error() {
    let err = capture_stdout(&CommandSpec::new("definitely-not-a-real-program-xyz")).unwrap_err();
    assert!(matches!(err, SyncError::Spawn { .. }));
}
