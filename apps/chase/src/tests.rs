//! Tests for the command-line runner.

#[cfg(test)]
mod cli_tests {
    use clap::Parser;

    use crate::cli::{Cli, LogLevel};

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["chase"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log.is_none());
        assert!(!cli.wait);
        assert_eq!(cli.output, std::path::PathBuf::from("."));
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["chase", "-r", "20", "-s", "4", "-w", "-l", "DEBUG"]).unwrap();
        assert_eq!(cli.rounds, Some(20));
        assert_eq!(cli.sheep, Some(4));
        assert!(cli.wait);
        assert_eq!(cli.log, Some(LogLevel::Debug));
    }

    #[test]
    fn log_level_names() {
        let cli = Cli::try_parse_from(["chase", "--log", "critical"]).unwrap();
        assert_eq!(cli.log, Some(LogLevel::Critical));
        assert_eq!(LogLevel::Critical.filter_directive(), "error");
        assert_eq!(LogLevel::Warning.filter_directive(), "warn");
        assert!(Cli::try_parse_from(["chase", "--log", "LOUD"]).is_err());
    }
}

#[cfg(test)]
mod settings_tests {
    use clap::Parser;
    use tempfile::TempDir;

    use crate::cli::Cli;
    use crate::settings::{FileConfig, resolve};

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = FileConfig::parse("").unwrap();
        assert_eq!(cfg.sheep.init_pos_limit, 10.0);
        assert_eq!(cfg.sheep.move_dist, 0.5);
        assert_eq!(cfg.wolf.move_dist, 1.0);
    }

    #[test]
    fn partial_sections() {
        let cfg = FileConfig::parse("[Sheep]\nMoveDist = 0.25\n\n[Wolf]\nMoveDist = 2.0\n").unwrap();
        assert_eq!(cfg.sheep.init_pos_limit, 10.0);
        assert_eq!(cfg.sheep.move_dist, 0.25);
        assert_eq!(cfg.wolf.move_dist, 2.0);
    }

    #[test]
    fn non_positive_distances_rejected() {
        assert!(FileConfig::parse("[Sheep]\nMoveDist = 0").is_err());
        assert!(FileConfig::parse("[Wolf]\nMoveDist = -1.5").is_err());
    }

    #[test]
    fn full_document() {
        let text = "\
; sample run
[Sheep]
InitPosLimit = 4.5
MoveDist = 0.75

[Wolf]
MoveDist = 1.25
";
        let cfg = FileConfig::parse(text).unwrap();
        assert_eq!(cfg.sheep.init_pos_limit, 4.5);
        assert_eq!(cfg.sheep.move_dist, 0.75);
        assert_eq!(cfg.wolf.move_dist, 1.25);
    }

    #[test]
    fn keys_match_case_insensitively() {
        let cfg = FileConfig::parse("[Sheep]\ninitposlimit = 2.0\n").unwrap();
        assert_eq!(cfg.sheep.init_pos_limit, 2.0);
    }

    #[test]
    fn non_numeric_value_rejected() {
        let err = FileConfig::parse("[Wolf]\nMoveDist = fast\n").unwrap_err();
        assert!(format!("{err:#}").contains("MoveDist"), "got {err:#}");
    }

    #[test]
    fn json_document_rejected() {
        assert!(FileConfig::parse(r#"{"Sheep": {"MoveDist": 0.5}}"#).is_err());
    }

    #[test]
    fn cli_overrides_and_file_merge() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[Sheep]\nInitPosLimit = 3.0\n").unwrap();

        let cli = Cli::try_parse_from([
            "chase",
            "-c",
            path.to_str().unwrap(),
            "-r",
            "7",
            "-s",
            "2",
            "--seed",
            "99",
        ])
        .unwrap();
        let cfg = resolve(&cli, 1).unwrap();
        assert_eq!(cfg.round_limit, 7);
        assert_eq!(cfg.prey_count, 2);
        assert_eq!(cfg.spawn_limit, 3.0);
        assert_eq!(cfg.seed, 99);
    }

    #[test]
    fn fallback_seed_used_when_unpinned() {
        let cli = Cli::try_parse_from(["chase"]).unwrap();
        assert_eq!(resolve(&cli, 1234).unwrap().seed, 1234);
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["chase", "-c", "/nonexistent/chase.ini"]).unwrap();
        assert!(resolve(&cli, 0).is_err());
    }

    #[test]
    fn zero_sheep_rejected() {
        let cli = Cli::try_parse_from(["chase", "-s", "0"]).unwrap();
        assert!(resolve(&cli, 0).is_err());
    }
}

#[cfg(test)]
mod console_tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use chase_agent::Stationary;
    use chase_core::{ChaseConfig, Position};
    use chase_sim::{CollectingObserver, SimBuilder, SimStatus};

    use crate::console::ConsoleObserver;

    const PROMPT: &str = "Press Enter to continue";

    fn config(round_limit: u32, prey_count: usize) -> ChaseConfig {
        ChaseConfig {
            round_limit,
            prey_count,
            spawn_limit:   10.0,
            prey_step:     0.5,
            predator_step: 1.0,
            seed:          3,
        }
    }

    /// Run a stationary flock with `wait` on, feeding `input` as keystrokes.
    fn run_waiting(
        config: ChaseConfig,
        sheep: Vec<Position>,
        input: &[u8],
    ) -> (CollectingObserver, String, SimStatus) {
        let mut sim = SimBuilder::new(config.clone())
            .graze(Stationary)
            .prey_positions(sheep)
            .build()
            .unwrap();
        let mut out = Vec::new();
        let mut obs = ConsoleObserver::new(
            CollectingObserver::default(),
            input,
            &mut out,
            config.round_limit,
            true,
        );
        let result = sim.run(&mut obs).unwrap();
        let inner = obs.inner;
        (inner, String::from_utf8(out).unwrap(), result.status)
    }

    #[test]
    fn no_prompt_after_terminal_round() {
        // Round 1 eats the sheep at (0.5, 0); rounds 2 and 3 close in on
        // (3, 0); round 4 eats it and ends the run.
        let (inner, out, status) = run_waiting(
            config(10, 2),
            vec![Position::new(0.5, 0.0), Position::new(3.0, 0.0)],
            b"\n\n\n\n\n\n",
        );
        assert_eq!(status, SimStatus::AllCaught);
        assert_eq!(inner.outcomes.len(), 4);
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.ends_with("All sheep have been eaten\n"), "got {out:?}");
        assert_eq!(out.matches("Number of sheep alive: 1").count(), 3);
    }

    #[test]
    fn no_prompt_after_round_limit() {
        let (inner, out, status) =
            run_waiting(config(3, 1), vec![Position::new(100.0, 0.0)], b"\n\n\n\n");
        assert_eq!(status, SimStatus::RoundLimitReached);
        assert_eq!(inner.outcomes.len(), 3);
        assert_eq!(out.matches(PROMPT).count(), 2);
        assert!(out.ends_with("Number of sheep alive: 1\n"), "got {out:?}");
    }

    #[test]
    fn end_of_input_stops_waiting() {
        let (inner, out, _) =
            run_waiting(config(5, 1), vec![Position::new(100.0, 0.0)], b"");
        assert_eq!(inner.outcomes.len(), 5);
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn pausing_does_not_change_the_run() {
        let cfg = config(20, 3);

        let mut plain = CollectingObserver::default();
        SimBuilder::new(cfg.clone()).build().unwrap().run(&mut plain).unwrap();

        let keys = b"\n".repeat(32);
        let mut waiting = ConsoleObserver::new(
            CollectingObserver::default(),
            &keys[..],
            io::sink(),
            cfg.round_limit,
            true,
        );
        SimBuilder::new(cfg).build().unwrap().run(&mut waiting).unwrap();

        assert_eq!(waiting.inner.outcomes, plain.outcomes);
        assert_eq!(waiting.inner.result, plain.result);
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logs_chase_and_capture_lines() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_target(false)
            .with_writer(move || writer.clone())
            .finish();

        let cfg = config(10, 2);
        let mut sim = SimBuilder::new(cfg.clone())
            .graze(Stationary)
            .prey_positions(vec![Position::new(0.5, 0.0), Position::new(3.0, 0.0)])
            .build()
            .unwrap();
        let mut obs =
            ConsoleObserver::new(CollectingObserver::default(), &b""[..], io::sink(), cfg.round_limit, false);
        tracing::subscriber::with_default(subscriber, || sim.run(&mut obs)).unwrap();

        let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Round 1"), "got {logs}");
        assert!(logs.contains("Wolf has eaten sheep with index 0"), "got {logs}");
        assert!(logs.contains("Wolf is chasing sheep with index 1"), "got {logs}");
        assert!(logs.contains("Wolf has eaten sheep with index 1"), "got {logs}");
        assert!(logs.contains("Wolf position is (1.500, 0.000)"), "got {logs}");
        assert!(logs.contains("All sheep have been eaten"), "got {logs}");
    }

    #[test]
    fn forwards_sim_end_to_inner() {
        let mut obs =
            ConsoleObserver::new(CollectingObserver::default(), &b""[..], io::sink(), 1, false);
        let mut sim = SimBuilder::new(config(1, 1))
            .graze(Stationary)
            .prey_positions(vec![Position::new(50.0, 0.0)])
            .build()
            .unwrap();
        let result = sim.run(&mut obs).unwrap();
        assert_eq!(obs.inner.result, Some(result));
    }
}
