//! Tests for command-line parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jigsolve::JigsawError;
    use jigsolve::io::cli::{Cli, FileProcessor, ProcessOutcome};
    use jigsolve::io::configuration::{DEFAULT_SEED, DEFAULT_SIGMA, SolverConfig};
    use jigsolve::io::image::save_grid;
    use jigsolve::solver::strategy::StrategyKind;
    use jigsolve::spatial::grid::{PixelGrid, pack_rgb};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests parsing with only the two required paths
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "in.png", "out.png"]);

        assert_eq!(cli.input, PathBuf::from("in.png"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.sigma, DEFAULT_SIGMA);
        assert_eq!(cli.strategy, StrategyKind::Greedy);
        assert!(!cli.quiet);
        assert_eq!(cli.to_config(), SolverConfig::default());
    }

    // Tests every option reaches the solver configuration
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "in.png",
            "out.png",
            "--sigma",
            "1.5",
            "--lower",
            "0.3",
            "--upper",
            "0.7",
            "--tolerance",
            "0.1",
            "--strategy",
            "color-coding",
            "--seed",
            "9",
            "--quiet",
        ]);
        let config = cli.to_config();

        assert_eq!(config.sigma, 1.5);
        assert_eq!(config.lower_factor, 0.3);
        assert_eq!(config.upper_factor, 0.7);
        assert_eq!(config.border_tolerance, 0.1);
        assert_eq!(config.strategy, StrategyKind::ColorCoding);
        assert_eq!(config.seed, 9);
        assert!(!cli.should_show_progress());
    }

    // Tests a missing output argument is a parse error
    #[test]
    fn test_cli_requires_output() {
        assert!(Cli::try_parse_from(["program", "in.png"]).is_err());
    }

    // Tests processing a missing input reports a load error
    #[test]
    fn test_process_missing_input() {
        let dir = TempDir::new().expect("temp dir");
        let cli = Cli::parse_from([
            "program".into(),
            dir.path().join("missing.png"),
            dir.path().join("out.png"),
            "--quiet".into(),
        ]);
        let result = FileProcessor::new(cli).process();
        assert!(matches!(result, Err(JigsawError::ImageLoad { .. })));
    }

    // Tests invalid options fail before the input is read
    #[test]
    fn test_process_invalid_config() {
        let cli = Cli::parse_from(["program", "in.png", "out.png", "--sigma=-2", "-q"]);
        let result = FileProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(JigsawError::InvalidParameter { parameter: "sigma", .. })
        ));
    }

    // Tests the outcome and the output file agree
    #[test]
    fn test_process_writes_only_on_success() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("in.png");
        let output = dir.path().join("nested").join("out.png");
        let image = PixelGrid::from_rows(&vec![vec![pack_rgb(200, 10, 10); 12]; 12]);
        save_grid(&image, &input).expect("write input");

        let cli = Cli::parse_from([
            "program".into(),
            input,
            output.clone(),
            "--quiet".into(),
        ]);
        let outcome = FileProcessor::new(cli).process().expect("processing succeeds");
        match outcome {
            ProcessOutcome::Written { .. } => assert!(output.exists()),
            ProcessOutcome::NoAssembly => assert!(!output.exists()),
        }
    }
}
