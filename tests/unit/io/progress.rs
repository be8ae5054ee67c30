//! Tests for progress reporting

#[cfg(test)]
mod tests {
    use jigsolve::io::progress::ProgressReporter;
    use std::path::Path;

    // Tests updates set both length and position
    #[test]
    fn test_update() {
        let reporter = ProgressReporter::new();
        reporter.start(Path::new("/tmp/puzzle.png"));
        reporter.update(3, 8);
        assert_eq!(reporter.position(), (3, Some(8)));
        reporter.finish("done");
    }

    // Tests a fresh reporter starts empty
    #[test]
    fn test_default() {
        assert_eq!(ProgressReporter::default().position(), (0, Some(0)));
    }
}
