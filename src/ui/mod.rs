//! Console output for bundle creation
//!
//! All status output goes through the [`Reporter`] trait so the pipeline does
//! not print directly; `--verbose` switches on the detail lines.

use console::Style;

/// Status sink for the bundle creation pipeline
pub trait Reporter {
    /// A pipeline step is starting
    fn step(&mut self, message: &str);

    /// Fine-grained detail, shown only in verbose mode
    fn detail(&mut self, message: &str);

    /// Plain informational line
    fn info(&mut self, message: &str);

    /// A notice the user should see regardless of verbosity
    fn notice(&mut self, message: &str);

    /// The run finished successfully
    fn success(&mut self, message: &str);
}

/// Reporter writing styled lines to stdout
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn step(&mut self, message: &str) {
        println!("{}", Style::new().bold().apply_to(message));
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn notice(&mut self, message: &str) {
        println!("{}", Style::new().yellow().apply_to(message));
    }

    fn success(&mut self, message: &str) {
        println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
    }
}
