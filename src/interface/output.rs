use crate::build::GenerationReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Verbose,
}

#[derive(Debug, Clone)]
pub struct Logger {
    verbose: bool,
    debug: bool,
}

impl Logger {
    pub fn new(verbose: bool, debug: bool) -> Self {
        Self { verbose, debug }
    }

    fn should_log(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
            LogLevel::Debug => self.debug || self.verbose,
            LogLevel::Verbose => self.verbose,
        }
    }

    fn log(&self, level: LogLevel, message: &str) {
        if self.should_log(level) {
            let icon = match level {
                LogLevel::Error => "❌",
                LogLevel::Warning => "⚠️",
                LogLevel::Info => "",
                LogLevel::Debug => "🔍",
                LogLevel::Verbose => "💬",
            };
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{} {}", icon, message),
                _ if icon.is_empty() => println!("{}", message),
                _ => println!("{} {}", icon, message),
            }
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

pub struct ProgressReporter {
    logger: Logger,
    progress_bar: Option<ProgressBar>,
    current_step: usize,
    total_steps: usize,
    step_name: String,
}

impl ProgressReporter {
    pub fn new(logger: Logger, total_steps: usize) -> Self {
        let progress_bar = if !logger.is_verbose() {
            let pb = ProgressBar::new_spinner();
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
            pb.set_style(style);
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        Self {
            logger,
            progress_bar,
            current_step: 0,
            total_steps,
            step_name: String::new(),
        }
    }

    pub fn start_step(&mut self, step_name: &str) {
        self.current_step += 1;
        self.step_name = step_name.to_string();

        if self.logger.is_verbose() {
            let progress = if self.total_steps > 0 {
                format!(" ({}/{})", self.current_step, self.total_steps)
            } else {
                String::new()
            };
            self.logger.info(&format!("🚀 {}{}", step_name, progress));
        } else {
            if let Some(ref pb) = self.progress_bar {
                pb.set_message(format!(
                    "{} ({}/{})",
                    step_name, self.current_step, self.total_steps
                ));
            }
        }
    }

    pub fn complete_step(&mut self, message: Option<&str>) {
        if self.logger.is_verbose() {
            if let Some(msg) = message {
                self.logger
                    .info(&format!("✅ {} - {}", self.step_name, msg));
            } else {
                self.logger.info(&format!("✅ {}", self.step_name));
            }
        }
    }

    pub fn fail_step(&mut self, error: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(format!("✗ {} - {}", self.step_name, error));
        }
        self.logger
            .error(&format!("Failed {}: {}", self.step_name, error));
    }

    pub fn update_progress(&self, message: &str) {
        self.logger.verbose(message);
    }

    pub fn finish(&self, total_message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
        println!("✓ {}", total_message);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

/// Final CLI summary of a generation pass
pub fn print_generation_summary(report: &GenerationReport, kotlin_path: &str, swift_path: &str) {
    let count = report.functions.len();
    println!(
        "\n✓ Generated bridges for {} function{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    println!("📁 Kotlin: {}", kotlin_path);
    println!("📁 Swift:  {}", swift_path);
    if !report.removed.is_empty() {
        println!("🧹 Removed {} stale file(s)", report.removed.len());
    }

    if let Some(first) = report.functions.first() {
        let simple = first.rsplit('.').next().unwrap_or(first);
        println!("\n💡 Embed in SwiftUI:");
        println!("  {}Representable(...)", simple);
    }
}
