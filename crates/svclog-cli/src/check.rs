//! Logger-usage checker
//!
//! Walks the immediate sub-directories of a code base root (one per service),
//! guesses each service's language from the files it contains, and reports
//! whether the service logs through a logger and whether it also writes to
//! the console directly.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;
use svclog_core::Logger;

/// Languages the checker knows how to scan, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Rust,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Rust,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => ".js",
            Language::Python => ".py",
            Language::Java => ".java",
            Language::Rust => ".rs",
        }
    }

    fn logger_pattern(&self) -> &'static str {
        match self {
            Language::JavaScript => r"logger\.(info|warn|error|debug)",
            Language::Python => r"logger\.(info|warning|error|debug)",
            Language::Java => r"logger\.(info|warn|error|debug)",
            Language::Rust => r"logger\.(info|warn|error)|log_(info|warn|error)!",
        }
    }

    fn bad_pattern(&self) -> &'static str {
        match self {
            Language::JavaScript => r"console\.log",
            Language::Python => r"print\(",
            Language::Java => r"System\.out\.println",
            Language::Rust => r"println!",
        }
    }

    /// Example of the bad practice, for reports
    pub fn bad_example(&self) -> &'static str {
        match self {
            Language::JavaScript => "console.log",
            Language::Python => "print()",
            Language::Java => "System.out.println",
            Language::Rust => "println!",
        }
    }
}

/// Result of checking one service directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    pub service: String,
    pub language: Option<Language>,
    pub has_logger: bool,
    pub has_bad: bool,
}

impl ServiceReport {
    /// Unknown-language directories pass; scanned services need logger
    /// usage and no direct console output
    pub fn is_clean(&self) -> bool {
        self.language.is_none() || (self.has_logger && !self.has_bad)
    }

    /// Emit this report through `logger`
    pub fn emit(&self, logger: &dyn Logger) {
        let Some(language) = self.language else {
            logger.warn(&format!("🔍 {}: Unknown language or no source files", self.service));
            return;
        };

        if self.has_logger {
            logger.info(&format!("✅ {}: Logger usage detected", self.service));
        } else {
            logger.warn(&format!("⚠️  {}: No logger usage found", self.service));
        }

        if self.has_bad {
            logger.error(&format!(
                "🚫 {}: Detected bad logging practice (e.g. {})",
                self.service,
                language.bad_example()
            ));
        }
    }
}

struct LanguagePatterns {
    logger: Regex,
    bad: Regex,
}

impl LanguagePatterns {
    fn compile(language: Language) -> Result<Self, regex::Error> {
        Ok(Self {
            logger: Regex::new(language.logger_pattern())?,
            bad: Regex::new(language.bad_pattern())?,
        })
    }
}

/// Compiled patterns for every supported language
pub struct Checker {
    javascript: LanguagePatterns,
    python: LanguagePatterns,
    java: LanguagePatterns,
    rust: LanguagePatterns,
}

impl Checker {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            javascript: LanguagePatterns::compile(Language::JavaScript)?,
            python: LanguagePatterns::compile(Language::Python)?,
            java: LanguagePatterns::compile(Language::Java)?,
            rust: LanguagePatterns::compile(Language::Rust)?,
        })
    }

    fn patterns(&self, language: Language) -> &LanguagePatterns {
        match language {
            Language::JavaScript => &self.javascript,
            Language::Python => &self.python,
            Language::Java => &self.java,
            Language::Rust => &self.rust,
        }
    }

    /// Guess a directory's language from the entry names directly inside it
    pub fn detect_language(&self, dir: &Path) -> io::Result<Option<Language>> {
        let names: Vec<String> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        Ok(Language::ALL
            .into_iter()
            .find(|language| names.iter().any(|name| name.ends_with(language.extension()))))
    }

    /// Scan the files directly inside `dir` (not recursive)
    ///
    /// Returns `(has_logger, has_bad)`.
    pub fn scan(&self, dir: &Path, language: Language) -> io::Result<(bool, bool)> {
        let patterns = self.patterns(language);
        let mut has_logger = false;
        let mut has_bad = false;

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let bytes = fs::read(&path)?;
            let content = String::from_utf8_lossy(&bytes);

            has_logger |= patterns.logger.is_match(&content);
            has_bad |= patterns.bad.is_match(&content);
        }

        Ok((has_logger, has_bad))
    }

    /// Check every service directory under `root`, in name order
    pub fn check(&self, root: &Path) -> io::Result<Vec<ServiceReport>> {
        let mut services: Vec<_> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .collect();
        services.sort_by_key(|entry| entry.file_name());

        let mut reports = Vec::with_capacity(services.len());
        for entry in services {
            let dir = entry.path();
            let service = entry.file_name().to_string_lossy().into_owned();

            let report = match self.detect_language(&dir)? {
                Some(language) => {
                    let (has_logger, has_bad) = self.scan(&dir, language)?;
                    ServiceReport {
                        service,
                        language: Some(language),
                        has_logger,
                        has_bad,
                    }
                }
                None => ServiceReport {
                    service,
                    language: None,
                    has_logger: false,
                    has_bad: false,
                },
            };
            reports.push(report);
        }

        Ok(reports)
    }
}
