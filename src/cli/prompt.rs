//! Interactive prompt-then-apply session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::report;
use crate::domain::{ApplyReport, VaultConfig};
use crate::materialize::apply;
use crate::reconcile::plan;

const ROOT_PROMPT: &str = "Enter the root directory of the Obsidian vault: ";
const CONFIRM_PROMPT: &str = "Do you want to create these missing files? (y/n): ";

/// How a session should behave once the plan is known.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub extension: Option<String>,
    pub follow_symlinks: bool,
    /// Create without asking.
    pub assume_yes: bool,
    /// Report only; never prompt or create.
    pub dry_run: bool,
    /// Print the plan as JSON instead of the text report.
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingMissing,
    Reported,
    Declined,
    Created(ApplyReport),
    Failed,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Drives one run over arbitrary input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line and keep its first whitespace-delimited token.
    fn read_token(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.split_whitespace().next().unwrap_or_default().to_string())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_token()
    }

    /// Run the whole flow. Domain failures are reported on the output stream
    /// and turned into [`Outcome::Failed`]; only I/O on the streams
    /// themselves is returned as an error.
    pub fn run(&mut self, root: Option<PathBuf>, options: &SessionOptions) -> io::Result<Outcome> {
        let root = match root {
            Some(root) => root,
            None => PathBuf::from(self.ask(ROOT_PROMPT)?),
        };

        let mut config = VaultConfig::new(root).follow_symlinks(options.follow_symlinks);
        if let Some(ext) = &options.extension {
            config = config.extension(ext);
        }

        let plan = match plan(&config) {
            Ok(plan) => plan,
            Err(e) => {
                writeln!(self.output, "Error {e}")?;
                return Ok(Outcome::Failed);
            }
        };

        if options.json {
            report::write_json(&mut self.output, &plan)?;
            return Ok(Outcome::Reported);
        }

        if plan.is_empty() {
            writeln!(self.output, "No missing files found.")?;
            return Ok(Outcome::NothingMissing);
        }

        report::write_missing(&mut self.output, &plan)?;
        if options.dry_run {
            writeln!(self.output, "No files were created.")?;
            return Ok(Outcome::Reported);
        }

        let confirmed = options.assume_yes || self.ask(CONFIRM_PROMPT)?.eq_ignore_ascii_case("y");
        if !confirmed {
            writeln!(self.output, "No files were created.")?;
            return Ok(Outcome::Declined);
        }

        match apply(&config.root, &plan.missing, &config.extension) {
            Ok(applied) => {
                writeln!(self.output, "Missing files created.")?;
                Ok(Outcome::Created(applied))
            }
            Err(e) => {
                let phase = if e.is_filesystem() {
                    "creating missing files"
                } else {
                    "validating missing files"
                };
                writeln!(self.output, "Error {phase}: {e}")?;
                Ok(Outcome::Failed)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_with(input: &str, root: Option<PathBuf>, options: &SessionOptions) -> (Outcome, String) {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let outcome = session.run(root, options).unwrap();
        (outcome, String::from_utf8(session.into_output()).unwrap())
    }

    fn vault() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "line one\nline two\nSee [[b]] and [[c]].\n").unwrap();
        fs::write(temp.path().join("b.md"), "").unwrap();
        temp
    }

    #[test]
    fn prompts_for_root_and_creates_on_yes() {
        let temp = vault();
        let input = format!("{}\nY\n", temp.path().display());

        let (outcome, out) = run_with(&input, None, &SessionOptions::default());

        assert!(out.starts_with(ROOT_PROMPT));
        assert!(out.contains("Missing files:\nc.md is referenced in:\n  - a.md (line 3)\n"));
        assert!(out.contains(CONFIRM_PROMPT));
        assert!(out.ends_with("Missing files created.\n"));
        assert!(matches!(outcome, Outcome::Created(ref r) if r.created.len() == 1));
        assert!(temp.path().join("c.md").is_file());
    }

    #[test]
    fn anything_but_y_declines() {
        let temp = vault();
        let (outcome, out) =
            run_with("yes\n", Some(temp.path().to_path_buf()), &SessionOptions::default());

        assert_eq!(outcome, Outcome::Declined);
        assert!(out.ends_with("No files were created.\n"));
        assert!(!temp.path().join("c.md").exists());
    }

    #[test]
    fn empty_vault_reports_nothing_missing() {
        let temp = TempDir::new().unwrap();
        let (outcome, out) =
            run_with("", Some(temp.path().to_path_buf()), &SessionOptions::default());

        assert_eq!(outcome, Outcome::NothingMissing);
        assert_eq!(out, "No missing files found.\n");
    }

    #[test]
    fn missing_root_is_reported_not_raised() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nowhere");
        let (outcome, out) = run_with("", Some(root), &SessionOptions::default());

        assert!(outcome.is_failure());
        assert!(out.starts_with("Error finding markdown files: "));
    }

    #[test]
    fn traversal_target_is_rejected_at_validation() {
        let temp = TempDir::new().unwrap();
        let vault = temp.path().join("vault");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("evil.md"), "[[../../etc/passwd]]").unwrap();

        let options = SessionOptions { assume_yes: true, ..Default::default() };
        let (outcome, out) = run_with("", Some(vault), &options);

        assert!(outcome.is_failure());
        assert!(out.contains("Error validating missing files: refusing to create '../../etc/passwd'"));
    }

    #[test]
    fn creation_failure_is_reported_with_its_phase() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("file"), "plain file").unwrap();
        fs::write(root.join("index.md"), "[[file/x]]\n[[z]]\n").unwrap();

        let options = SessionOptions { assume_yes: true, ..Default::default() };
        let (outcome, out) = run_with("", Some(root.to_path_buf()), &options);

        assert!(outcome.is_failure());
        assert!(out.contains("Error creating missing files: cannot create"));
        assert!(!root.join("z.md").exists());
    }

    #[test]
    fn dry_run_never_prompts() {
        let temp = vault();
        let options = SessionOptions { dry_run: true, ..Default::default() };
        let (outcome, out) = run_with("y\n", Some(temp.path().to_path_buf()), &options);

        assert_eq!(outcome, Outcome::Reported);
        assert!(!out.contains(CONFIRM_PROMPT));
        assert!(!temp.path().join("c.md").exists());
    }

    #[test]
    fn json_mode_prints_plan() {
        let temp = vault();
        let options = SessionOptions { json: true, ..Default::default() };
        let (_, out) = run_with("", Some(temp.path().to_path_buf()), &options);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["missing"]["c"][0]["line"], 3);
        assert!(value["missing"].get("b").is_none());
    }
}
