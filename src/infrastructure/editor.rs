//! Compose entry text in an external editor

use crate::error::{DayjotError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs the user's editor on a scratch file and reads the result back
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Seed `scratch` with `initial`, wait for the editor to exit, return the text.
    ///
    /// The scratch file is removed afterwards whether or not the editor succeeded.
    pub fn compose(&self, scratch: &Path, initial: &str) -> Result<String> {
        fs::write(scratch, initial)?;
        let outcome = self.run(scratch).and_then(|_| Ok(fs::read_to_string(scratch)?));
        let _ = fs::remove_file(scratch);
        outcome
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        #[cfg(windows)]
        let status = Command::new("cmd").arg("/C").arg(&program).args(&args).status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DayjotError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DayjotError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }

    /// Split into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), Vec::new()),
            None => ("nano".to_string(), Vec::new()),
        }
    }
}
