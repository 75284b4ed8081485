//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::trace;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// Interactive question/answer channel with the player.
pub trait Prompter {
    /// Show `prompt` and read one answer line, without its line terminator.
    ///
    /// End of input is reported as `UnexpectedEof`.
    fn read_answer(&mut self, prompt: &str) -> io::Result<String>;

    /// Ask until a non-empty answer is given.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let answer = self.read_answer(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask until the answer is one of `yes`, `y`, `no`, `n` (case-sensitive).
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            match self.ask(prompt)?.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                other => trace!("ignoring answer {:?}", other),
            }
        }
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_answer(prompt)
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Line-oriented prompter over any reader/writer pair.
///
/// Prompts are written followed by a single space; answers are read one line
/// at a time.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was prompted.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!("answer to {:?}: {:?}", prompt, line);
        Ok(line)
    }
}

/// Prompter bound to the process stdin/stdout.
pub type TerminalPrompter = LinePrompter<io::StdinLock<'static>, io::Stdout>;

impl TerminalPrompter {
    pub fn terminal() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stdout())
    }
}
