use super::scrollback::{Entry, EntryKind};

pub trait Output {
    fn print(&mut self, text: &str);
}

pub struct StdOutput;

impl StdOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StdOutput {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub struct StdErrOutput;

impl StdErrOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StdErrOutput {
    fn print(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

pub struct OutputStreams {
    pub stdout: Box<dyn Output>,
    pub stderr: Box<dyn Output>,
    /// Whether echoed input lines are printed. An interactive editor has
    /// already shown them on the prompt line.
    pub show_echo: bool,
}

impl OutputStreams {
    pub fn new(stdout: Box<dyn Output>, stderr: Box<dyn Output>) -> Self {
        Self {
            stdout,
            stderr,
            show_echo: true,
        }
    }

    pub fn default() -> Self {
        Self::new(Box::new(StdOutput::new()), Box::new(StdErrOutput::new()))
    }

    pub fn with_echo(mut self, show_echo: bool) -> Self {
        self.show_echo = show_echo;
        self
    }

    pub fn render(&mut self, entries: &[Entry]) {
        for entry in entries {
            match entry.kind {
                EntryKind::Input if !self.show_echo => {}
                EntryKind::Input | EntryKind::Output => self.stdout.print(&entry.text),
                EntryKind::Error => self.stderr.print(&entry.text),
            }
        }
    }
}
