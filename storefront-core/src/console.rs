use std::cell::RefCell;
use std::rc::Rc;

/// Line-oriented output that strategies report their side effects to.
///
/// `Stdout` is what the binary uses. `Captured` keeps every line in memory so
/// tests can assert on exactly what a run would have printed. Clones of a
/// captured console share the same buffer.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Stdout,
    Captured(Rc<RefCell<Vec<String>>>),
}

impl Console {
    pub fn stdout() -> Self {
        Self::Stdout
    }

    pub fn captured() -> Self {
        Self::Captured(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn line(&self, line: impl Into<String>) {
        let line = line.into();
        match self {
            Self::Stdout => println!("{}", line),
            Self::Captured(buffer) => buffer.borrow_mut().push(line),
        }
    }

    /// Lines written so far. Always empty for `Stdout`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Stdout => Vec::new(),
            Self::Captured(buffer) => buffer.borrow().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_clones_share_buffer() {
        let console = Console::captured();
        let writer = console.clone();

        writer.line("first");
        writer.line(String::from("second"));

        assert_eq!(console.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_stdout_keeps_nothing() {
        let console = Console::stdout();
        console.line("printed");
        assert!(console.lines().is_empty());
    }
}
