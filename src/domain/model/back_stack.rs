use crate::domain::primitive::Screen;

/// Ordered history of visited screens.
///
/// Never empty: index 0 is the root and can not be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Screen>,
}

impl BackStack {
    pub fn new(root: Screen) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn root(&self) -> Screen {
        self.entries[0]
    }

    pub fn top(&self) -> Screen {
        self.entries[self.entries.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Screen] {
        &self.entries
    }

    /// Push `screen` on top. Returns `false` (and does nothing) when it is
    /// already the top entry.
    pub fn push(&mut self, screen: Screen) -> bool {
        if self.top() == screen {
            return false;
        }
        self.entries.push(screen);
        true
    }

    /// Remove and return the top entry. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop()
    }
}
