use std::sync::mpsc::{self, Receiver, Sender};

use crate::domain::model::BackStack;
use crate::domain::primitive::Screen;
use crate::interface_adapter::port::Navigator;

/// Notification published after the back-stack changed.
///
/// `screen` is the screen visible after the change, `depth` the resulting
/// back-stack depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChange {
    Pushed { screen: Screen, depth: usize },
    Popped { screen: Screen, depth: usize },
}

impl NavigationChange {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Pushed { screen, .. } | Self::Popped { screen, .. } => *screen,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Self::Pushed { depth, .. } | Self::Popped { depth, .. } => *depth,
        }
    }
}

/// `Navigator` backed by a `BackStack`, with change subscriptions.
///
/// Subscribers receive changes through a channel instead of a callback so
/// that a presenter's event handler (which holds the navigator borrow) never
/// re-enters the observer.
pub struct StackNavigator {
    back_stack: BackStack,
    subscribers: Vec<Sender<NavigationChange>>,
}

impl StackNavigator {
    pub fn new(root: Screen) -> Self {
        Self {
            back_stack: BackStack::new(root),
            subscribers: Vec::new(),
        }
    }

    pub fn back_stack(&self) -> &BackStack {
        &self.back_stack
    }

    pub fn subscribe(&mut self) -> Receiver<NavigationChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, change: NavigationChange) {
        tracing::debug!(?change, "navigation changed");
        // Dropped receivers are pruned on the next publish.
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }
}

impl Navigator for StackNavigator {
    fn go_to(&mut self, screen: Screen) -> bool {
        if !self.back_stack.push(screen) {
            tracing::debug!(%screen, "already on screen, ignoring go_to");
            return false;
        }
        let depth = self.back_stack.depth();
        self.publish(NavigationChange::Pushed { screen, depth });
        true
    }

    fn pop(&mut self) -> Option<Screen> {
        let Some(removed) = self.back_stack.pop() else {
            tracing::debug!(root = %self.back_stack.root(), "pop at root ignored");
            return None;
        };
        let screen = self.back_stack.top();
        let depth = self.back_stack.depth();
        self.publish(NavigationChange::Popped { screen, depth });
        Some(removed)
    }

    fn peek(&self) -> Screen {
        self.back_stack.top()
    }
}
