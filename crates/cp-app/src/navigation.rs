//! Keyboard handling: list navigation, digit accelerators and hotkeys.

use crate::panel::ClipboardPanel;
use crate::state::PanelState;

/// Logical keys the panel reacts to. `Char` carries the produced character;
/// modifier state travels separately in [`KeyPress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    Up,
    Down,
    Home,
    End,
    Enter,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: PanelKey,
    /// Primary command modifier (Cmd on macOS, Ctrl elsewhere).
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: PanelKey) -> Self {
        Self {
            key,
            command: false,
            shift: false,
            alt: false,
        }
    }

    pub fn command(key: PanelKey) -> Self {
        Self {
            command: true,
            ..Self::plain(key)
        }
    }
}

/// Computes the navigation target for a key press, or `None` when the key
/// does not move the selection. Pure so it is testable without a panel.
pub fn navigation_target(state: &PanelState, press: KeyPress) -> Option<usize> {
    let len = state.items.len();
    if len == 0 {
        return None;
    }

    match press.key {
        PanelKey::Down => {
            let base = state.active_index().map_or(0, |index| index + 1);
            Some(base % len)
        }
        PanelKey::Up => {
            let base = state.active_index().unwrap_or(len);
            Some(base.checked_sub(1).unwrap_or(len - 1))
        }
        PanelKey::Home => Some(0),
        PanelKey::End => Some(len - 1),
        // Cmd+digit jumps straight to the Nth visible item.
        PanelKey::Char(ch) if press.command && !press.shift => {
            let digit = ch.to_digit(10)? as usize;
            if digit == 0 || digit > len {
                return None;
            }
            Some(digit - 1)
        }
        _ => None,
    }
}

impl ClipboardPanel {
    /// Moves the selection for a navigation key press. Returns whether the
    /// press was consumed.
    pub fn handle_navigation(&mut self, press: KeyPress) -> bool {
        match navigation_target(&self.state, press) {
            Some(index) => {
                self.select_by_index(index as isize);
                true
            }
            None => false,
        }
    }

    /// Full hotkey dispatch.
    ///
    /// Enter copies (or, with the command modifier, pastes into the active
    /// app) and hides the panel only when that succeeded, so a failure
    /// stays visible; Cmd+S toggles the favorite flag; everything else goes
    /// through navigation.
    pub async fn handle_hotkey(&mut self, press: KeyPress) -> bool {
        match press.key {
            PanelKey::Enter => {
                let done = if press.command {
                    self.apply_item().await
                } else {
                    self.copy_item().await
                };
                if done {
                    self.hide_panel().await;
                }
                true
            }
            PanelKey::Char('s') | PanelKey::Char('S')
                if press.command && !press.shift && !press.alt =>
            {
                self.toggle_favorite().await;
                true
            }
            _ => self.handle_navigation(press),
        }
    }
}
