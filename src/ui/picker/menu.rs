//! Picker state and action handling.
//!
//! The session owns navigation, query and selection. The picker adds the
//! cursor row and whether keystrokes currently go to the search box.

use treeselect::{Session, SelectionSink, View};

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Open the row under the cursor
    Descend,
    /// Go up one level
    Ascend,
    /// Jump to breadcrumb `n` (0-based)
    JumpTo(usize),
    /// Select the row under the cursor and close
    Choose,
    /// Clear the query, or close when there is none
    Escape,
    /// Close immediately
    Abort,
    /// Send further letters to the search box
    FocusSearch,
    /// Append to the query
    Type(char),
    /// Delete a query char, or ascend on an empty query
    Backspace,
    /// Empty the query
    ClearQuery,
    /// Clear the committed selection
    ClearSelection,
}

/// Result of handling one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Chosen,
    Dismissed,
}

/// Interactive picker over an open session
#[derive(Debug)]
pub struct Picker<S: SelectionSink> {
    session: Session<S>,
    cursor: usize,
    search_focused: bool,
}

impl<S: SelectionSink> Picker<S> {
    /// Open `session` and put the cursor on the current selection if visible.
    pub fn new(mut session: Session<S>) -> Self {
        session.open();
        let selected = session.selection().value.clone();
        let cursor = if selected.is_empty() {
            0
        } else {
            session
                .view()
                .items
                .iter()
                .position(|item| item.node().value == selected)
                .unwrap_or(0)
        };

        Self {
            session,
            cursor,
            search_focused: false,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn into_session(self) -> Session<S> {
        self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    /// Whether printable keys go to the search box
    pub fn is_typing(&self) -> bool {
        self.search_focused || !self.query().is_empty()
    }

    fn query(&self) -> &str {
        self.session.phase().query()
    }

    pub fn handle(&mut self, action: PickerAction) -> Outcome {
        let view = self.session.view();

        match action {
            PickerAction::Up => self.cursor = self.cursor.saturating_sub(1),
            PickerAction::Down => {
                if self.cursor + 1 < view.items.len() {
                    self.cursor += 1;
                }
            }
            PickerAction::Descend => {
                if let Some(item) = view.items.get(self.cursor).filter(|i| i.is_navigable()) {
                    self.session.descend(item.node().id);
                    self.cursor = 0;
                }
            }
            PickerAction::Ascend => self.ascend(&view),
            PickerAction::JumpTo(index) => {
                let came_from = view.breadcrumbs.get(index + 1).map(|p| p.id);
                self.session.jump_to(index);
                self.focus_on(came_from);
            }
            PickerAction::Choose => {
                if let Some(item) = view.items.get(self.cursor) {
                    let node = item.node().clone();
                    self.session.choose(&node);
                    return Outcome::Chosen;
                }
            }
            PickerAction::Escape => {
                if !self.is_typing() {
                    self.session.dismiss();
                    return Outcome::Dismissed;
                }
                self.search_focused = false;
                self.set_query(String::new());
            }
            PickerAction::Abort => {
                self.session.dismiss();
                return Outcome::Dismissed;
            }
            PickerAction::FocusSearch => self.search_focused = true,
            PickerAction::Type(c) => {
                self.search_focused = true;
                let mut query = self.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            PickerAction::Backspace => {
                if self.query().is_empty() {
                    self.ascend(&view);
                } else {
                    let mut query = self.query().to_string();
                    query.pop();
                    self.set_query(query);
                }
            }
            PickerAction::ClearQuery => self.set_query(String::new()),
            PickerAction::ClearSelection => self.session.clear(),
        }

        let len = self.session.view().items.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        Outcome::Continue
    }

    fn ascend(&mut self, view: &View) {
        let came_from = view.breadcrumbs.last().map(|p| p.id);
        self.session.ascend();
        self.focus_on(came_from);
    }

    fn set_query(&mut self, query: String) {
        self.session.set_query(query);
        self.cursor = 0;
    }

    /// Put the cursor on the row with `id`, or the first row.
    fn focus_on(&mut self, id: Option<u64>) {
        self.cursor = id
            .and_then(|id| {
                self.session
                    .view()
                    .items
                    .iter()
                    .position(|item| item.node().id == id)
            })
            .unwrap_or(0);
    }
}
