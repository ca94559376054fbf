use catalog::EntityId;

/// Focus/highlight state of one dashboard.
///
/// `focused` is the pinned, click/dropdown-driven selection. `hover` is the
/// committed hover target; the effective highlight falls back to the focus
/// whenever no hover is active.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    focused: Option<EntityId>,
    hover: Option<EntityId>,
}

/// Derived view of a [`SelectionState`]; not stored separately, so it can
/// never disagree with the state it summarizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Highlighted,
    Focused,
    FocusedHighlightedOther,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&EntityId> {
        self.focused.as_ref()
    }

    /// The effective highlight: the committed hover target, or the focus
    /// when no hover is active.
    pub fn highlighted(&self) -> Option<&EntityId> {
        self.hover.as_ref().or(self.focused.as_ref())
    }

    pub fn hover(&self) -> Option<&EntityId> {
        self.hover.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match (&self.focused, &self.hover) {
            (None, None) => Phase::Idle,
            (None, Some(_)) => Phase::Highlighted,
            (Some(f), Some(h)) if f != h => Phase::FocusedHighlightedOther,
            (Some(_), _) => Phase::Focused,
        }
    }

    /// Replaces the focus. Returns `true` if it changed. A focus change
    /// resets the hover (the highlight reverts to its focus default).
    pub(crate) fn set_focus(&mut self, id: Option<EntityId>) -> bool {
        if self.focused == id {
            return false;
        }
        self.focused = id;
        self.hover = None;
        true
    }

    /// Replaces the committed hover target. Returns `true` if the effective
    /// highlight changed.
    pub(crate) fn set_hover(&mut self, id: Option<EntityId>) -> bool {
        if self.hover == id {
            return false;
        }
        let before = self.highlighted().cloned();
        self.hover = id;
        self.highlighted() != before.as_ref()
    }
}
