/// Holds at most one selected model of a single type.
///
/// A slot starts empty and can only move from empty to a model, or from one
/// model to another. There is no way back to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSlot<M> {
    selected: Option<M>,
}

impl<M: PartialEq> SelectionSlot<M> {
    pub const fn new() -> Self {
        Self { selected: None }
    }

    pub const fn get(&self) -> Option<&M> {
        self.selected.as_ref()
    }

    /// Returns true if `model` is the current selection. An empty slot
    /// matches nothing.
    pub fn is_selected(&self, model: &M) -> bool {
        self.selected.as_ref() == Some(model)
    }

    /// Store `model` as the selection. Returns false if it already was.
    pub fn select(&mut self, model: M) -> bool {
        if self.is_selected(&model) {
            return false;
        }
        self.selected = Some(model);
        true
    }
}

impl<M: PartialEq> Default for SelectionSlot<M> {
    fn default() -> Self {
        Self::new()
    }
}
