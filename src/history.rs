// src/history.rs
use crate::models::ModelInputs;

const MAX_DEPTH: usize = 20;

/// Bounded undo/redo stacks of full input snapshots.
///
/// Snapshots are independent deep copies; nothing in here aliases the live
/// model. The history owns its snapshots exclusively.
#[derive(Debug, Default)]
pub struct ChangeHistory {
    undo_stack: Vec<ModelInputs>,
    redo_stack: Vec<ModelInputs>,
}

impl ChangeHistory {
    pub fn new() -> Self {
        ChangeHistory::default()
    }

    /// Record the pre-mutation state. Called once per logical mutation,
    /// before the mutation is applied. Any fresh edit invalidates redo.
    pub fn push_snapshot(&mut self, current: &ModelInputs) {
        push_capped(&mut self.undo_stack, current.clone());
        self.redo_stack.clear();
    }

    /// Step back one snapshot. The live state moves onto the redo stack;
    /// returns `current` unchanged when there is nothing to undo.
    pub fn undo(&mut self, current: ModelInputs) -> ModelInputs {
        match self.undo_stack.pop() {
            Some(previous) => {
                push_capped(&mut self.redo_stack, current);
                previous
            }
            None => current,
        }
    }

    /// Step forward again after an undo. Mirror of `undo`.
    pub fn redo(&mut self, current: ModelInputs) -> ModelInputs {
        match self.redo_stack.pop() {
            Some(next) => {
                push_capped(&mut self.undo_stack, current);
                next
            }
            None => current,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

fn push_capped(stack: &mut Vec<ModelInputs>, snapshot: ModelInputs) {
    stack.push(snapshot);
    if stack.len() > MAX_DEPTH {
        stack.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sales(v: &str) -> ModelInputs {
        let mut inputs = ModelInputs::default();
        inputs.historical.sales[0] = v.to_string();
        inputs
    }

    #[test]
    fn undo_restores_the_pushed_snapshot() {
        let mut history = ChangeHistory::new();
        let before = with_sales("100");
        history.push_snapshot(&before);
        let after = with_sales("200");

        let restored = history.undo(after.clone());
        assert_eq!(restored, before);

        let redone = history.redo(restored);
        assert_eq!(redone, after);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut history = ChangeHistory::new();
        let current = with_sales("1");
        assert_eq!(history.undo(current.clone()), current);
        assert_eq!(history.redo(current.clone()), current);
    }

    #[test]
    fn fresh_edit_clears_redo() {
        let mut history = ChangeHistory::new();
        history.push_snapshot(&with_sales("1"));
        let current = history.undo(with_sales("2"));
        assert!(history.can_redo());

        // A new mutation pushes a snapshot, which must invalidate redo.
        history.push_snapshot(&current);
        assert!(!history.can_redo());
        let unchanged = history.redo(current.clone());
        assert_eq!(unchanged, current);
    }

    #[test]
    fn stacks_never_exceed_twenty_entries() {
        let mut history = ChangeHistory::new();
        for i in 0..50 {
            history.push_snapshot(&with_sales(&i.to_string()));
        }
        assert_eq!(history.undo_stack.len(), 20);

        // Snapshots 0..=29 were evicted, so the deepest reachable state is 30.
        let mut current = with_sales("live");
        for _ in 0..20 {
            current = history.undo(current);
        }
        assert_eq!(current.historical.sales[0], "30");
        assert!(!history.can_undo());
        assert_eq!(history.redo_stack.len(), 20);
    }

    #[test]
    fn snapshots_do_not_alias_the_live_model() {
        let mut history = ChangeHistory::new();
        let mut live = with_sales("100");
        history.push_snapshot(&live);
        live.historical.sales[0] = "999".to_string();

        let restored = history.undo(live);
        assert_eq!(restored.historical.sales[0], "100");
    }
}
