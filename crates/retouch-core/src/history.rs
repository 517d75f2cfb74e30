//! Linear undo/redo history over full image snapshots.
//!
//! ## Model
//!
//! The history owns three kinds of image:
//! - `original`: the image as loaded, never modified
//! - `current`: what is on screen right now
//! - two stacks of snapshots (`undo`, `redo`), most recent last
//!
//! Every edit is computed from `original`, not from `current`. Edits
//! therefore do not compose: applying brightness after blur shows the
//! brightened original, and the blur is only reachable through undo.
//!
//! After a load the undo stack holds exactly one entry, the original, and
//! that base entry is never popped. Undo and redo only move snapshots between
//! the stacks; they never recompute anything and never touch the toggle flags.
//!
//! ## Toggle flags
//!
//! Grayscale and flip are binary toggles against `original`:
//!
//! ```text
//!            toggle (recompute)
//!  Original ────────────────────> Toggled
//!     ^                              │
//!     └──────────────────────────────┘
//!            toggle (copy original)
//! ```
//!
//! Both flip directions share one flag, so a horizontal flip followed by a
//! vertical flip reverts to the original.

use crate::edit::Toggle;
use crate::raster::Image;
use crate::EditError;

/// Undo/redo bookkeeping for one loaded image.
#[derive(Debug, Clone)]
pub struct EditHistory {
    original: Image,
    current: Image,
    undo_stack: Vec<Image>,
    redo_stack: Vec<Image>,
    grayscale_active: bool,
    flip_active: bool,
}

impl EditHistory {
    /// Start a history for a freshly loaded image.
    pub fn new(image: Image) -> Self {
        Self {
            undo_stack: vec![image.clone()],
            redo_stack: Vec::new(),
            current: image.clone(),
            original: image,
            grayscale_active: false,
            flip_active: false,
        }
    }

    /// Replace everything with a newly loaded image.
    ///
    /// Both stacks are cleared, the image becomes the sole undo entry, and
    /// both toggle flags are reset.
    pub fn load_new(&mut self, image: Image) {
        *self = Self::new(image);
        tracing::debug!(
            width = self.original.width,
            height = self.original.height,
            "history reset"
        );
    }

    /// Apply an edit computed from the original image.
    ///
    /// On success `current` is pushed onto the undo stack, the redo stack is
    /// cleared and the result becomes the new `current`. If `operation`
    /// fails, nothing changes.
    pub fn apply_edit<F>(&mut self, operation: F) -> Result<&Image, EditError>
    where
        F: FnOnce(&Image) -> Result<Image, EditError>,
    {
        let result = operation(&self.original)?;
        self.snapshot();
        self.current = result;
        Ok(&self.current)
    }

    /// Flip one of the binary toggles.
    ///
    /// Snapshots like [`apply_edit`](Self::apply_edit). When the flag is set,
    /// `current` reverts to a copy of the original without recomputing;
    /// otherwise `recolor` is applied to the original. Returns the new
    /// current image and the new flag value.
    pub fn toggle_binary_state<F>(&mut self, toggle: Toggle, recolor: F) -> (&Image, bool)
    where
        F: FnOnce(&Image) -> Image,
    {
        self.snapshot();

        let active = match toggle {
            Toggle::Grayscale => &mut self.grayscale_active,
            Toggle::Flip => &mut self.flip_active,
        };

        if *active {
            self.current = self.original.clone();
            *active = false;
        } else {
            self.current = recolor(&self.original);
            *active = true;
        }

        let now_active = *active;
        tracing::debug!(?toggle, active = now_active, "toggled");
        (&self.current, now_active)
    }

    /// Step back one entry.
    ///
    /// # Errors
    ///
    /// Returns `EditError::EmptyHistory` when only the base entry is left.
    pub fn undo(&mut self) -> Result<&Image, EditError> {
        if self.undo_stack.len() <= 1 {
            return Err(EditError::EmptyHistory);
        }

        self.redo_stack.push(self.current.clone());
        self.undo_stack.pop();
        if let Some(top) = self.undo_stack.last() {
            self.current = top.clone();
        }

        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        Ok(&self.current)
    }

    /// Re-apply the most recently undone entry.
    ///
    /// # Errors
    ///
    /// Returns `EditError::EmptyRedo` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<&Image, EditError> {
        let next = self.redo_stack.pop().ok_or(EditError::EmptyRedo)?;
        self.undo_stack.push(std::mem::replace(&mut self.current, next));

        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        Ok(&self.current)
    }

    /// The image as loaded.
    pub fn original(&self) -> &Image {
        &self.original
    }

    /// The image currently displayed.
    pub fn current(&self) -> &Image {
        &self.current
    }

    /// Number of entries on the undo stack, base entry included.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn is_grayscale_active(&self) -> bool {
        self.grayscale_active
    }

    pub fn is_flip_active(&self) -> bool {
        self.flip_active
    }

    fn snapshot(&mut self) {
        self.undo_stack.push(self.current.clone());
        self.redo_stack.clear();
        tracing::debug!(undo_depth = self.undo_stack.len(), "snapshot pushed");
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::ops;
    use crate::ops::test_support::position_image;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Step {
        Brighten(i32),
        Grayscale,
        Flip,
        Undo,
        Redo,
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            (-100i32..=100).prop_map(Step::Brighten),
            Just(Step::Grayscale),
            Just(Step::Flip),
            Just(Step::Undo),
            Just(Step::Redo),
        ]
    }

    fn run(h: &mut EditHistory, step: &Step) {
        match step {
            Step::Brighten(offset) => {
                let offset = *offset;
                let _ = h.apply_edit(|img| Ok(ops::adjust_brightness(img, offset)));
            }
            Step::Grayscale => {
                h.toggle_binary_state(Toggle::Grayscale, ops::grayscale);
            }
            Step::Flip => {
                h.toggle_binary_state(Toggle::Flip, ops::flip_horizontal);
            }
            Step::Undo => {
                let _ = h.undo();
            }
            Step::Redo => {
                let _ = h.redo();
            }
        }
    }

    proptest! {
        /// Property: N edits from a fresh load leave N + 1 undo entries.
        #[test]
        fn prop_undo_depth_is_edits_plus_one(offsets in proptest::collection::vec(-100i32..=100, 0..20)) {
            let mut h = EditHistory::new(position_image(6, 6));
            for offset in &offsets {
                let offset = *offset;
                h.apply_edit(|img| Ok(ops::adjust_brightness(img, offset))).unwrap();
            }
            prop_assert_eq!(h.undo_depth(), offsets.len() + 1);
            prop_assert_eq!(h.redo_depth(), 0);
        }

        /// Property: The undo stack is never empty and the original never changes.
        #[test]
        fn prop_base_entry_survives(steps in proptest::collection::vec(step_strategy(), 0..40)) {
            let original = position_image(5, 4);
            let mut h = EditHistory::new(original.clone());
            for step in &steps {
                run(&mut h, step);
                prop_assert!(h.undo_depth() >= 1);
                prop_assert_eq!(h.original(), &original);
            }
        }

        /// Property: Undo immediately followed by redo restores the current image.
        #[test]
        fn prop_undo_redo_restores(steps in proptest::collection::vec(step_strategy(), 0..30)) {
            let mut h = EditHistory::new(position_image(5, 4));
            for step in &steps {
                run(&mut h, step);
            }

            let before = h.current().clone();
            if h.undo().is_ok() {
                let after = h.redo().unwrap().clone();
                prop_assert_eq!(after, before);
            }
        }
    }
}
