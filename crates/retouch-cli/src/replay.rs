//! Replaying edit steps against an editor session.

use std::fmt;
use std::str::FromStr;

use retouch_core::{Edit, EditError, Editor};

/// One command-line step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Edit(Edit),
    Undo,
    Redo,
}

impl FromStr for Step {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undo" => Ok(Step::Undo),
            "redo" => Ok(Step::Redo),
            _ => s.parse().map(Step::Edit),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Edit(edit) => write!(f, "{}", edit),
            Step::Undo => write!(f, "undo"),
            Step::Redo => write!(f, "redo"),
        }
    }
}

/// Outcome of a replay.
#[derive(Debug, Default)]
pub struct Summary {
    /// Steps that changed the displayed image.
    pub applied: usize,
    /// Steps that were reported to the user instead of applied.
    pub notices: Vec<(Step, EditError)>,
}

/// Run every step in order.
///
/// Rejected edits and exhausted undo/redo are reported and skipped; the
/// session is unchanged by them, so the remaining steps still run.
pub fn replay(editor: &mut Editor, steps: &[Step]) -> Summary {
    let mut summary = Summary::default();

    for &step in steps {
        let result = match step {
            Step::Edit(edit) => editor.apply(&edit).map(|_| ()),
            Step::Undo => editor.undo().map(|_| ()),
            Step::Redo => editor.redo().map(|_| ()),
        };

        match result {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                if err.is_informational() {
                    tracing::info!(%step, "{err}");
                } else {
                    tracing::warn!(%step, "{err}");
                }
                summary.notices.push((step, err));
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Image;

    fn editor() -> Editor {
        let mut editor = Editor::new();
        editor.load(Image::new(4, 2, vec![100; 4 * 2 * 3]));
        editor
    }

    fn steps(text: &[&str]) -> Vec<Step> {
        text.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("undo".parse::<Step>().unwrap(), Step::Undo);
        assert_eq!("REDO".parse::<Step>().unwrap(), Step::Redo);
        assert_eq!(
            "brightness=5".parse::<Step>().unwrap(),
            Step::Edit(Edit::Brightness { offset: 5 })
        );
        assert!("undo=2".parse::<Step>().is_err());
    }

    #[test]
    fn test_replay_applies_in_order() {
        let mut editor = editor();
        let summary = replay(&mut editor, &steps(&["brightness=20", "undo", "redo"]));

        assert_eq!(summary.applied, 3);
        assert!(summary.notices.is_empty());
        assert_eq!(editor.current().unwrap().pixels[0], 120);
    }

    #[test]
    fn test_replay_continues_after_notices() {
        let mut editor = editor();
        let summary = replay(
            &mut editor,
            &steps(&["undo", "crop=10x10", "redo", "brightness=-50"]),
        );

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.notices.len(), 3);
        assert!(matches!(summary.notices[0].1, EditError::EmptyHistory));
        assert!(matches!(
            summary.notices[1].1,
            EditError::DimensionsExceedBounds { .. }
        ));
        assert!(matches!(summary.notices[2].1, EditError::EmptyRedo));
        assert_eq!(editor.current().unwrap().pixels[0], 50);
    }

    #[test]
    fn test_replay_toggle_twice_restores_original() {
        let mut editor = editor();
        replay(&mut editor, &steps(&["fliph", "fliph"]));

        let history = editor.history().unwrap();
        assert_eq!(history.current(), history.original());
        assert_eq!(history.undo_depth(), 3);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Undo.to_string(), "undo");
        assert_eq!(Step::Edit(Edit::Hue { shift: 7 }).to_string(), "hue=7");
    }
}
