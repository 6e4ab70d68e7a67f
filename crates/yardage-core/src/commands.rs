//! Voice-command vocabulary and overlay toggles.
//!
//! Speech capture and phrase classification happen elsewhere; this module
//! only turns a ranked list of phrase matches into a display change.

use crate::models::DisplayOptions;
use serde::{Deserialize, Serialize};

/// Phrases the classifier ranks against, indexed by [`RankedIntent::phrase_index`].
pub const COMMAND_PHRASES: [&str; 12] = [
    "Wait!",
    "Show Hole One",
    "Show Hole Two",
    "Show Hole Three",
    "Hide Hole One",
    "Hide Hole Two",
    "Hide Hole Three",
    "Show Bunker",
    "Hide Bunker",
    "Show Path",
    "Hide Path",
    "Please say again!",
];

/// Matches scoring at or below this are treated as "didn't catch that".
pub const MIN_INTENT_CONFIDENCE: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command", content = "hole")]
pub enum VoiceCommand {
    Wait,
    ShowHole(u32),
    HideHole(u32),
    ShowBunker,
    HideBunker,
    ShowPath,
    HidePath,
    SayAgain,
}

impl VoiceCommand {
    /// Command for an entry of [`COMMAND_PHRASES`].
    pub fn from_phrase_index(index: usize) -> Option<Self> {
        let command = match index {
            0 => Self::Wait,
            1..=3 => Self::ShowHole(index as u32),
            4..=6 => Self::HideHole(index as u32 - 3),
            7 => Self::ShowBunker,
            8 => Self::HideBunker,
            9 => Self::ShowPath,
            10 => Self::HidePath,
            11 => Self::SayAgain,
            _ => return None,
        };
        Some(command)
    }

    pub fn phrase(&self) -> Option<&'static str> {
        let index = match *self {
            Self::Wait => 0,
            Self::ShowHole(hole @ 1..=3) => hole as usize,
            Self::HideHole(hole @ 1..=3) => hole as usize + 3,
            Self::ShowHole(_) | Self::HideHole(_) => return None,
            Self::ShowBunker => 7,
            Self::HideBunker => 8,
            Self::ShowPath => 9,
            Self::HidePath => 10,
            Self::SayAgain => 11,
        };
        Some(COMMAND_PHRASES[index])
    }
}

/// One classifier match: a phrase and its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedIntent {
    pub phrase_index: usize,
    pub score: f64,
}

/// Pick the command to act on from a classifier's ranked matches.
///
/// The best match wins if it clears `min_confidence`; anything else asks the
/// player to repeat themselves. Equal scores go to the lower phrase index,
/// so input order does not matter.
pub fn dispatch(ranked: &[RankedIntent], min_confidence: f64) -> VoiceCommand {
    let best = ranked
        .iter()
        .filter(|intent| intent.score.is_finite())
        .min_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.phrase_index.cmp(&b.phrase_index))
        });

    match best {
        Some(intent) if intent.score > min_confidence => {
            VoiceCommand::from_phrase_index(intent.phrase_index).unwrap_or(VoiceCommand::SayAgain)
        }
        _ => VoiceCommand::SayAgain,
    }
}

impl DisplayOptions {
    /// Apply a command. Returns whether anything the renderer draws changed.
    pub fn apply(&mut self, command: VoiceCommand) -> bool {
        match command {
            VoiceCommand::ShowHole(hole) => self.visible_holes.insert(hole),
            VoiceCommand::HideHole(hole) => self.visible_holes.remove(&hole),
            VoiceCommand::ShowBunker => !std::mem::replace(&mut self.show_bunkers, true),
            VoiceCommand::HideBunker => std::mem::replace(&mut self.show_bunkers, false),
            VoiceCommand::ShowPath => !std::mem::replace(&mut self.show_path, true),
            VoiceCommand::HidePath => std::mem::replace(&mut self.show_path, false),
            VoiceCommand::Wait | VoiceCommand::SayAgain => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(phrase_index: usize, score: f64) -> RankedIntent {
        RankedIntent {
            phrase_index,
            score,
        }
    }

    #[test]
    fn phrase_table_round_trips() {
        for (index, phrase) in COMMAND_PHRASES.iter().enumerate() {
            let command = VoiceCommand::from_phrase_index(index).unwrap();
            assert_eq!(command.phrase(), Some(*phrase));
        }
        assert_eq!(VoiceCommand::from_phrase_index(12), None);
        assert_eq!(VoiceCommand::ShowHole(9).phrase(), None);
    }

    #[test]
    fn best_match_above_floor_wins() {
        let ranked = [intent(9, 0.61), intent(7, 0.83), intent(10, 0.52)];
        assert_eq!(dispatch(&ranked, MIN_INTENT_CONFIDENCE), VoiceCommand::ShowBunker);
    }

    #[test]
    fn equal_scores_pick_lower_phrase_index() {
        let forward = [intent(9, 0.7), intent(7, 0.7)];
        let reversed = [intent(7, 0.7), intent(9, 0.7)];
        assert_eq!(dispatch(&forward, MIN_INTENT_CONFIDENCE), VoiceCommand::ShowBunker);
        assert_eq!(dispatch(&reversed, MIN_INTENT_CONFIDENCE), VoiceCommand::ShowBunker);
    }

    #[test]
    fn weak_or_missing_match_asks_again() {
        assert_eq!(dispatch(&[], MIN_INTENT_CONFIDENCE), VoiceCommand::SayAgain);
        assert_eq!(
            dispatch(&[intent(2, 0.45)], MIN_INTENT_CONFIDENCE),
            VoiceCommand::SayAgain
        );
        assert_eq!(
            dispatch(&[intent(2, f64::NAN)], MIN_INTENT_CONFIDENCE),
            VoiceCommand::SayAgain
        );
        assert_eq!(dispatch(&[intent(40, 0.9)], MIN_INTENT_CONFIDENCE), VoiceCommand::SayAgain);
    }

    #[test]
    fn toggles_report_changes() {
        let mut options = DisplayOptions::default();

        assert!(options.apply(VoiceCommand::ShowHole(2)));
        assert!(!options.apply(VoiceCommand::ShowHole(2)));
        assert!(options.is_hole_visible(2));

        assert!(options.apply(VoiceCommand::ShowBunker));
        assert!(options.show_bunkers);
        assert!(!options.apply(VoiceCommand::ShowBunker));

        assert!(options.apply(VoiceCommand::HidePath));
        assert!(!options.show_path);

        assert!(options.apply(VoiceCommand::HideHole(2)));
        assert!(!options.is_hole_visible(2));
        assert!(!options.apply(VoiceCommand::Wait));
    }
}
