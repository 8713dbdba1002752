use crate::emotion::{EmotionId, IntensityLevel};

/// Maximum number of emotions selected at once.
pub const CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub emotion: EmotionId,
    pub intensity: IntensityLevel,
}

/// What a [`Selection::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Deselected,
    Adjusted,
    Added { evicted: Option<EmotionId> },
}

/// Chosen emotions, oldest first, each with its chosen intensity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<Pick>,
}

impl Selection {
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn contains(&self, emotion: EmotionId) -> bool {
        self.position(emotion).is_some()
    }

    pub fn intensity_of(&self, emotion: EmotionId) -> Option<IntensityLevel> {
        self.position(emotion).map(|i| self.picks[i].intensity)
    }

    pub fn emotions(&self) -> impl Iterator<Item = EmotionId> + '_ {
        self.picks.iter().map(|p| p.emotion)
    }

    /// The selected pair, oldest first, once two emotions are chosen.
    pub fn pair(&self) -> Option<[EmotionId; 2]> {
        match self.picks.as_slice() {
            [a, b] => Some([a.emotion, b.emotion]),
            _ => None,
        }
    }

    fn position(&self, emotion: EmotionId) -> Option<usize> {
        self.picks.iter().position(|p| p.emotion == emotion)
    }

    /// Clicking the active (emotion, intensity) deselects it. Clicking another intensity of a
    /// selected emotion changes it in place. A new emotion evicts the oldest pick when full.
    pub fn toggle(&mut self, emotion: EmotionId, intensity: IntensityLevel) -> Toggle {
        match self.position(emotion) {
            Some(i) if self.picks[i].intensity == intensity => {
                self.picks.remove(i);
                Toggle::Deselected
            }
            Some(i) => {
                self.picks[i].intensity = intensity;
                Toggle::Adjusted
            }
            None => Toggle::Added {
                evicted: self.push(emotion, intensity),
            },
        }
    }

    /// Changes the intensity of an already selected emotion. Returns false if not selected.
    pub fn set_intensity(&mut self, emotion: EmotionId, intensity: IntensityLevel) -> bool {
        match self.position(emotion) {
            Some(i) => {
                self.picks[i].intensity = intensity;
                true
            }
            None => false,
        }
    }

    /// Replaces the selection with `pair`. Emotions already selected keep their intensity,
    /// the rest start at medium.
    pub fn select_pair(&mut self, pair: [EmotionId; 2]) {
        self.picks = pair
            .into_iter()
            .map(|emotion| Pick {
                emotion,
                intensity: self.intensity_of(emotion).unwrap_or_default(),
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    fn push(&mut self, emotion: EmotionId, intensity: IntensityLevel) -> Option<EmotionId> {
        let evicted = (self.picks.len() >= CAPACITY).then(|| self.picks.remove(0).emotion);
        self.picks.push(Pick { emotion, intensity });
        evicted
    }
}
