use crate::color;
use crate::data::{self, DyadRecord, EmotionRecord, TierRecord};
use crate::dyad::{Dyad, DyadCategory, DyadIntensity, DyadName, sorted_pair};
use crate::emotion::{Emotion, EmotionId, IntensityTier};
use crate::geometry::angular_distance;
use crate::selection::Selection;
use palette::Srgb;
use strum::EnumCount;
use thiserror::Error;

const SEPARATION_EPSILON: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("expected {expected} emotions, found {found}")]
    EmotionCount { expected: usize, found: usize },
    #[error("{emotion} is listed at position {index}, out of wheel order")]
    EmotionOrder { emotion: EmotionId, index: usize },
    #[error("invalid color {value:?} for {owner}")]
    Color { owner: String, value: String },
    #[error("dyad {0} pairs an emotion with itself")]
    SelfPair(String),
    #[error("dyad {name} spans {degrees} degrees, which is no dyad category")]
    Separation { name: String, degrees: f64 },
    #[error("dyad {name} is stored as {stored} but its emotions make it {derived}")]
    CategoryMismatch {
        name: String,
        stored: DyadCategory,
        derived: DyadCategory,
    },
    #[error("dyad {name} is classified {stored}, {category} dyads are {expected}")]
    IntensityMismatch {
        name: String,
        stored: DyadIntensity,
        category: DyadCategory,
        expected: DyadIntensity,
    },
    #[error("dyads {first} and {second} share the same emotion pair")]
    DuplicatePair { first: String, second: String },
}

/// Validated emotion and dyad tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    emotions: Vec<Emotion>,
    dyads: Vec<Dyad>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_records(data::EMOTIONS, data::DYADS)
    }

    pub fn from_records(
        emotions: &[EmotionRecord],
        dyads: &[DyadRecord],
    ) -> Result<Self, CatalogError> {
        if emotions.len() != EmotionId::COUNT {
            return Err(CatalogError::EmotionCount {
                expected: EmotionId::COUNT,
                found: emotions.len(),
            });
        }

        let emotions = emotions
            .iter()
            .enumerate()
            .map(|(index, record)| load_emotion(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        let mut catalog = Self {
            emotions,
            dyads: Vec::with_capacity(dyads.len()),
        };

        for record in dyads {
            let dyad = catalog.load_dyad(record)?;
            if let Some(other) = catalog.find_pair(dyad.emotions) {
                return Err(CatalogError::DuplicatePair {
                    first: other.name.to_string(),
                    second: dyad.name.to_string(),
                });
            }
            catalog.dyads.push(dyad);
        }

        log::debug!(
            "Loaded {} emotions and {} dyads",
            catalog.emotions.len(),
            catalog.dyads.len()
        );
        Ok(catalog)
    }

    fn segment_width(&self) -> f64 {
        360.0 / self.emotions.len() as f64
    }

    /// Category implied by the angular separation of the two emotions.
    pub fn category_of(&self, [a, b]: [EmotionId; 2]) -> Option<DyadCategory> {
        let degrees = angular_distance(self.emotion(a).angle, self.emotion(b).angle);
        let steps = (degrees / self.segment_width()).round();
        if (degrees - steps * self.segment_width()).abs() > SEPARATION_EPSILON {
            return None;
        }
        DyadCategory::from_steps(steps as usize)
    }

    fn load_dyad(&self, record: &DyadRecord) -> Result<Dyad, CatalogError> {
        let name = record.name.to_string();
        let [a, b] = record.emotions;
        if a == b {
            return Err(CatalogError::SelfPair(name));
        }

        let derived = self
            .category_of(record.emotions)
            .ok_or_else(|| CatalogError::Separation {
                name: name.clone(),
                degrees: angular_distance(self.emotion(a).angle, self.emotion(b).angle),
            })?;
        if derived != record.category {
            return Err(CatalogError::CategoryMismatch {
                name,
                stored: record.category,
                derived,
            });
        }

        let expected = derived.intensity();
        if record.intensity != expected {
            return Err(CatalogError::IntensityMismatch {
                name,
                stored: record.intensity,
                category: derived,
                expected,
            });
        }

        Ok(Dyad {
            name: DyadName::new(name),
            emotions: record.emotions,
            category: derived,
            intensity: expected,
            description: record.description.to_string(),
            explanation: record.explanation.to_string(),
        })
    }

    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn emotion(&self, id: EmotionId) -> &Emotion {
        &self.emotions[id.as_index()]
    }

    pub fn dyads(&self) -> &[Dyad] {
        &self.dyads
    }

    /// Dyads of one category, in table order.
    pub fn dyads_in(&self, category: DyadCategory) -> impl Iterator<Item = &Dyad> {
        self.dyads.iter().filter(move |d| d.category == category)
    }

    pub fn dyad_named(&self, name: &str) -> Option<&Dyad> {
        self.dyads
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn find_pair(&self, pair: [EmotionId; 2]) -> Option<&Dyad> {
        let key = sorted_pair(pair);
        self.dyads.iter().find(|d| d.key() == key)
    }

    /// The dyad for the current selection. `None` unless exactly two emotions are selected,
    /// or when the pair has no entry (a custom blend).
    pub fn find_dyad(&self, selection: &Selection) -> Option<&Dyad> {
        selection.pair().and_then(|pair| self.find_pair(pair))
    }

    pub fn gradient(&self, [a, b]: [EmotionId; 2]) -> [Srgb<u8>; 3] {
        color::gradient(self.emotion(a).color, self.emotion(b).color)
    }
}

fn load_emotion(index: usize, record: &EmotionRecord) -> Result<Emotion, CatalogError> {
    if record.id.as_index() != index {
        return Err(CatalogError::EmotionOrder {
            emotion: record.id,
            index,
        });
    }

    let parse = |owner: String, value: &str| {
        color::parse_hex(value).ok_or_else(|| CatalogError::Color {
            owner,
            value: value.to_string(),
        })
    };
    let tier = |tier: &TierRecord| -> Result<IntensityTier, CatalogError> {
        Ok(IntensityTier {
            label: tier.label.to_string(),
            color: parse(format!("{} ({})", record.id, tier.label), tier.color)?,
        })
    };

    Ok(Emotion {
        id: record.id,
        angle: record.angle,
        color: parse(record.id.to_string(), record.color)?,
        mild: tier(&record.mild)?,
        medium: tier(&record.medium)?,
        strong: tier(&record.strong)?,
        description: record.description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::IntensityLevel;
    use EmotionId::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn dyad_record(name: &'static str, emotions: [EmotionId; 2]) -> DyadRecord {
        DyadRecord {
            name,
            emotions,
            category: DyadCategory::Primary,
            intensity: DyadIntensity::Strong,
            description: "",
            explanation: "",
        }
    }

    #[test]
    fn test_builtin_table_is_consistent() {
        let catalog = catalog();
        assert_eq!(catalog.emotions().len(), 8);
        assert_eq!(catalog.dyads().len(), 28);
        assert_eq!(catalog.dyads_in(DyadCategory::Primary).count(), 8);
        assert_eq!(catalog.dyads_in(DyadCategory::Secondary).count(), 8);
        assert_eq!(catalog.dyads_in(DyadCategory::Tertiary).count(), 8);
        assert_eq!(catalog.dyads_in(DyadCategory::Opposite).count(), 4);
    }

    #[test]
    fn test_stored_category_matches_separation() {
        let catalog = catalog();
        for dyad in catalog.dyads() {
            assert_eq!(catalog.category_of(dyad.emotions), Some(dyad.category));
            assert_eq!(dyad.intensity, dyad.category.intensity());
        }
    }

    #[test]
    fn test_every_distinct_pair_has_a_dyad() {
        let catalog = catalog();
        for a in 0..8 {
            for b in (a + 1)..8 {
                let pair = [
                    EmotionId::from_index(a).unwrap(),
                    EmotionId::from_index(b).unwrap(),
                ];
                assert!(catalog.find_pair(pair).is_some(), "{pair:?}");
            }
        }
    }

    #[test]
    fn test_find_named_pairs() {
        let catalog = catalog();

        let love = catalog.find_pair([Trust, Joy]).unwrap();
        assert_eq!(love.name.as_str(), "love");
        assert_eq!(love.category, DyadCategory::Primary);

        let bittersweet = catalog.find_pair([Joy, Sadness]).unwrap();
        assert_eq!(bittersweet.name.as_str(), "bittersweetness");
        assert_eq!(bittersweet.category, DyadCategory::Opposite);

        let morbid = catalog.find_pair([Joy, Disgust]).unwrap();
        assert_eq!(morbid.name.as_str(), "morbidness");
        assert_eq!(morbid.category, DyadCategory::Tertiary);

        let guilt = catalog.find_pair([Fear, Joy]).unwrap();
        assert_eq!(guilt.category, DyadCategory::Secondary);
    }

    #[test]
    fn test_self_pair_has_no_dyad() {
        assert!(catalog().find_pair([Anger, Anger]).is_none());
    }

    #[test]
    fn test_find_dyad_needs_two_emotions() {
        let catalog = catalog();
        let mut selection = Selection::default();
        assert!(catalog.find_dyad(&selection).is_none());

        selection.toggle(Joy, IntensityLevel::Strong);
        assert!(catalog.find_dyad(&selection).is_none());

        selection.toggle(Trust, IntensityLevel::Mild);
        let love = catalog.find_dyad(&selection).unwrap();
        assert_eq!(love.name.as_str(), "love");
        assert_eq!(love.score(&selection), 4);
    }

    #[test]
    fn test_dyad_named_ignores_case() {
        let catalog = catalog();
        assert_eq!(
            catalog.dyad_named("Optimism").map(|d| d.emotions),
            Some([Anticipation, Joy])
        );
        assert!(catalog.dyad_named("nostalgia").is_none());
    }

    #[test]
    fn test_browse_order_follows_table() {
        let names: Vec<_> = catalog()
            .dyads_in(DyadCategory::Opposite)
            .map(|d| d.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["bittersweetness", "ambivalence", "frozenness", "confusion"]
        );
    }

    #[test]
    fn test_rejects_wrong_category() {
        let mut record = dyad_record("guilt", [Joy, Fear]);
        record.category = DyadCategory::Primary;
        assert_eq!(
            Catalog::from_records(data::EMOTIONS, &[record]),
            Err(CatalogError::CategoryMismatch {
                name: "guilt".into(),
                stored: DyadCategory::Primary,
                derived: DyadCategory::Secondary,
            })
        );
    }

    #[test]
    fn test_rejects_wrong_intensity() {
        let mut record = dyad_record("love", [Joy, Trust]);
        record.intensity = DyadIntensity::Complex;
        assert_eq!(
            Catalog::from_records(data::EMOTIONS, &[record]),
            Err(CatalogError::IntensityMismatch {
                name: "love".into(),
                stored: DyadIntensity::Complex,
                category: DyadCategory::Primary,
                expected: DyadIntensity::Strong,
            })
        );
    }

    #[test]
    fn test_rejects_self_pair_and_duplicates() {
        assert_eq!(
            Catalog::from_records(data::EMOTIONS, &[dyad_record("joyjoy", [Joy, Joy])]),
            Err(CatalogError::SelfPair("joyjoy".into()))
        );

        let records = [
            dyad_record("love", [Joy, Trust]),
            dyad_record("devotion", [Trust, Joy]),
        ];
        assert_eq!(
            Catalog::from_records(data::EMOTIONS, &records),
            Err(CatalogError::DuplicatePair {
                first: "love".into(),
                second: "devotion".into(),
            })
        );
    }

    #[test]
    fn test_rejects_broken_emotion_table() {
        assert_eq!(
            Catalog::from_records(&data::EMOTIONS[..7], &[]),
            Err(CatalogError::EmotionCount {
                expected: 8,
                found: 7
            })
        );

        let mut emotions = data::EMOTIONS.to_vec();
        emotions[3].color = "#nothex";
        assert!(matches!(
            Catalog::from_records(&emotions, &[]),
            Err(CatalogError::Color { .. })
        ));

        let mut emotions = data::EMOTIONS.to_vec();
        emotions.swap(4, 5);
        assert_eq!(
            Catalog::from_records(&emotions, &[]),
            Err(CatalogError::EmotionOrder {
                emotion: Disgust,
                index: 4
            })
        );
    }

    #[test]
    fn test_rejects_off_grid_separation() {
        let mut emotions = data::EMOTIONS.to_vec();
        emotions[1].angle = 30.0;
        let result = Catalog::from_records(&emotions, &[dyad_record("love", [Joy, Trust])]);
        assert!(matches!(result, Err(CatalogError::Separation { .. })));
    }

    #[test]
    fn test_tier_labels() {
        let catalog = catalog();
        let joy = catalog.emotion(Joy);
        assert_eq!(joy.tier(IntensityLevel::Mild).label, "serenity");
        assert_eq!(joy.tier(IntensityLevel::Strong).label, "ecstasy");
        assert_eq!(catalog.emotion(Anger).tier(IntensityLevel::Strong).label, "rage");
    }

    #[test]
    fn test_gradient_blends_base_colors() {
        let catalog = catalog();
        let [first, mid, last] = catalog.gradient([Joy, Trust]);
        assert_eq!(first, catalog.emotion(Joy).color);
        assert_eq!(last, catalog.emotion(Trust).color);
        assert_eq!(mid, color::blend(first, last));
    }
}
