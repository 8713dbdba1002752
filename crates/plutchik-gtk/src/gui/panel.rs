//! Text for the result panel, derived from the wheel state.

use plutchik::color::to_hex;
use plutchik::{EmotionId, IntensityLevel, Reading, Wheel, WheelState};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelText {
    pub title: String,
    /// Pango markup: one colored badge per selected emotion.
    pub badges: String,
    /// Pango markup: the three gradient stops as color swatches.
    pub blend: String,
    pub score: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntensityOption {
    pub level: IntensityLevel,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntensityRow {
    pub emotion: EmotionId,
    pub options: Vec<IntensityOption>,
}

fn upper(emotion: EmotionId) -> String {
    emotion.as_ref().to_uppercase()
}

fn badges(wheel: &Wheel, emotions: impl IntoIterator<Item = EmotionId>) -> String {
    emotions
        .into_iter()
        .map(|emotion| {
            let color = to_hex(wheel.catalog().emotion(emotion).color);
            format!(
                "<span background=\"{}\" foreground=\"white\"><b> {} </b></span>",
                color,
                upper(emotion)
            )
        })
        .collect::<Vec<_>>()
        .join("  +  ")
}

fn components(wheel: &Wheel, emotions: [EmotionId; 2], joiner: &str) -> String {
    emotions
        .iter()
        .map(|&e| {
            format!(
                "{}{}{}",
                upper(e),
                joiner,
                wheel.catalog().emotion(e).description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(wheel: &Wheel, reading: &Reading) -> PanelText {
    let emotions = reading.emotions();
    let blend = reading
        .gradient()
        .iter()
        .map(|&c| format!("<span background=\"{}\">{}</span>", to_hex(c), " ".repeat(12)))
        .collect();

    match reading {
        Reading::Dyad { dyad, score, .. } => PanelText {
            title: dyad.name.as_str().to_uppercase(),
            badges: badges(wheel, emotions),
            blend,
            score: format!(
                "Intensity score {}/6: {}",
                score,
                reading.score_description().unwrap_or_default()
            ),
            body: format!(
                "{}\n\nWhy this dyad?\n{}\n\nEmotional components\n{}\n\nIntensity: {}\n{}",
                dyad.description,
                dyad.explanation,
                components(wheel, emotions, " provides "),
                dyad.intensity.to_string().to_uppercase(),
                dyad.intensity.description()
            ),
        },
        Reading::Custom { .. } => {
            let [a, b] = emotions;
            PanelText {
                title: format!("{} + {}", upper(a), upper(b)),
                badges: badges(wheel, emotions),
                blend,
                score: String::new(),
                body: format!(
                    "Custom emotional blend\nYou've created a unique combination of {} and {}. \
                     While not a traditional Plutchik dyad, this blend creates an interesting \
                     emotional state.\n\nEmotional components\n{}",
                    a,
                    b,
                    components(wheel, emotions, ": ")
                ),
            }
        }
    }
}

pub fn compose(wheel: &Wheel, state: &WheelState) -> PanelText {
    if let Some(reading) = wheel.reading(state) {
        return describe(wheel, &reading);
    }

    match state.selection.picks() {
        [pick] => PanelText {
            title: upper(pick.emotion),
            badges: badges(wheel, [pick.emotion]),
            body: "Pick a second emotion to see how they blend.".to_string(),
            ..PanelText::default()
        },
        _ => PanelText {
            title: "Select two emotions".to_string(),
            body: "Click a ring on the wheel or choose a dyad from the list. \
                   Rings closer to the center are more intense."
                .to_string(),
            ..PanelText::default()
        },
    }
}

/// Intensity choices for every selected emotion, mild to strong.
pub fn intensity_rows(wheel: &Wheel, state: &WheelState) -> Vec<IntensityRow> {
    state
        .selection
        .picks()
        .iter()
        .map(|pick| {
            let emotion = wheel.catalog().emotion(pick.emotion);
            IntensityRow {
                emotion: pick.emotion,
                options: IntensityLevel::iter()
                    .map(|level| IntensityOption {
                        level,
                        label: format!(
                            "{} ({}) {}",
                            level,
                            level.score(),
                            emotion.tier(level).label
                        ),
                        active: level == pick.intensity,
                    })
                    .collect(),
            }
        })
        .collect()
}
