//! Built-in emotion and dyad tables.
//!
//! Raw records only. [`crate::catalog::Catalog`] parses colors, derives each dyad's category
//! from the wheel angles and rejects records that disagree with it.

use crate::dyad::{DyadCategory, DyadIntensity};
use crate::emotion::EmotionId;

#[derive(Debug, Clone, Copy)]
pub struct TierRecord {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct EmotionRecord {
    pub id: EmotionId,
    pub angle: f64,
    pub color: &'static str,
    pub mild: TierRecord,
    pub medium: TierRecord,
    pub strong: TierRecord,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DyadRecord {
    pub name: &'static str,
    pub emotions: [EmotionId; 2],
    pub category: DyadCategory,
    pub intensity: DyadIntensity,
    pub description: &'static str,
    pub explanation: &'static str,
}

const fn tier(label: &'static str, color: &'static str) -> TierRecord {
    TierRecord { label, color }
}

pub const EMOTIONS: &[EmotionRecord] = &[
    EmotionRecord {
        id: EmotionId::Joy,
        angle: 0.0,
        color: "#FFD700",
        mild: tier("serenity", "#FFF59D"),
        medium: tier("joy", "#FFD700"),
        strong: tier("ecstasy", "#FFA000"),
        description: "positive feelings, happiness, and pleasure",
    },
    EmotionRecord {
        id: EmotionId::Trust,
        angle: 45.0,
        color: "#00C853",
        mild: tier("acceptance", "#B9F6CA"),
        medium: tier("trust", "#00C853"),
        strong: tier("admiration", "#00796B"),
        description: "confidence, security, and acceptance",
    },
    EmotionRecord {
        id: EmotionId::Fear,
        angle: 90.0,
        color: "#1B5E20",
        mild: tier("apprehension", "#81C784"),
        medium: tier("fear", "#2E7D32"),
        strong: tier("terror", "#1B5E20"),
        description: "apprehension, caution, and protective responses",
    },
    EmotionRecord {
        id: EmotionId::Surprise,
        angle: 135.0,
        color: "#2196F3",
        mild: tier("distraction", "#BBDEFB"),
        medium: tier("surprise", "#2196F3"),
        strong: tier("amazement", "#0D47A1"),
        description: "unexpectedness, novelty, and startle responses",
    },
    EmotionRecord {
        id: EmotionId::Sadness,
        angle: 180.0,
        color: "#0D47A1",
        mild: tier("pensiveness", "#90CAF9"),
        medium: tier("sadness", "#1565C0"),
        strong: tier("grief", "#0D47A1"),
        description: "sorrow, grief, and feelings of loss",
    },
    EmotionRecord {
        id: EmotionId::Disgust,
        angle: 225.0,
        color: "#9C27B0",
        mild: tier("boredom", "#E1BEE7"),
        medium: tier("disgust", "#9C27B0"),
        strong: tier("loathing", "#4A148C"),
        description: "revulsion, rejection, and aversion",
    },
    EmotionRecord {
        id: EmotionId::Anger,
        angle: 270.0,
        color: "#D32F2F",
        mild: tier("annoyance", "#FFCDD2"),
        medium: tier("anger", "#E53935"),
        strong: tier("rage", "#B71C1C"),
        description: "hostility, assertion, and confrontation",
    },
    EmotionRecord {
        id: EmotionId::Anticipation,
        angle: 315.0,
        color: "#FF6F00",
        mild: tier("interest", "#FFE0B2"),
        medium: tier("anticipation", "#FB8C00"),
        strong: tier("vigilance", "#E65100"),
        description: "expectation, forward-looking, and preparedness",
    },
];

pub const DYADS: &[DyadRecord] = &[
    DyadRecord {
        name: "love",
        emotions: [EmotionId::Joy, EmotionId::Trust],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Love emerges from the combination of joy and trust. This powerful emotional blend represents deep affection, connection, and positive bonding with others. When we experience joy in someone's presence and trust them completely, we feel love.",
        explanation: "This is a Primary Dyad formed by two adjacent emotions on Plutchik's wheel. Joy brings the positive emotional energy and happiness, while trust provides the security and reliability needed for deep emotional bonds.",
    },
    DyadRecord {
        name: "submission",
        emotions: [EmotionId::Trust, EmotionId::Fear],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Submission arises from the blend of trust and fear. This dyad represents yielding to authority or accepting a subordinate position, often stemming from both respect and apprehension of consequences.",
        explanation: "As a Primary Dyad, submission combines the security-seeking nature of trust with the cautious awareness of fear. This creates a state where one accepts guidance or authority while maintaining alertness.",
    },
    DyadRecord {
        name: "alarm",
        emotions: [EmotionId::Fear, EmotionId::Surprise],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Alarm is the intense combination of fear and surprise. This emotional state occurs when unexpected danger presents itself, triggering both the shock of the unexpected and the protective response of fear.",
        explanation: "This Primary Dyad represents the immediate reaction to sudden threats. The surprise element amplifies the fear response, creating a heightened state of alertness and readiness to respond.",
    },
    DyadRecord {
        name: "disappointment",
        emotions: [EmotionId::Surprise, EmotionId::Sadness],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Disappointment blends surprise with sadness. This emotion occurs when reality fails to meet expectations, combining the shock of unmet hopes with the sorrow of loss or failure.",
        explanation: "As a Primary Dyad, disappointment captures the emotional journey from unexpected outcomes (surprise) to the accompanying grief (sadness). It's the emotional signature of dashed hopes.",
    },
    DyadRecord {
        name: "remorse",
        emotions: [EmotionId::Sadness, EmotionId::Disgust],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Remorse combines sadness with disgust, typically directed at oneself. This powerful emotion involves both grief over past actions and self-directed revulsion, creating deep regret.",
        explanation: "This Primary Dyad represents a complex self-reflective state where sadness about consequences meets disgust with one's own behavior. It's essential for moral development and learning from mistakes.",
    },
    DyadRecord {
        name: "contempt",
        emotions: [EmotionId::Disgust, EmotionId::Anger],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Contempt emerges from disgust combined with anger. This emotion involves both repulsion toward something or someone and the hostile energy to reject or devalue them.",
        explanation: "As a Primary Dyad, contempt is particularly powerful. It combines the rejection impulse of disgust with anger's assertive energy, often directed at violations of social or moral standards.",
    },
    DyadRecord {
        name: "aggression",
        emotions: [EmotionId::Anger, EmotionId::Anticipation],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Aggression blends anger with anticipation. This dyad combines hostile feelings with forward-looking intent, creating proactive confrontation or attack behavior.",
        explanation: "This Primary Dyad represents action-oriented hostility. The anger provides the emotional fuel while anticipation adds planning and intentionality, making aggression purposeful rather than reactive.",
    },
    DyadRecord {
        name: "optimism",
        emotions: [EmotionId::Anticipation, EmotionId::Joy],
        category: DyadCategory::Primary,
        intensity: DyadIntensity::Strong,
        description: "Optimism combines anticipation with joy. This uplifting emotional state involves both positive expectations about the future and present happiness, creating hopefulness and confidence.",
        explanation: "As a Primary Dyad, optimism represents forward-looking positivity. Anticipation focuses on future possibilities while joy provides the positive emotional coloring, creating an expectation of good outcomes.",
    },
    DyadRecord {
        name: "guilt",
        emotions: [EmotionId::Joy, EmotionId::Fear],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Guilt emerges from the tension between joy and fear. This complex emotion involves pleasure or satisfaction conflicting with anxiety about consequences or moral implications.",
        explanation: "This is a Secondary Dyad where two emotions are separated by one position on the wheel. The conflict between joy's positive energy and fear's caution creates the characteristic discomfort of guilt.",
    },
    DyadRecord {
        name: "curiosity",
        emotions: [EmotionId::Trust, EmotionId::Surprise],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Curiosity blends trust with surprise. This emotion drives exploration and learning, combining the safety of trust with the stimulation of the unexpected.",
        explanation: "As a Secondary Dyad, curiosity represents a safe way to engage with the new and unknown. Trust provides security while surprise brings interest, creating the drive to explore.",
    },
    DyadRecord {
        name: "despair",
        emotions: [EmotionId::Fear, EmotionId::Sadness],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Despair combines fear with sadness. This heavy emotional state involves both anxiety about the future and grief about present circumstances, creating feelings of hopelessness.",
        explanation: "This Secondary Dyad captures a particularly difficult emotional state. Fear of what's to come combines with sadness about what is, creating a sense of being trapped without hope.",
    },
    DyadRecord {
        name: "unbelief",
        emotions: [EmotionId::Surprise, EmotionId::Disgust],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Unbelief emerges from surprise combined with disgust. This reaction involves both shock at something unexpected and repulsion at its nature or content.",
        explanation: "As a Secondary Dyad, unbelief represents incredulous rejection. The surprise element shows the unexpected nature of something, while disgust drives the refusal to accept it.",
    },
    DyadRecord {
        name: "envy",
        emotions: [EmotionId::Sadness, EmotionId::Anger],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Envy blends sadness with anger. This emotion involves grief over what one lacks combined with resentment toward those who possess it.",
        explanation: "This Secondary Dyad captures the complex nature of envy. Sadness reflects the pain of not having something desired, while anger provides the hostile edge directed at others' success.",
    },
    DyadRecord {
        name: "cynicism",
        emotions: [EmotionId::Disgust, EmotionId::Anticipation],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Cynicism combines disgust with anticipation. This attitude involves both contempt for human nature or motives and expectation of negative outcomes.",
        explanation: "As a Secondary Dyad, cynicism represents a defensive worldview. Disgust colors perceptions negatively while anticipation projects these negative expectations into the future.",
    },
    DyadRecord {
        name: "pride",
        emotions: [EmotionId::Anger, EmotionId::Joy],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Pride emerges from anger combined with joy. This emotion involves satisfaction in one's achievements mixed with assertive self-regard and defensive self-esteem.",
        explanation: "This Secondary Dyad captures pride's complex nature. Joy provides the positive feeling about oneself, while anger's assertiveness defends against threats to self-worth.",
    },
    DyadRecord {
        name: "hope",
        emotions: [EmotionId::Anticipation, EmotionId::Trust],
        category: DyadCategory::Secondary,
        intensity: DyadIntensity::Moderate,
        description: "Hope blends anticipation with trust. This uplifting emotion involves positive expectations about the future combined with confidence that things will work out.",
        explanation: "As a Secondary Dyad, hope represents confident expectation. Anticipation looks forward to future possibilities while trust provides the confidence that positive outcomes are reliable.",
    },
    DyadRecord {
        name: "delight",
        emotions: [EmotionId::Joy, EmotionId::Surprise],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Delight combines joy with surprise. This pleasant emotion occurs when unexpected positive experiences bring both happiness and the thrill of the unexpected.",
        explanation: "This is a Tertiary Dyad where emotions are separated by two positions. The joy provides positive feelings while surprise adds excitement, creating the sparkle of delight.",
    },
    DyadRecord {
        name: "sentimentality",
        emotions: [EmotionId::Trust, EmotionId::Sadness],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Sentimentality blends trust with sadness. This emotion involves nostalgic affection tinged with melancholy, often for past relationships or experiences.",
        explanation: "As a Tertiary Dyad, sentimentality captures bittersweet emotional states. Trust reflects the positive bonds while sadness acknowledges loss or distance, creating tender nostalgia.",
    },
    DyadRecord {
        name: "shame",
        emotions: [EmotionId::Fear, EmotionId::Disgust],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Shame emerges from fear combined with disgust. This painful emotion involves both anxiety about social judgment and self-directed revulsion.",
        explanation: "This Tertiary Dyad represents self-conscious distress. Fear focuses on others' perceptions while disgust turns inward, creating the characteristic pain of shame.",
    },
    DyadRecord {
        name: "outrage",
        emotions: [EmotionId::Surprise, EmotionId::Anger],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Outrage blends surprise with anger. This intense reaction combines shock at something unexpected with hostile indignation at its perceived wrongness.",
        explanation: "As a Tertiary Dyad, outrage represents shocked hostility. Surprise shows the unexpected violation of norms while anger provides the emotional energy for protest.",
    },
    DyadRecord {
        name: "pessimism",
        emotions: [EmotionId::Sadness, EmotionId::Anticipation],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Pessimism combines sadness with anticipation. This outlook involves current sorrow projected into the future, expecting negative outcomes.",
        explanation: "This Tertiary Dyad captures negative future orientation. Sadness colors the present while anticipation projects these negative feelings forward, creating expectation of bad outcomes.",
    },
    DyadRecord {
        name: "morbidness",
        emotions: [EmotionId::Disgust, EmotionId::Joy],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Morbidness emerges from disgust combined with joy. This unusual blend involves fascination or pleasure in things typically considered disturbing or repulsive.",
        explanation: "As a Tertiary Dyad, morbidness represents complex and socially taboo emotional states. Joy provides attraction while disgust acknowledges the disturbing nature, creating dark fascination.",
    },
    DyadRecord {
        name: "dominance",
        emotions: [EmotionId::Anger, EmotionId::Trust],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Dominance blends anger with trust. This emotion involves assertive control combined with confident expectation of compliance or success.",
        explanation: "This Tertiary Dyad represents confident aggression. Anger provides assertive energy while trust adds the confidence that one's dominance will be accepted.",
    },
    DyadRecord {
        name: "anxiety",
        emotions: [EmotionId::Anticipation, EmotionId::Fear],
        category: DyadCategory::Tertiary,
        intensity: DyadIntensity::Mild,
        description: "Anxiety combines anticipation with fear. This uncomfortable state involves future-focused worry, where expectation is colored by apprehension and dread.",
        explanation: "As a Tertiary Dyad, anxiety represents fearful anticipation. Both emotions are future-oriented, but anticipation's forward focus meets fear's protective alarm, creating persistent worry.",
    },
    DyadRecord {
        name: "bittersweetness",
        emotions: [EmotionId::Joy, EmotionId::Sadness],
        category: DyadCategory::Opposite,
        intensity: DyadIntensity::Complex,
        description: "Bittersweetness combines joy with sadness. This poignant emotion captures simultaneous happiness and sorrow, often felt during meaningful endings or precious moments.",
        explanation: "This is an Opposite Dyad, combining emotions from across the wheel. The contradiction between joy's positivity and sadness's grief creates the characteristic complexity of bittersweet experiences.",
    },
    DyadRecord {
        name: "ambivalence",
        emotions: [EmotionId::Trust, EmotionId::Disgust],
        category: DyadCategory::Opposite,
        intensity: DyadIntensity::Complex,
        description: "Ambivalence blends trust with disgust. This conflicted state involves simultaneous attraction and repulsion, creating uncertainty and mixed feelings.",
        explanation: "As an Opposite Dyad, ambivalence represents direct emotional conflict. Trust pulls toward something while disgust pushes away, creating the stuck feeling of being torn.",
    },
    DyadRecord {
        name: "frozenness",
        emotions: [EmotionId::Fear, EmotionId::Anger],
        category: DyadCategory::Opposite,
        intensity: DyadIntensity::Complex,
        description: "Frozenness emerges from fear combined with anger. This paralyzed state involves both the impulse to flee and the urge to fight, resulting in immobilization.",
        explanation: "This Opposite Dyad captures conflicting survival impulses. Fear drives withdrawal while anger drives approach, and when equal in strength, they create paralysis.",
    },
    DyadRecord {
        name: "confusion",
        emotions: [EmotionId::Surprise, EmotionId::Anticipation],
        category: DyadCategory::Opposite,
        intensity: DyadIntensity::Complex,
        description: "Confusion combines surprise with anticipation. This disoriented state involves both unexpected disruption and forward-looking expectation meeting uncertainty.",
        explanation: "As an Opposite Dyad, confusion represents temporal disorientation. Surprise focuses on the unexpected present while anticipation looks to the future, creating uncertainty about what comes next.",
    },
];
