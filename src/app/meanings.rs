//! Interpretive text for computed numbers.

use crate::core::report::NumerologyReport;
use crate::domain::model::NumerologyResult;
use serde::{Deserialize, Serialize};

const FALLBACK_MEANING: &str = "A unique vibration of potential and growth.";

/// What a number describes; picks the context sentence of a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    LifePath,
    Destiny,
    SoulUrge,
    Personality,
    Birthday,
    PersonalYear,
    PersonalMonth,
    PersonalDay,
    Compatibility,
    Address,
    Business,
}

impl Category {
    pub fn context(self) -> &'static str {
        match self {
            Category::LifePath => "Your Life Path represents the core journey you are on in this lifetime—the lessons you've come to learn and the natural traits you possess.",
            Category::Destiny => "Your Destiny (or Expression) number reveals your natural talents, capabilities, and the 'outer' purpose of your life's work.",
            Category::SoulUrge => "Your Soul Urge (Heart's Desire) reflects your inner motivations, your secret dreams, and what truly makes your soul feel satisfied.",
            Category::Personality => "Your Personality number describes the 'mask' you wear—the traits you project to the world and how others first perceive you.",
            Category::Birthday => "Your Birthday number highlights a specific sub-lesson or talent that supports your overall Life Path journey.",
            Category::PersonalYear => "Your Personal Year indicates the specific theme and energy of your current 12-month cycle, helping you align with the timing of your life.",
            Category::PersonalMonth => "Your Personal Month narrows down the theme of the year into a specific monthly focus.",
            Category::PersonalDay => "Your Personal Day provides a micro-focus for today's energy.",
            Category::Compatibility => "This number reflects the combined vibration of your relationship, highlighting the shared energy and potential challenges between you.",
            Category::Address => "Your House or Address number influences the atmosphere and energy of your living or working space.",
            Category::Business => "This number reflects the 'brand' vibration and commercial potential of your business or professional identity.",
        }
    }
}

pub fn core_meaning(value: u32) -> Option<&'static str> {
    let text = match value {
        1 => "The Independent Leader. You are a pioneer, driven by a strong sense of individuality and a desire to lead. You possess great creative potential and the courage to forge your own path.",
        2 => "The Diplomatic Peacemaker. You thrive on harmony, cooperation, and sensitivity. You have a natural ability to see both sides of a situation and bring people together.",
        3 => "The Creative Communicator. You are expressive, social, and full of joy. Your gift lies in self-expression, whether through art, speech, or writing, and you inspire others with your optimism.",
        4 => "The Disciplined Builder. You value stability, hard work, and organization. You are the foundation of any project, bringing practicality and persistence to everything you do.",
        5 => "The Versatile Adventurer. You crave freedom, change, and variety. You are a natural explorer who learns through experience and thrives in dynamic environments.",
        6 => "The Harmonious Nurturer. You are deeply responsible, loving, and focused on family and community. Your path involves service to others and creating beauty in your surroundings.",
        7 => "The Analytical Seeker. You are introspective, spiritual, and driven to uncover the truth. You possess a keen mind and a need for solitude to process your deep insights.",
        8 => "The Authoritative Powerhouse. You are focused on material success, balance, and authority. You have the executive ability to manifest large-scale projects and achieve financial stability.",
        9 => "The Compassionate Humanitarian. You are idealistic, generous, and focused on the greater good. Your journey involves selfless service and a broad, global perspective.",
        11 => "The Intuitive Visionary (Master Number). You possess heightened sensitivity and spiritual insight. You are a 'messenger' meant to inspire others with your illumination.",
        22 => "The Master Builder (Master Number). You have the unique ability to take lofty spiritual visions and manifest them into concrete, large-scale reality for the benefit of humanity.",
        33 => "The Master Teacher (Master Number). You represent the highest level of selfless service and spiritual guidance. Your path is one of unconditional love and healing on a global scale.",
        _ => return None,
    };
    Some(text)
}

pub fn karmic_meaning(karmic_number: u32) -> Option<&'static str> {
    let text = match karmic_number {
        13 => "Karmic Debt 13: Focus and Discipline. This number suggests a need to overcome laziness and lack of focus. Success comes through steady, disciplined effort and avoiding shortcuts.",
        14 => "Karmic Debt 14: Temperance and Stability. This indicates a past misuse of freedom. Your path requires finding balance, avoiding overindulgence, and staying committed to your goals.",
        16 => "Karmic Debt 16: Spiritual Rebirth. This number often involves the 'falling away' of the ego. It is a path of deep spiritual awakening, requiring you to rebuild your life on a more authentic foundation.",
        19 => "Karmic Debt 19: Independence and Support. This suggests a need to learn how to stand on your own feet while also learning to accept help from others when needed.",
        _ => return None,
    };
    Some(text)
}

/// Short title of a number, the part of its meaning before the first period.
pub fn title(value: u32) -> Option<&'static str> {
    core_meaning(value).and_then(|text| text.split('.').next())
}

pub fn get_meaning(category: Category, result: &NumerologyResult) -> String {
    let base = core_meaning(result.value).unwrap_or(FALLBACK_MEANING);

    let karmic_note = result
        .karmic_number
        .filter(|_| result.is_karmic)
        .and_then(karmic_meaning)
        .map(|text| format!("\n\n**Note:** {}", text))
        .unwrap_or_default();

    format!("{} {}{}", category.context(), base, karmic_note)
}

/// Narrative overview built from the four core name and date numbers.
pub fn generate_summary(report: &NumerologyReport) -> String {
    let life_path = &report.life_path;
    let destiny = &report.destiny;

    let mut paragraphs = vec![
        format!(
            "Your numerological blueprint is a unique tapestry of vibrations. At your core, your **Life Path {}** ({}) defines your primary journey and the lessons you are here to master. This is beautifully complemented by your **Destiny {}** ({}), which represents the natural talents and capabilities you bring to the world.",
            life_path.value,
            title(life_path.value).unwrap_or("Leader"),
            destiny.value,
            title(destiny.value).unwrap_or("Creator"),
        ),
        format!(
            "Your inner world is fueled by the **Soul Urge {}**, reflecting your deepest heart's desires, while your **Personality {}** acts as the bridge through which you interact with others.",
            report.soul_urge.value, report.personality.value,
        ),
    ];

    if life_path.is_master || destiny.is_master {
        paragraphs.push("With Master Numbers present in your core, you carry a heightened spiritual responsibility and the potential for significant impact on a large scale.".to_string());
    }

    if life_path.is_karmic || destiny.is_karmic {
        paragraphs.push("Your profile also contains Karmic Debt, suggesting specific areas where you are meant to transform past patterns into new strengths through discipline and awareness.".to_string());
    }

    paragraphs.join("\n\n")
}
