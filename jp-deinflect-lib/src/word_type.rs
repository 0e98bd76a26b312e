use serde::{Deserialize, Serialize};

/// Grammatical category a word form can belong to during deinflection.
///
/// `GodanVerb`, `IchidanVerb` and `Sentence` are dictionary-form
/// categories: reaching one of them means the current form can stand on
/// its own. Everything else names a conjugated form and carries a
/// human-readable label used when rendering derivation chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordType {
    GodanVerb,
    IchidanVerb,
    Sentence,
    MasuStem,
    TeForm,
    PlainPast,
    NegativeNaiVerb,
    Zu,
    Potential,
    Passive,
    PotentialPassive,
    Causative,
    Imperative,
    Volitional,
    BaForm,
    Tara,
    Tari,
    Tai,
    Adverb,
    Naru,
    Appearance,
    Sugiru,
    Yasui,
    Nikui,
    Rashii,
    Mitai,
    Hoshii,
    Garu,
    Hazu,
    Beki,
    You,
    Nasai,
    NaCommand,
    Nagara,
    Da,
    Darou,
    PoliteMasu,
    PoliteMasen,
    PoliteMashita,
    PoliteMasenDeshita,
    PoliteMashou,
    PoliteDesuVerb,
    PoliteDeshou,
    TeIru,
    ShortIru,
    Shimau,
    Chau,
    Jau,
    TeOku,
    TeIku,
    TeKuru,
    Morau,
    Kureru,
    Ageru,
    Miru,
    Ii,
    MoAfterTe,
    WaAfterTe,
    YoParticle,
    NeParticle,
    NaParticle,
    KaParticle,
    ExplanatoryNoParticle,
}

impl WordType {
    /// Whether a form of this category can stand on its own as a
    /// dictionary form. The search emits a candidate whenever it
    /// arrives at one of these categories.
    pub fn is_dictionary_form(self) -> bool {
        matches!(
            self,
            WordType::GodanVerb | WordType::IchidanVerb | WordType::Sentence
        )
    }

    /// Human-readable label for rendered conjugation chains.
    pub fn label(self) -> &'static str {
        match self {
            WordType::GodanVerb => "godan verb",
            WordType::IchidanVerb => "ichidan verb",
            WordType::Sentence => "sentence",
            WordType::MasuStem => "masu stem",
            WordType::TeForm => "te form",
            WordType::PlainPast => "plain past",
            WordType::NegativeNaiVerb => "negative",
            WordType::Zu => "zu negative",
            WordType::Potential => "potential",
            WordType::Passive => "passive",
            WordType::PotentialPassive => "potential or passive",
            WordType::Causative => "causative",
            WordType::Imperative => "imperative",
            WordType::Volitional => "volitional",
            WordType::BaForm => "ba conditional",
            WordType::Tara => "tara conditional",
            WordType::Tari => "tari form",
            WordType::Tai => "desire",
            WordType::Adverb => "adverbial",
            WordType::Naru => "naru (to become)",
            WordType::Appearance => "appearance",
            WordType::Sugiru => "excess",
            WordType::Yasui => "easy to do",
            WordType::Nikui => "hard to do",
            WordType::Rashii => "apparently",
            WordType::Mitai => "seems like",
            WordType::Hoshii => "wanting done",
            WordType::Garu => "outward signs of",
            WordType::Hazu => "expectation",
            WordType::Beki => "obligation",
            WordType::You => "you (manner)",
            WordType::Nasai => "polite command",
            WordType::NaCommand => "negative command",
            WordType::Nagara => "while doing",
            WordType::Da => "copula",
            WordType::Darou => "presumptive",
            WordType::PoliteMasu => "polite",
            WordType::PoliteMasen => "polite negative",
            WordType::PoliteMashita => "polite past",
            WordType::PoliteMasenDeshita => "polite negative past",
            WordType::PoliteMashou => "polite volitional",
            WordType::PoliteDesuVerb => "polite copula",
            WordType::PoliteDeshou => "polite presumptive",
            WordType::TeIru => "progressive",
            WordType::ShortIru => "progressive (contracted)",
            WordType::Shimau => "completion",
            WordType::Chau => "completion (contracted)",
            WordType::Jau => "completion (contracted, voiced)",
            WordType::TeOku => "preparation",
            WordType::TeIku => "ongoing change (away)",
            WordType::TeKuru => "ongoing change (toward)",
            WordType::Morau => "received favor",
            WordType::Kureru => "favor from another",
            WordType::Ageru => "favor to another",
            WordType::Miru => "attempt",
            WordType::Ii => "permission",
            WordType::MoAfterTe => "mo after te",
            WordType::WaAfterTe => "wa after te",
            WordType::YoParticle => "yo particle",
            WordType::NeParticle => "ne particle",
            WordType::NaParticle => "na particle",
            WordType::KaParticle => "ka particle",
            WordType::ExplanatoryNoParticle => "explanatory no",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_forms() {
        assert!(WordType::GodanVerb.is_dictionary_form());
        assert!(WordType::IchidanVerb.is_dictionary_form());
        assert!(WordType::Sentence.is_dictionary_form());
        assert!(!WordType::TeForm.is_dictionary_form());
        assert!(!WordType::PoliteMasu.is_dictionary_form());
    }

    #[test]
    fn serde_names_are_screaming_snake_case() {
        let json = serde_json::to_string(&WordType::NegativeNaiVerb).unwrap();
        assert_eq!(json, "\"NEGATIVE_NAI_VERB\"");
        let back: WordType = serde_json::from_str("\"POTENTIAL_PASSIVE\"").unwrap();
        assert_eq!(back, WordType::PotentialPassive);
    }
}
