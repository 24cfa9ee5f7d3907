//! Universal Dependencies morphological features

use crate::{Language, PartOfSpeech};
use std::collections::BTreeMap;

pub type FeatureMap = BTreeMap<String, String>;

pub trait FeatureSet: Sized {
    fn name() -> &'static str;
    fn applies_to(language: Language, pos: PartOfSpeech) -> bool;
    fn parse(value: &str) -> Option<Self>;

    /// Reads this feature out of a token's feature map, if present and recognised.
    fn from_morph(morph: &FeatureMap) -> Option<Self> {
        morph.get(Self::name()).and_then(|value| Self::parse(value))
    }
}

/// Person is typically feature of personal and possessive pronouns / determiners, and of verbs. On verbs it is in fact an agreement feature that marks the person of the verb's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Person {
    First,
    Second,
    Third,
}

/// Number is usually an inflectional feature of nouns and, depending on language, other parts of speech (pronouns, adjectives, determiners, numerals, verbs) that mark agreement with nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Number {
    Singular,
    Plural,
}

/// Tense specifies the time when the action took / takes / will take place, in relation to a reference point.
///
/// A periphrastic tense is not visible on a single word: [en] "I had been there" tags the auxiliary VerbForm=Fin|Tense=Past and the participle VerbForm=Part|Tense=Past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tense {
    Present,
    Past,
    Future,
    Imperfect,
    Pluperfect,
}

/// Participles may be classified as verbs or as adjectives depending on language and context; VerbForm=Part separates them from other verb forms either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbForm {
    Finite,
    Infinitive,
    Participle,
    Gerund,
    Converb,
    Gerundive,
    Supine,
    VerbalNoun,
}

impl FeatureSet for Person {
    fn name() -> &'static str {
        "Person"
    }
    fn applies_to(language: Language, pos: PartOfSpeech) -> bool {
        // Feature of personal and possessive pronouns/determiners, and of verbs
        match language {
            Language::English | Language::German => {
                matches!(
                    pos,
                    PartOfSpeech::Pron | PartOfSpeech::Det | PartOfSpeech::Verb | PartOfSpeech::Aux
                )
            }
        }
    }
    fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Person::First),
            "2" => Some(Person::Second),
            "3" => Some(Person::Third),
            _ => None,
        }
    }
}

impl FeatureSet for Number {
    fn name() -> &'static str {
        "Number"
    }
    fn applies_to(language: Language, pos: PartOfSpeech) -> bool {
        match language {
            Language::English => matches!(
                pos,
                PartOfSpeech::Noun
                    | PartOfSpeech::Propn
                    | PartOfSpeech::Pron
                    | PartOfSpeech::Det
                    | PartOfSpeech::Verb
                    | PartOfSpeech::Aux
            ),
            // German adjectives agree with their noun
            Language::German => matches!(
                pos,
                PartOfSpeech::Noun
                    | PartOfSpeech::Propn
                    | PartOfSpeech::Pron
                    | PartOfSpeech::Det
                    | PartOfSpeech::Adj
                    | PartOfSpeech::Verb
                    | PartOfSpeech::Aux
            ),
        }
    }
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Sing" => Some(Number::Singular),
            "Plur" => Some(Number::Plural),
            _ => None,
        }
    }
}

impl FeatureSet for Tense {
    fn name() -> &'static str {
        "Tense"
    }
    fn applies_to(language: Language, pos: PartOfSpeech) -> bool {
        match language {
            Language::English | Language::German => {
                matches!(pos, PartOfSpeech::Verb | PartOfSpeech::Aux)
            }
        }
    }
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Pres" => Some(Tense::Present),
            "Past" => Some(Tense::Past),
            "Fut" => Some(Tense::Future),
            "Imp" => Some(Tense::Imperfect),
            "Pqp" => Some(Tense::Pluperfect),
            _ => None,
        }
    }
}

impl FeatureSet for VerbForm {
    fn name() -> &'static str {
        "VerbForm"
    }
    fn applies_to(language: Language, pos: PartOfSpeech) -> bool {
        match language {
            Language::English | Language::German => {
                matches!(
                    pos,
                    PartOfSpeech::Verb | PartOfSpeech::Aux | PartOfSpeech::Adj
                )
            }
        }
    }
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Fin" => Some(VerbForm::Finite),
            "Inf" => Some(VerbForm::Infinitive),
            "Part" => Some(VerbForm::Participle),
            "Ger" => Some(VerbForm::Gerund),
            "Conv" => Some(VerbForm::Converb),
            "Gdv" => Some(VerbForm::Gerundive),
            "Sup" => Some(VerbForm::Supine),
            "Vnoun" => Some(VerbForm::VerbalNoun),
            _ => None,
        }
    }
}

/// The subset of a token's features that drives paradigm slot assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Morphology {
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub tense: Option<Tense>,
    pub verb_form: Option<VerbForm>,
}

impl Morphology {
    pub fn from_morph(morph: &FeatureMap) -> Self {
        Morphology {
            person: Person::from_morph(morph),
            number: Number::from_morph(morph),
            tense: Tense::from_morph(morph),
            verb_form: VerbForm::from_morph(morph),
        }
    }

    /// Like [`Morphology::from_morph`], dropping features that do not apply to `pos` in `language`.
    pub fn for_word(language: Language, pos: PartOfSpeech, morph: &FeatureMap) -> Self {
        fn applicable<F: FeatureSet>(
            language: Language,
            pos: PartOfSpeech,
            morph: &FeatureMap,
        ) -> Option<F> {
            F::applies_to(language, pos)
                .then(|| F::from_morph(morph))
                .flatten()
        }

        Morphology {
            person: applicable(language, pos, morph),
            number: applicable(language, pos, morph),
            tense: applicable(language, pos, morph),
            verb_form: applicable(language, pos, morph),
        }
    }
}
