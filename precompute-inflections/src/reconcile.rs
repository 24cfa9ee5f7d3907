//! Cross-check generated forms against observed ones.
//!
//! Lemmas are visited in first-observed order (vocabulary order, then token
//! order) and forms in first-seen order. Every observation is compared with
//! the form generated for its slot before any override was applied, so the
//! last disagreeing observation of a slot wins.

use language_utils::PartOfSpeech;
use language_utils::features::{Morphology, Number, Person, Tense, VerbForm};

use crate::inflector::Inflector;
use crate::observation::Observations;
use crate::paradigm::{Paradigm, person_slot};
use crate::table::{InflectionEntry, InflectionTable, IrregularityReport, Observation};
use crate::vocabulary::WordClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbSlot {
    Present,
    Preterite,
    PastParticiple,
}

impl VerbSlot {
    fn for_morphology(morphology: &Morphology) -> Option<VerbSlot> {
        let participle = morphology.verb_form == Some(VerbForm::Participle);
        let gerund = morphology.verb_form == Some(VerbForm::Gerund);
        match morphology.tense {
            Some(Tense::Present) if !participle && !gerund => Some(VerbSlot::Present),
            Some(Tense::Past) if !participle => Some(VerbSlot::Preterite),
            Some(Tense::Present) => None,
            _ if participle => Some(VerbSlot::PastParticiple),
            _ => None,
        }
    }
}

/// Merge `observations` into `table`, returning every slot that was overridden.
///
/// Lemmas the vocabulary does not cover get a generated entry first.
pub fn reconcile(
    observations: &Observations,
    table: &mut InflectionTable,
    inflector: &Inflector,
) -> IrregularityReport {
    let mut report = IrregularityReport::default();
    for (lemma_key, observed) in observations.iter() {
        let entry = table.lemma_entry_or_insert_with(lemma_key, || {
            inflector.entry_for(&observed.lemma, Some(observed.pos.clone()))
        });
        let forms = observed.observations();
        match observed.pos {
            WordClass::Verb => reconcile_verb(lemma_key, entry, &forms, inflector, &mut report),
            WordClass::Noun => reconcile_noun(lemma_key, entry, &forms, inflector, &mut report),
            _ => {}
        }
        entry.observed = forms;
    }
    report
}

fn disagrees(inflector: &Inflector, generated: &str, observed: &str) -> bool {
    !generated.is_empty() && inflector.normalize(generated) != inflector.normalize(observed)
}

/// Override `slot` of `paradigm` if `form` disagrees with the generated one
fn override_slot(
    inflector: &Inflector,
    generated: Option<&Paradigm>,
    paradigm: Option<&mut Paradigm>,
    slot: &str,
    form: &str,
) -> bool {
    let (Some(generated), Some(paradigm)) = (generated.and_then(|p| p.get(slot)), paradigm) else {
        return false;
    };
    disagrees(inflector, generated, form) && paradigm.set(slot, form)
}

fn reconcile_verb(
    lemma_key: &str,
    entry: &mut InflectionEntry,
    observations: &[Observation],
    inflector: &Inflector,
    report: &mut IrregularityReport,
) {
    let language = inflector.language();
    let generated_present = entry.present.clone();
    let generated_preterite = entry.preterite.clone();
    let generated_participle = entry.past_participle.clone();

    for observation in observations {
        let morphology = Morphology::for_word(language, PartOfSpeech::Verb, &observation.features);
        let Some(slot) = VerbSlot::for_morphology(&morphology) else {
            continue;
        };
        let form = observation.form.as_str();

        if slot == VerbSlot::PastParticiple {
            let Some(generated) = generated_participle.as_deref() else {
                continue;
            };
            if disagrees(inflector, generated, form) {
                log::debug!("{lemma_key}: past participle {generated} -> {form}");
                entry.past_participle = Some(form.to_string());
                report.record_past_participle(lemma_key, form);
            }
            continue;
        }

        // A preterite without Person fills the third person slot, a present one is not placed
        let person = match (morphology.person, slot) {
            (Some(person), _) => person,
            (None, VerbSlot::Preterite) => Person::Third,
            (None, _) => continue,
        };
        let person = person_slot(language, person, morphology.number);
        if slot == VerbSlot::Present {
            if override_slot(
                inflector,
                generated_present.as_ref(),
                entry.present.as_mut(),
                person,
                form,
            ) {
                log::debug!("{lemma_key}: present {person} -> {form}");
                report.record_present(lemma_key, person, form);
            }
        } else if override_slot(
            inflector,
            generated_preterite.as_ref(),
            entry.preterite.as_mut(),
            person,
            form,
        ) {
            log::debug!("{lemma_key}: preterite {person} -> {form}");
            report.record_preterite(lemma_key, person, form);
        }
    }
}

fn reconcile_noun(
    lemma_key: &str,
    entry: &mut InflectionEntry,
    observations: &[Observation],
    inflector: &Inflector,
    report: &mut IrregularityReport,
) {
    let Some(generated) = entry.plural.clone() else {
        return;
    };
    for observation in observations {
        let morphology =
            Morphology::for_word(inflector.language(), PartOfSpeech::Noun, &observation.features);
        if morphology.number != Some(Number::Plural) {
            continue;
        }
        if disagrees(inflector, &generated, &observation.form) {
            log::debug!("{lemma_key}: plural {generated} -> {}", observation.form);
            entry.plural = Some(observation.form.clone());
            report.record_plural(lemma_key, &observation.form);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use language_utils::{DocToken, Language};

    fn token(text: &str, pos: PartOfSpeech, lemma: &str, morph: &[(&str, &str)]) -> DocToken {
        DocToken {
            text: text.to_string(),
            whitespace: " ".to_string(),
            pos,
            lemma: lemma.to_string(),
            morph: morph
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn observe(language: Language, tokens: &[DocToken]) -> Observations {
        let mut observations = Observations::default();
        for token in tokens {
            observations.record(language, token);
        }
        observations
    }

    const PAST_3SG: &[(&str, &str)] = &[
        ("Number", "Sing"),
        ("Person", "3"),
        ("Tense", "Past"),
        ("VerbForm", "Fin"),
    ];

    #[test]
    fn test_slot_classification() {
        let morphology = |tense, verb_form| Morphology {
            tense,
            verb_form,
            ..Morphology::default()
        };
        use VerbForm::*;
        let cases = [
            (Some(Tense::Present), Some(Finite), Some(VerbSlot::Present)),
            (Some(Tense::Present), Some(Gerund), None),
            (Some(Tense::Present), Some(Participle), None),
            (Some(Tense::Past), Some(Finite), Some(VerbSlot::Preterite)),
            (Some(Tense::Past), None, Some(VerbSlot::Preterite)),
            (Some(Tense::Past), Some(Participle), Some(VerbSlot::PastParticiple)),
            (None, Some(Participle), Some(VerbSlot::PastParticiple)),
            (None, Some(Infinitive), None),
        ];
        for (tense, verb_form, expected) in cases {
            assert_eq!(
                VerbSlot::for_morphology(&morphology(tense, verb_form)),
                expected,
                "{tense:?} {verb_form:?}"
            );
        }
    }

    #[test]
    fn test_irregular_preterite_is_promoted() {
        let inflector = Inflector::new(Language::English);
        let observations = observe(
            Language::English,
            &[token("swam", PartOfSpeech::Verb, "swim", PAST_3SG)],
        );
        let mut table = InflectionTable::default();
        let report = reconcile(&observations, &mut table, &inflector);

        let swim = table.get_by_lemma("swim").unwrap();
        assert_eq!(swim.base, "swim");
        assert_eq!(swim.pos, Some(WordClass::Verb));
        assert_eq!(swim.preterite.as_ref().unwrap().get("he"), Some("swam"));
        assert_eq!(swim.preterite.as_ref().unwrap().get("I"), Some("swimmed"));
        assert_eq!(swim.observed.len(), 1);
        assert_eq!(report.verbs["swim"].preterite["he"], "swam");
    }

    #[test]
    fn test_agreement_records_nothing() {
        let inflector = Inflector::new(Language::English);
        let mut table = InflectionTable::default();
        table.insert("v1", "walk", inflector.entry_for("walk", Some(WordClass::Verb)));
        let present_3sg = [
            ("Number", "Sing"),
            ("Person", "3"),
            ("Tense", "Pres"),
            ("VerbForm", "Fin"),
        ];
        let past_participle = [("Tense", "Past"), ("VerbForm", "Part")];
        let progressive = [("Aspect", "Prog"), ("Tense", "Pres"), ("VerbForm", "Part")];
        let observations = observe(
            Language::English,
            &[
                token("walks", PartOfSpeech::Verb, "walk", &present_3sg),
                token("walked", PartOfSpeech::Verb, "walk", &past_participle),
                token("walking", PartOfSpeech::Verb, "walk", &progressive),
            ],
        );
        let report = reconcile(&observations, &mut table, &inflector);
        assert!(report.is_empty());
        let walk = table.get("v1").unwrap();
        assert_eq!(walk.observed.len(), 3);
        assert_eq!(walk.past_participle.as_deref(), Some("walked"));
    }

    #[test]
    fn test_preterite_without_person_fills_third_person() {
        // English simple past is tagged Tense=Past|VerbForm=Fin with no Person
        let inflector = Inflector::new(Language::English);
        let observations = observe(
            Language::English,
            &[token("swam", PartOfSpeech::Verb, "swim", &[("Tense", "Past"), ("VerbForm", "Fin")])],
        );
        let mut table = InflectionTable::default();
        let report = reconcile(&observations, &mut table, &inflector);

        let preterite = table.get_by_lemma("swim").unwrap().preterite.clone().unwrap();
        assert_eq!(preterite.get("he"), Some("swam"));
        assert_eq!(preterite.get("I"), Some("swimmed"));
        assert_eq!(preterite.get("they"), Some("swimmed"));
        assert_eq!(report.verbs["swim"].preterite["he"], "swam");
    }

    #[test]
    fn test_present_without_person_gets_no_slot() {
        // "walk" in "they walk": Tense=Pres|VerbForm=Fin, no Person
        let inflector = Inflector::new(Language::English);
        let observations = observe(
            Language::English,
            &[token("walk", PartOfSpeech::Verb, "walk", &[("Tense", "Pres"), ("VerbForm", "Fin")])],
        );
        let mut table = InflectionTable::default();
        let report = reconcile(&observations, &mut table, &inflector);
        assert!(report.is_empty());
        let walk = table.get_by_lemma("walk").unwrap();
        assert_eq!(walk.present.as_ref().unwrap().get("he"), Some("walks"));
        assert_eq!(walk.observed[0].form, "walk");
    }

    #[test]
    fn test_vocabulary_entry_is_overridden_in_place() {
        let inflector = Inflector::new(Language::German);
        let mut table = InflectionTable::default();
        table.insert("v7", "fahren", inflector.entry_for("fahren", Some(WordClass::Verb)));
        let present_2sg = [("Number", "Sing"), ("Person", "2"), ("Tense", "Pres")];
        let past_3pl = [("Number", "Plur"), ("Person", "3"), ("Tense", "Past")];
        let observations = observe(
            Language::German,
            &[
                token("fährst", PartOfSpeech::Verb, "fahren", &present_2sg),
                token("gefahren", PartOfSpeech::Verb, "fahren", &[("VerbForm", "Part")]),
                token("fuhren", PartOfSpeech::Verb, "fahren", &past_3pl),
            ],
        );
        let report = reconcile(&observations, &mut table, &inflector);

        let fahren = table.get("v7").unwrap();
        assert_eq!(fahren.present.as_ref().unwrap().get("du"), Some("fährst"));
        assert_eq!(fahren.present.as_ref().unwrap().get("er"), Some("fahrt"));
        assert_eq!(fahren.preterite.as_ref().unwrap().get("sie"), Some("fuhren"));
        assert_eq!(fahren.past_participle.as_deref(), Some("gefahren"));

        let irregular = &report.verbs["fahren"];
        assert_eq!(irregular.present["du"], "fährst");
        assert_eq!(irregular.preterite["sie"], "fuhren");
        assert_eq!(irregular.past_participle.as_deref(), Some("gefahren"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_last_disagreement_wins() {
        let inflector = Inflector::new(Language::English);
        let observations = observe(
            Language::English,
            &[
                token("swam", PartOfSpeech::Verb, "swim", PAST_3SG),
                token("swimmed", PartOfSpeech::Verb, "swim", PAST_3SG),
                token("swum", PartOfSpeech::Verb, "swim", PAST_3SG),
            ],
        );
        let mut table = InflectionTable::default();
        let report = reconcile(&observations, &mut table, &inflector);
        let swim = table.get_by_lemma("swim").unwrap();
        assert_eq!(swim.preterite.as_ref().unwrap().get("he"), Some("swum"));
        assert_eq!(report.verbs["swim"].preterite["he"], "swum");
    }

    #[test]
    fn test_irregular_plural() {
        let inflector = Inflector::new(Language::German);
        let mut table = InflectionTable::default();
        table.insert("n1", "haus", inflector.entry_for("das Haus", Some(WordClass::Noun)));
        let observations = observe(
            Language::German,
            &[
                token("Haus", PartOfSpeech::Noun, "Haus", &[("Number", "Sing")]),
                token(
                    "Häuser",
                    PartOfSpeech::Noun,
                    "Haus",
                    &[("Case", "Nom"), ("Number", "Plur")],
                ),
            ],
        );
        let report = reconcile(&observations, &mut table, &inflector);
        assert_eq!(table.get("n1").unwrap().plural.as_deref(), Some("Häuser"));
        assert_eq!(report.nouns["haus"].plural, "Häuser");
    }

    #[test]
    fn test_class_mismatch_is_skipped() {
        let inflector = Inflector::new(Language::English);
        let mut table = InflectionTable::default();
        table.insert("n1", "run", inflector.entry_for("a run", Some(WordClass::Noun)));
        let observations = observe(
            Language::English,
            &[token("ran", PartOfSpeech::Verb, "run", PAST_3SG)],
        );
        let report = reconcile(&observations, &mut table, &inflector);
        assert!(report.is_empty());
        let run = table.get("n1").unwrap();
        assert_eq!(run.present, None);
        assert_eq!(run.plural.as_deref(), Some("runs"));
        assert_eq!(run.observed.len(), 1);
    }

    #[test]
    fn test_adjectives_are_only_recorded() {
        let inflector = Inflector::new(Language::English);
        let mut table = InflectionTable::default();
        let observations = observe(
            Language::English,
            &[token("red", PartOfSpeech::Adj, "red", &[("Degree", "Pos")])],
        );
        let report = reconcile(&observations, &mut table, &inflector);
        assert!(report.is_empty());
        let red = table.get_by_lemma("red").unwrap();
        assert_eq!(red.pos, Some(WordClass::Adjective));
        assert_eq!(red.plural, None);
        assert_eq!(red.observed[0].features["Degree"], "Pos");
    }
}
