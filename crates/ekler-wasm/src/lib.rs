// WASM bindings for ekler Turkish suffix generation.
//
// Exposes the query, transform and mutation functions of ekler-tr with
// camelCase names, plus a `WasmWord` class wrapping the undoable `Word`.
// Structured return values (Suffix, Components) are serialized with
// serde-wasm-bindgen. A stem may be passed as a string or an integer.
//
// Usage from JavaScript:
//
//   makePlural("Araba", false);                 // => "Arabalar"
//   makeCase("Şehir", Case.Dative, false, false); // => "Şehre"
//   getCaseSuffix("Sesi", Case.Ablative, true);   // => { prefix: "", infix: "n", suffix: "den" }
//   const w = new WasmWord("Ses", false);
//   w.makePossessive(Pronoun.SingularThird);
//   w.makeCase(Case.Ablative);
//   w.toString();                                // => "Sesinden"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use ekler_core::AffixError;
use ekler_core::suffix::Suffix;
use ekler_tr::{Base, Word};

// ============================================================================
// Enums
// ============================================================================

/// Possessor person and number.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum Pronoun {
    SingularFirst,
    SingularSecond,
    SingularThird,
    PluralFirst,
    PluralSecond,
    PluralThird,
}

/// Grammatical case.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum Case {
    Absolute,
    Accusative,
    Ablative,
    Locative,
    Instrumental,
    Dative,
}

/// Role in a noun compound.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum Compound {
    Compounder,
    Compoundee,
}

impl From<Pronoun> for ekler_tr::Pronoun {
    fn from(p: Pronoun) -> Self {
        match p {
            Pronoun::SingularFirst => ekler_tr::Pronoun::SingularFirst,
            Pronoun::SingularSecond => ekler_tr::Pronoun::SingularSecond,
            Pronoun::SingularThird => ekler_tr::Pronoun::SingularThird,
            Pronoun::PluralFirst => ekler_tr::Pronoun::PluralFirst,
            Pronoun::PluralSecond => ekler_tr::Pronoun::PluralSecond,
            Pronoun::PluralThird => ekler_tr::Pronoun::PluralThird,
        }
    }
}

impl From<Case> for ekler_tr::Case {
    fn from(c: Case) -> Self {
        match c {
            Case::Absolute => ekler_tr::Case::Absolute,
            Case::Accusative => ekler_tr::Case::Accusative,
            Case::Ablative => ekler_tr::Case::Ablative,
            Case::Locative => ekler_tr::Case::Locative,
            Case::Instrumental => ekler_tr::Case::Instrumental,
            Case::Dative => ekler_tr::Case::Dative,
        }
    }
}

impl From<Compound> for ekler_tr::Compound {
    fn from(c: Compound) -> Self {
        match c {
            Compound::Compounder => ekler_tr::Compound::Compounder,
            Compound::Compoundee => ekler_tr::Compound::Compoundee,
        }
    }
}

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a suffix.
#[derive(Serialize)]
struct JsSuffix {
    prefix: String,
    infix: String,
    suffix: String,
}

impl From<Suffix> for JsSuffix {
    fn from(s: Suffix) -> Self {
        Self {
            prefix: s.prefix,
            infix: s.infix,
            suffix: s.suffix,
        }
    }
}

/// Serializable representation of extracted components.
#[derive(Serialize)]
struct JsComponents {
    letter: String,
    vowel: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn affix_error_to_js(e: AffixError) -> JsError {
    JsError::new(&e.to_string())
}

/// Accept a JS string or an integral number as a stem.
fn base_from_js(value: &JsValue) -> Result<Base<'static>, JsError> {
    if let Some(s) = value.as_string() {
        return Ok(Base::from(s));
    }
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => Ok(Base::Number(n as i64)),
        _ => Err(JsError::new("expected a string or an integer")),
    }
}

fn suffix_to_js(result: Result<Suffix, AffixError>) -> Result<JsValue, JsError> {
    let suffix = result.map_err(affix_error_to_js)?;
    serde_wasm_bindgen::to_value(&JsSuffix::from(suffix)).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Suffix queries
// ============================================================================

#[wasm_bindgen(js_name = "getPluralSuffix")]
pub fn get_plural_suffix(base: JsValue) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_plural_suffix(base_from_js(&base)?))
}

#[wasm_bindgen(js_name = "getEqualitySuffix")]
pub fn get_equality_suffix(base: JsValue) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_equality_suffix(base_from_js(&base)?))
}

#[wasm_bindgen(js_name = "getPossessiveSuffix")]
pub fn get_possessive_suffix(base: JsValue, pronoun: Pronoun) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_possessive_suffix(base_from_js(&base)?, pronoun.into()))
}

#[wasm_bindgen(js_name = "getCaseSuffix")]
pub fn get_case_suffix(base: JsValue, case: Case, is_compound: bool) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_case_suffix(base_from_js(&base)?, case.into(), is_compound))
}

#[wasm_bindgen(js_name = "getCompounderSuffix")]
pub fn get_compounder_suffix(base: JsValue) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_compounder_suffix(base_from_js(&base)?))
}

#[wasm_bindgen(js_name = "getCompoundeeSuffix")]
pub fn get_compoundee_suffix(base: JsValue) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_compoundee_suffix(base_from_js(&base)?))
}

#[wasm_bindgen(js_name = "getCompoundSuffix")]
pub fn get_compound_suffix(base: JsValue, role: Compound) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_compound_suffix(base_from_js(&base)?, role.into()))
}

#[wasm_bindgen(js_name = "getQuestionSuffix")]
pub fn get_question_suffix(base: JsValue) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_question_suffix(base_from_js(&base)?))
}

#[wasm_bindgen(js_name = "getRelativeSuffix")]
pub fn get_relative_suffix(base: JsValue, is_compound: bool) -> Result<JsValue, JsError> {
    suffix_to_js(ekler_tr::get_relative_suffix(base_from_js(&base)?, is_compound))
}

// ============================================================================
// Transforms
// ============================================================================

#[wasm_bindgen(js_name = "makePlural")]
pub fn make_plural(base: JsValue, is_proper_noun: bool) -> Result<String, JsError> {
    ekler_tr::make_plural(base_from_js(&base)?, is_proper_noun).map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makeEqual")]
pub fn make_equal(base: JsValue, is_proper_noun: bool) -> Result<String, JsError> {
    ekler_tr::make_equal(base_from_js(&base)?, is_proper_noun).map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makePossessive")]
pub fn make_possessive(
    base: JsValue,
    pronoun: Pronoun,
    is_proper_noun: bool,
) -> Result<String, JsError> {
    ekler_tr::make_possessive(base_from_js(&base)?, pronoun.into(), is_proper_noun)
        .map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makeCase")]
pub fn make_case(
    base: JsValue,
    case: Case,
    is_proper_noun: bool,
    is_compound: bool,
) -> Result<String, JsError> {
    ekler_tr::make_case(base_from_js(&base)?, case.into(), is_proper_noun, is_compound)
        .map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makeCompound")]
pub fn make_compound(base: JsValue, role: Compound, is_proper_noun: bool) -> Result<String, JsError> {
    ekler_tr::make_compound(base_from_js(&base)?, role.into(), is_proper_noun)
        .map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makeQuestion")]
pub fn make_question(base: JsValue) -> Result<String, JsError> {
    ekler_tr::make_question(base_from_js(&base)?).map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "makeRelative")]
pub fn make_relative(
    base: JsValue,
    is_proper_noun: bool,
    is_compound: bool,
) -> Result<String, JsError> {
    ekler_tr::make_relative(base_from_js(&base)?, is_proper_noun, is_compound)
        .map_err(affix_error_to_js)
}

// ============================================================================
// Mutation primitives and components
// ============================================================================

/// The voiced replacement letter, or `undefined` when the stem does not soften.
#[wasm_bindgen(js_name = "getVoicedConsonant")]
pub fn get_voiced_consonant(base: JsValue, is_proper_noun: bool) -> Result<Option<String>, JsError> {
    let voiced = ekler_tr::get_voiced_consonant(base_from_js(&base)?, is_proper_noun)
        .map_err(affix_error_to_js)?;
    Ok(voiced.map(String::from))
}

#[wasm_bindgen(js_name = "alterToVoicedConsonant")]
pub fn alter_to_voiced_consonant(base: JsValue, is_proper_noun: bool) -> Result<String, JsError> {
    ekler_tr::alter_to_voiced_consonant(base_from_js(&base)?, is_proper_noun)
        .map_err(affix_error_to_js)
}

#[wasm_bindgen(js_name = "alterToVowelDrop")]
pub fn alter_to_vowel_drop(base: JsValue) -> Result<String, JsError> {
    ekler_tr::alter_to_vowel_drop(base_from_js(&base)?).map_err(affix_error_to_js)
}

/// Returns `{ letter, vowel }`, both lowercased with Turkish rules.
#[wasm_bindgen(js_name = "getComponents")]
pub fn get_components(base: JsValue) -> Result<JsValue, JsError> {
    let stem = base_from_js(&base)?.into_stem();
    let c = ekler_tr::get_components(&stem).map_err(affix_error_to_js)?;
    let js = JsComponents {
        letter: c.letter.to_string(),
        vowel: c.vowel.to_string(),
    };
    serde_wasm_bindgen::to_value(&js).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmWord
// ============================================================================

/// A noun that accumulates suffixes and can undo them.
///
/// Keeps at most 20 undo snapshots; the oldest are dropped first.
#[wasm_bindgen]
pub struct WasmWord {
    word: Word,
}

#[wasm_bindgen]
impl WasmWord {
    #[wasm_bindgen(constructor)]
    pub fn new(base: JsValue, is_proper_noun: bool) -> Result<WasmWord, JsError> {
        Ok(WasmWord {
            word: Word::new(base_from_js(&base)?, is_proper_noun),
        })
    }

    #[wasm_bindgen(js_name = "makePlural")]
    pub fn make_plural(&mut self) -> Result<(), JsError> {
        self.word.make_plural().map(|_| ()).map_err(affix_error_to_js)
    }

    #[wasm_bindgen(js_name = "makeEqual")]
    pub fn make_equal(&mut self) -> Result<(), JsError> {
        self.word.make_equal().map(|_| ()).map_err(affix_error_to_js)
    }

    #[wasm_bindgen(js_name = "makePossessive")]
    pub fn make_possessive(&mut self, pronoun: Pronoun) -> Result<(), JsError> {
        self.word
            .make_possessive(pronoun.into())
            .map(|_| ())
            .map_err(affix_error_to_js)
    }

    #[wasm_bindgen(js_name = "makeCase")]
    pub fn make_case(&mut self, case: Case) -> Result<(), JsError> {
        self.word.make_case(case.into()).map(|_| ()).map_err(affix_error_to_js)
    }

    #[wasm_bindgen(js_name = "makeCompound")]
    pub fn make_compound(&mut self, role: Compound) -> Result<(), JsError> {
        self.word
            .make_compound(role.into())
            .map(|_| ())
            .map_err(affix_error_to_js)
    }

    /// Restore the previous form. Does nothing when there is no history.
    pub fn undo(&mut self) {
        self.word.undo();
    }

    #[wasm_bindgen(getter, js_name = "isCompound")]
    pub fn is_compound(&self) -> bool {
        self.word.is_compound()
    }

    #[wasm_bindgen(getter, js_name = "isProperNoun")]
    pub fn is_proper_noun(&self) -> bool {
        self.word.is_proper_noun()
    }

    #[wasm_bindgen(js_name = "toString")]
    pub fn to_js_string(&self) -> String {
        self.word.to_string()
    }
}
