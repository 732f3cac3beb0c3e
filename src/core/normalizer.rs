//! Text normalizer: raw snippet → lowercase ASCII tokens
//!
//! NFKD decomposition, contraction expansion, dash/quote folding, diacritic
//! stripping. Hyphenated and accented variants collapse onto their plain
//! forms ("self-starting" → "self starting", "naïve" → "naive").

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::NEGATION_WORDS;

lazy_static! {
    // can't, won't, don't, isn't, shouldn't, ... (straight or curly apostrophe)
    static ref RE_NT_CONTRACTION: Regex = Regex::new(
        r"(?i)\b(ca|wo|do|does|did|is|are|was|were|have|has|had|should|would|could)n['\x{2019}]t\b"
    ).unwrap();

    static ref RE_CANNOT: Regex = Regex::new(r"(?i)\bcannot\b").unwrap();
}

/// Normalize text into a single space-separated lowercase string
pub fn normalize(text: &str) -> String {
    let decomposed: String = text.nfkd().collect();
    let expanded = expand_contractions(&decomposed);

    let folded: String = expanded
        .chars()
        .map(|c| if is_fold_to_space(c) { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_ascii_lowercase() || c.is_whitespace() { c } else { ' ' })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and split into tokens
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text).split_whitespace().map(String::from).collect()
}

/// Whether a negation word sits within `window` tokens before `index`
pub fn has_negation_before(tokens: &[String], index: usize, window: usize) -> bool {
    let start = index.saturating_sub(window);
    tokens
        .get(start..index.min(tokens.len()))
        .map(|before| before.iter().any(|t| is_negation(t)))
        .unwrap_or(false)
}

pub fn is_negation(token: &str) -> bool {
    NEGATION_WORDS.contains(&token)
}

fn expand_contractions(text: &str) -> String {
    let text = RE_CANNOT.replace_all(text, "can not");
    RE_NT_CONTRACTION
        .replace_all(&text, |caps: &Captures| {
            let stem = &caps[1];
            let full = match stem.to_ascii_lowercase().as_str() {
                "ca" => "can",
                "wo" => "will",
                _ => stem,
            };
            format!("{} not", full)
        })
        .into_owned()
}

/// Hyphens, dashes and quote marks become word breaks
fn is_fold_to_space(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}'..='\u{2015}' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '"' | '\''
    )
}
