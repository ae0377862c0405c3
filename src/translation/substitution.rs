/*!
 * Placeholder substitution.
 *
 * A `Substitutor` compiles one case-insensitive matcher for every key of a
 * translation table, bracketed by the configured delimiters, and replaces all
 * non-overlapping occurrences in a single left-to-right pass.
 *
 * Lookup rules after a match:
 * - the key spelled exactly as in the source wins;
 * - otherwise the table is searched by lowercase key, and when several keys
 *   share a lowercase form the lexicographically smallest one is used;
 * - a match that still resolves to nothing is copied through unchanged.
 *
 * Placeholders whose key is missing from the table never match and pass
 * through literally.
 *
 * The matcher compares keys with Unicode simple case folding while the
 * fallback lookup uses `str::to_lowercase`. A few characters fold together
 * without sharing a lowercase form (`ſ` matches `s`), so such a placeholder
 * matches but resolves to nothing and is copied through unchanged.
 */

use regex::{Captures, Regex, RegexBuilder};
use std::collections::HashMap;

use crate::app_config::DelimiterPair;
use crate::errors::SubstitutionError;
use crate::translation::table::TranslationTable;

/// Name of the capture group holding the bare key
const KEY_GROUP: &str = "key";

/// Compiled size limit for the placeholder matcher
const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Placeholder matcher and lookup tables for one translation table
#[derive(Debug, Clone)]
pub struct Substitutor {
    matcher: Option<Regex>,
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
}

impl Substitutor {
    /// Compile the matcher for a table and a delimiter pair
    pub fn new(table: &TranslationTable, delimiters: &DelimiterPair) -> Result<Self, SubstitutionError> {
        let matcher = match build_pattern(table.keys(), delimiters) {
            Some(pattern) => Some(
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .size_limit(MATCHER_SIZE_LIMIT)
                    .build()?,
            ),
            None => None,
        };

        let mut exact = HashMap::with_capacity(table.len());
        let mut folded = HashMap::with_capacity(table.len());
        // Table iteration is sorted, so the smallest key claims a shared lowercase form.
        for (key, value) in table.iter() {
            exact.insert(key.to_string(), value.to_string());
            folded
                .entry(key.to_lowercase())
                .or_insert_with(|| value.to_string());
        }

        Ok(Self { matcher, exact, folded })
    }

    /// Source of the compiled matcher, if the table had any key
    pub fn pattern(&self) -> Option<&str> {
        self.matcher.as_ref().map(Regex::as_str)
    }

    /// Replacement for a key captured from the source
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.exact
            .get(key)
            .or_else(|| self.folded.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Replace every placeholder of a known key in `source`
    pub fn substitute(&self, source: &str) -> String {
        let Some(matcher) = &self.matcher else {
            return source.to_string();
        };

        matcher
            .replace_all(source, |caps: &Captures| {
                let key = caps.name(KEY_GROUP).map_or("", |m| m.as_str());
                match self.resolve(key) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Build the alternation pattern matching `open + key + close` for every key.
///
/// Every literal is escaped. Longer keys come first so a key never shadows a
/// longer key it prefixes; equal lengths are ordered lexicographically.
/// Returns `None` when there are no keys.
pub fn build_pattern<'a, I>(keys: I, delimiters: &DelimiterPair) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<&str> = keys.into_iter().collect();
    if keys.is_empty() {
        return None;
    }
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    keys.dedup();

    let alternation = keys
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");

    Some(format!(
        "{}(?P<{}>{}){}",
        regex::escape(&delimiters.open),
        KEY_GROUP,
        alternation,
        regex::escape(&delimiters.close)
    ))
}

/// Substitute `source` with `table` in one call
pub fn substitute(
    source: &str,
    table: &TranslationTable,
    delimiters: &DelimiterPair,
) -> Result<String, SubstitutionError> {
    Ok(Substitutor::new(table, delimiters)?.substitute(source))
}
