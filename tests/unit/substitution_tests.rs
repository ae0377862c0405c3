/*!
 * Tests for placeholder substitution
 */

use internationalize::app_config::DelimiterPair;
use internationalize::translation::{Substitutor, TranslationTable, build_pattern, substitute};

fn table(entries: &[(&str, &str)]) -> TranslationTable {
    entries.iter().copied().collect()
}

fn braces() -> DelimiterPair {
    DelimiterPair::default()
}

#[test]
fn test_substitute_withAllKeysKnown_shouldReplaceEverything() {
    let output = substitute(
        "Hello {{name}}, welcome to {{place}}!",
        &table(&[("name", "Ada"), ("place", "Wonderland")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "Hello Ada, welcome to Wonderland!");
}

#[test]
fn test_substitute_withMissingKey_shouldLeavePlaceholderUntouched() {
    let output = substitute(
        "Hello {{name}}, welcome to {{place}}!",
        &table(&[("name", "Ada")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "Hello Ada, welcome to {{place}}!");
}

#[test]
fn test_substitute_withUnusedTableEntries_shouldIgnoreThem() {
    let output = substitute("<p>{{a}}</p>", &table(&[("a", "1"), ("b", "2")]), &braces()).unwrap();
    assert_eq!(output, "<p>1</p>");
}

#[test]
fn test_substitute_withSquareBracketTags_shouldMatchLiterally() {
    let output = substitute("Hi [[user]]", &table(&[("user", "Bob")]), &DelimiterPair::new("[[", "]]")).unwrap();
    assert_eq!(output, "Hi Bob");
}

#[test]
fn test_substitute_withDollarTags_shouldMatchLiterally() {
    let output = substitute(
        "Total: ${amount} (not $amount or {amount})",
        &table(&[("amount", "42 EUR")]),
        &DelimiterPair::new("${", "}"),
    )
    .unwrap();
    assert_eq!(output, "Total: 42 EUR (not $amount or {amount})");
}

#[test]
fn test_substitute_withRegexMetacharacterTags_shouldNotInterpretThem() {
    let cases = [
        ("(", ")"),
        ("|", "|"),
        (".*", "*."),
        ("\\", "/"),
        ("^", "$"),
        ("+?", "?+"),
    ];
    for (open, close) in cases {
        let delimiters = DelimiterPair::new(open, close);
        let source = format!("x{}key{}y and xkeyy", open, close);
        let output = substitute(&source, &table(&[("key", "V")]), &delimiters).unwrap();
        assert_eq!(output, "xVy and xkeyy", "delimiters {:?}", delimiters);
    }
}

#[test]
fn test_substitute_withPrefixKeys_shouldPreferLongestKey() {
    let output = substitute(
        "{{user}} / {{username}}",
        &table(&[("user", "U"), ("username", "ada_l")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "U / ada_l");
}

#[test]
fn test_substitute_withPrefixKeysAndEmptyCloseTag_shouldPreferLongestKey() {
    let output = substitute(
        "$user $username",
        &table(&[("user", "U"), ("username", "ada_l")]),
        &DelimiterPair::new("$", ""),
    )
    .unwrap();
    assert_eq!(output, "U ada_l");
}

#[test]
fn test_substitute_withDifferentCases_shouldResolveSameEntry() {
    let output = substitute(
        "{{Name}} {{NAME}} {{name}} {{nAmE}}",
        &table(&[("name", "Ada")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "Ada Ada Ada Ada");
}

#[test]
fn test_substitute_withUppercaseTableKey_shouldResolveLowercasePlaceholder() {
    let output = substitute("{{title}}", &table(&[("TITLE", "Home")]), &braces()).unwrap();
    assert_eq!(output, "Home");
}

#[test]
fn test_substitute_withEmptyTable_shouldReturnSource() {
    let source = "Nothing {{here}} changes";
    let output = substitute(source, &TranslationTable::new(), &braces()).unwrap();
    assert_eq!(output, source);
}

#[test]
fn test_substitute_thenEmptyTable_shouldBeIdempotent() {
    let sources = [
        "Hello {{name}}, welcome to {{place}}!",
        "{{a}}{{b}}{{c}} {{missing}}",
        "",
        "no placeholders at all",
    ];
    let translations = table(&[("name", "Ada"), ("place", "Wonderland"), ("a", "1"), ("b", "2"), ("c", "3")]);
    for source in sources {
        let once = substitute(source, &translations, &braces()).unwrap();
        let twice = substitute(&once, &TranslationTable::new(), &braces()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_substitute_withAdjacentPlaceholders_shouldReplaceEach() {
    let output = substitute("{{a}}{{b}}{{a}}", &table(&[("a", "x"), ("b", "y")]), &braces()).unwrap();
    assert_eq!(output, "xyx");
}

#[test]
fn test_substitute_withValueContainingPlaceholder_shouldNotExpandAgain() {
    let output = substitute(
        "{{greeting}}",
        &table(&[("greeting", "Hi {{name}}"), ("name", "Ada")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "Hi {{name}}");
}

#[test]
fn test_substitute_withReplacementSyntaxInValue_shouldInsertLiterally() {
    let output = substitute("{{price}}", &table(&[("price", "$1 and ${key}")]), &braces()).unwrap();
    assert_eq!(output, "$1 and ${key}");
}

#[test]
fn test_substitute_withUnicodeKeysAndValues_shouldPreserveText() {
    let output = substitute(
        "<h1>{{titre_été}}</h1> - {{名前}}",
        &table(&[("titre_été", "Été à Paris"), ("名前", "エイダ")]),
        &braces(),
    )
    .unwrap();
    assert_eq!(output, "<h1>Été à Paris</h1> - エイダ");
}

#[test]
fn test_substitute_withUnbalancedDelimiters_shouldOnlyReplaceCompleteTokens() {
    let output = substitute("{{{name}}} {{name} {name}}", &table(&[("name", "Ada")]), &braces()).unwrap();
    assert_eq!(output, "{Ada} {{name} {name}}");
}

#[test]
fn test_build_pattern_withAnyInsertionOrder_shouldBeIdentical() {
    let forward = table(&[("a", "1"), ("ab", "2"), ("abc", "3")]);
    let backward = table(&[("abc", "3"), ("ab", "2"), ("a", "1")]);

    let first = build_pattern(forward.keys(), &braces()).unwrap();
    let second = build_pattern(backward.keys(), &braces()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, r"\{\{(?P<key>abc|ab|a)\}\}");
}

#[test]
fn test_substitutor_withRepeatedUse_shouldBeDeterministic() {
    let substitutor = Substitutor::new(&table(&[("k", "v"), ("kk", "w")]), &braces()).unwrap();
    let source = "{{k}}{{kk}}{{K}}{{KK}}";
    let first = substitutor.substitute(source);
    for _ in 0..10 {
        assert_eq!(substitutor.substitute(source), first);
    }
    assert_eq!(first, "vwvw");
}

#[test]
fn test_substitutor_pattern_withEmptyTable_shouldBeNone() {
    let substitutor = Substitutor::new(&TranslationTable::new(), &braces()).unwrap();
    assert!(substitutor.pattern().is_none());
    assert_eq!(substitutor.resolve("anything"), None);
}
