//! The end-to-end scenarios from the dictionary
//! `["woord","woorden","zijn","wapens","logos","lustoord"]`, inserted in
//! that order with `prune(sort=true, compact=true)`. Exercises only the
//! public `chartrie` surface.

use chartrie::{Alphabet, CharMatch, FinalizedTrie, MatchType, PatternMatch, TrieBuilder};

fn build() -> FinalizedTrie {
    let codepoints: Vec<char> = "\0wordenzijapslugt".chars().collect();
    let alphabet = Alphabet::new(codepoints).unwrap();
    let mut builder = TrieBuilder::new(alphabet);
    builder
        .add_range(["woord", "woorden", "zijn", "wapens", "logos", "lustoord"])
        .unwrap();
    builder.prune(true, true)
}

fn count(trie: &FinalizedTrie, pattern: &PatternMatch) -> usize {
    trie.find(pattern).unwrap().count()
}

#[test]
fn scenario_1_contains() {
    let trie = build();
    assert_eq!(trie.contains("logos"), Ok(true));
    assert_eq!(trie.contains("oneiros"), Ok(false));
}

#[test]
fn scenario_2_all_is_sorted() {
    let trie = build();
    let all: Vec<String> = trie.all().collect();
    assert_eq!(
        all,
        vec!["logos", "lustoord", "wapens", "woord", "woorden", "zijn"]
    );
}

#[test]
fn scenario_3_prefix_grows_narrower() {
    let trie = build();
    assert_eq!(count(&trie, &PatternMatch::from_prefix("w")), 3);
    assert_eq!(count(&trie, &PatternMatch::from_prefix("wo")), 2);
}

#[test]
fn scenario_4_prefix_with_wildcards() {
    let trie = build();
    let pattern = PatternMatch::new(vec![CharMatch::wildcard(), CharMatch::literal('o')], MatchType::IsPrefix);
    assert_eq!(count(&trie, &pattern), 3);

    let pattern = PatternMatch::new(
        vec![
            CharMatch::wildcard(),
            CharMatch::literal('o'),
            CharMatch::wildcard(),
            CharMatch::literal('o'),
        ],
        MatchType::IsPrefix,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["logos"]);
}

#[test]
fn scenario_5_exact_word_growth() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![
            CharMatch::wildcard(),
            CharMatch::literal('o'),
            CharMatch::wildcard(),
            CharMatch::literal('o'),
        ],
        MatchType::IsWord,
    );
    assert_eq!(count(&trie, &pattern), 0);

    let pattern = PatternMatch::new(
        vec![
            CharMatch::wildcard(),
            CharMatch::literal('o'),
            CharMatch::wildcard(),
            CharMatch::literal('o'),
            CharMatch::wildcard(),
        ],
        MatchType::IsWord,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["logos"]);
}

#[test]
fn scenario_6_exact_word_excludes_longer_and_shorter() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![
            CharMatch::literal('w'),
            CharMatch::wildcard(),
            CharMatch::wildcard(),
            CharMatch::wildcard(),
            CharMatch::literal('d'),
        ],
        MatchType::IsWord,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["woord"]);
}

#[test]
fn scenario_7_exact_word_trailing_n() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![
            CharMatch::wildcard(),
            CharMatch::wildcard(),
            CharMatch::wildcard(),
            CharMatch::literal('n'),
        ],
        MatchType::IsWord,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["zijn"]);
}

#[test]
fn scenario_8_fragment_oord() {
    let trie = build();
    let mut results: Vec<String> = trie.find(&PatternMatch::from_fragment("oord")).unwrap().collect();
    results.sort();
    assert_eq!(results, vec!["lustoord", "woord", "woorden"]);
}

#[test]
fn scenario_9_fragment_n() {
    let trie = build();
    let pattern = PatternMatch::new(vec![CharMatch::literal('n')], MatchType::IsFragment);
    let mut results: Vec<String> = trie.find(&pattern).unwrap().collect();
    results.sort();
    assert_eq!(results, vec!["wapens", "woorden", "zijn"]);
}

#[test]
fn scenario_10_fragment_with_wildcard() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![
            CharMatch::literal('u'),
            CharMatch::literal('s'),
            CharMatch::wildcard(),
            CharMatch::literal('o'),
        ],
        MatchType::IsFragment,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["lustoord"]);
}

#[test]
fn scenario_11_fragment_count() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![CharMatch::literal('o'), CharMatch::wildcard(), CharMatch::literal('d')],
        MatchType::IsFragment,
    );
    assert_eq!(count(&trie, &pattern), 3);
}

#[test]
fn scenario_12_suffix_n() {
    let trie = build();
    let pattern = PatternMatch::new(vec![CharMatch::literal('n')], MatchType::IsSuffix);
    let mut results: Vec<String> = trie.find(&pattern).unwrap().collect();
    results.sort();
    assert_eq!(results, vec!["woorden", "zijn"]);
}

#[test]
fn scenario_13_suffix_with_wildcard() {
    let trie = build();
    let pattern = PatternMatch::new(
        vec![CharMatch::literal('i'), CharMatch::wildcard(), CharMatch::literal('n')],
        MatchType::IsSuffix,
    );
    let results: Vec<String> = trie.find(&pattern).unwrap().collect();
    assert_eq!(results, vec!["zijn"]);
}

#[test]
fn no_duplicates_regression() {
    let codepoints: Vec<char> = "\0osrakeldvtwchngj".chars().collect();
    let alphabet = Alphabet::new(codepoints).unwrap();
    let mut builder = TrieBuilder::new(alphabet);
    builder
        .add_range([
            "os",
            "orakel",
            "ordeverstoorders",
            "ordewacht",
            "ordewoord",
            "ordewoorden",
            "woordvolgorde",
            "woordje",
        ])
        .unwrap();
    let trie = builder.prune(true, true);
    assert_eq!(count(&trie, &PatternMatch::from_fragment("ord")), 6);
}

#[test]
fn false_prefix_regression() {
    let codepoints: Vec<char> = "\0gesr".chars().collect();
    let alphabet = Alphabet::new(codepoints).unwrap();
    let mut builder = TrieBuilder::new(alphabet);
    builder.add_range(["ges", "gres", "grges"]).unwrap();
    let trie = builder.prune(true, true);
    let mut results: Vec<String> = trie.find(&PatternMatch::from_fragment("ges")).unwrap().collect();
    results.sort();
    assert_eq!(results, vec!["ges", "grges"]);
}
