//! Differential test: builds a random word list, stores it in both a
//! `chartrie::FinalizedTrie` and an independent `fst::Set`, and checks
//! that the two agree on membership in both directions. Not part of the
//! core crate's test suite; run by hand or from CI as a noise generator.

use std::collections::BTreeSet;

use chartrie::{Alphabet, TrieBuilder};
use fst::{IntoStreamer, Set, Streamer};
use rand::Rng;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const WORD_COUNT: usize = 20_000;
const MAX_WORD_LEN: usize = 12;

fn random_words(count: usize) -> BTreeSet<String> {
    let mut rng = rand::thread_rng();
    let letters: Vec<char> = ALPHABET.chars().collect();
    let mut words = BTreeSet::new();
    while words.len() < count {
        let len = rng.gen_range(1..=MAX_WORD_LEN);
        let word: String = (0..len).map(|_| letters[rng.gen_range(0..letters.len())]).collect();
        words.insert(word);
    }
    words
}

fn build_trie(words: &BTreeSet<String>) -> chartrie::FinalizedTrie {
    let mut codepoints = vec!['\0'];
    codepoints.extend(ALPHABET.chars());
    let alphabet = Alphabet::new(codepoints).expect("alphabet within size limits");
    let mut builder = TrieBuilder::new(alphabet);
    builder.add_range(words.iter()).expect("all words are alphabet members");
    builder.prune(true, true)
}

fn main() {
    env_logger::init();
    let words = random_words(WORD_COUNT);
    log::info!("generated {} distinct random words", words.len());

    let trie = build_trie(&words);
    let fst_set = Set::from_iter(words.iter()).expect("words are already sorted and deduplicated");

    let mut trie_words: Vec<String> = trie.all().collect();
    trie_words.sort();
    let mut mismatches = 0usize;

    for word in &trie_words {
        if !fst_set.contains(word) {
            log::error!("trie has {word:?} but the fst::Set does not");
            mismatches += 1;
        }
    }

    let mut stream = fst_set.into_stream();
    while let Some(word) = stream.next() {
        let word = std::str::from_utf8(word).expect("fst keys are UTF-8 words");
        if trie.contains(word) != Ok(true) {
            log::error!("fst::Set has {word:?} but the trie does not");
            mismatches += 1;
        }
    }

    assert_eq!(trie.count() as usize, words.len(), "word count mismatch");
    assert_eq!(mismatches, 0, "{mismatches} membership disagreements found");
    log::info!("cross-checked {} words: no disagreements", words.len());
}
