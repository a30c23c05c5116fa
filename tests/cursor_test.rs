use khmer_index::cursor::{Bucket, Cursor, FirstLevelCursor, SubCursor};
use khmer_index::grouping::{build_index, ExtraConsonantKey, KhmerIndex, VowelCombinationKey, WordsCategory};
use khmer_index::keys::extract_keys;

fn index_of(words: &[&str]) -> KhmerIndex {
    build_index(words.iter().map(|w| (*w, extract_keys(w).unwrap())))
}

#[test]
fn test_empty_index_has_no_default() {
    let index = KhmerIndex::default();
    assert_eq!(Cursor::default_for(&index), None);
    assert_eq!(FirstLevelCursor::default_for(&index), None);
}

#[test]
fn test_default_prefers_consonants() {
    let index = index_of(&["ឥឡូវ", "អា", "គា", "ខ្ញុំ", "១"]);
    assert_eq!(
        Cursor::default_for(&index),
        Some(Cursor::Words {
            category: WordsCategory::Consonant,
            first_char: 'ខ',
            second_char: SubCursor::Consonant('ញ'),
        })
    );
    assert_eq!(
        FirstLevelCursor::default_for(&index),
        Some(FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ខ' })
    );
}

#[test]
fn test_default_category_priority() {
    let index = index_of(&["អា", "ឥឡូវ"]);
    assert_eq!(
        FirstLevelCursor::default_for(&index),
        Some(FirstLevelCursor::Words { category: WordsCategory::IndependentVowel, first_char: 'ឥ' })
    );

    let index = index_of(&["អា", "៣"]);
    assert_eq!(
        FirstLevelCursor::default_for(&index),
        Some(FirstLevelCursor::Words { category: WordsCategory::Vowel, first_char: 'អ' })
    );
}

#[test]
fn test_default_flat_priority() {
    assert_eq!(Cursor::default_for(&index_of(&["។", "៣", "᧡"])), Some(Cursor::Numbers));
    assert_eq!(Cursor::default_for(&index_of(&["᧡", "។"])), Some(Cursor::Punctuation));
    assert_eq!(Cursor::default_for(&index_of(&["ឝ", "᧡"])), Some(Cursor::LunarDates));
    assert_eq!(Cursor::default_for(&index_of(&["ឝ"])), Some(Cursor::OthersKnown));
    assert_eq!(FirstLevelCursor::default_for(&index_of(&["ឝ"])), Some(FirstLevelCursor::OthersKnown));
}

#[test]
fn test_sub_cursor_priority() {
    // vowel, extra consonant and no-second-char buckets; vowel wins
    let index = index_of(&["ក", "កប៉ា", "កា"]);
    let cursor = Cursor::default_for(&index).unwrap();
    assert_eq!(
        cursor,
        Cursor::Words {
            category: WordsCategory::Consonant,
            first_char: 'ក',
            second_char: SubCursor::Vowel('ា'),
        }
    );

    let index = index_of(&["ក", "កប៉ា"]);
    let group = index.group(WordsCategory::Consonant, 'ក').unwrap();
    assert_eq!(
        SubCursor::default_for(group),
        Some(SubCursor::ExtraConsonant(ExtraConsonantKey::from_run("ប៉")))
    );

    let index = index_of(&["ក", "កំ"]);
    let group = index.group(WordsCategory::Consonant, 'ក').unwrap();
    assert_eq!(
        SubCursor::default_for(group),
        Some(SubCursor::VowelCombination(VowelCombinationKey::from_run("ំ")))
    );

    let index = index_of(&["ក"]);
    let group = index.group(WordsCategory::Consonant, 'ក').unwrap();
    assert_eq!(SubCursor::default_for(group), Some(SubCursor::NoSecondChar));
}

#[test]
fn test_default_follows_dictionary_order() {
    let index = index_of(&["កាំ", "កំ", "កុំ", "កះ"]);
    assert_eq!(
        Cursor::default_for(&index),
        Some(Cursor::Words {
            category: WordsCategory::Consonant,
            first_char: 'ក',
            second_char: SubCursor::VowelCombination(VowelCombinationKey::from_run("ំ")),
        })
    );

    let index = index_of(&["ៈក", "៊ក", "់ក", "ំក"]);
    assert_eq!(
        FirstLevelCursor::default_for(&index),
        Some(FirstLevelCursor::Words { category: WordsCategory::Diacritic, first_char: '់' })
    );

    let index = index_of(&["កៈ", "ក៍", "ក់"]);
    let group = index.group(WordsCategory::Consonant, 'ក').unwrap();
    assert_eq!(SubCursor::default_for(group), Some(SubCursor::Diacritic('់')));
}

#[test]
fn test_default_addresses_non_empty_bucket() {
    let sets: &[&[&str]] = &[
        &["ក"],
        &["កំ", "ខ"],
        &["អា", "១"],
        &["៍ក"],
        &["។ល។"],
    ];
    for words in sets {
        let index = index_of(words);
        let cursor = Cursor::default_for(&index).unwrap();
        let found = cursor.words_in(&index).unwrap();
        assert!(!found.is_empty(), "empty default bucket for {:?}", words);
        assert!(cursor.first_level().bucket_in(&index).is_some());
    }
}

#[test]
fn test_equality() {
    let a = FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ក' };
    let b = FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ក' };
    let c = FirstLevelCursor::Words { category: WordsCategory::Vowel, first_char: 'ក' };
    let d = FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ខ' };
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
    assert_eq!(FirstLevelCursor::Numbers, FirstLevelCursor::Numbers);
    assert_ne!(FirstLevelCursor::Numbers, FirstLevelCursor::Punctuation);

    let full = |second: SubCursor| Cursor::Words {
        category: WordsCategory::Consonant,
        first_char: 'ក',
        second_char: second,
    };
    assert_eq!(full(SubCursor::NoSecondChar), full(SubCursor::NoSecondChar));
    assert_ne!(full(SubCursor::Vowel('ា')), full(SubCursor::Consonant('ា')));
    assert_ne!(
        full(SubCursor::VowelCombination(VowelCombinationKey::from_run("ំ"))),
        full(SubCursor::Diacritic('ំ'))
    );
}

#[test]
fn test_cursor_of_keys() {
    let index = index_of(&["ខ្ញុំ", "១២"]);
    for word in ["ខ្ញុំ", "១២"] {
        let keys = extract_keys(word).unwrap();
        let cursor = Cursor::of(&keys);
        assert!(cursor.words_in(&index).unwrap().iter().any(|w| w == word));
        assert_eq!(FirstLevelCursor::of(&keys), cursor.first_level());
    }
}

#[test]
fn test_bucket_in() {
    let index = index_of(&["ក", "១"]);
    let ka = FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ក' };
    assert!(matches!(ka.bucket_in(&index), Some(Bucket::Group(_))));
    assert_eq!(
        FirstLevelCursor::Numbers.bucket_in(&index),
        Some(Bucket::Flat(&["១".to_string()][..]))
    );
    assert_eq!(FirstLevelCursor::Punctuation.bucket_in(&index), None);
    let missing = FirstLevelCursor::Words { category: WordsCategory::Consonant, first_char: 'ខ' };
    assert_eq!(missing.bucket_in(&index), None);
}

#[test]
fn test_words_in_missing_bucket() {
    let index = index_of(&["ក"]);
    let cursor = Cursor::Words {
        category: WordsCategory::Consonant,
        first_char: 'ក',
        second_char: SubCursor::Vowel('ា'),
    };
    assert_eq!(cursor.words_in(&index), None);
    assert_eq!(Cursor::Numbers.words_in(&index), None);
}
