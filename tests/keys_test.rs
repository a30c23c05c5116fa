use khmer_index::classifier::{CharGroup, OneCharGroup};
use khmer_index::error::ClassifyError;
use khmer_index::keys::{extract_keys, ClassifiedChar, SecondChar};

fn word(first: OneCharGroup, second: SecondChar) -> ClassifiedChar {
    ClassifiedChar::Word { first_char: first, second_char: second }
}

#[test]
fn test_consecutive_consonants() {
    assert_eq!(
        extract_keys("កខ").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::Consonant('ខ')))
    );
}

#[test]
fn test_single_consonant() {
    assert_eq!(extract_keys("ក").unwrap(), word(OneCharGroup::Consonant('ក'), SecondChar::Absent));
}

#[test]
fn test_coeng_is_skipped() {
    assert_eq!(
        extract_keys("ខ្ញុំ").unwrap(),
        word(OneCharGroup::Consonant('ខ'), SecondChar::Group(CharGroup::Consonant('ញ')))
    );
}

#[test]
fn test_trailing_coeng() {
    assert_eq!(extract_keys("ខ្").unwrap(), word(OneCharGroup::Consonant('ខ'), SecondChar::Absent));
}

#[test]
fn test_dependent_vowel_second() {
    assert_eq!(
        extract_keys("កា").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::Vowel('ា')))
    );
}

#[test]
fn test_vowel_combination_second() {
    assert_eq!(
        extract_keys("កុំ").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::VowelCombination("ុំ")))
    );
    assert_eq!(
        extract_keys("កំ").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::VowelCombination("ំ")))
    );
}

#[test]
fn test_extra_consonant_second() {
    assert_eq!(
        extract_keys("កប៉ា").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::ExtraConsonant("ប៉")))
    );
}

#[test]
fn test_first_char_categories() {
    match extract_keys("អា").unwrap() {
        ClassifiedChar::Word { first_char, .. } => assert_eq!(first_char, OneCharGroup::Vowel('អ')),
        other => panic!("unexpected {:?}", other),
    }
    match extract_keys("ឥឡូវ").unwrap() {
        ClassifiedChar::Word { first_char, second_char } => {
            assert_eq!(first_char, OneCharGroup::IndependentVowel('ឥ'));
            assert_eq!(second_char, SecondChar::Group(CharGroup::Consonant('ឡ')));
        }
        other => panic!("unexpected {:?}", other),
    }
    match extract_keys("៍ក").unwrap() {
        ClassifiedChar::Word { first_char, .. } => assert_eq!(first_char, OneCharGroup::Diacritic('៍')),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_non_khmer_characters_are_dropped() {
    assert_eq!(
        extract_keys("(កា)").unwrap(),
        word(OneCharGroup::Consonant('ក'), SecondChar::Group(CharGroup::Vowel('ា')))
    );
}

#[test]
fn test_numbers() {
    assert_eq!(extract_keys("១២៣").unwrap(), ClassifiedChar::Number { v: vec!['១', '២', '៣'] });
}

#[test]
fn test_punctuation() {
    assert_eq!(extract_keys("។").unwrap(), ClassifiedChar::Punctuation { v: vec!['។'] });
}

#[test]
fn test_lunar_date() {
    assert_eq!(extract_keys("᧡ក").unwrap(), ClassifiedChar::LunarDate { v: '᧡' });
}

#[test]
fn test_other_known_whole_word() {
    assert_eq!(extract_keys("។ល។").unwrap(), ClassifiedChar::OtherKnown { v: "។ល។" });
    assert_eq!(extract_keys("ឝ្រី").unwrap(), ClassifiedChar::OtherKnown { v: "ឝ្រី" });
}

#[test]
fn test_no_khmer_chars() {
    assert_eq!(
        extract_keys("abc"),
        Err(ClassifyError::NoKhmerChars { word: "abc".to_string() })
    );
}

#[test]
fn test_unassigned_code_points_are_dropped() {
    assert_eq!(extract_keys("ក\u{17DE}").unwrap(), word(OneCharGroup::Consonant('ក'), SecondChar::Absent));
    assert_eq!(
        extract_keys("\u{17DE}\u{17EF}"),
        Err(ClassifyError::NoKhmerChars { word: "\u{17DE}\u{17EF}".to_string() })
    );
}

#[test]
fn test_only_coeng_after_filtering() {
    // a lone coeng is whitelisted, two are not
    assert_eq!(
        extract_keys("\u{17D2}\u{17D2}"),
        Err(ClassifyError::EmptyAfterCoeng { word: "\u{17D2}\u{17D2}".to_string() })
    );
}

#[test]
fn test_invalid_first_char() {
    // riel sign followed by a consonant
    let err = extract_keys("៛ក").unwrap_err();
    assert_eq!(err, ClassifyError::InvalidFirstChar { word: "៛ក".to_string(), ch: '៛' });
}

#[test]
fn test_unclassifiable_remainder() {
    let err = extract_keys("ក៛").unwrap_err();
    assert_eq!(
        err,
        ClassifyError::UnclassifiableRemainder { word: "ក៛".to_string(), rest: "៛".to_string() }
    );
}

#[test]
fn test_serialized_shape() {
    let keys = extract_keys("កុំ").unwrap();
    let json = serde_json::to_value(&keys).unwrap();
    assert_eq!(json["type"], "word");
    assert_eq!(json["first_char"]["type"], "consonant");
    assert_eq!(json["first_char"]["v"], "ក");
    assert_eq!(json["second_char"]["t"], "group");
    assert_eq!(json["second_char"]["v"]["type"], "vowel_combination");
    assert_eq!(json["second_char"]["v"]["v"], "ុំ");
}
