//! Unit tests for the Khmer cluster tokenizer.
use khmer_index::tokenizer::{detokenize, tokenize, Token, TokenKind};

fn kinds(text: &str) -> Vec<TokenKind> {
    tokenize(text).into_iter().map(|t| t.kind).collect()
}

fn values(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.value).collect()
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_extra_consonant_is_one_token() {
    assert_eq!(tokenize("ហ្គ"), vec![Token::new(TokenKind::ExtraConsonant, "ហ្គ")]);
    assert_eq!(tokenize("ហ្គ៊"), vec![Token::new(TokenKind::ExtraConsonant, "ហ្គ៊")]);
    assert_eq!(tokenize("ប៉"), vec![Token::new(TokenKind::ExtraConsonant, "ប៉")]);
}

#[test]
fn test_vowel_combination_is_one_token() {
    assert_eq!(tokenize("ុះ"), vec![Token::new(TokenKind::VowelCombination, "ុះ")]);
    assert_eq!(tokenize("ាំ"), vec![Token::new(TokenKind::VowelCombination, "ាំ")]);
}

#[test]
fn test_mixed_word() {
    assert_eq!(
        kinds("ហ្គាសុះ"),
        vec![
            TokenKind::ExtraConsonant,
            TokenKind::Vowel,
            TokenKind::Consonant,
            TokenKind::VowelCombination,
        ]
    );
    assert_eq!(values("ហ្គាសុះ"), vec!["ហ្គ", "ា", "ស", "ុះ"]);
}

#[test]
fn test_space_and_unknown() {
    assert_eq!(kinds("ក B"), vec![TokenKind::Consonant, TokenKind::Space, TokenKind::Unknown]);
    assert_eq!(kinds("ក\tខ\n"), vec![
        TokenKind::Consonant,
        TokenKind::Space,
        TokenKind::Consonant,
        TokenKind::Space,
    ]);
}

#[test]
fn test_each_space_is_its_own_token() {
    let tokens = tokenize("ក  ខ");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1], Token::new(TokenKind::Space, " "));
    assert_eq!(tokens[2], Token::new(TokenKind::Space, " "));
}

#[test]
fn test_subscript_cluster() {
    // ខ្ញុំ: coeng stays a separate diacritic token
    assert_eq!(values("ខ្ញុំ"), vec!["ខ", "្", "ញ", "ុំ"]);
    assert_eq!(
        kinds("ខ្ញុំ"),
        vec![
            TokenKind::Consonant,
            TokenKind::Diacritic,
            TokenKind::Consonant,
            TokenKind::VowelCombination,
        ]
    );
}

#[test]
fn test_vowel_wins_over_diacritic() {
    assert_eq!(kinds("ុ"), vec![TokenKind::Vowel]);
    assert_eq!(kinds("អ"), vec![TokenKind::Vowel]);
    assert_eq!(kinds("៍"), vec![TokenKind::Diacritic]);
}

#[test]
fn test_independent_vowel() {
    assert_eq!(kinds("ឥឡូវ"), vec![
        TokenKind::IndependentVowel,
        TokenKind::Consonant,
        TokenKind::Vowel,
        TokenKind::Consonant,
    ]);
}

#[test]
fn test_digits_and_punctuation_are_unknown() {
    assert_eq!(kinds("១២។"), vec![TokenKind::Unknown, TokenKind::Unknown, TokenKind::Unknown]);
}

#[test]
fn test_lossless() {
    let samples = [
        "កងកម្លាំងរក្សាសន្តិសុខនិងសណ្តាប់ធ្នាប់សាធារណៈ",
        "ខ្ញុំស្រឡាញ់ភាសាខ្មែរ ។",
        "Hello ពិភពលោក 123",
        "ហ្វ៊ីល ហ្ស៊ុប ប៉ា\u{200B}ម៉ាក់",
        "",
    ];
    for s in samples {
        assert_eq!(detokenize(&tokenize(s)), s, "roundtrip failed for {:?}", s);
    }
}

#[test]
fn test_longest_extra_consonant_wins() {
    let tokens = tokenize("ហ្វ៊ី");
    assert_eq!(tokens[0], Token::new(TokenKind::ExtraConsonant, "ហ្វ៊"));
    assert_eq!(tokens[1], Token::new(TokenKind::Vowel, "ី"));
}

#[test]
fn test_serialized_kind_names() {
    let json = serde_json::to_string(&Token::new(TokenKind::VowelCombination, "ុះ")).unwrap();
    assert_eq!(json, r#"{"kind":"VOWEL_COMBINATION","value":"ុះ"}"#);
}

#[test]
fn test_whitelisted_words_are_not_special() {
    assert_eq!(tokenize("ឝ"), vec![Token::new(TokenKind::Unknown, "ឝ")]);
    assert_eq!(detokenize(&tokenize("ឝ្រី")), "ឝ្រី");
}
