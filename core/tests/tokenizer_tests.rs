use bibcore::tokenizer::tokenize;

#[test]
fn it_normalizes_and_lowercases() {
    let words = tokenize("ＪＯＵＲＮＡＬ of Advanced Research");
    // Fullwidth letters fold to ASCII under NFKC
    assert_eq!(words, vec!["journal", "of", "advanced", "research"]);
}

#[test]
fn it_keeps_stopwords() {
    let words = tokenize("The Journal of the Society");
    assert_eq!(words.iter().filter(|w| *w == "the").count(), 2);
    assert!(words.contains(&"of".to_string()));
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t -- ").is_empty());
}
