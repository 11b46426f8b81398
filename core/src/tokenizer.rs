use unicode_normalization::UnicodeNormalization;

/// Tokenize text into lowercase terms using NFKC normalization and whitespace splitting.
/// Punctuation clinging to either end of a term is trimmed; terms left empty are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("International Journal of Foo, (IJF)");
        assert_eq!(t, vec!["international", "journal", "of", "foo", "ijf"]);
    }

    #[test]
    fn inner_punctuation_is_kept() {
        assert_eq!(tokenize("Bio-Medical & Life"), vec!["bio-medical", "life"]);
    }
}
