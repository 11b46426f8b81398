use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `\cmd{text}` -> `text`; the command name may not contain whitespace.
    static ref LATEX_COMMAND: Regex = Regex::new(r"\\[^\s{}]*\{(.*?)\}").expect("valid regex");
}

/// Strip LaTeX formatting commands from a bibliography field value, keeping their
/// literal text, and unescape `\&`. Case is preserved; scoring folds case itself.
/// Nested commands are peeled one layer per pass until none are left.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let stripped = LATEX_COMMAND.replace_all(&text, "$1").into_owned();
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text.replace(r"\&", "&")
}
