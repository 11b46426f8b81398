use bibcore::tokenizer::tokenize;
use bibcore::{Report, Thresholds, Tier};
use colored::{ColoredString, Colorize};
use std::collections::HashSet;
use std::io::{self, Write};

const FIELD_WIDTH: usize = 15;
const NAME_WIDTH: usize = 100;

fn color_score(score: f64, thresholds: &Thresholds) -> ColoredString {
    let text = format!("{score:.2}");
    match thresholds.tier(score) {
        Some(Tier::High) | None => text.black().on_red(),
        Some(Tier::Medium) => text.bright_red().bold(),
        Some(Tier::Low) => text.yellow(),
    }
}

/// Highlight the words of `name` that also occur in `value`.
fn highlight_shared(value: &str, name: &str) -> String {
    let shared: HashSet<String> = tokenize(value).into_iter().collect();
    let words: Vec<String> = name
        .split_whitespace()
        .map(|w| match tokenize(w).first() {
            Some(t) if shared.contains(t) => w.bright_cyan().to_string(),
            _ => w.to_string(),
        })
        .collect();
    let plain_len = name.split_whitespace().map(|w| w.chars().count() + 1).sum::<usize>().saturating_sub(1);
    format!("{}{}", words.join(" "), " ".repeat(NAME_WIDTH.saturating_sub(plain_len)))
}

pub fn print_report<W: Write>(out: &mut W, report: &Report, thresholds: &Thresholds) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "{}", "No similarities to known predatory journals or publishers found.".green().bold())?;
        return Ok(());
    }
    for (key, fields) in report.iter() {
        writeln!(out, "Similarities found in '{}':", key.black().on_white())?;
        for (field, field_report) in fields {
            writeln!(out, "   {:>width$} : {}", field, field_report.value.white().bold(), width = FIELD_WIDTH)?;
            for m in field_report.ranked() {
                writeln!(
                    out,
                    "   {}{} | {} >> URL:{}",
                    " ".repeat(FIELD_WIDTH - 4),
                    color_score(m.score, thresholds),
                    highlight_shared(&field_report.value, &m.name),
                    m.url
                )?;
            }
        }
    }
    Ok(())
}
