//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Whole-currency amount, e.g. `$1,250`.
pub fn money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

/// Wrap free text (drafts, assistant replies) for the terminal, keeping paragraph breaks.
pub fn wrap_text(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| textwrap::fill(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Features as shown in the room grid: the first two, then `+N`.
pub fn feature_digest(features: &[String]) -> String {
    match features.len() {
        0 => String::new(),
        1 | 2 => features.join(", "),
        n => format!("{} +{}", features[..2].join(", "), n - 2),
    }
}
