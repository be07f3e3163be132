use std::path::PathBuf;

use console::Style;

/// How output should be rendered for the current terminal.
pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

/// Everything the settings summary needs to know about one run.
pub struct PhraseInfo {
    pub wordlist: PathBuf,
    pub pool_size: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub word_count: usize,
    pub seed: Option<u64>,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn tree_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn describe_source(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => format!("seeded ({seed}), reproducible"),
        None => "system random".to_string(),
    }
}

fn describe_lengths(min_length: usize, max_length: usize) -> String {
    if min_length == max_length {
        format!(
            "exactly {} {}",
            min_length,
            if min_length == 1 { "letter" } else { "letters" }
        )
    } else {
        format!("{min_length}-{max_length} letters")
    }
}

pub fn display_phrase(phrase: &str, info: &PhraseInfo, options: &DisplayOptions) {
    if options.quiet {
        println!("{phrase}");
        return;
    }

    let phrase_style = if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    };

    let source_style = if options.color_support {
        if info.seed.is_some() {
            Style::new().yellow()
        } else {
            Style::new().green()
        }
    } else {
        Style::new()
    };

    let (tee, elbow) = tree_symbols(options.unicode_support);

    println!("{}\n", phrase_style.apply_to(phrase));

    println!("Settings:");
    println!(
        "  {} Wordlist   {} ({} {})",
        tee,
        info.wordlist.display(),
        info.pool_size,
        if info.pool_size == 1 { "word" } else { "words" }
    );
    println!(
        "  {} Length     {}",
        tee,
        describe_lengths(info.min_length, info.max_length)
    );
    println!(
        "  {} Source     {}",
        tee,
        source_style.apply_to(describe_source(info.seed))
    );
    println!(
        "  {} Phrase     {} {}",
        elbow,
        info.word_count,
        if info.word_count == 1 { "word" } else { "words" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_symbols_unicode() {
        let (tee, elbow) = tree_symbols(true);
        assert_eq!(tee, "├─");
        assert_eq!(elbow, "└─");
    }

    #[test]
    fn tree_symbols_ascii() {
        let (tee, elbow) = tree_symbols(false);
        assert_eq!(tee, "|-");
        assert_eq!(elbow, "`-");
    }

    #[test]
    fn source_description_names_the_seed() {
        assert_eq!(describe_source(None), "system random");
        assert_eq!(describe_source(Some(42)), "seeded (42), reproducible");
    }

    #[test]
    fn length_description_collapses_equal_bounds() {
        assert_eq!(describe_lengths(3, 9), "3-9 letters");
        assert_eq!(describe_lengths(4, 4), "exactly 4 letters");
        assert_eq!(describe_lengths(1, 1), "exactly 1 letter");
    }
}
