//! Text cleanup and measurement helpers for the PDF renderer.
//!
//! The builtin PDF fonts only cover a latin-1 (WinAnsi) repertoire, so model
//! output is normalized down to single-byte-safe text before layout.

pub const PT_TO_MM: f32 = 0.352_778;

/// Remove the markdown markers the models keep sneaking in despite the
/// prompts: leading heading hashes, bold/italic asterisks and underscores.
/// Idempotent on already-clean text.
pub fn strip_markdown(line: &str) -> String {
    let mut text = line;
    for prefix in ["###", "##", "#"] {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest.trim_start();
            break;
        }
    }

    text.replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .replace('_', "")
        .trim()
        .to_string()
}

/// Map common Unicode punctuation to its nearest latin-1 equivalent, then
/// drop anything still outside the single-byte range.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{2013}' | '\u{2014}' => Some('-'),
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201c}' | '\u{201d}' => Some('"'),
            '\u{2022}' => Some('-'),
            '\u{00a0}' => Some(' '),
            c if (c as u32) < 256 => Some(c),
            _ => None,
        })
        .collect()
}

/// Approximate glyph advance for the builtin Helvetica face, in em units.
/// Close enough for wrapping and background sizing; exact metrics would need
/// an embedded font.
fn char_width_em(c: char) -> f32 {
    match c {
        'i' | 'l' | 'j' | 't' | 'f' | 'I' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | '(' | ')'
        | '[' | ']' => 0.30,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        ' ' => 0.28,
        c if c.is_uppercase() => 0.67,
        _ => 0.50,
    }
}

pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    text.chars().map(char_width_em).sum::<f32>() * font_size_pt * PT_TO_MM
}

/// Greedy word wrap at the given width. Words longer than a full line are
/// hard-split so the result never overflows the box that gets drawn behind
/// it. Always returns at least one line.
pub fn wrap_text(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = if text_width_mm(word, font_size_pt) > max_width_mm {
            // hard-split oversized tokens (long URLs, unbroken code)
            let mut rest = word;
            while text_width_mm(rest, font_size_pt) > max_width_mm {
                let mut split_at = rest.len();
                while split_at > 1 && text_width_mm(&rest[..split_at], font_size_pt) > max_width_mm
                {
                    split_at -= 1;
                    while !rest.is_char_boundary(split_at) {
                        split_at -= 1;
                    }
                }
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(rest[..split_at].to_string());
                rest = &rest[split_at..];
            }
            rest
        } else {
            word
        };

        if word.is_empty() {
            continue;
        }

        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width_mm(&candidate, font_size_pt) <= max_width_mm {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
