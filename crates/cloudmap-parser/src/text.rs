//! Decoding of Dia `dia:string` values.
//!
//! Dia wraps every string in `#` delimiters and stores multi-line labels with
//! the indentation of the surrounding XML. [`decode_string`] turns such a raw
//! value into the label text a user typed.

/// Decodes a raw `dia:string` value into label text.
///
/// Steps, in order:
/// 1. normalize CRLF line endings;
/// 2. strip one surrounding pair of `#` delimiters;
/// 3. remove indentation common to all non-blank lines;
/// 4. drop leading and trailing blank lines;
/// 5. trim trailing whitespace on each remaining line.
pub fn decode_string(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let text = raw.replace("\r\n", "\n");
    let text = match text.strip_prefix('#').and_then(|t| t.strip_suffix('#')) {
        Some(inner) => inner,
        // A lone "#" opens and closes the delimiters at once.
        None if text == "#" => "",
        None => text.as_str(),
    };

    let lines = dedent(text);
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };

    lines[first..=last]
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits `text` into lines with their common leading indentation removed.
///
/// Only spaces and tabs count as indentation. Whitespace-only lines do not
/// take part in computing the margin and come out empty.
fn dedent(text: &str) -> Vec<&str> {
    fn indent_of(line: &str) -> &str {
        let width = line.len() - line.trim_start_matches([' ', '\t']).len();
        &line[..width]
    }

    let margin = text
        .split('\n')
        .filter(|line| !line.trim_matches([' ', '\t']).is_empty())
        .map(indent_of)
        .reduce(|common, indent| {
            let shared = common
                .bytes()
                .zip(indent.bytes())
                .take_while(|(a, b)| a == b)
                .count();
            &common[..shared]
        })
        .unwrap_or_default();

    text.split('\n')
        .map(|line| {
            if line.trim_matches([' ', '\t']).is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_string_is_empty() {
        assert_eq!(decode_string(None), "");
    }

    #[test]
    fn test_strips_delimiters() {
        assert_eq!(decode_string(Some("#Core Router#")), "Core Router");
        assert_eq!(decode_string(Some("#")), "");
        assert_eq!(decode_string(Some("##")), "");
        assert_eq!(decode_string(Some("plain")), "plain");
    }

    #[test]
    fn test_only_one_pair_of_delimiters_is_removed() {
        assert_eq!(decode_string(Some("##tag##")), "#tag#");
    }

    #[test]
    fn test_multiline_label_is_dedented_and_trimmed() {
        let raw = "#\r\n\r\n    Floor 2   \r\n      East wing\r\n\r\n#";
        assert_eq!(decode_string(Some(raw)), "Floor 2\n  East wing");
    }

    #[test]
    fn test_blank_lines_inside_are_kept() {
        let raw = "#first\n   \nsecond#";
        assert_eq!(decode_string(Some(raw)), "first\n\nsecond");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(decode_string(Some("#  \n\t\n #")), "");
    }

    #[test]
    fn test_mixed_indentation_keeps_common_prefix_only() {
        let raw = "\t  a\n\t b";
        assert_eq!(decode_string(Some(raw)), " a\nb");
    }

    #[test]
    fn test_dedent_ignores_blank_lines_for_margin() {
        let lines = dedent("    ap\n\n      uplink\n  \n");
        assert_eq!(lines, vec!["ap", "", "  uplink", "", ""]);
    }
}
