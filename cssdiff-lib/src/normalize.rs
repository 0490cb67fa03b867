/// Rewrite raw stylesheet text into canonical one-token-per-line form.
///
/// Line endings are unified, tabs deleted, runs of spaces collapsed, and
/// every semicolon-terminated declaration and every structural token
/// (`{`, `}`, `/*`, `*/`) ends up on its own line. Empty lines produce no
/// output. Normalizing already-normalized text is the identity.
pub fn normalize(input: &str) -> String {
    // Collapse whitespace.
    let mut text = input.replace('\r', "\n");
    text = text.replace('\t', "");

    while text.contains("  ") {
        text = text.replace("  ", " ");
    }

    let mut output = String::with_capacity(text.len());

    for line in text.split('\n') {
        if !line.is_empty() {
            push_normalized_line(line, &mut output);
        }
    }

    // A space left over at the start of an emitted line is an artifact of the
    // collapse above; strip it.
    output.replace("\n ", "\n")
}

/// Split one raw line into normalized lines appended to `output`.
///
/// Declarations are broken out first (one per semicolon), then structural
/// tokens, each in turn. A single compacted line such as `.foo{color:red}`
/// comes out as the four lines `.foo`, `{`, `color:red`, `}`.
fn push_normalized_line(line: &str, output: &mut String) {
    let mut current = line.trim();

    // Break individual declarations onto their own lines.
    while let Some(semicolon) = current.find(';') {
        if semicolon == 0 {
            if current.len() > 1 {
                current = &current[1..];
            } else {
                // The line was a lone semicolon.
                return;
            }
        } else if semicolon < current.len() - 1 {
            push_normalized_line(&current[..=semicolon], output);
            // Keep the semicolon at the front of the remainder; the next
            // iteration drops it.
            current = &current[semicolon..];
        } else {
            // Trailing semicolon.
            current = &current[..semicolon];
        }
    }

    // Move each structural token to its own line, in fixed priority order.
    for token in ["{", "}", "/*", "*/"] {
        while let Some(position) = current.find(token) {
            if position > 0 {
                push_normalized_line(&current[..position], output);
            }
            output.push_str(token);
            output.push('\n');
            current = &current[position + token.len()..];
        }
    }

    if !current.is_empty() {
        output.push_str(current);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compacted_rule_splits_into_tokens() {
        assert_eq!(normalize(".foo{color:red}"), ".foo\n{\ncolor:red\n}\n");
    }

    #[test]
    fn test_multiple_declarations_on_one_line() {
        let normalized = normalize(".a { color: red; font-size: 12px; }");
        assert_eq!(
            normalized,
            ".a\n{\ncolor: red\nfont-size: 12px\n}\n"
        );
    }

    #[test]
    fn test_declaration_count_matches_semicolons() {
        // Three semicolon-terminated declarations, each on its own line.
        let normalized = normalize("a{x:1;y:2;z:3;}");
        let lines: Vec<&str> = normalized.lines().collect();
        assert_eq!(lines, vec!["a", "{", "x:1", "y:2", "z:3", "}"]);
    }

    #[test]
    fn test_tabs_deleted_and_spaces_collapsed() {
        assert_eq!(normalize("a\t{   color:\tred;   }"), "a\n{\ncolor:red\n}\n");
    }

    #[test]
    fn test_carriage_returns_become_newlines() {
        assert_eq!(normalize(".a {\r\ncolor: red;\r\n}"), ".a\n{\ncolor: red\n}\n");
    }

    #[test]
    fn test_empty_lines_skipped() {
        assert_eq!(normalize("\n\n.a\n\n{\n\n}\n\n"), ".a\n{\n}\n");
    }

    #[test]
    fn test_lone_semicolon_dropped() {
        assert_eq!(normalize(";"), "");
        assert_eq!(normalize(";;color:red;"), "color:red\n");
    }

    #[test]
    fn test_comment_delimiters_isolated() {
        assert_eq!(
            normalize("/* a comment */ .a{}"),
            "/*\na comment\n*/\n.a\n{\n}\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let raw = "@media screen {\n  .a { color: red; font-size: 12px; }\n}\n/* note */\n.b{margin:0}";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_internal_single_spaces_preserved() {
        // Only runs of two or more spaces collapse; a single space survives.
        assert_eq!(normalize("a{font-size: 12px;}"), "a\n{\nfont-size: 12px\n}\n");
    }
}
