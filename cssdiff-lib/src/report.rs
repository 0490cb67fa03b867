use crate::scan::StyleMap;

/// Render the surviving declarations back into nested CSS text.
///
/// Keys come out in first-seen order; keys whose set emptied out are skipped
/// entirely. Consecutive keys sharing a media context share one wrapper
/// block, and selectors inside a wrapper are indented one tab stop deeper.
/// An empty map renders as the empty string.
pub fn render(styles: &StyleMap) -> String {
    let mut output = String::new();
    let mut last_media = "";

    for (key, declarations) in styles {
        if declarations.is_empty() {
            continue;
        }

        let indent = if key.media.is_empty() {
            if !last_media.is_empty() {
                output.push_str("}\n");
            }
            ""
        } else {
            if key.media != last_media {
                if !last_media.is_empty() {
                    output.push_str("}\n");
                }
                output.push_str(&key.media);
                output.push_str("\n{\n");
            }
            "\t"
        };

        output.push_str(indent);
        output.push_str(&key.selector);
        output.push_str("{\n");
        for declaration in declarations {
            output.push_str(indent);
            output.push('\t');
            output.push_str(declaration);
            output.push_str(";\n");
        }
        output.push_str(indent);
        output.push_str("}\n");

        last_media = &key.media;
    }

    if !last_media.is_empty() {
        output.push_str("}\n");
    }

    output
}
