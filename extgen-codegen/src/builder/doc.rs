//! Documentation comment formatting.

/// Neutralize comment terminators so text cannot close the comment early.
fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Format `text` as a documentation comment, indented by `padding` spaces.
///
/// - empty text produces no lines
/// - single-line text produces `/** text */`
/// - multi-line text produces `/**`, one ` * line` per source line, then ` */`
///
/// ```
/// use extgen_codegen::builder::comment_block;
///
/// assert_eq!(comment_block("Run", 0), ["/** Run */"]);
/// assert_eq!(
///     comment_block("Run\n@value `demo.run`", 2),
///     ["  /**", "   * Run", "   * @value `demo.run`", "   */"]
/// );
/// ```
pub fn comment_block(text: &str, padding: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let padding = " ".repeat(padding);
    let text = escape_comment(text);
    if !text.contains('\n') {
        return vec![format!("{padding}/** {text} */")];
    }

    let mut lines = Vec::with_capacity(text.lines().count() + 2);
    lines.push(format!("{padding}/**"));
    lines.extend(text.split('\n').map(|line| format!("{padding} * {line}")));
    lines.push(format!("{padding} */"));
    lines
}
