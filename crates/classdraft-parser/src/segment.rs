//! Splitting recognized text into candidate entity blocks.
//!
//! Class boxes in a scanned diagram usually come out of recognition as
//! paragraphs separated by blank lines, or by the horizontal rules that
//! divided the box compartments.

/// Minimum length of a line of `-` or `=` that ends a block.
const MIN_SEPARATOR_LEN: usize = 3;

/// Split `text` into trimmed, non-empty blocks.
///
/// A block ends at two or more consecutive line breaks, or at a line made
/// only of three or more `-` or `=` characters that is followed by a line
/// break. Separator lines are not part of either neighbouring block.
pub fn segment(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        // Only lines terminated by a break can end a block
        let Some(content) = line.strip_suffix('\n') else {
            continue;
        };
        let content = content.strip_suffix('\r').unwrap_or(content);

        if content.is_empty() || is_separator_line(content) {
            push_block(&mut blocks, &text[block_start..line_start]);
            block_start = offset;
        }
    }
    push_block(&mut blocks, &text[block_start..]);

    blocks
}

fn is_separator_line(line: &str) -> bool {
    line.len() >= MIN_SEPARATOR_LEN
        && (line.bytes().all(|b| b == b'-') || line.bytes().all(|b| b == b'='))
}

fn push_block<'a>(blocks: &mut Vec<&'a str>, block: &'a str) {
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_split_blocks() {
        let text = "Customer\nid: uuid\n\nOrder\nid: uuid\n\n\n\nItem";
        assert_eq!(
            segment(text),
            ["Customer\nid: uuid", "Order\nid: uuid", "Item"]
        );
    }

    #[test]
    fn test_separator_lines_split_blocks() {
        let text = "Customer\n---\nid: uuid\n=====\nOrder";
        assert_eq!(segment(text), ["Customer", "id: uuid", "Order"]);
    }

    #[test]
    fn test_short_or_mixed_rules_do_not_split() {
        let text = "Customer\n--\nid\n-=-\nname";
        assert_eq!(segment(text), [text]);
    }

    #[test]
    fn test_trailing_separator_without_break_stays() {
        assert_eq!(segment("Customer\n---"), ["Customer\n---"]);
    }

    #[test]
    fn test_blocks_are_trimmed_and_empty_dropped() {
        assert_eq!(segment("\n\n  A  \n\n \n\n"), ["A"]);
        assert!(segment("").is_empty());
        assert!(segment("\n\n---\n").is_empty());
    }

    #[test]
    fn test_windows_line_breaks() {
        assert_eq!(segment("A\r\n\r\nB"), ["A", "B"]);
    }
}
