//! Script parsing.

use ledger_bard_core::ScriptBlock;

const SCENE_PREFIX: &str = "SCENE";
const IMAGE_PROMPT_PREFIX: &str = "IMAGE_PROMPT";

/// Split generator output into scene and image prompt blocks.
///
/// Each line is trimmed and stripped of `**` and `##` markup. Lines starting
/// with `SCENE` or `IMAGE_PROMPT` (any case) become blocks. The label is the
/// text before the first colon and the body the text after it. A line without
/// a colon is used whole for both. Anything else is dropped, and no
/// recognizable lines yields an empty vector.
///
/// The body is cut at the first colon, so `SCENE 1: 10:45 PM` reads as
/// "10:45 PM" but `SCENE 1 (10:45): Rain` reads as "45): Rain".
///
/// ```
/// use ledger_bard_core::ScriptBlock;
/// use ledger_bard_story::parse;
///
/// let blocks = parse("SCENE 1: Hello world\nIMAGE_PROMPT 1: a castle");
/// assert_eq!(
///     blocks,
///     vec![
///         ScriptBlock::scene("SCENE 1", "Hello world"),
///         ScriptBlock::image_prompt("IMAGE_PROMPT 1", "a castle"),
///     ]
/// );
/// ```
pub fn parse(raw: &str) -> Vec<ScriptBlock> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ScriptBlock> {
    let clean = line.trim().replace("**", "").replace("##", "");
    let clean = clean.trim();
    if clean.is_empty() {
        return None;
    }

    let (label, body) = match clean.split_once(':') {
        Some((label, body)) => (label.trim(), body.trim()),
        None => (clean, clean),
    };

    if starts_with_ignore_case(clean, SCENE_PREFIX) {
        Some(ScriptBlock::scene(label, body))
    } else if starts_with_ignore_case(clean, IMAGE_PROMPT_PREFIX) {
        Some(ScriptBlock::image_prompt(label, body))
    } else {
        None
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check_handles_multibyte_lines() {
        assert!(!starts_with_ignore_case("é", SCENE_PREFIX));
        assert!(!starts_with_ignore_case("ÉÉÉÉÉÉ", SCENE_PREFIX));
        assert!(starts_with_ignore_case("scene 4", SCENE_PREFIX));
    }

    #[test]
    fn markup_inside_text_is_removed() {
        assert_eq!(
            parse_line("## SCENE 2: The **deal** closes"),
            Some(ScriptBlock::scene("SCENE 2", "The deal closes"))
        );
    }

    #[test]
    fn colon_with_empty_body() {
        assert_eq!(
            parse_line("SCENE 1 (THE ATMOSPHERE):"),
            Some(ScriptBlock::scene("SCENE 1 (THE ATMOSPHERE)", ""))
        );
    }
}
