// Word list (.dic) parsing

use crate::DictError;
use crate::flags::{Flag, FlagMode};

/// A stem from the word list with its affix flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicEntry {
    pub word: String,
    pub flags: Vec<Flag>,
}

/// Parse word list text.
///
/// The first line holds an approximate entry count and is skipped when
/// numeric. Morphological fields after the first whitespace are ignored.
pub fn parse_dic(text: &str, mode: FlagMode) -> Result<Vec<DicEntry>, DictError> {
    let mut lines = text.lines().enumerate().peekable();
    if let Some((_, first)) = lines.peek() {
        if first.trim().parse::<usize>().is_ok() {
            lines.next();
        }
    }

    let mut entries = Vec::new();
    for (idx, raw_line) in lines {
        // Lines starting with a tab are comments in Hunspell word lists.
        if raw_line.starts_with('\t') {
            continue;
        }
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let field = line.split_whitespace().next().unwrap_or(line);
        let (word, flags) = split_flags(field);
        if word.is_empty() {
            continue;
        }
        let flags = match flags {
            Some(raw) => mode.decode(raw, idx + 1)?,
            None => Vec::new(),
        };
        entries.push(DicEntry { word, flags });
    }

    if entries.is_empty() {
        return Err(DictError::EmptyWordList);
    }
    Ok(entries)
}

/// Split `word/FLAGS` at the first unescaped slash, unescaping `\/`.
fn split_flags(field: &str) -> (String, Option<&str>) {
    let mut word = String::with_capacity(field.len());
    let mut escaped = false;
    for (i, c) in field.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '/' if !escaped => return (word, Some(&field[i + 1..])),
            other => {
                if escaped && other != '/' {
                    word.push('\\');
                }
                word.push(other);
                escaped = false;
            }
        }
    }
    (word, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_entries_with_flags() {
        let entries = parse_dic("3\nhello\nbelieve/DSG\nParis/M po:noun\n", FlagMode::Short).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].word, "hello");
        assert!(entries[0].flags.is_empty());
        assert_eq!(entries[1].word, "believe");
        assert_eq!(entries[1].flags.len(), 3);
        assert_eq!(entries[2].word, "Paris");
        assert_eq!(entries[2].flags, vec!['M' as Flag]);
    }

    #[test]
    fn count_line_is_optional() {
        let entries = parse_dic("alpha\nbeta\n", FlagMode::Short).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn escaped_slash_stays_in_word() {
        let entries = parse_dic("1\nand\\/or/X\n", FlagMode::Short).unwrap();
        assert_eq!(entries[0].word, "and/or");
        assert_eq!(entries[0].flags, vec!['X' as Flag]);
    }

    #[test]
    fn tab_lines_are_comments() {
        let entries = parse_dic("2\nword\n\tcomment\n", FlagMode::Short).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(
            parse_dic("0\n", FlagMode::Short),
            Err(DictError::EmptyWordList)
        ));
    }
}
