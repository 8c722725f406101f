// Affix conditions: literal characters, '.', and bracket classes

use crate::DictError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CondPart {
    Any,
    Char(char),
    Class { chars: Vec<char>, negated: bool },
}

impl CondPart {
    fn matches(&self, c: char) -> bool {
        match self {
            CondPart::Any => true,
            CondPart::Char(expected) => *expected == c,
            CondPart::Class { chars, negated } => chars.contains(&c) != *negated,
        }
    }
}

/// A parsed affix condition.
///
/// Suffix conditions are matched against the end of the stem, prefix
/// conditions against its start. Each part consumes exactly one character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    parts: Vec<CondPart>,
}

impl Condition {
    /// Parse a condition string such as `[^aeiou]y`.
    ///
    /// A lone `.` matches any stem and parses to an empty condition.
    pub fn parse(raw: &str) -> Result<Self, DictError> {
        if raw == "." {
            return Ok(Self::default());
        }
        let mut parts = Vec::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '.' => parts.push(CondPart::Any),
                '[' => {
                    let mut class = Vec::new();
                    let mut negated = false;
                    let mut closed = false;
                    for (i, c) in chars.by_ref().enumerate() {
                        match c {
                            '^' if i == 0 => negated = true,
                            ']' => {
                                closed = true;
                                break;
                            }
                            other => class.push(other),
                        }
                    }
                    if !closed || class.is_empty() {
                        return Err(DictError::InvalidCondition(raw.to_string()));
                    }
                    parts.push(CondPart::Class {
                        chars: class,
                        negated,
                    });
                }
                ']' => return Err(DictError::InvalidCondition(raw.to_string())),
                other => parts.push(CondPart::Char(other)),
            }
        }
        Ok(Self { parts })
    }

    /// Number of characters the condition inspects.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the condition accepts every stem.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Match against the last characters of `word`.
    pub fn matches_end(&self, word: &[char]) -> bool {
        if word.len() < self.parts.len() {
            return false;
        }
        let tail = &word[word.len() - self.parts.len()..];
        self.parts.iter().zip(tail).all(|(p, &c)| p.matches(c))
    }

    /// Match against the first characters of `word`.
    pub fn matches_start(&self, word: &[char]) -> bool {
        if word.len() < self.parts.len() {
            return false;
        }
        self.parts.iter().zip(word).all(|(p, &c)| p.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn dot_matches_everything() {
        let cond = Condition::parse(".").unwrap();
        assert!(cond.is_empty());
        assert!(cond.matches_end(&chars("x")));
        assert!(cond.matches_start(&chars("")));
    }

    #[test]
    fn negated_class_then_literal() {
        let cond = Condition::parse("[^aeiou]y").unwrap();
        assert_eq!(cond.len(), 2);
        assert!(cond.matches_end(&chars("try")));
        assert!(!cond.matches_end(&chars("play")));
        assert!(!cond.matches_end(&chars("y")));
    }

    #[test]
    fn literal_prefix_condition() {
        let cond = Condition::parse("e").unwrap();
        assert!(cond.matches_start(&chars("enable")));
        assert!(!cond.matches_start(&chars("able")));
    }

    #[test]
    fn class_with_several_members() {
        let cond = Condition::parse("[sxz]").unwrap();
        assert!(cond.matches_end(&chars("box")));
        assert!(!cond.matches_end(&chars("dog")));
    }

    #[test]
    fn malformed_conditions() {
        assert!(Condition::parse("[ab").is_err());
        assert!(Condition::parse("[]").is_err());
        assert!(Condition::parse("a]").is_err());
    }
}
