// Affix flag encodings: short (one char), long (two chars), num, UTF-8

use crate::DictError;

/// A parsed affix flag.
pub type Flag = u32;

/// How flag strings are encoded in both the affix file and the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagMode {
    /// One character per flag (the Hunspell default).
    #[default]
    Short,
    /// Two characters per flag.
    Long,
    /// Comma-separated decimal numbers.
    Num,
    /// One Unicode scalar per flag.
    Utf8,
}

impl FlagMode {
    /// Parse the argument of a `FLAG` directive.
    pub fn parse(value: &str) -> Result<Self, DictError> {
        match value {
            "short" | "char" => Ok(FlagMode::Short),
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Num),
            "UTF-8" | "utf-8" => Ok(FlagMode::Utf8),
            other => Err(DictError::InvalidFlagType(other.to_string())),
        }
    }

    /// Decode a flag string into its flags. `line` is used in error messages.
    pub fn decode(&self, raw: &str, line: usize) -> Result<Vec<Flag>, DictError> {
        let invalid = || DictError::InvalidFlag {
            line,
            flag: raw.to_string(),
        };
        let mut flags = match self {
            FlagMode::Short | FlagMode::Utf8 => raw.chars().map(|c| c as Flag).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = raw.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(invalid());
                }
                chars
                    .chunks(2)
                    .map(|pair| ((pair[0] as Flag) << 16) | pair[1] as Flag)
                    .collect()
            }
            FlagMode::Num => raw
                .split(',')
                .filter(|part| !part.is_empty())
                .map(|part| part.trim().parse::<Flag>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?,
        };
        flags.sort_unstable();
        flags.dedup();
        Ok(flags)
    }

    /// Decode a string that must hold exactly one flag.
    pub fn decode_one(&self, raw: &str, line: usize) -> Result<Flag, DictError> {
        let flags = self.decode(raw, line)?;
        match flags.as_slice() {
            [flag] => Ok(*flag),
            _ => Err(DictError::InvalidFlag {
                line,
                flag: raw.to_string(),
            }),
        }
    }
}

/// Check a sorted flag list for membership.
pub fn has_flag(flags: &[Flag], flag: Flag) -> bool {
    flags.binary_search(&flag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_modes() {
        assert_eq!(FlagMode::parse("long").unwrap(), FlagMode::Long);
        assert_eq!(FlagMode::parse("num").unwrap(), FlagMode::Num);
        assert_eq!(FlagMode::parse("UTF-8").unwrap(), FlagMode::Utf8);
        assert!(matches!(
            FlagMode::parse("wide"),
            Err(DictError::InvalidFlagType(_))
        ));
    }

    #[test]
    fn short_flags_are_single_chars() {
        let flags = FlagMode::Short.decode("SDG", 1).unwrap();
        assert_eq!(flags, vec!['D' as Flag, 'G' as Flag, 'S' as Flag]);
        assert!(has_flag(&flags, 'G' as Flag));
        assert!(!has_flag(&flags, 'X' as Flag));
    }

    #[test]
    fn long_flags_pair_up() {
        let flags = FlagMode::Long.decode("AaBb", 1).unwrap();
        assert_eq!(flags.len(), 2);
        assert!(FlagMode::Long.decode("AaB", 7).is_err());
    }

    #[test]
    fn numeric_flags() {
        let flags = FlagMode::Num.decode("101,7,101", 1).unwrap();
        assert_eq!(flags, vec![7, 101]);
        match FlagMode::Num.decode("1,x", 3) {
            Err(DictError::InvalidFlag { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected InvalidFlag, got {other:?}"),
        }
    }

    #[test]
    fn decode_one_rejects_multiple() {
        assert_eq!(FlagMode::Short.decode_one("!", 1).unwrap(), '!' as Flag);
        assert!(FlagMode::Short.decode_one("!?", 1).is_err());
    }
}
