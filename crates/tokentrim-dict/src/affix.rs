// Affix file (.aff) parsing: encoding, flags, suggestion hints, PFX/SFX rules

use hashbrown::HashMap;

use crate::DictError;
use crate::condition::Condition;
use crate::flags::{Flag, FlagMode};

/// Whether an affix class attaches to the start or the end of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixKind {
    fn directive(self) -> &'static str {
        match self {
            AffixKind::Prefix => "PFX",
            AffixKind::Suffix => "SFX",
        }
    }
}

/// One `PFX`/`SFX` entry line: strip, add, condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    /// Characters removed from the stem before adding (`0` = none).
    pub strip: String,
    /// Characters added to the stem (`0` = none).
    pub add: String,
    /// Flags attached to the derived form (twofold affixes).
    pub continuation: Vec<Flag>,
    /// Condition the stem must satisfy.
    pub condition: Condition,
}

impl AffixRule {
    /// Apply the rule to `stem`, returning the derived form if the
    /// condition and strip string match.
    pub fn apply(&self, kind: AffixKind, stem: &str) -> Option<String> {
        let chars: Vec<char> = stem.chars().collect();
        match kind {
            AffixKind::Suffix => {
                if !self.condition.matches_end(&chars) {
                    return None;
                }
                let base = stem.strip_suffix(self.strip.as_str())?;
                if base.is_empty() && self.add.is_empty() {
                    return None;
                }
                Some(format!("{base}{}", self.add))
            }
            AffixKind::Prefix => {
                if !self.condition.matches_start(&chars) {
                    return None;
                }
                let base = stem.strip_prefix(self.strip.as_str())?;
                if base.is_empty() && self.add.is_empty() {
                    return None;
                }
                Some(format!("{}{base}", self.add))
            }
        }
    }
}

/// A named group of affix rules sharing one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixClass {
    pub kind: AffixKind,
    pub flag: Flag,
    /// Whether forms derived by this class combine with the other kind.
    pub cross_product: bool,
    pub rules: Vec<AffixRule>,
}

/// Character set declared by `SET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

impl Encoding {
    /// Parse the argument of a `SET` directive.
    pub fn parse(value: &str) -> Result<Self, DictError> {
        match value.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(Encoding::Utf8),
            "ISO8859-1" | "ISO-8859-1" | "LATIN1" => Ok(Encoding::Latin1),
            _ => Err(DictError::UnsupportedEncoding(value.to_string())),
        }
    }

    /// Find the `SET` directive in raw affix bytes without decoding them.
    pub fn sniff(aff: &[u8]) -> Result<Self, DictError> {
        for line in aff.split(|&b| b == b'\n') {
            let line = String::from_utf8_lossy(line);
            let mut tokens = line.split_whitespace();
            if tokens.next() == Some("SET") {
                if let Some(value) = tokens.next() {
                    return Encoding::parse(value);
                }
            }
        }
        Ok(Encoding::default())
    }

    /// Decode raw bytes with this encoding.
    pub fn decode(self, bytes: &[u8], file: &'static str) -> Result<String, DictError> {
        match self {
            Encoding::Utf8 => {
                let text =
                    std::str::from_utf8(bytes).map_err(|_| DictError::InvalidUtf8 { file })?;
                Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text).to_string())
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// The parsed contents of an affix file.
#[derive(Debug, Clone, Default)]
pub struct AffixFile {
    pub encoding: Encoding,
    pub flag_mode: FlagMode,
    /// Characters to try in insertion/replacement edits, most frequent first.
    pub try_chars: Vec<char>,
    /// Keyboard rows (`KEY qwertyuiop|asdfghjkl`), neighbours within a row.
    pub keyboard: Vec<Vec<char>>,
    /// Common misspelling substitutions (`REP from to`), `_` is a space.
    pub replacements: Vec<(String, String)>,
    pub prefixes: Vec<AffixClass>,
    pub suffixes: Vec<AffixClass>,
    pub no_suggest: Option<Flag>,
    pub forbidden: Option<Flag>,
    pub need_affix: Option<Flag>,
    pub keep_case: Option<Flag>,
}

impl AffixFile {
    /// Parse affix file text.
    pub fn parse(text: &str) -> Result<Self, DictError> {
        let mut aff = AffixFile::default();
        // (kind, flag) -> (index into prefixes/suffixes, entries still expected)
        let mut open: HashMap<(AffixKind, Flag), (usize, usize)> = HashMap::new();
        let mut rep_expected: Option<usize> = None;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let malformed = || DictError::MalformedDirective {
                line: line_no,
                directive: tokens[0].to_string(),
            };

            match tokens[0] {
                "SET" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.encoding = Encoding::parse(value)?;
                }
                "FLAG" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.flag_mode = FlagMode::parse(value)?;
                }
                "TRY" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.try_chars = value.chars().collect();
                }
                "KEY" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.keyboard = value
                        .split('|')
                        .filter(|row| !row.is_empty())
                        .map(|row| row.chars().collect())
                        .collect();
                }
                "REP" => {
                    if rep_expected.is_none() && tokens.len() == 2 {
                        let count = tokens[1].parse::<usize>().map_err(|_| malformed())?;
                        rep_expected = Some(count);
                        continue;
                    }
                    let (Some(from), Some(to)) = (tokens.get(1), tokens.get(2)) else {
                        return Err(malformed());
                    };
                    aff.replacements
                        .push((from.replace('_', " "), to.replace('_', " ")));
                }
                "NOSUGGEST" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.no_suggest = Some(aff.flag_mode.decode_one(value, line_no)?);
                }
                "FORBIDDENWORD" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.forbidden = Some(aff.flag_mode.decode_one(value, line_no)?);
                }
                "NEEDAFFIX" | "PSEUDOROOT" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.need_affix = Some(aff.flag_mode.decode_one(value, line_no)?);
                }
                "KEEPCASE" => {
                    let value = tokens.get(1).ok_or_else(malformed)?;
                    aff.keep_case = Some(aff.flag_mode.decode_one(value, line_no)?);
                }
                "PFX" | "SFX" => {
                    let kind = if tokens[0] == "PFX" {
                        AffixKind::Prefix
                    } else {
                        AffixKind::Suffix
                    };
                    let flag_raw = tokens.get(1).ok_or_else(malformed)?;
                    let flag = aff.flag_mode.decode_one(flag_raw, line_no)?;
                    aff.parse_affix_line(kind, flag, &tokens, line_no, &mut open)?;
                }
                other => {
                    tracing::debug!(directive = other, line = line_no, "ignoring affix directive");
                }
            }
        }

        tracing::debug!(
            prefixes = aff.prefixes.len(),
            suffixes = aff.suffixes.len(),
            replacements = aff.replacements.len(),
            "parsed affix file"
        );
        Ok(aff)
    }

    fn parse_affix_line(
        &mut self,
        kind: AffixKind,
        flag: Flag,
        tokens: &[&str],
        line_no: usize,
        open: &mut HashMap<(AffixKind, Flag), (usize, usize)>,
    ) -> Result<(), DictError> {
        let malformed = || DictError::MalformedDirective {
            line: line_no,
            directive: kind.directive().to_string(),
        };

        if let Some((index, remaining)) = open.get_mut(&(kind, flag)) {
            if *remaining > 0 {
                *remaining -= 1;
                let rule = self.parse_rule(kind, tokens, line_no)?;
                let classes = match kind {
                    AffixKind::Prefix => &mut self.prefixes,
                    AffixKind::Suffix => &mut self.suffixes,
                };
                classes[*index].rules.push(rule);
                return Ok(());
            }
        }

        // Header: PFX flag cross_product count
        let cross_product = match tokens.get(2) {
            Some(&"Y") => true,
            Some(&"N") => false,
            _ => return Err(malformed()),
        };
        let count = tokens
            .get(3)
            .and_then(|c| c.parse::<usize>().ok())
            .ok_or_else(malformed)?;
        let classes = match kind {
            AffixKind::Prefix => &mut self.prefixes,
            AffixKind::Suffix => &mut self.suffixes,
        };
        classes.push(AffixClass {
            kind,
            flag,
            cross_product,
            rules: Vec::with_capacity(count),
        });
        open.insert((kind, flag), (classes.len() - 1, count));
        Ok(())
    }

    fn parse_rule(
        &self,
        kind: AffixKind,
        tokens: &[&str],
        line_no: usize,
    ) -> Result<AffixRule, DictError> {
        let (Some(strip), Some(add)) = (tokens.get(2), tokens.get(3)) else {
            return Err(DictError::MalformedDirective {
                line: line_no,
                directive: kind.directive().to_string(),
            });
        };
        let strip = if *strip == "0" { "" } else { strip };
        let (add, continuation) = match add.split_once('/') {
            Some((add, flags)) => (add, self.flag_mode.decode(flags, line_no)?),
            None => (*add, Vec::new()),
        };
        let add = if add == "0" { "" } else { add };
        let condition = Condition::parse(tokens.get(4).copied().unwrap_or("."))?;
        Ok(AffixRule {
            strip: strip.to_string(),
            add: add.to_string(),
            continuation,
            condition,
        })
    }

    /// Affix classes of `kind` whose flag is in `flags`.
    pub fn classes_for<'a>(
        &'a self,
        kind: AffixKind,
        flags: &'a [Flag],
    ) -> impl Iterator<Item = &'a AffixClass> + 'a {
        let classes = match kind {
            AffixKind::Prefix => &self.prefixes,
            AffixKind::Suffix => &self.suffixes,
        };
        classes
            .iter()
            .filter(move |class| crate::flags::has_flag(flags, class.flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AFF: &str = "\
SET UTF-8
TRY esianrtolcdugmphbyfvkwz
KEY qwertyuiop|asdfghjkl|zxcvbnm
NOSUGGEST !
WORDCHARS 0123456789'

REP 2
REP f ph
REP alot a_lot

PFX U Y 1
PFX U 0 un .

SFX S Y 3
SFX S y ies [^aeiou]y
SFX S 0 s [aeiou]y
SFX S 0 s [^y]
";

    #[test]
    fn parses_hints() {
        let aff = AffixFile::parse(AFF).unwrap();
        assert_eq!(aff.encoding, Encoding::Utf8);
        assert_eq!(aff.try_chars.first(), Some(&'e'));
        assert_eq!(aff.keyboard.len(), 3);
        assert_eq!(
            aff.replacements,
            vec![
                ("f".to_string(), "ph".to_string()),
                ("alot".to_string(), "a lot".to_string()),
            ]
        );
        assert_eq!(aff.no_suggest, Some('!' as Flag));
    }

    #[test]
    fn parses_affix_classes() {
        let aff = AffixFile::parse(AFF).unwrap();
        assert_eq!(aff.prefixes.len(), 1);
        assert_eq!(aff.suffixes.len(), 1);
        let plural = &aff.suffixes[0];
        assert!(plural.cross_product);
        assert_eq!(plural.rules.len(), 3);
        assert_eq!(plural.rules[0].strip, "y");
        assert_eq!(plural.rules[0].add, "ies");
    }

    #[test]
    fn suffix_rules_apply_with_conditions() {
        let aff = AffixFile::parse(AFF).unwrap();
        let plural = &aff.suffixes[0];
        let forms: Vec<String> = ["city", "day", "cat"]
            .iter()
            .flat_map(|stem| {
                plural
                    .rules
                    .iter()
                    .filter_map(move |r| r.apply(AffixKind::Suffix, stem))
            })
            .collect();
        assert_eq!(forms, vec!["cities", "days", "cats"]);
    }

    #[test]
    fn prefix_rule_applies() {
        let aff = AffixFile::parse(AFF).unwrap();
        let rule = &aff.prefixes[0].rules[0];
        assert_eq!(rule.apply(AffixKind::Prefix, "do").as_deref(), Some("undo"));
    }

    #[test]
    fn continuation_flags_are_kept() {
        let aff = AffixFile::parse("SFX A Y 1\nSFX A 0 er/S .\n").unwrap();
        let rule = &aff.suffixes[0].rules[0];
        assert_eq!(rule.add, "er");
        assert_eq!(rule.continuation, vec!['S' as Flag]);
    }

    #[test]
    fn malformed_header_is_rejected() {
        let err = AffixFile::parse("SFX S maybe 3\n").unwrap_err();
        assert!(matches!(err, DictError::MalformedDirective { line: 1, .. }));
    }

    #[test]
    fn unsupported_set_is_rejected() {
        assert!(matches!(
            AffixFile::parse("SET KOI8-R\n"),
            Err(DictError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn sniff_and_decode_latin1() {
        let bytes = b"SET ISO8859-1\nTRY \xe9a\n";
        let encoding = Encoding::sniff(bytes).unwrap();
        assert_eq!(encoding, Encoding::Latin1);
        let text = encoding.decode(bytes, "aff").unwrap();
        assert!(text.contains("TRY \u{00E9}a"));
    }
}
