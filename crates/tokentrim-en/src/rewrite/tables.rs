// Phrase tables for the concise rewriter

/// Verbose phrase -> concise replacement, applied in order as whole
/// phrases, case-insensitively.
pub const VERBOSE_PHRASES: &[(&str, &str)] = &[
    // Time
    ("at this point in time", "now"),
    ("at the present time", "now"),
    ("in the near future", "soon"),
    ("in the event that", "if"),
    ("in order to", "to"),
    ("in the process of", ""),
    ("for the purpose of", "for"),
    ("with regard to", "about"),
    ("with respect to", "about"),
    ("in relation to", "about"),
    ("in connection with", "about"),
    // Redundant pairs
    ("each and every", "each"),
    ("first and foremost", "first"),
    ("various different", "various"),
    ("free gift", "gift"),
    ("past history", "history"),
    ("future plans", "plans"),
    ("end result", "result"),
    ("final outcome", "outcome"),
    ("basic fundamentals", "fundamentals"),
    ("true facts", "facts"),
    ("completely finished", "finished"),
    ("absolutely essential", "essential"),
    ("very unique", "unique"),
    ("exactly identical", "identical"),
    // Wordy constructions
    ("due to the fact that", "because"),
    ("owing to the fact that", "because"),
    ("the reason why is that", "because"),
    ("it is important to note that", ""),
    ("it should be pointed out that", ""),
    ("it is worth mentioning that", ""),
    ("it is necessary to", "must"),
    ("there is a need to", "must"),
    ("has the ability to", "can"),
    ("has the capacity to", "can"),
    ("is able to", "can"),
    ("is in a position to", "can"),
    ("make use of", "use"),
    ("give consideration to", "consider"),
    ("take into account", "consider"),
    ("come to a conclusion", "conclude"),
    ("reach a decision", "decide"),
    ("put forward", "propose"),
    ("carry out", "do"),
    ("carry on", "continue"),
    // Fillers
    ("as a matter of fact", "actually"),
    ("in actual fact", "actually"),
    ("the fact of the matter is", ""),
    ("it goes without saying", ""),
    ("needless to say", ""),
    ("for all intents and purposes", "essentially"),
    ("more often than not", "usually"),
    // Prepositional
    ("in the case of", "for"),
    ("in terms of", "for"),
    ("on the part of", "by"),
    ("on behalf of", "for"),
    ("in the absence of", "without"),
    ("in the presence of", "with"),
    // Doubled intensifiers
    ("very very", "very"),
    ("really really", "really"),
    ("quite quite", "quite"),
];

/// Adjectives that an intensifier adds nothing to.
pub const ABSOLUTE_ADJECTIVES: &[&str] = &[
    "unique", "perfect", "complete", "entire", "full", "empty", "dead", "alive", "free", "sure",
    "certain", "true", "false", "equal", "identical", "different", "similar", "same",
];

/// Intensifiers collapsed in front of an absolute adjective.
pub const INTENSIFIERS: &[&str] = &["very", "quite", "really", "absolutely", "totally"];

/// Extra adjectives that "completely" adds nothing to.
pub const COMPLETED_STATES: &[&str] = &["finished", "done"];

/// Second pass of wordy phrases, run after intensifiers are collapsed.
pub const WORDY_PHRASES: &[(&str, &str)] = &[
    ("in the event that", "if"),
    ("in order to", "to"),
    ("for the purpose of", "for"),
    ("with regard to", "about"),
    ("with respect to", "about"),
    ("in relation to", "about"),
    ("due to the fact that", "because"),
    ("owing to the fact that", "because"),
    ("it is important to note that", ""),
    ("it should be pointed out that", ""),
    ("it is worth mentioning that", ""),
    ("has the ability to", "can"),
    ("is able to", "can"),
    ("make use of", "use"),
    ("give consideration to", "consider"),
    ("take into account", "consider"),
];

/// Throw-away phrases removed when fillers are stripped.
pub const FILLER_PHRASES: &[&str] = &[
    "as a matter of fact",
    "in actual fact",
    "the fact of the matter is",
    "it goes without saying",
    "needless to say",
    "for all intents and purposes",
    "more often than not",
    "it is important to note that",
    "it should be pointed out that",
    "it is worth mentioning that",
];

/// Verbs whose "that" complementizer can be dropped ("I think that" ->
/// "I think").
pub const THAT_VERBS: &[&str] = &[
    "think", "believe", "know", "say", "see", "feel", "hope", "wish", "expect", "assume",
    "suppose", "imagine", "realize", "understand", "remember", "forget", "notice", "hear",
    "watch", "observe", "discover", "find", "show", "prove", "demonstrate", "indicate",
    "suggest", "imply", "mean", "signify", "reveal", "point out", "make clear", "make sure",
    "make certain",
];

/// Quantity phrases and their one-word forms.
pub const QUANTITY_PHRASES: &[(&str, &str)] = &[
    ("a number of", "many"),
    ("a lot of", "many"),
    ("a great deal of", "much"),
    ("a large amount of", "much"),
];

/// Hedge adverbs dropped in aggressive mode.
pub const HEDGES: &[&str] = &[
    "actually",
    "basically",
    "essentially",
    "literally",
    "really",
    "very",
    "quite",
    "rather",
    "somewhat",
    "pretty",
    "fairly",
];

/// Qualifiers dropped in aggressive mode.
pub const QUALIFIERS: &[&str] = &["kind of", "sort of", "type of"];
