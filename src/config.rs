use std::fmt;

pub const DEFAULT_YEAR: &str = "2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full name, lowercased, without whitespace.
    Name,
    NameCapitalized,
    Identifier,
    IdentifierDigits,
    IdentifierLetters,
    Pet,
    Postal,
    Initials,
    InitialsCapitalized,
    /// Last four characters of the identifier.
    TrailingDigits,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Verbatim,
    Reversed,
    Uppercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Part {
    pub field: Field,
    pub transform: Transform,
}

impl Part {
    pub const fn new(field: Field) -> Self {
        Self {
            field,
            transform: Transform::Verbatim,
        }
    }

    pub const fn reversed(field: Field) -> Self {
        Self {
            field,
            transform: Transform::Reversed,
        }
    }

    pub const fn uppercase(field: Field) -> Self {
        Self {
            field,
            transform: Transform::Uppercase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination(pub &'static [Part]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Literal(&'static str),
    /// The configured year token, skipped when no year is set.
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixTargets {
    /// Every base combination.
    Base,
    /// Only the listed single fields.
    Fields(&'static [Field]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixRule {
    pub affixes: &'static [Affix],
    pub targets: AffixTargets,
    pub prepend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierSplit {
    #[default]
    Opaque,
    /// Numeric prefix followed by check letter(s), as in a Spanish DNI.
    NumberAndLetter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub min_length: usize,
    pub include_pet_and_postal_rules: bool,
    pub include_initials_rule: bool,
    pub include_case_rule: bool,
    pub year: Option<String>,
    pub identifier_split: IdentifierSplit,
    pub base: &'static [Combination],
    pub affixes: &'static [AffixRule],
    pub initials: &'static [Combination],
    pub trailing_digits: &'static [Combination],
    pub auxiliary: &'static [Combination],
}

use Field::*;

const N: Part = Part::new(Name);
const NC: Part = Part::new(NameCapitalized);
const ID: Part = Part::new(Identifier);
const DIGITS: Part = Part::new(IdentifierDigits);
const LETTERS: Part = Part::uppercase(IdentifierLetters);
const PET: Part = Part::new(Pet);
const POSTAL: Part = Part::new(Postal);
const INI: Part = Part::new(Initials);
const INI_C: Part = Part::new(InitialsCapitalized);
const TAIL: Part = Part::new(TrailingDigits);
const YEAR: Part = Part::new(Year);
const DIGITS_REVERSED: Part = Part::reversed(IdentifierDigits);

const NAME_ID_BASE: &[Combination] = &[
    Combination(&[N]),
    Combination(&[ID]),
    Combination(&[N, ID]),
    Combination(&[ID, N]),
    Combination(&[NC, ID]),
    Combination(&[ID, NC]),
];

const SIMPLE_AFFIXES: &[AffixRule] = &[AffixRule {
    affixes: &[Affix::Literal("1"), Affix::Literal("!"), Affix::Literal("#")],
    targets: AffixTargets::Base,
    prepend: false,
}];

const SIMPLE_INITIALS: &[Combination] = &[
    Combination(&[INI, ID]),
    Combination(&[ID, INI]),
    Combination(&[INI_C, ID]),
];

const SIMPLE_TRAILING: &[Combination] = &[
    Combination(&[N, TAIL]),
    Combination(&[NC, TAIL]),
    Combination(&[TAIL, N]),
];

const SIMPLE_AUXILIARY: &[Combination] = &[
    Combination(&[N, YEAR]),
    Combination(&[NC, YEAR]),
    Combination(&[ID, YEAR]),
    Combination(&[YEAR, N]),
];

const EXTENDED_AFFIXES: &[AffixRule] = &[
    AffixRule {
        affixes: &[Affix::Year],
        targets: AffixTargets::Base,
        prepend: true,
    },
    AffixRule {
        affixes: &[
            Affix::Literal("1"),
            Affix::Literal("2"),
            Affix::Literal("!"),
            Affix::Literal("#"),
            Affix::Literal("*"),
        ],
        targets: AffixTargets::Base,
        prepend: false,
    },
];

const EXTENDED_INITIALS: &[Combination] = &[
    Combination(&[INI, ID]),
    Combination(&[INI_C, ID]),
    Combination(&[ID, INI]),
];

const EXTENDED_TRAILING: &[Combination] = &[Combination(&[N, TAIL]), Combination(&[NC, TAIL])];

const AUDIT_BASE: &[Combination] = &[
    Combination(&[N]),
    Combination(&[ID]),
    Combination(&[PET]),
    Combination(&[N, DIGITS]),
    Combination(&[N, ID]),
    Combination(&[PET, DIGITS]),
    Combination(&[PET, ID]),
    Combination(&[DIGITS, POSTAL]),
];

const AUDIT_AFFIXES: &[AffixRule] = &[AffixRule {
    affixes: &[
        Affix::Literal("1"),
        Affix::Literal("!"),
        Affix::Year,
        Affix::Literal("$"),
        Affix::Literal("#"),
    ],
    targets: AffixTargets::Fields(&[Name, Pet, IdentifierDigits]),
    prepend: true,
}];

const AUDIT_AUXILIARY: &[Combination] = &[
    Combination(&[PET, POSTAL]),
    Combination(&[PET, LETTERS]),
    Combination(&[POSTAL, LETTERS]),
    Combination(&[DIGITS_REVERSED, N]),
];

impl RuleConfig {
    /// Full name and a free-form identifier, minimum length 6.
    pub fn simple() -> Self {
        Self {
            min_length: 6,
            include_pet_and_postal_rules: false,
            include_initials_rule: true,
            include_case_rule: false,
            year: Some(DEFAULT_YEAR.to_string()),
            identifier_split: IdentifierSplit::Opaque,
            base: NAME_ID_BASE,
            affixes: SIMPLE_AFFIXES,
            initials: SIMPLE_INITIALS,
            trailing_digits: SIMPLE_TRAILING,
            auxiliary: SIMPLE_AUXILIARY,
        }
    }

    pub fn extended() -> Self {
        Self {
            affixes: EXTENDED_AFFIXES,
            initials: EXTENDED_INITIALS,
            trailing_digits: EXTENDED_TRAILING,
            auxiliary: &[],
            ..Self::simple()
        }
    }

    /// Name, surname, DNI, pet and postal code, minimum length 8.
    pub fn audit() -> Self {
        Self {
            min_length: 8,
            include_pet_and_postal_rules: true,
            include_initials_rule: false,
            include_case_rule: true,
            year: Some(DEFAULT_YEAR.to_string()),
            identifier_split: IdentifierSplit::NumberAndLetter,
            base: AUDIT_BASE,
            affixes: AUDIT_AFFIXES,
            initials: &[],
            trailing_digits: &[],
            auxiliary: AUDIT_AUXILIARY,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_year(mut self, year: Option<String>) -> Self {
        self.year = year;
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::audit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Simple,
    Extended,
    #[default]
    Audit,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Simple, Variant::Extended, Variant::Audit];

    pub fn rule_config(self) -> RuleConfig {
        match self {
            Variant::Simple => RuleConfig::simple(),
            Variant::Extended => RuleConfig::extended(),
            Variant::Audit => RuleConfig::audit(),
        }
    }

    pub fn splits_name(self) -> bool {
        matches!(self, Variant::Audit)
    }

    pub fn requires_pet_and_postal(self) -> bool {
        matches!(self, Variant::Audit)
    }

    pub fn identifier_split(self) -> IdentifierSplit {
        match self {
            Variant::Simple | Variant::Extended => IdentifierSplit::Opaque,
            Variant::Audit => IdentifierSplit::NumberAndLetter,
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            Variant::Simple => "Use this tool only in an ethical and legal way.",
            Variant::Extended => "Use it ethically and legally.",
            Variant::Audit => "Audit tool. Use it responsibly.",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Simple => "simple",
            Variant::Extended => "extended",
            Variant::Audit => "audit",
        };
        f.write_str(name)
    }
}
