// File: src/unicode/categories.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unicode General Category of a character (second field of UnicodeData.txt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneralCategory {
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
}

impl GeneralCategory {
    pub const ALL: [GeneralCategory; 30] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::Unassigned,
    ];

    /// Two-letter abbreviation, e.g. `Lu`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
        }
    }

    /// One-letter abbreviation of the owning group, e.g. `L`.
    pub fn group_abbreviation(self) -> &'static str {
        &self.abbreviation()[..1]
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for GeneralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.abbreviation() == s)
            .ok_or_else(|| format!("unknown general category `{}`", s))
    }
}

pub struct UnicodeGeneralCategory {
    pub abbreviation: &'static str,
    pub name: &'static str,
}

pub struct UnicodeGeneralCategoryGroup {
    pub abbreviation: &'static str,
    pub name: &'static str,
    pub categories: &'static [UnicodeGeneralCategory],
}

const fn category(abbreviation: &'static str, name: &'static str) -> UnicodeGeneralCategory {
    UnicodeGeneralCategory { abbreviation, name }
}

pub static UNICODE_CHARACTER_CATEGORIES: &[UnicodeGeneralCategoryGroup] = &[
    UnicodeGeneralCategoryGroup {
        abbreviation: "L",
        name: "Letter",
        categories: &[
            category("Lu", "Uppercase Letter"),
            category("Ll", "Lowercase Letter"),
            category("Lt", "Titlecase Letter"),
            category("Lm", "Modifier Letter"),
            category("Lo", "Other Letter"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "M",
        name: "Mark",
        categories: &[
            category("Mn", "Nonspacing Mark"),
            category("Mc", "Spacing Mark"),
            category("Me", "Enclosing Mark"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "N",
        name: "Number",
        categories: &[
            category("Nd", "Decimal Number"),
            category("Nl", "Letter Number"),
            category("No", "Other Number"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "P",
        name: "Punctuation",
        categories: &[
            category("Pc", "Connector Punctuation"),
            category("Pd", "Dash Punctuation"),
            category("Ps", "Open Punctuation"),
            category("Pe", "Close Punctuation"),
            category("Pi", "Initial Punctuation"),
            category("Pf", "Final Punctuation"),
            category("Po", "Other Punctuation"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "S",
        name: "Symbol",
        categories: &[
            category("Sm", "Math Symbol"),
            category("Sc", "Currency Symbol"),
            category("Sk", "Modifier Symbol"),
            category("So", "Other Symbol"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "Z",
        name: "Separator",
        categories: &[
            category("Zs", "Space Separator"),
            category("Zl", "Line Separator"),
            category("Zp", "Paragraph Separator"),
        ],
    },
    UnicodeGeneralCategoryGroup {
        abbreviation: "C",
        name: "Other",
        categories: &[
            category("Cc", "Control"),
            category("Cf", "Format"),
            category("Cs", "Surrogate"),
            category("Co", "Private Use"),
            category("Cn", "Unassigned"),
        ],
    },
];
