// File: src/unicode/planes.rs
use crate::core::types::CodepointInterval;

pub struct UnicodeBlock {
    pub interval: CodepointInterval,
    pub description: &'static str,
}

/// A plane with its blocks in ascending order. Gaps between blocks are unassigned.
pub struct UnicodePlane {
    pub interval: CodepointInterval,
    pub abbreviation: &'static str,
    pub description: &'static str,
    pub blocks: &'static [UnicodeBlock],
}

const fn block(start: u32, end: u32, description: &'static str) -> UnicodeBlock {
    UnicodeBlock { interval: CodepointInterval::new(start, end), description }
}

/// Blocks as of Unicode 15.1.
pub static UNICODE_PLANES_ALL: &[UnicodePlane] = &[
    UnicodePlane {
        interval: CodepointInterval::new(0x0000, 0xFFFF),
        abbreviation: "BMP",
        description: "Basic Multilingual Plane",
        blocks: &[
            block(0x0000, 0x007F, "Basic Latin"),
            block(0x0080, 0x00FF, "Latin-1 Supplement"),
            block(0x0100, 0x017F, "Latin Extended-A"),
            block(0x0180, 0x024F, "Latin Extended-B"),
            block(0x0250, 0x02AF, "IPA Extensions"),
            block(0x02B0, 0x02FF, "Spacing Modifier Letters"),
            block(0x0300, 0x036F, "Combining Diacritical Marks"),
            block(0x0370, 0x03FF, "Greek and Coptic"),
            block(0x0400, 0x04FF, "Cyrillic"),
            block(0x0500, 0x052F, "Cyrillic Supplement"),
            block(0x0530, 0x058F, "Armenian"),
            block(0x0590, 0x05FF, "Hebrew"),
            block(0x0600, 0x06FF, "Arabic"),
            block(0x0700, 0x074F, "Syriac"),
            block(0x0750, 0x077F, "Arabic Supplement"),
            block(0x0780, 0x07BF, "Thaana"),
            block(0x07C0, 0x07FF, "NKo"),
            block(0x0800, 0x083F, "Samaritan"),
            block(0x0840, 0x085F, "Mandaic"),
            block(0x0860, 0x086F, "Syriac Supplement"),
            block(0x0870, 0x089F, "Arabic Extended-B"),
            block(0x08A0, 0x08FF, "Arabic Extended-A"),
            block(0x0900, 0x097F, "Devanagari"),
            block(0x0980, 0x09FF, "Bengali"),
            block(0x0A00, 0x0A7F, "Gurmukhi"),
            block(0x0A80, 0x0AFF, "Gujarati"),
            block(0x0B00, 0x0B7F, "Oriya"),
            block(0x0B80, 0x0BFF, "Tamil"),
            block(0x0C00, 0x0C7F, "Telugu"),
            block(0x0C80, 0x0CFF, "Kannada"),
            block(0x0D00, 0x0D7F, "Malayalam"),
            block(0x0D80, 0x0DFF, "Sinhala"),
            block(0x0E00, 0x0E7F, "Thai"),
            block(0x0E80, 0x0EFF, "Lao"),
            block(0x0F00, 0x0FFF, "Tibetan"),
            block(0x1000, 0x109F, "Myanmar"),
            block(0x10A0, 0x10FF, "Georgian"),
            block(0x1100, 0x11FF, "Hangul Jamo"),
            block(0x1200, 0x137F, "Ethiopic"),
            block(0x1380, 0x139F, "Ethiopic Supplement"),
            block(0x13A0, 0x13FF, "Cherokee"),
            block(0x1400, 0x167F, "Unified Canadian Aboriginal Syllabics"),
            block(0x1680, 0x169F, "Ogham"),
            block(0x16A0, 0x16FF, "Runic"),
            block(0x1700, 0x171F, "Tagalog"),
            block(0x1720, 0x173F, "Hanunoo"),
            block(0x1740, 0x175F, "Buhid"),
            block(0x1760, 0x177F, "Tagbanwa"),
            block(0x1780, 0x17FF, "Khmer"),
            block(0x1800, 0x18AF, "Mongolian"),
            block(0x18B0, 0x18FF, "Unified Canadian Aboriginal Syllabics Extended"),
            block(0x1900, 0x194F, "Limbu"),
            block(0x1950, 0x197F, "Tai Le"),
            block(0x1980, 0x19DF, "New Tai Lue"),
            block(0x19E0, 0x19FF, "Khmer Symbols"),
            block(0x1A00, 0x1A1F, "Buginese"),
            block(0x1A20, 0x1AAF, "Tai Tham"),
            block(0x1AB0, 0x1AFF, "Combining Diacritical Marks Extended"),
            block(0x1B00, 0x1B7F, "Balinese"),
            block(0x1B80, 0x1BBF, "Sundanese"),
            block(0x1BC0, 0x1BFF, "Batak"),
            block(0x1C00, 0x1C4F, "Lepcha"),
            block(0x1C50, 0x1C7F, "Ol Chiki"),
            block(0x1C80, 0x1C8F, "Cyrillic Extended-C"),
            block(0x1C90, 0x1CBF, "Georgian Extended"),
            block(0x1CC0, 0x1CCF, "Sundanese Supplement"),
            block(0x1CD0, 0x1CFF, "Vedic Extensions"),
            block(0x1D00, 0x1D7F, "Phonetic Extensions"),
            block(0x1D80, 0x1DBF, "Phonetic Extensions Supplement"),
            block(0x1DC0, 0x1DFF, "Combining Diacritical Marks Supplement"),
            block(0x1E00, 0x1EFF, "Latin Extended Additional"),
            block(0x1F00, 0x1FFF, "Greek Extended"),
            block(0x2000, 0x206F, "General Punctuation"),
            block(0x2070, 0x209F, "Superscripts and Subscripts"),
            block(0x20A0, 0x20CF, "Currency Symbols"),
            block(0x20D0, 0x20FF, "Combining Diacritical Marks for Symbols"),
            block(0x2100, 0x214F, "Letterlike Symbols"),
            block(0x2150, 0x218F, "Number Forms"),
            block(0x2190, 0x21FF, "Arrows"),
            block(0x2200, 0x22FF, "Mathematical Operators"),
            block(0x2300, 0x23FF, "Miscellaneous Technical"),
            block(0x2400, 0x243F, "Control Pictures"),
            block(0x2440, 0x245F, "Optical Character Recognition"),
            block(0x2460, 0x24FF, "Enclosed Alphanumerics"),
            block(0x2500, 0x257F, "Box Drawing"),
            block(0x2580, 0x259F, "Block Elements"),
            block(0x25A0, 0x25FF, "Geometric Shapes"),
            block(0x2600, 0x26FF, "Miscellaneous Symbols"),
            block(0x2700, 0x27BF, "Dingbats"),
            block(0x27C0, 0x27EF, "Miscellaneous Mathematical Symbols-A"),
            block(0x27F0, 0x27FF, "Supplemental Arrows-A"),
            block(0x2800, 0x28FF, "Braille Patterns"),
            block(0x2900, 0x297F, "Supplemental Arrows-B"),
            block(0x2980, 0x29FF, "Miscellaneous Mathematical Symbols-B"),
            block(0x2A00, 0x2AFF, "Supplemental Mathematical Operators"),
            block(0x2B00, 0x2BFF, "Miscellaneous Symbols and Arrows"),
            block(0x2C00, 0x2C5F, "Glagolitic"),
            block(0x2C60, 0x2C7F, "Latin Extended-C"),
            block(0x2C80, 0x2CFF, "Coptic"),
            block(0x2D00, 0x2D2F, "Georgian Supplement"),
            block(0x2D30, 0x2D7F, "Tifinagh"),
            block(0x2D80, 0x2DDF, "Ethiopic Extended"),
            block(0x2DE0, 0x2DFF, "Cyrillic Extended-A"),
            block(0x2E00, 0x2E7F, "Supplemental Punctuation"),
            block(0x2E80, 0x2EFF, "CJK Radicals Supplement"),
            block(0x2F00, 0x2FDF, "Kangxi Radicals"),
            block(0x2FF0, 0x2FFF, "Ideographic Description Characters"),
            block(0x3000, 0x303F, "CJK Symbols and Punctuation"),
            block(0x3040, 0x309F, "Hiragana"),
            block(0x30A0, 0x30FF, "Katakana"),
            block(0x3100, 0x312F, "Bopomofo"),
            block(0x3130, 0x318F, "Hangul Compatibility Jamo"),
            block(0x3190, 0x319F, "Kanbun"),
            block(0x31A0, 0x31BF, "Bopomofo Extended"),
            block(0x31C0, 0x31EF, "CJK Strokes"),
            block(0x31F0, 0x31FF, "Katakana Phonetic Extensions"),
            block(0x3200, 0x32FF, "Enclosed CJK Letters and Months"),
            block(0x3300, 0x33FF, "CJK Compatibility"),
            block(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
            block(0x4DC0, 0x4DFF, "Yijing Hexagram Symbols"),
            block(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
            block(0xA000, 0xA48F, "Yi Syllables"),
            block(0xA490, 0xA4CF, "Yi Radicals"),
            block(0xA4D0, 0xA4FF, "Lisu"),
            block(0xA500, 0xA63F, "Vai"),
            block(0xA640, 0xA69F, "Cyrillic Extended-B"),
            block(0xA6A0, 0xA6FF, "Bamum"),
            block(0xA700, 0xA71F, "Modifier Tone Letters"),
            block(0xA720, 0xA7FF, "Latin Extended-D"),
            block(0xA800, 0xA82F, "Syloti Nagri"),
            block(0xA830, 0xA83F, "Common Indic Number Forms"),
            block(0xA840, 0xA87F, "Phags-pa"),
            block(0xA880, 0xA8DF, "Saurashtra"),
            block(0xA8E0, 0xA8FF, "Devanagari Extended"),
            block(0xA900, 0xA92F, "Kayah Li"),
            block(0xA930, 0xA95F, "Rejang"),
            block(0xA960, 0xA97F, "Hangul Jamo Extended-A"),
            block(0xA980, 0xA9DF, "Javanese"),
            block(0xA9E0, 0xA9FF, "Myanmar Extended-B"),
            block(0xAA00, 0xAA5F, "Cham"),
            block(0xAA60, 0xAA7F, "Myanmar Extended-A"),
            block(0xAA80, 0xAADF, "Tai Viet"),
            block(0xAAE0, 0xAAFF, "Meetei Mayek Extensions"),
            block(0xAB00, 0xAB2F, "Ethiopic Extended-A"),
            block(0xAB30, 0xAB6F, "Latin Extended-E"),
            block(0xAB70, 0xABBF, "Cherokee Supplement"),
            block(0xABC0, 0xABFF, "Meetei Mayek"),
            block(0xAC00, 0xD7AF, "Hangul Syllables"),
            block(0xD7B0, 0xD7FF, "Hangul Jamo Extended-B"),
            block(0xD800, 0xDB7F, "High Surrogates"),
            block(0xDB80, 0xDBFF, "High Private Use Surrogates"),
            block(0xDC00, 0xDFFF, "Low Surrogates"),
            block(0xE000, 0xF8FF, "Private Use Area"),
            block(0xF900, 0xFAFF, "CJK Compatibility Ideographs"),
            block(0xFB00, 0xFB4F, "Alphabetic Presentation Forms"),
            block(0xFB50, 0xFDFF, "Arabic Presentation Forms-A"),
            block(0xFE00, 0xFE0F, "Variation Selectors"),
            block(0xFE10, 0xFE1F, "Vertical Forms"),
            block(0xFE20, 0xFE2F, "Combining Half Marks"),
            block(0xFE30, 0xFE4F, "CJK Compatibility Forms"),
            block(0xFE50, 0xFE6F, "Small Form Variants"),
            block(0xFE70, 0xFEFF, "Arabic Presentation Forms-B"),
            block(0xFF00, 0xFFEF, "Halfwidth and Fullwidth Forms"),
            block(0xFFF0, 0xFFFF, "Specials"),
        ],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0x1_0000, 0x1_FFFF),
        abbreviation: "SMP",
        description: "Supplementary Multilingual Plane",
        blocks: &[
            block(0x10000, 0x1007F, "Linear B Syllabary"),
            block(0x10080, 0x100FF, "Linear B Ideograms"),
            block(0x10100, 0x1013F, "Aegean Numbers"),
            block(0x10140, 0x1018F, "Ancient Greek Numbers"),
            block(0x10190, 0x101CF, "Ancient Symbols"),
            block(0x101D0, 0x101FF, "Phaistos Disc"),
            block(0x10280, 0x1029F, "Lycian"),
            block(0x102A0, 0x102DF, "Carian"),
            block(0x102E0, 0x102FF, "Coptic Epact Numbers"),
            block(0x10300, 0x1032F, "Old Italic"),
            block(0x10330, 0x1034F, "Gothic"),
            block(0x10350, 0x1037F, "Old Permic"),
            block(0x10380, 0x1039F, "Ugaritic"),
            block(0x103A0, 0x103DF, "Old Persian"),
            block(0x10400, 0x1044F, "Deseret"),
            block(0x10450, 0x1047F, "Shavian"),
            block(0x10480, 0x104AF, "Osmanya"),
            block(0x104B0, 0x104FF, "Osage"),
            block(0x10500, 0x1052F, "Elbasan"),
            block(0x10530, 0x1056F, "Caucasian Albanian"),
            block(0x10570, 0x105BF, "Vithkuqi"),
            block(0x10600, 0x1077F, "Linear A"),
            block(0x10780, 0x107BF, "Latin Extended-F"),
            block(0x10800, 0x1083F, "Cypriot Syllabary"),
            block(0x10840, 0x1085F, "Imperial Aramaic"),
            block(0x10860, 0x1087F, "Palmyrene"),
            block(0x10880, 0x108AF, "Nabataean"),
            block(0x108E0, 0x108FF, "Hatran"),
            block(0x10900, 0x1091F, "Phoenician"),
            block(0x10920, 0x1093F, "Lydian"),
            block(0x10980, 0x1099F, "Meroitic Hieroglyphs"),
            block(0x109A0, 0x109FF, "Meroitic Cursive"),
            block(0x10A00, 0x10A5F, "Kharoshthi"),
            block(0x10A60, 0x10A7F, "Old South Arabian"),
            block(0x10A80, 0x10A9F, "Old North Arabian"),
            block(0x10AC0, 0x10AFF, "Manichaean"),
            block(0x10B00, 0x10B3F, "Avestan"),
            block(0x10B40, 0x10B5F, "Inscriptional Parthian"),
            block(0x10B60, 0x10B7F, "Inscriptional Pahlavi"),
            block(0x10B80, 0x10BAF, "Psalter Pahlavi"),
            block(0x10C00, 0x10C4F, "Old Turkic"),
            block(0x10C80, 0x10CFF, "Old Hungarian"),
            block(0x10D00, 0x10D3F, "Hanifi Rohingya"),
            block(0x10E60, 0x10E7F, "Rumi Numeral Symbols"),
            block(0x10E80, 0x10EBF, "Yezidi"),
            block(0x10EC0, 0x10EFF, "Arabic Extended-C"),
            block(0x10F00, 0x10F2F, "Old Sogdian"),
            block(0x10F30, 0x10F6F, "Sogdian"),
            block(0x10F70, 0x10FAF, "Old Uyghur"),
            block(0x10FB0, 0x10FDF, "Chorasmian"),
            block(0x10FE0, 0x10FFF, "Elymaic"),
            block(0x11000, 0x1107F, "Brahmi"),
            block(0x11080, 0x110CF, "Kaithi"),
            block(0x110D0, 0x110FF, "Sora Sompeng"),
            block(0x11100, 0x1114F, "Chakma"),
            block(0x11150, 0x1117F, "Mahajani"),
            block(0x11180, 0x111DF, "Sharada"),
            block(0x111E0, 0x111FF, "Sinhala Archaic Numbers"),
            block(0x11200, 0x1124F, "Khojki"),
            block(0x11280, 0x112AF, "Multani"),
            block(0x112B0, 0x112FF, "Khudawadi"),
            block(0x11300, 0x1137F, "Grantha"),
            block(0x11400, 0x1147F, "Newa"),
            block(0x11480, 0x114DF, "Tirhuta"),
            block(0x11580, 0x115FF, "Siddham"),
            block(0x11600, 0x1165F, "Modi"),
            block(0x11660, 0x1167F, "Mongolian Supplement"),
            block(0x11680, 0x116CF, "Takri"),
            block(0x11700, 0x1174F, "Ahom"),
            block(0x11800, 0x1184F, "Dogra"),
            block(0x118A0, 0x118FF, "Warang Citi"),
            block(0x11900, 0x1195F, "Dives Akuru"),
            block(0x119A0, 0x119FF, "Nandinagari"),
            block(0x11A00, 0x11A4F, "Zanabazar Square"),
            block(0x11A50, 0x11AAF, "Soyombo"),
            block(0x11AB0, 0x11ABF, "Unified Canadian Aboriginal Syllabics Extended-A"),
            block(0x11AC0, 0x11AFF, "Pau Cin Hau"),
            block(0x11B00, 0x11B5F, "Devanagari Extended-A"),
            block(0x11C00, 0x11C6F, "Bhaiksuki"),
            block(0x11C70, 0x11CBF, "Marchen"),
            block(0x11D00, 0x11D5F, "Masaram Gondi"),
            block(0x11D60, 0x11DAF, "Gunjala Gondi"),
            block(0x11EE0, 0x11EFF, "Makasar"),
            block(0x11F00, 0x11F5F, "Kawi"),
            block(0x11FB0, 0x11FBF, "Lisu Supplement"),
            block(0x11FC0, 0x11FFF, "Tamil Supplement"),
            block(0x12000, 0x123FF, "Cuneiform"),
            block(0x12400, 0x1247F, "Cuneiform Numbers and Punctuation"),
            block(0x12480, 0x1254F, "Early Dynastic Cuneiform"),
            block(0x12F90, 0x12FFF, "Cypro-Minoan"),
            block(0x13000, 0x1342F, "Egyptian Hieroglyphs"),
            block(0x13430, 0x1345F, "Egyptian Hieroglyph Format Controls"),
            block(0x14400, 0x1467F, "Anatolian Hieroglyphs"),
            block(0x16800, 0x16A3F, "Bamum Supplement"),
            block(0x16A40, 0x16A6F, "Mro"),
            block(0x16A70, 0x16ACF, "Tangsa"),
            block(0x16AD0, 0x16AFF, "Bassa Vah"),
            block(0x16B00, 0x16B8F, "Pahawh Hmong"),
            block(0x16E40, 0x16E9F, "Medefaidrin"),
            block(0x16F00, 0x16F9F, "Miao"),
            block(0x16FE0, 0x16FFF, "Ideographic Symbols and Punctuation"),
            block(0x17000, 0x187FF, "Tangut"),
            block(0x18800, 0x18AFF, "Tangut Components"),
            block(0x18B00, 0x18CFF, "Khitan Small Script"),
            block(0x18D00, 0x18D7F, "Tangut Supplement"),
            block(0x1AFF0, 0x1AFFF, "Kana Extended-B"),
            block(0x1B000, 0x1B0FF, "Kana Supplement"),
            block(0x1B100, 0x1B12F, "Kana Extended-A"),
            block(0x1B130, 0x1B16F, "Small Kana Extension"),
            block(0x1B170, 0x1B2FF, "Nushu"),
            block(0x1BC00, 0x1BC9F, "Duployan"),
            block(0x1BCA0, 0x1BCAF, "Shorthand Format Controls"),
            block(0x1CF00, 0x1CFCF, "Znamenny Musical Notation"),
            block(0x1D000, 0x1D0FF, "Byzantine Musical Symbols"),
            block(0x1D100, 0x1D1FF, "Musical Symbols"),
            block(0x1D200, 0x1D24F, "Ancient Greek Musical Notation"),
            block(0x1D2C0, 0x1D2DF, "Kaktovik Numerals"),
            block(0x1D2E0, 0x1D2FF, "Mayan Numerals"),
            block(0x1D300, 0x1D35F, "Tai Xuan Jing Symbols"),
            block(0x1D360, 0x1D37F, "Counting Rod Numerals"),
            block(0x1D400, 0x1D7FF, "Mathematical Alphanumeric Symbols"),
            block(0x1D800, 0x1DAAF, "Sutton SignWriting"),
            block(0x1DF00, 0x1DFFF, "Latin Extended-G"),
            block(0x1E000, 0x1E02F, "Glagolitic Supplement"),
            block(0x1E030, 0x1E08F, "Cyrillic Extended-D"),
            block(0x1E100, 0x1E14F, "Nyiakeng Puachue Hmong"),
            block(0x1E290, 0x1E2BF, "Toto"),
            block(0x1E2C0, 0x1E2FF, "Wancho"),
            block(0x1E4D0, 0x1E4FF, "Nag Mundari"),
            block(0x1E7E0, 0x1E7FF, "Ethiopic Extended-B"),
            block(0x1E800, 0x1E8DF, "Mende Kikakui"),
            block(0x1E900, 0x1E95F, "Adlam"),
            block(0x1EC70, 0x1ECBF, "Indic Siyaq Numbers"),
            block(0x1ED00, 0x1ED4F, "Ottoman Siyaq Numbers"),
            block(0x1EE00, 0x1EEFF, "Arabic Mathematical Alphabetic Symbols"),
            block(0x1F000, 0x1F02F, "Mahjong Tiles"),
            block(0x1F030, 0x1F09F, "Domino Tiles"),
            block(0x1F0A0, 0x1F0FF, "Playing Cards"),
            block(0x1F100, 0x1F1FF, "Enclosed Alphanumeric Supplement"),
            block(0x1F200, 0x1F2FF, "Enclosed Ideographic Supplement"),
            block(0x1F300, 0x1F5FF, "Miscellaneous Symbols and Pictographs"),
            block(0x1F600, 0x1F64F, "Emoticons"),
            block(0x1F650, 0x1F67F, "Ornamental Dingbats"),
            block(0x1F680, 0x1F6FF, "Transport and Map Symbols"),
            block(0x1F700, 0x1F77F, "Alchemical Symbols"),
            block(0x1F780, 0x1F7FF, "Geometric Shapes Extended"),
            block(0x1F800, 0x1F8FF, "Supplemental Arrows-C"),
            block(0x1F900, 0x1F9FF, "Supplemental Symbols and Pictographs"),
            block(0x1FA00, 0x1FA6F, "Chess Symbols"),
            block(0x1FA70, 0x1FAFF, "Symbols and Pictographs Extended-A"),
            block(0x1FB00, 0x1FBFF, "Symbols for Legacy Computing"),
        ],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0x2_0000, 0x2_FFFF),
        abbreviation: "SIP",
        description: "Supplementary Ideographic Plane",
        blocks: &[
            block(0x20000, 0x2A6DF, "CJK Unified Ideographs Extension B"),
            block(0x2A700, 0x2B73F, "CJK Unified Ideographs Extension C"),
            block(0x2B740, 0x2B81F, "CJK Unified Ideographs Extension D"),
            block(0x2B820, 0x2CEAF, "CJK Unified Ideographs Extension E"),
            block(0x2CEB0, 0x2EBEF, "CJK Unified Ideographs Extension F"),
            block(0x2EBF0, 0x2EE5F, "CJK Unified Ideographs Extension I"),
            block(0x2F800, 0x2FA1F, "CJK Compatibility Ideographs Supplement"),
        ],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0x3_0000, 0x3_FFFF),
        abbreviation: "TIP",
        description: "Tertiary Ideographic Plane",
        blocks: &[
            block(0x30000, 0x3134F, "CJK Unified Ideographs Extension G"),
            block(0x31350, 0x323AF, "CJK Unified Ideographs Extension H"),
        ],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0xE_0000, 0xE_FFFF),
        abbreviation: "SSP",
        description: "Supplementary Special-purpose Plane",
        blocks: &[
            block(0xE0000, 0xE007F, "Tags"),
            block(0xE0100, 0xE01EF, "Variation Selectors Supplement"),
        ],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0xF_0000, 0xF_FFFF),
        abbreviation: "SPUA-A",
        description: "Supplementary Private Use Area Plane A",
        blocks: &[block(0xF0000, 0xFFFFF, "Supplementary Private Use Area-A")],
    },
    UnicodePlane {
        interval: CodepointInterval::new(0x10_0000, 0x10_FFFF),
        abbreviation: "SPUA-B",
        description: "Supplementary Private Use Area Plane B",
        blocks: &[block(0x100000, 0x10FFFF, "Supplementary Private Use Area-B")],
    },
];
