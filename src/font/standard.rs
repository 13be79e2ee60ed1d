use super::FontMetrics;
use crate::units::Pt;
use std::fmt;

/// One of the base-14 PDF fonts that every viewer ships with. These are never
/// embedded; the document only names them and relies on their published
/// metrics for layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    TimesRoman,
    Courier,
}

/// Glyph advances for WinAnsi codes 0x20..=0x7E, in 1/1000 em, from the
/// Adobe core font AFM files.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :   ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [   \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n-z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {   |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_ASCII: [u16; 95] = [
    // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0-9
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // :   ;    <    =    >    ?    @
    278, 278, 564, 564, 564, 444, 921,
    // A-M
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    // N-Z
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    // [   \    ]    ^    _    `
    333, 278, 333, 469, 500, 333,
    // a-m
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    // n-z
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    // {   |    }    ~
    480, 200, 480, 541,
];

/// WinAnsi 0x80..=0x9F: (unicode, code, helvetica width, times width)
#[rustfmt::skip]
const WIN_ANSI_EXTRAS: [(char, u8, u16, u16); 27] = [
    ('\u{20AC}', 0x80, 556, 500),  // euro
    ('\u{201A}', 0x82, 222, 333),  // quotesinglbase
    ('\u{0192}', 0x83, 556, 500),  // florin
    ('\u{201E}', 0x84, 333, 444),  // quotedblbase
    ('\u{2026}', 0x85, 1000, 1000), // ellipsis
    ('\u{2020}', 0x86, 556, 500),  // dagger
    ('\u{2021}', 0x87, 556, 500),  // daggerdbl
    ('\u{02C6}', 0x88, 333, 333),  // circumflex
    ('\u{2030}', 0x89, 1000, 1000), // perthousand
    ('\u{0160}', 0x8A, 667, 556),  // Scaron
    ('\u{2039}', 0x8B, 333, 333),  // guilsinglleft
    ('\u{0152}', 0x8C, 1000, 889), // OE
    ('\u{017D}', 0x8E, 611, 611),  // Zcaron
    ('\u{2018}', 0x91, 222, 333),  // quoteleft
    ('\u{2019}', 0x92, 222, 333),  // quoteright
    ('\u{201C}', 0x93, 333, 444),  // quotedblleft
    ('\u{201D}', 0x94, 333, 444),  // quotedblright
    ('\u{2022}', 0x95, 350, 350),  // bullet
    ('\u{2013}', 0x96, 556, 500),  // endash
    ('\u{2014}', 0x97, 1000, 1000), // emdash
    ('\u{02DC}', 0x98, 333, 333),  // tilde
    ('\u{2122}', 0x99, 1000, 980), // trademark
    ('\u{0161}', 0x9A, 500, 389),  // scaron
    ('\u{203A}', 0x9B, 333, 333),  // guilsinglright
    ('\u{0153}', 0x9C, 944, 722),  // oe
    ('\u{017E}', 0x9E, 500, 444),  // zcaron
    ('\u{0178}', 0x9F, 667, 722),  // Ydieresis
];

/// Stands in for any character WinAnsi can't encode.
pub(crate) const SUBSTITUTE: u8 = b'?';

impl StandardFont {
    /// The PostScript name written as the font's `BaseFont`
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::Courier => "Courier",
        }
    }

    /// Look a font up by its PostScript name
    pub fn from_base_font(name: &str) -> Option<StandardFont> {
        match name {
            "Helvetica" => Some(StandardFont::Helvetica),
            "Times-Roman" => Some(StandardFont::TimesRoman),
            "Courier" => Some(StandardFont::Courier),
            _ => None,
        }
    }

    /// Map a character onto its WinAnsiEncoding code, if it has one
    pub fn encode_char(ch: char) -> Option<u8> {
        match ch {
            ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u8),
            _ => WIN_ANSI_EXTRAS
                .iter()
                .find(|(u, ..)| *u == ch)
                .map(|&(_, code, ..)| code),
        }
    }

    /// Encode text to WinAnsi bytes, returning the bytes and how many characters
    /// had to be replaced with `?`
    pub fn encode(text: &str) -> (Vec<u8>, usize) {
        let mut substituted = 0;
        let bytes = text
            .chars()
            .map(|ch| {
                Self::encode_char(ch).unwrap_or_else(|| {
                    substituted += 1;
                    SUBSTITUTE
                })
            })
            .collect();
        (bytes, substituted)
    }

    /// Advance width of a WinAnsi code in 1/1000 em
    pub fn code_width(self, code: u8) -> u16 {
        let (ascii, average) = match self {
            StandardFont::Courier => return 600,
            StandardFont::Helvetica => (&HELVETICA_ASCII, 556),
            StandardFont::TimesRoman => (&TIMES_ROMAN_ASCII, 500),
        };

        match code {
            0x20..=0x7E => ascii[(code - 0x20) as usize],
            // no-break space
            0xA0 => ascii[0],
            0x80..=0x9F => WIN_ANSI_EXTRAS
                .iter()
                .find(|&&(_, c, ..)| c == code)
                .map(|&(_, _, helvetica, times)| match self {
                    StandardFont::TimesRoman => times,
                    _ => helvetica,
                })
                .unwrap_or(average),
            // accented latin-1 letters share their base letter's advance
            _ => latin1_base_letter(code)
                .map(|base| ascii[(base - 0x20) as usize])
                .unwrap_or(average),
        }
    }
}

fn latin1_base_letter(code: u8) -> Option<u8> {
    let base = match code {
        0xC0..=0xC5 => b'A',
        0xC7 => b'C',
        0xC8..=0xCB => b'E',
        0xCC..=0xCF => b'I',
        0xD0 => b'D',
        0xD1 => b'N',
        0xD2..=0xD6 | 0xD8 => b'O',
        0xD9..=0xDC => b'U',
        0xDD => b'Y',
        0xE0..=0xE5 => b'a',
        0xE7 => b'c',
        0xE8..=0xEB => b'e',
        0xEC..=0xEF => b'i',
        0xF1 => b'n',
        0xF2..=0xF6 | 0xF8 => b'o',
        0xF9..=0xFC => b'u',
        0xFD | 0xFF => b'y',
        _ => return None,
    };
    Some(base)
}

impl FontMetrics for StandardFont {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| Self::encode_char(ch).unwrap_or(SUBSTITUTE))
            .map(|code| self.code_width(code) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_font())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_fixed_pitch() {
        let w = StandardFont::Courier.width_of_text("iiii WWWW", Pt(10.0));
        assert!((w.0 - 9.0 * 6.0).abs() < 1e-4);
    }

    #[test]
    fn helvetica_matches_afm() {
        // H=722 e=556 l=222 l=222 o=556
        let w = StandardFont::Helvetica.width_of_text("Hello", Pt(1000.0));
        assert!((w.0 - 2278.0).abs() < 1e-2);
    }

    #[test]
    fn times_is_narrower_than_helvetica() {
        let text = "Senior software engineer";
        let helvetica = StandardFont::Helvetica.width_of_text(text, Pt(11.0));
        let times = StandardFont::TimesRoman.width_of_text(text, Pt(11.0));
        assert!(times < helvetica);
    }

    #[test]
    fn typographic_punctuation_is_encodable() {
        let (bytes, substituted) = StandardFont::encode("\u{2022} 2019\u{2013}2024 \u{201C}x\u{201D}");
        assert_eq!(substituted, 0);
        assert_eq!(bytes[0], 0x95);
        assert!(bytes.contains(&0x96));
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        let (bytes, substituted) = StandardFont::encode("a\u{4E2D}b");
        assert_eq!(bytes, b"a?b");
        assert_eq!(substituted, 1);

        let measured = StandardFont::Helvetica.width_of_text("a\u{4E2D}b", Pt(12.0));
        let expected = StandardFont::Helvetica.width_of_text("a?b", Pt(12.0));
        assert_eq!(measured, expected);
    }

    #[test]
    fn accented_letters_use_base_advance() {
        assert_eq!(
            StandardFont::TimesRoman.width_of_text("Jos\u{E9}", Pt(10.0)),
            StandardFont::TimesRoman.width_of_text("Jose", Pt(10.0))
        );
    }

    #[test]
    fn base_font_names_round_trip() {
        for font in [
            StandardFont::Helvetica,
            StandardFont::TimesRoman,
            StandardFont::Courier,
        ] {
            assert_eq!(StandardFont::from_base_font(font.base_font()), Some(font));
        }
        assert_eq!(StandardFont::from_base_font("Comic Sans"), None);
    }
}
