// Hand-written tokenizer for the leading "quantity unit item" of an ingredient line.
// Grammar: [int ws] frac | int [ws] glyph | glyph | decimal | int, then letters, then rest.

use crate::quantity::types::ParsedIngredient;
use tracing::trace;

/// Unicode vulgar fractions accepted in place of (or after) an integer
const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('½', 1.0 / 2.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 1.0 / 4.0),
    ('¾', 3.0 / 4.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
];

fn glyph_value(c: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

/// Outcome of scanning for a leading number
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan {
    Found(f64),
    /// A fraction with a zero denominator; treated as no quantity at all
    ZeroDenominator,
    Missing,
}

/// Read-only view over the unconsumed tail of the input.
///
/// `Copy` so a lookahead is just a copy that is committed by assignment.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let end = self.rest.find(|c: char| !pred(c)).unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(taken)
    }

    fn eat_digits(&mut self) -> Option<&'a str> {
        self.eat_while(|c| c.is_ascii_digit())
    }

    fn eat_letters(&mut self) -> Option<&'a str> {
        self.eat_while(char::is_alphabetic)
    }

    fn eat_whitespace(&mut self) -> bool {
        self.eat_while(char::is_whitespace).is_some()
    }

    fn eat_glyph(&mut self) -> Option<f64> {
        let value = glyph_value(self.peek()?)?;
        self.bump();
        Some(value)
    }

    /// Text consumed since `start` was copied
    fn consumed_since(&self, start: Cursor<'a>) -> &'a str {
        &start.rest[..start.rest.len() - self.rest.len()]
    }
}

fn parse_digits(digits: &str) -> f64 {
    // Only ASCII digits reach here, which always parse (overflow becomes infinity).
    digits.parse::<f64>().unwrap_or(f64::INFINITY)
}

fn fraction(numerator: &str, denominator: &str) -> Scan {
    let denominator = parse_digits(denominator);
    if denominator == 0.0 {
        return Scan::ZeroDenominator;
    }
    Scan::Found(parse_digits(numerator) / denominator)
}

/// Scan `d/d` after an integer and whitespace; `None` leaves the cursor untouched
fn scan_trailing_fraction(cursor: &mut Cursor<'_>) -> Option<Scan> {
    let mut look = *cursor;
    let numerator = look.eat_digits()?;
    if !look.eat('/') {
        return None;
    }
    let denominator = look.eat_digits()?;
    *cursor = look;
    Some(fraction(numerator, denominator))
}

fn scan_quantity(cursor: &mut Cursor<'_>) -> Scan {
    if let Some(value) = cursor.eat_glyph() {
        return Scan::Found(value);
    }

    let start = *cursor;
    let whole = match cursor.eat_digits() {
        Some(digits) => digits,
        None => return Scan::Missing,
    };
    let whole_value = parse_digits(whole);

    match cursor.peek() {
        Some('.') => {
            let mut look = *cursor;
            look.bump();
            if look.eat_digits().is_some() {
                *cursor = look;
                let literal = cursor.consumed_since(start);
                return Scan::Found(literal.parse::<f64>().unwrap_or(whole_value));
            }
            // "2. cups": a bare point closes the number
            if look.peek().is_none() || look.peek().is_some_and(char::is_whitespace) {
                *cursor = look;
            }
            Scan::Found(whole_value)
        }
        Some('/') => {
            let mut look = *cursor;
            look.bump();
            match look.eat_digits() {
                Some(denominator) => {
                    *cursor = look;
                    fraction(whole, denominator)
                }
                None => Scan::Found(whole_value),
            }
        }
        Some(c) if glyph_value(c).is_some() => {
            let glyph = cursor.eat_glyph().unwrap_or(0.0);
            Scan::Found(whole_value + glyph)
        }
        Some(c) if c.is_whitespace() => {
            let mut look = *cursor;
            look.eat_whitespace();
            if let Some(glyph) = look.eat_glyph() {
                *cursor = look;
                return Scan::Found(whole_value + glyph);
            }
            match scan_trailing_fraction(&mut look) {
                Some(Scan::Found(part)) => {
                    *cursor = look;
                    Scan::Found(whole_value + part)
                }
                Some(other) => other,
                None => Scan::Found(whole_value),
            }
        }
        _ => Scan::Found(whole_value),
    }
}

fn scan_unit(cursor: &mut Cursor<'_>) -> String {
    cursor.eat_whitespace();
    let word = match cursor.eat_letters() {
        Some(word) => word.to_lowercase(),
        None => return String::new(),
    };

    // "fl oz" / "fl. oz" is the only two-word unit in the vocabulary
    if word == "fl" {
        let mut look = *cursor;
        look.eat('.');
        look.eat_whitespace();
        if let Some(next) = look.eat_letters() {
            if next.eq_ignore_ascii_case("oz") {
                *cursor = look;
                cursor.eat('.');
                return "fl oz".to_string();
            }
        }
    }

    cursor.eat('.');
    word
}

/// Split an ingredient line into quantity, unit and item.
///
/// Never fails: a line without a leading number (or with a zero denominator)
/// comes back with `quantity: None` and the whole trimmed text as `item`.
pub fn parse(ingredient: &str) -> ParsedIngredient {
    let trimmed = ingredient.trim();
    let mut cursor = Cursor::new(trimmed);

    let quantity = match scan_quantity(&mut cursor) {
        Scan::Found(value) => value,
        Scan::ZeroDenominator => {
            trace!(input = trimmed, "zero denominator, treating as unquantified");
            return ParsedIngredient::unquantified(trimmed);
        }
        Scan::Missing => {
            trace!(input = trimmed, "no leading quantity");
            return ParsedIngredient::unquantified(trimmed);
        }
    };

    let unit = scan_unit(&mut cursor);
    let item = cursor.rest.trim().to_string();

    trace!(input = trimmed, quantity, unit = %unit, item = %item, "parsed ingredient");
    ParsedIngredient {
        quantity: Some(quantity),
        unit,
        item,
    }
}

/// Parse only the leading quantity of a string
pub fn parse_quantity(text: &str) -> Option<f64> {
    let mut cursor = Cursor::new(text.trim());
    match scan_quantity(&mut cursor) {
        Scan::Found(value) => Some(value),
        Scan::ZeroDenominator | Scan::Missing => None,
    }
}
