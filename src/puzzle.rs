//! The three words of an addition puzzle, validated.
//!
//! A [`Puzzle`] is built either from already-split words ([`Puzzle::new`]) or
//! from raw text ([`str::parse`]), which accepts two layouts:
//! - an equation line: `SEND + MORE = MONEY` (spaces optional);
//! - one word per non-blank line, addends first and the sum last.
//!
//! Text is upper-cased before validation, so `send+more=money` is accepted.
//! Validation rejects anything but exactly three non-empty words of `A`-`Z`,
//! each at most [`MAX_WORD_LEN`] letters long.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::bytes::complete::{is_not, tag};
use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::sequence::delimited;
use nom::{IResult, Parser};

use crate::errors::ParseError;
use crate::puzzle_char::PuzzleChar;

/// Longest word accepted. Search depth is bounded by the number of letters
/// plus one carry per column, so this also bounds recursion depth.
pub const MAX_WORD_LEN: usize = 32;

const NUM_WORDS: usize = 3;

/// Parser result type: input, output, with our custom `ParseError`
type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// `addend1 + addend2 = sum`, each word uppercase `A`-`Z` and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    words: [String; NUM_WORDS],
}

impl Puzzle {
    /// Validate three words given in addition order (addend, addend, sum).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::WrongWordCount` unless exactly three words are given,
    /// `ParseError::EmptyWord` for an empty word, `ParseError::InvalidLetter`
    /// for a character outside `A`-`Z` and `ParseError::WordTooLong` past
    /// [`MAX_WORD_LEN`].
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, Box<ParseError>> {
        let [addend1, addend2, sum] = words else {
            return Err(Box::new(ParseError::WrongWordCount { found: words.len() }));
        };

        let mut validated: [String; NUM_WORDS] = Default::default();
        for (index, (dst, word)) in validated.iter_mut().zip([addend1, addend2, sum]).enumerate() {
            *dst = validate_word(index, word.as_ref())?;
        }

        Ok(Puzzle { words: validated })
    }

    #[must_use]
    pub fn addend1(&self) -> &str {
        &self.words[0]
    }

    #[must_use]
    pub fn addend2(&self) -> &str {
        &self.words[1]
    }

    #[must_use]
    pub fn sum(&self) -> &str {
        &self.words[2]
    }

    /// The three words in addition order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Length of the longer addend, i.e. the number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.addend1().len().max(self.addend2().len())
    }

    /// Native-only convenience method: read a puzzle file and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be read or does not hold a
    /// well-formed puzzle.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Puzzle> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e)
            )
        })?;

        data.parse::<Puzzle>().map_err(|e| std::io::Error::from(*e))
    }
}

fn validate_word(index: usize, word: &str) -> Result<String, Box<ParseError>> {
    if word.is_empty() {
        return Err(Box::new(ParseError::EmptyWord { index }));
    }
    if let Some(invalid_char) = word.chars().find(|c| !c.is_puzzle_letter()) {
        return Err(Box::new(ParseError::InvalidLetter { word: word.to_string(), invalid_char }));
    }
    if word.len() > MAX_WORD_LEN {
        return Err(Box::new(ParseError::WordTooLong {
            word: word.to_string(),
            len: word.len(),
            max: MAX_WORD_LEN,
        }));
    }
    Ok(word.to_string())
}

// === Token parsers ===

/// Anything up to the next operator or whitespace; letters are checked later
/// so that a bad character is reported as such rather than as a syntax error.
fn word(input: &'_ str) -> PResult<'_, &'_ str> {
    is_not("+= \t\r\n").parse(input)
}

fn operator<'a>(op: &'static str) -> impl Parser<&'a str, Output = &'a str, Error = Box<ParseError>> {
    delimited(multispace0, tag(op), multispace0)
}

/// `WORD + WORD = WORD`
fn equation(input: &'_ str) -> PResult<'_, [&'_ str; NUM_WORDS]> {
    let (input, _) = multispace0(input)?;
    let (input, addend1) = word(input)?;
    let (input, _) = operator("+").parse(input)?;
    let (input, addend2) = word(input)?;
    let (input, _) = operator("=").parse(input)?;
    let (input, sum) = word(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, [addend1, addend2, sum]))
}

fn parse_equation(text: &str) -> Result<Puzzle, Box<ParseError>> {
    match all_consuming(equation).parse(text) {
        Ok((_, words)) => Puzzle::new(&words),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(Box::new(ParseError::InvalidEquation {
            input: text.trim().to_string(),
            reason: match *e {
                ParseError::InvalidEquation { input, .. } if input.is_empty() => "unexpected end of input".to_string(),
                ParseError::InvalidEquation { input, .. } => format!("unexpected text at \"{input}\""),
                other => other.to_string(),
            },
        })),
        Err(nom::Err::Incomplete(_)) => Err(Box::new(ParseError::InvalidEquation {
            input: text.trim().to_string(),
            reason: "unexpected end of input".to_string(),
        })),
    }
}

impl FromStr for Puzzle {
    type Err = Box<ParseError>;

    /// Parse puzzle text: an equation line if it has an operator, otherwise
    /// one word per non-blank line.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.to_ascii_uppercase();

        if text.contains(['+', '=']) {
            return parse_equation(&text);
        }

        let words: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Puzzle::new(&words)
    }
}

/// `SEND + MORE = MONEY`
impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.addend1(), self.addend2(), self.sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_three_words() {
        let p = Puzzle::new(&["SEND", "MORE", "MONEY"]).unwrap();
        assert_eq!(p.addend1(), "SEND");
        assert_eq!(p.addend2(), "MORE");
        assert_eq!(p.sum(), "MONEY");
        assert_eq!(p.num_columns(), 4);
    }

    #[test]
    fn test_new_rejects_two_words() {
        let err = Puzzle::new(&["SEND", "MORE"]).unwrap_err();
        assert!(matches!(*err, ParseError::WrongWordCount { found: 2 }));
    }

    #[test]
    fn test_new_rejects_four_words() {
        let err = Puzzle::new(&["A", "B", "C", "D"]).unwrap_err();
        assert!(matches!(*err, ParseError::WrongWordCount { found: 4 }));
    }

    #[test]
    fn test_new_rejects_empty_word() {
        let err = Puzzle::new(&["A", "", "B"]).unwrap_err();
        assert!(matches!(*err, ParseError::EmptyWord { index: 1 }));
    }

    #[test]
    fn test_new_rejects_lowercase_and_digits() {
        let err = Puzzle::new(&["send", "MORE", "MONEY"]).unwrap_err();
        assert!(matches!(*err, ParseError::InvalidLetter { invalid_char: 's', .. }));

        let err = Puzzle::new(&["SE7EN", "MORE", "MONEY"]).unwrap_err();
        assert!(matches!(*err, ParseError::InvalidLetter { invalid_char: '7', .. }));
    }

    #[test]
    fn test_new_rejects_overlong_word() {
        let long = "A".repeat(MAX_WORD_LEN + 1);
        let err = Puzzle::new(&[long.as_str(), "B", "C"]).unwrap_err();
        assert!(matches!(*err, ParseError::WordTooLong { len, .. } if len == MAX_WORD_LEN + 1));
    }

    #[test]
    fn test_parse_equation_line() {
        let p: Puzzle = "SEND + MORE = MONEY".parse().unwrap();
        assert_eq!(p.words(), &["SEND", "MORE", "MONEY"]);
    }

    #[test]
    fn test_parse_equation_without_spaces_and_lowercase() {
        let p: Puzzle = "send+more=money\n".parse().unwrap();
        assert_eq!(p.words(), &["SEND", "MORE", "MONEY"]);
    }

    #[test]
    fn test_parse_lines() {
        let p: Puzzle = "SEND\nMORE\n\nMONEY\n".parse().unwrap();
        assert_eq!(p.words(), &["SEND", "MORE", "MONEY"]);
    }

    #[test]
    fn test_parse_lines_trims_whitespace() {
        let p: Puzzle = "  TO \r\n GO\r\nOUT  ".parse().unwrap();
        assert_eq!(p.words(), &["TO", "GO", "OUT"]);
    }

    #[test]
    fn test_parse_two_lines_is_wrong_word_count() {
        let err = "SEND\nMORE\n".parse::<Puzzle>().unwrap_err();
        assert!(matches!(*err, ParseError::WrongWordCount { found: 2 }));
    }

    #[test]
    fn test_parse_truncated_equation() {
        let err = "SEND + MORE =".parse::<Puzzle>().unwrap_err();
        assert!(matches!(*err, ParseError::InvalidEquation { .. }));
    }

    #[test]
    fn test_parse_three_addends_is_rejected() {
        let err = "A + B + C = D".parse::<Puzzle>().unwrap_err();
        assert!(matches!(*err, ParseError::InvalidEquation { .. }));
    }

    #[test]
    fn test_parse_bad_letter_in_equation() {
        let err = "SE7EN + MORE = MONEY".parse::<Puzzle>().unwrap_err();
        assert!(matches!(*err, ParseError::InvalidLetter { invalid_char: '7', .. }));
    }

    #[test]
    fn test_display() {
        let p = Puzzle::new(&["A", "A", "B"]).unwrap();
        assert_eq!(p.to_string(), "A + A = B");
    }
}
