//! Line grammar for Navitas reservation text.
//!
//! Each non-empty line of a block is classified into exactly one [`Line`]
//! by trying the patterns in priority order: passenger, segment, fare,
//! reference. Anything else is [`Line::Unrecognized`].

use std::sync::OnceLock;

use regex::Regex;

/// Compiled patterns, built once per process.
#[derive(Debug)]
pub struct Grammar {
    block_break: Regex,
    passenger: Regex,
    segment: Regex,
    fare: Regex,
    reference: Regex,
}

/// Raw captures of a segment line, before alias normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentTokens<'a> {
    pub airline: &'a str,
    pub flight_number: &'a str,
    pub date: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub dep_time: &'a str,
    pub arr_time: &'a str,
    pub day_offset: Option<&'a str>,
}

/// A classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Passenger(&'a str),
    Segment(SegmentTokens<'a>),
    Fare { currency: &'a str, amount: &'a str },
    Reference(&'a str),
    Unrecognized,
}

impl Grammar {
    /// Returns the shared grammar, compiling it on first use.
    pub fn get() -> Result<&'static Grammar, &'static regex::Error> {
        static GRAMMAR: OnceLock<Result<Grammar, regex::Error>> = OnceLock::new();
        GRAMMAR.get_or_init(Grammar::compile).as_ref()
    }

    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            block_break: Regex::new(r"\n\s*\n")?,
            passenger: Regex::new(r"^[A-Z][a-z]+(?: +[A-Z][a-z]+)+$")?,
            segment: Regex::new(
                r"^([A-Z]{2,5})\s+([A-Z0-9]+)\s+(\d{1,2}[A-Za-z]{3})\s+([A-Z]{3})\s+([A-Z]{3})\s+(\d{1,2}:\d{2}[AP])\s+(\d{1,2}:\d{2}[AP])(?:\s+\+(\d+))?$",
            )?,
            fare: Regex::new(r"^(?i:TOTAL\s+FARE\s+INC\s+TAX)\s+([A-Z]{3})(\d+(?:\.\d{2})?)$")?,
            reference: Regex::new(r"^(?i:Reference)\s*:\s*([A-Za-z0-9]{6})$")?,
        })
    }

    /// Split trimmed input into blocks at paragraph breaks.
    ///
    /// Whitespace-only pieces are dropped. The returned slices borrow from
    /// `input` unchanged.
    pub fn split_blocks<'a>(&self, input: &'a str) -> Vec<&'a str> {
        self.block_break
            .split(input)
            .filter(|block| !block.trim().is_empty())
            .collect()
    }

    /// Classify one trimmed, non-empty line.
    ///
    /// `passenger_open` is false once the block has a passenger; name-shaped
    /// lines after that fall through to the other patterns.
    pub fn classify<'a>(&self, line: &'a str, passenger_open: bool) -> Line<'a> {
        if passenger_open && self.passenger.is_match(line) {
            return Line::Passenger(line);
        }

        if let Some(caps) = self.segment.captures(line) {
            let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
            return Line::Segment(SegmentTokens {
                airline: group(1),
                flight_number: group(2),
                date: group(3),
                origin: group(4),
                destination: group(5),
                dep_time: group(6),
                arr_time: group(7),
                day_offset: caps.get(8).map(|m| m.as_str()),
            });
        }

        if let Some(caps) = self.fare.captures(line) {
            if let (Some(currency), Some(amount)) = (caps.get(1), caps.get(2)) {
                return Line::Fare {
                    currency: currency.as_str(),
                    amount: amount.as_str(),
                };
            }
        }

        if let Some(code) = self.reference.captures(line).and_then(|caps| caps.get(1)) {
            return Line::Reference(code.as_str());
        }

        Line::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> &'static Grammar {
        Grammar::get().unwrap()
    }

    fn classify(line: &str) -> Line<'_> {
        grammar().classify(line, true)
    }

    #[test]
    fn passenger_lines() {
        assert_eq!(classify("Evan Lodge"), Line::Passenger("Evan Lodge"));
        assert_eq!(
            classify("Mary Ann Smith"),
            Line::Passenger("Mary Ann Smith")
        );
        // Single word, all caps and lowercase names are not passengers
        assert_eq!(classify("Evan"), Line::Unrecognized);
        assert_eq!(classify("EVAN LODGE"), Line::Unrecognized);
        assert_eq!(classify("evan lodge"), Line::Unrecognized);
    }

    #[test]
    fn passenger_slot_closed() {
        assert_eq!(grammar().classify("Evan Lodge", false), Line::Unrecognized);
    }

    #[test]
    fn segment_line() {
        let line = "AA 8453 10Aug LAX HND  2:15P 5:25P +1";
        assert_eq!(
            classify(line),
            Line::Segment(SegmentTokens {
                airline: "AA",
                flight_number: "8453",
                date: "10Aug",
                origin: "LAX",
                destination: "HND",
                dep_time: "2:15P",
                arr_time: "5:25P",
                day_offset: Some("1"),
            })
        );
    }

    #[test]
    fn segment_without_offset() {
        match classify("AA 170  15Aug HND LAX 11:55A 6:00A") {
            Line::Segment(tokens) => {
                assert_eq!(tokens.flight_number, "170");
                assert_eq!(tokens.day_offset, None);
            }
            other => panic!("expected segment, got {:?}", other),
        }
    }

    #[test]
    fn segment_spelled_tokens() {
        match classify("BATWO EIGHTZEROZERO 29Jun LAX LHR 5:05P 11:35A +1") {
            Line::Segment(tokens) => {
                assert_eq!(tokens.airline, "BATWO");
                assert_eq!(tokens.flight_number, "EIGHTZEROZERO");
            }
            other => panic!("expected segment, got {:?}", other),
        }
    }

    #[test]
    fn partial_segments_rejected() {
        // Missing arrival time
        assert_eq!(classify("AA 2689 10Aug PHX LAX 10:15A"), Line::Unrecognized);
        // 24-hour times are not supported
        assert_eq!(
            classify("AA 2689 10Aug PHX LAX 10:15 11:43"),
            Line::Unrecognized
        );
        // Lowercase airport
        assert_eq!(
            classify("AA 2689 10Aug phx LAX 10:15A 11:43A"),
            Line::Unrecognized
        );
        // Trailing junk
        assert_eq!(
            classify("AA 2689 10Aug PHX LAX 10:15A 11:43A seat 4C"),
            Line::Unrecognized
        );
    }

    #[test]
    fn fare_lines() {
        assert_eq!(
            classify("TOTAL FARE INC TAX  USD5790.81"),
            Line::Fare {
                currency: "USD",
                amount: "5790.81"
            }
        );
        assert_eq!(
            classify("Total Fare Inc Tax EUR450.00"),
            Line::Fare {
                currency: "EUR",
                amount: "450.00"
            }
        );
        assert_eq!(
            classify("TOTAL FARE INC TAX USD500"),
            Line::Fare {
                currency: "USD",
                amount: "500"
            }
        );
        // Currency must be uppercase, fraction must be two digits
        assert_eq!(classify("TOTAL FARE INC TAX usd500"), Line::Unrecognized);
        assert_eq!(classify("TOTAL FARE INC TAX USD500.5"), Line::Unrecognized);
    }

    #[test]
    fn reference_lines() {
        assert_eq!(classify("Reference: UCWYOJ"), Line::Reference("UCWYOJ"));
        assert_eq!(classify("REFERENCE: ab12cd"), Line::Reference("ab12cd"));
        assert_eq!(classify("Reference: UCWYO"), Line::Unrecognized);
        assert_eq!(classify("Reference: UCWYOJX"), Line::Unrecognized);
    }

    #[test]
    fn split_blocks_on_blank_lines() {
        let input = "A one\nA two\n\nB one\n   \t\nC one\n\n\n\nD one";
        assert_eq!(
            grammar().split_blocks(input),
            vec!["A one\nA two", "B one", "C one", "D one"]
        );
    }

    #[test]
    fn split_single_block() {
        assert_eq!(grammar().split_blocks("only\nlines"), vec!["only\nlines"]);
    }
}
