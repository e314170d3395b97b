//! ISO-8601 durations.
//!
//! The document format carries durations textually ("PT5S", "P1DT2H30M").
//! No crate in our dependency set parses this syntax, so the codec keeps a
//! small hand-written parser with a lossless `Display` counterpart.

use std::fmt;

/// An ISO-8601 duration, kept component-wise.
///
/// Weeks are accepted on parse and folded into days (`P2W` → 14 days), so
/// the textual form may normalize while the typed value round-trips
/// exactly. Only the seconds component may carry a fraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

fn integer(buf: &str) -> Option<u32> {
    if buf.contains('.') {
        return None;
    }
    buf.parse().ok()
}

impl IsoDuration {
    /// Parse from the ISO-8601 textual form.
    ///
    /// Returns `None` on malformed input: missing designators, components
    /// out of order, duplicates, fractions outside the seconds component,
    /// or an empty duration body.
    pub fn parse(input: &str) -> Option<Self> {
        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let rest = rest.strip_prefix('P')?;

        let mut out = IsoDuration {
            negative,
            ..Default::default()
        };
        let mut buf = String::new();
        let mut in_time = false;
        // Designator ranks: Y=0 M=1 W=2 D=3, T boundary=4, H=5 M=6 S=7.
        // Ranks must strictly increase, which rejects duplicates and
        // out-of-order components in one check.
        let mut last_rank = -1i8;
        let mut components = 0usize;

        for c in rest.chars() {
            match c {
                'T' if !in_time && buf.is_empty() => {
                    in_time = true;
                    last_rank = 4;
                }
                '0'..='9' => buf.push(c),
                '.' if in_time && !buf.is_empty() && !buf.contains('.') => buf.push(c),
                designator => {
                    if buf.is_empty() {
                        return None;
                    }
                    let rank = match (in_time, designator) {
                        (false, 'Y') => {
                            out.years = integer(&buf)?;
                            0
                        }
                        (false, 'M') => {
                            out.months = integer(&buf)?;
                            1
                        }
                        (false, 'W') => {
                            out.days = out.days.checked_add(integer(&buf)?.checked_mul(7)?)?;
                            2
                        }
                        (false, 'D') => {
                            out.days = out.days.checked_add(integer(&buf)?)?;
                            3
                        }
                        (true, 'H') => {
                            out.hours = integer(&buf)?;
                            5
                        }
                        (true, 'M') => {
                            out.minutes = integer(&buf)?;
                            6
                        }
                        (true, 'S') => {
                            out.seconds = buf.parse().ok().filter(|s: &f64| s.is_finite())?;
                            7
                        }
                        _ => return None,
                    };
                    if rank <= last_rank {
                        return None;
                    }
                    last_rank = rank;
                    components += 1;
                    buf.clear();
                }
            }
        }

        // Trailing digits without a designator, an empty body, or a bare
        // 'T' with no time component are all malformed.
        if !buf.is_empty() || components == 0 || (in_time && last_rank == 4) {
            return None;
        }
        Some(out)
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        let mut wrote_date = false;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
            wrote_date = true;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
            wrote_date = true;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
            wrote_date = true;
        }
        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds != 0.0;
        if has_time {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                if self.seconds.fract() == 0.0 {
                    write!(f, "{}S", self.seconds as u64)?;
                } else {
                    write!(f, "{}S", self.seconds)?;
                }
            }
        } else if !wrote_date {
            // The zero duration still needs one component
            f.write_str("T0S")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        let d = IsoDuration::parse("PT5S").unwrap();
        assert_eq!(d.seconds, 5.0);
        assert!(!d.negative);
        assert_eq!(d.to_string(), "PT5S");
    }

    #[test]
    fn test_parse_mixed() {
        let d = IsoDuration::parse("P1DT2H30M").unwrap();
        assert_eq!(d.days, 1);
        assert_eq!(d.hours, 2);
        assert_eq!(d.minutes, 30);
        assert_eq!(d.to_string(), "P1DT2H30M");
    }

    #[test]
    fn test_parse_weeks_fold_into_days() {
        let d = IsoDuration::parse("P2W").unwrap();
        assert_eq!(d.days, 14);
        assert_eq!(d.to_string(), "P14D");
    }

    #[test]
    fn test_parse_negative() {
        let d = IsoDuration::parse("-PT90S").unwrap();
        assert!(d.negative);
        assert_eq!(d.seconds, 90.0);
        assert_eq!(d.to_string(), "-PT90S");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let d = IsoDuration::parse("PT1.5S").unwrap();
        assert_eq!(d.seconds, 1.5);
        assert_eq!(d.to_string(), "PT1.5S");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "", "P", "PT", "5S", "P5", "P1H", "PT1D", "P1D2Y", "P1.5D", "PT1S1S", "P1DT", "X1D",
        ] {
            assert!(
                IsoDuration::parse(input).is_none(),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for input in ["PT0S", "P3Y6M4DT12H30M5S", "PT36H", "P1M", "PT1M"] {
            let d = IsoDuration::parse(input).unwrap();
            let again = IsoDuration::parse(&d.to_string()).unwrap();
            assert_eq!(d, again, "roundtrip failed for '{input}'");
        }
    }

    #[test]
    fn test_zero() {
        let d = IsoDuration::parse("PT0S").unwrap();
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "PT0S");
    }
}
