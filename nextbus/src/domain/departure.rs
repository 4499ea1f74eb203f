//! Departure records and their two lexical forms.

/// One upcoming departure from a stop, as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Raw departure text: "Due", "5 Min", or a dial time like "1:30".
    pub departure_text: String,
    /// e.g. "NB" or "SB".
    pub direction_text: String,
}

impl Departure {
    pub fn new(departure_text: impl Into<String>, direction_text: impl Into<String>) -> Self {
        Self {
            departure_text: departure_text.into(),
            direction_text: direction_text.into(),
        }
    }
}

/// How a departure text must be interpreted.
///
/// Classification is by substring, checked in order: anything containing
/// "Min" is a countdown, anything containing "Due" is arriving now, and
/// everything else is treated as a dial time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureForm<'a> {
    /// Already a countdown, e.g. "5 Min".
    Countdown(&'a str),
    /// Arriving now.
    Due(&'a str),
    /// A dial time still needing disambiguation, e.g. "1:30".
    Clock(&'a str),
}

impl<'a> DepartureForm<'a> {
    pub fn classify(text: &'a str) -> Self {
        if text.contains("Min") {
            DepartureForm::Countdown(text)
        } else if text.contains("Due") {
            DepartureForm::Due(text)
        } else {
            DepartureForm::Clock(text)
        }
    }
}
