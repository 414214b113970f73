use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidRange,
    LunarConversion,
    UnknownCalendar,
    UnknownView,
    UnknownNavigation,
    DateParse,
    EventParse,
    ConfigParse,
    Uninitialized,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            &format!("Could not parse date: {}", parse_error),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl From<icu_calendar::CalendarError> for Error {
    fn from(calendar_error: icu_calendar::CalendarError) -> Error {
        Error::new(
            ErrorKind::LunarConversion,
            &format!("Could not convert date: {}", calendar_error),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::InvalidRange => "invalid date range".to_owned(),
            ErrorKind::LunarConversion => "lunar conversion failed".to_owned(),
            ErrorKind::UnknownCalendar => "unknown lunar calendar".to_owned(),
            ErrorKind::UnknownView => "unknown view".to_owned(),
            ErrorKind::UnknownNavigation => "unknown navigation".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::EventParse => "invalid event definition".to_owned(),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::Uninitialized => "calendar engine not initialized".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
