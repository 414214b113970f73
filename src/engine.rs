use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::format::DualCalendar;
use crate::lunar::HijriCalendar;

/// Formatting is only available once the lunar calendar is set up; until
/// then views render nothing.
#[derive(Debug, Clone)]
pub enum Engine {
    Uninitialized,
    Ready(DualCalendar),
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Uninitialized
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn initialize(&mut self, config: &Config) -> Result<&DualCalendar> {
        log::debug!("Initializing {} hijri calendar", config.calendar);
        *self = Engine::Ready(DualCalendar::new(HijriCalendar::new(config.calendar)));
        self.formatter()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Engine::Ready(_))
    }

    pub fn ready(&self) -> Option<&DualCalendar> {
        match self {
            Engine::Ready(calendar) => Some(calendar),
            Engine::Uninitialized => None,
        }
    }

    pub fn formatter(&self) -> Result<&DualCalendar> {
        self.ready().ok_or_else(|| {
            Error::new(
                ErrorKind::Uninitialized,
                "labels requested before the calendar engine was initialized",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::HijriKind;

    #[test]
    fn uninitialized_has_no_formatter() {
        let engine = Engine::new();

        assert!(!engine.is_ready());
        assert!(engine.ready().is_none());
        assert!(matches!(
            engine.formatter().unwrap_err().kind,
            ErrorKind::Uninitialized
        ));
    }

    #[test]
    fn initialize_uses_configured_calendar() {
        let mut engine = Engine::new();
        let config = Config {
            calendar: HijriKind::Tabular,
            ..Config::default()
        };

        let kind = engine.initialize(&config).unwrap().lunar().kind();

        assert_eq!(kind, HijriKind::Tabular);
        assert!(engine.is_ready());
        assert!(engine.formatter().is_ok());
    }
}
