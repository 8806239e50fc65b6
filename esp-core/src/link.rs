//! WiFi Link-Status Tracker
//!
//! Pure Zustandslogik ohne Netzwerk-Dependencies: erkennt die Flanken
//! connected → disconnected und umgekehrt, damit der Firmware-Task jede
//! Transition genau einmal loggen kann.

/// Flanken-Ereignis des WiFi-Links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// Link war getrennt und ist jetzt verbunden
    Connected,
    /// Link war verbunden und ist jetzt getrennt
    Disconnected,
}

/// Zwei-Zustands-Tracker für den WiFi-Link
///
/// Entspricht einem einzelnen Boolean-Flag: `update()` liefert nur bei
/// einem Zustandswechsel ein Ereignis, ansonsten `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkTracker {
    connected: bool,
}

impl LinkTracker {
    /// Erstellt einen Tracker im Zustand "getrennt"
    pub const fn new() -> Self {
        Self { connected: false }
    }

    /// Meldet den aktuellen Link-Status und liefert das Flanken-Ereignis
    pub fn update(&mut self, link_up: bool) -> Option<LinkEvent> {
        match (self.connected, link_up) {
            (false, true) => {
                self.connected = true;
                Some(LinkEvent::Connected)
            }
            (true, false) => {
                self.connected = false;
                Some(LinkEvent::Disconnected)
            }
            _ => None,
        }
    }

    /// Aktueller Zustand des Trackers
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LinkEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LinkEvent::Connected => defmt::write!(fmt, "Connected"),
            LinkEvent::Disconnected => defmt::write!(fmt, "Disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_disconnected() {
        let tracker = LinkTracker::new();
        assert!(!tracker.is_connected());
    }

    #[test]
    fn test_connect_edge_fires_once() {
        let mut tracker = LinkTracker::new();
        assert_eq!(tracker.update(true), Some(LinkEvent::Connected));
        assert_eq!(tracker.update(true), None);
        assert!(tracker.is_connected());
    }

    #[test]
    fn test_disconnect_edge_fires_once() {
        let mut tracker = LinkTracker::new();
        tracker.update(true);
        assert_eq!(tracker.update(false), Some(LinkEvent::Disconnected));
        assert_eq!(tracker.update(false), None);
        assert!(!tracker.is_connected());
    }

    #[test]
    fn test_stays_quiet_while_disconnected() {
        let mut tracker = LinkTracker::new();
        assert_eq!(tracker.update(false), None);
        assert_eq!(tracker.update(false), None);
    }
}
