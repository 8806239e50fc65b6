//! Download-Zustand: deferred Slot und Request-Zähler
//!
//! Pure, atomare Zustandstypen ohne Hardware-Dependencies. Die Firmware
//! legt sie als `static` an; die Invarianten (höchstens ein deferred
//! Request in Arbeit, monoton steigender Zähler) sind hier host-testbar.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Single-Slot-Claim für deferred Downloads
///
/// Der Slot fasst höchstens einen Request: `try_claim()` gelingt nur
/// wenn er frei ist, `release()` gibt ihn auf jedem Rückweg wieder frei.
#[derive(Debug)]
pub struct DeferredSlot {
    busy: AtomicBool,
}

impl DeferredSlot {
    /// Erstellt einen freien Slot
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Versucht den Slot zu belegen; `false` bei Contention
    pub fn try_claim(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Gibt den Slot wieder frei
    pub fn release(&self) {
        self.busy.store(false, Ordering::Release);
    }

    /// Aktueller Zustand des Slots
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Default for DeferredSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotoner Zähler für Test-Daten-Downloads (uc1 und uc2 gemeinsam)
#[derive(Debug)]
pub struct DownloadCounter {
    count: AtomicU32,
}

impl DownloadCounter {
    /// Erstellt einen Zähler bei 0
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    /// Zählt einen Request und liefert den neuen Stand
    pub fn record(&self) -> u32 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Aktueller Stand ohne zu zählen
    pub fn current(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for DownloadCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_free() {
        let slot = DeferredSlot::new();
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_second_claim_while_busy_is_rejected() {
        let slot = DeferredSlot::new();
        assert!(slot.try_claim());
        assert!(!slot.try_claim());
        assert!(slot.is_busy());
    }

    #[test]
    fn test_release_allows_next_claim() {
        let slot = DeferredSlot::new();
        assert!(slot.try_claim());
        slot.release();
        assert!(!slot.is_busy());
        assert!(slot.try_claim());
    }

    #[test]
    fn test_counter_is_monotonic() {
        let counter = DownloadCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.record(), 1);
        assert_eq!(counter.record(), 2);
        assert_eq!(counter.record(), 3);
        assert_eq!(counter.current(), 3);
    }
}
