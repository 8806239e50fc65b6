// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap Allocator (WiFi und picoserve brauchen dynamischen Speicher)
extern crate alloc;

// Module
pub mod config;
pub mod tasks;
pub mod web;

// Re-exports von esp-core (nur was diese Crate selbst konsumiert)
pub use esp_core::{Asset, DownloadCounter, DownloadRequest};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

// ============================================================================
// Globaler Download-Zähler
// ============================================================================

/// Zählt jeden Test-Daten-Download (uc1 und uc2 gemeinsam)
///
/// Wird im Request-Log mitausgegeben und über `GET /api/stats` exponiert.
pub static DOWNLOAD_COUNT: DownloadCounter = DownloadCounter::new();

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Signaturen.
// Statt:  Channel<CriticalSectionRawMutex, DownloadRequest, 1>
// Nutze:  DeferredRequestChannel

/// Single-Slot-Channel für deferred Downloads (HTTP-Task → Main-Loop)
///
/// Kapazität 1: es ist höchstens ein deferred Request in Arbeit.
pub type DeferredRequestChannel = Channel<CriticalSectionRawMutex, DownloadRequest, 1>;

/// Antwort-Signal für deferred Downloads (Main-Loop → HTTP-Task)
///
/// `None` bedeutet: Datei nicht im Test-Daten-Store gefunden.
pub type DeferredReplySignal = Signal<CriticalSectionRawMutex, Option<&'static Asset>>;
