// HTTP-Protokoll-Definitionen
// Definiert die JSON-Antwort für GET /api/stats

use serde::Serialize;

/// Server-Statistiken für GET /api/stats
///
/// Download-Zähler, Asset-Store-Größen und Uptime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    /// Anzahl aller Test-Daten-Downloads (uc1 + uc2)
    pub downloads: u32,
    /// Anzahl statischer Assets
    pub asset_count: usize,
    /// Gesamtgröße statischer Assets in Bytes
    pub asset_bytes: usize,
    /// Anzahl Test-Daten-Dateien
    pub test_data_count: usize,
    /// Gesamtgröße der Test-Daten in Bytes
    pub test_data_bytes: usize,
    /// Millisekunden seit Boot
    pub uptime_ms: u64,
}
