// Deferred Download Slot - verschiebt uc2-Downloads in den Main-Loop
//
// Die Connection gehört dem HTTP-Handler, deshalb wandert nur der
// Dateiname über einen Single-Slot-Channel in den Main-Loop; der Handler
// wartet auf das aufgelöste Asset und schreibt damit die Antwort. Lookup,
// Zähler und Log laufen so außerhalb des Server-Kontexts.
//
// Slot-Invariante: höchstens ein uc2-Request ist gleichzeitig in Arbeit.
// Der Claim läuft über `DeferredSlot` (esp-core, host-getestet) und wird
// auf jedem Rückweg von `submit()` wieder freigegeben.

use defmt::info;

use esp_core::{Asset, DeferredSlot, DownloadRequest};

use crate::config::TEST_DATA_PATH;
use crate::web::test_data_asset;
use crate::{DOWNLOAD_COUNT, DeferredReplySignal, DeferredRequestChannel};

/// Claim des deferred Slots
static SLOT: DeferredSlot = DeferredSlot::new();

/// Request-Übergabe HTTP-Task → Main-Loop (Kapazität 1)
static REQUEST: DeferredRequestChannel = DeferredRequestChannel::new();

/// Antwort-Übergabe Main-Loop → HTTP-Task
static REPLY: DeferredReplySignal = DeferredReplySignal::new();

/// Reicht einen uc2-Request an den Main-Loop weiter und wartet auf das Asset
///
/// # Rückgabe
/// - `None`: Slot bereits belegt, Request abgewiesen (Handler antwortet 503)
/// - `Some(None)`: Datei nicht im Test-Daten-Store gefunden
/// - `Some(Some(asset))`: aufgelöstes Asset für die Antwort
pub async fn submit(request: DownloadRequest) -> Option<Option<&'static Asset>> {
    // Slot claimen; bei Contention sofort ablehnen
    if !SLOT.try_claim() {
        return None;
    }

    // Altes Signal verwerfen, dann Request übergeben und auf Antwort warten
    REPLY.reset();
    REQUEST.send(request).await;
    let asset = REPLY.wait().await;

    SLOT.release();

    Some(asset)
}

/// Bearbeitet den nächsten deferred Request im Main-Loop-Kontext
///
/// Zähler, Log und Datei-Lookup laufen hier - nicht im HTTP-Task.
/// Wird vom Main-Loop der Wildcard-Variante endlos aufgerufen.
pub async fn service_next() {
    let request = REQUEST.receive().await;

    let count = DOWNLOAD_COUNT.record();
    info!(
        "{} - {}{} requested ({}).",
        count,
        TEST_DATA_PATH,
        request.file_name.as_str(),
        request.use_case
    );

    REPLY.signal(test_data_asset(&request.file_name));
}
