// Projekt-Konfiguration: Konstanten für WiFi, HTTP und mDNS
#![allow(dead_code)]

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Netzwerk-Hostname
/// Wird via DHCP Option 12 gemeldet und via mDNS als <HOSTNAME>.local advertised
pub const NETWORK_HOSTNAME: &str = "webservertest";

/// Wartezeit nach WiFi-Verbindungsfehler vor erneutem Versuch (Sekunden)
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Polling-Intervall des Link-Monitors (Millisekunden)
/// Balance zwischen Reaktivität der Connect/Disconnect-Logs und CPU-Last
pub const LINK_POLL_INTERVAL_MS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// Webserver Port
pub const WEBSERVER_PORT: u16 = 80;

/// Cache-Control Direktive für statische Assets
/// Clients dürfen Dateien aus dem Asset-Store 1 Stunde cachen
pub const STATIC_CACHE_CONTROL: &str = "max-age=3600";

/// Basis-Pfad aller Test-Daten im Asset-Store
pub const TEST_DATA_PATH: &str = "/testData/";

/// Fest verdrahtete Download-Datei der Basic-Variante
pub const BASIC_TEST_DATA_FILE: &str = "lorem.txt";

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers; Bodies werden in Chunks gesendet
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Buffer für zusammengesetzte Asset-Pfade
/// z.B. "/testData/" + Dateiname (max. 64 Zeichen)
pub const ASSET_PATH_BUFFER_SIZE: usize = 96;

/// Buffer für den Content-Disposition Header
/// Für attachment; filename="..." mit max. 64 Zeichen Dateiname
pub const DISPOSITION_BUFFER_SIZE: usize = 128;

/// JSON Serialisierungs-Buffer für GET /api/stats
/// Für {"downloads":...,"asset_count":...,"uptime_ms":...}
pub const JSON_STATS_BUFFER_SIZE: usize = 192;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Der ESP32 wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = NETWORK_HOSTNAME;

/// mDNS TTL (Time To Live) in Sekunden
/// Gibt an, wie lange andere Geräte die mDNS-Antwort cachen dürfen
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
/// Wartezeit nach Fehler vor erneutem Versuch
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353 laut RFC 6762)
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
/// Standard mDNS Multicast-Gruppe laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
/// edge-nal-embassy benötigt Buffer für UDP-Pakete
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;
