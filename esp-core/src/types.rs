//! Core Types für den Webserver
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Maximale Länge eines Dateinamens in Download-URLs
pub const MAX_FILE_NAME_LEN: usize = 64;

/// Bounded String für Dateinamen aus Download-URLs
pub type FileName = heapless::String<MAX_FILE_NAME_LEN>;

/// Eine zur Compile-Zeit eingebettete Datei
///
/// Statt eines Flash-Dateisystems liegen Pfad und Inhalt als `'static`
/// Daten im Binary. Der Content-Type wird beim Ausliefern
/// aus der Datei-Endung abgeleitet (siehe `logic::content_type_for`).
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    /// Absoluter URL-Pfad, z.B. "/index.html" oder "/testData/lorem.txt"
    pub path: &'static str,
    /// Datei-Inhalt
    pub body: &'static [u8],
}

/// Read-only Store für eingebettete Dateien
///
/// Lookup ist exakt über den vollständigen URL-Pfad.
#[derive(Debug, Clone, Copy)]
pub struct AssetStore {
    assets: &'static [Asset],
}

impl AssetStore {
    /// Erstellt einen Store über einer statischen Asset-Liste
    pub const fn new(assets: &'static [Asset]) -> Self {
        Self { assets }
    }

    /// Sucht eine Datei über ihren exakten URL-Pfad
    pub fn lookup(&self, path: &str) -> Option<&'static Asset> {
        self.assets.iter().find(|asset| asset.path == path)
    }

    /// Anzahl der eingebetteten Dateien
    pub fn count(&self) -> usize {
        self.assets.len()
    }

    /// Gesamtgröße aller eingebetteten Dateien in Bytes
    pub fn total_bytes(&self) -> usize {
        self.assets.iter().map(|asset| asset.body.len()).sum()
    }
}

/// Download-Use-Case wie im Log-Tag der Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    /// Download im HTTP-Server-Kontext
    Uc1,
    /// Download deferred in den Main-Loop-Kontext
    Uc2,
}

impl UseCase {
    /// Log-Tag des Use-Cases
    pub fn as_str(self) -> &'static str {
        match self {
            UseCase::Uc1 => "uc1",
            UseCase::Uc2 => "uc2",
        }
    }
}

/// Fehler beim Erstellen eines `DownloadRequest`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadRequestError {
    /// Dateiname überschreitet `MAX_FILE_NAME_LEN`
    FileNameTooLong,
}

/// Ein angeforderter Test-Daten-Download
///
/// Wird für den deferred Use-Case (uc2) über den Single-Slot-Channel an
/// den Main-Loop übergeben.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub file_name: FileName,
    pub use_case: UseCase,
}

impl DownloadRequest {
    /// Erstellt einen Request; schlägt fehl wenn der Dateiname zu lang ist
    pub fn new(file_name: &str, use_case: UseCase) -> Result<Self, DownloadRequestError> {
        let mut name = FileName::new();
        name.push_str(file_name)
            .map_err(|_| DownloadRequestError::FileNameTooLong)?;
        Ok(Self {
            file_name: name,
            use_case,
        })
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for UseCase {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DownloadRequest {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DownloadRequest {{ file: {}, use_case: {} }}",
            self.file_name.as_str(),
            self.use_case
        )
    }
}
