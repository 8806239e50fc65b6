// Web-Modul: eingebettete Dateien und HTTP-Protokoll-Typen
//
// Die Dateien werden zur Compile-Zeit ins Binary eingebettet (kein
// Flash-Dateisystem nötig). Lookup läuft über den read-only AssetStore
// aus esp-core.

pub mod protocol;

use core::fmt::Write;

use esp_core::{Asset, AssetStore};

use crate::config::{ASSET_PATH_BUFFER_SIZE, TEST_DATA_PATH};

/// Statische Assets mit Cache-Control (Gegenstück zu serveStatic)
pub static ASSETS: AssetStore = AssetStore::new(&[
    Asset {
        path: "/index.html",
        body: include_bytes!("assets/index.html"),
    },
    Asset {
        path: "/favicon.png",
        body: include_bytes!("assets/favicon.png"),
    },
    Asset {
        path: "/images/logo.svg",
        body: include_bytes!("assets/images/logo.svg"),
    },
    Asset {
        path: "/js/app.js",
        body: include_bytes!("assets/js/app.js"),
    },
    Asset {
        path: "/style/main.css",
        body: include_bytes!("assets/style/main.css"),
    },
]);

/// Test-Daten für die Download-Routen unter /download/uc1/* und /download/uc2/*
pub static TEST_DATA: AssetStore = AssetStore::new(&[
    Asset {
        path: "/testData/lorem.txt",
        body: include_bytes!("testdata/lorem.txt"),
    },
    Asset {
        path: "/testData/numbers.csv",
        body: include_bytes!("testdata/numbers.csv"),
    },
    Asset {
        path: "/testData/pattern.bin",
        body: include_bytes!("testdata/pattern.bin"),
    },
]);

/// Löst einen Dateinamen unter dem Test-Daten-Pfad auf
///
/// Baut "/testData/" + Dateiname und sucht exakt im Store.
/// Überlange Namen können nicht existieren und liefern `None`.
pub fn test_data_asset(file_name: &str) -> Option<&'static Asset> {
    let mut path = heapless::String::<ASSET_PATH_BUFFER_SIZE>::new();
    write!(&mut path, "{}{}", TEST_DATA_PATH, file_name).ok()?;
    TEST_DATA.lookup(&path)
}

/// Löst einen Dateinamen unterhalb eines Asset-Verzeichnisses auf
///
/// Für die Verzeichnis-Routen /images/, /js/ und /style/.
pub fn dir_asset(dir: &str, file_name: &str) -> Option<&'static Asset> {
    let mut path = heapless::String::<ASSET_PATH_BUFFER_SIZE>::new();
    write!(&mut path, "{}{}", dir, file_name).ok()?;
    ASSETS.lookup(&path)
}
