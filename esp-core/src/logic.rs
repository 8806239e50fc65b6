//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Extrahiert den Dateinamen aus einer URL: alles nach dem letzten `/`
///
/// Endet die URL auf `/`, ist das Ergebnis leer (und damit keine gültige
/// Datei im Asset-Store).
///
/// # Beispiele
///
/// ```
/// # use esp_core::file_name_of;
/// assert_eq!(file_name_of("/download/uc1/lorem.txt"), "lorem.txt");
/// assert_eq!(file_name_of("/download/uc1/"), "");
/// ```
pub fn file_name_of(url: &str) -> &str {
    match url.rfind('/') {
        Some(index) => &url[index + 1..],
        None => url,
    }
}

/// Bestimmt den Content-Type anhand der Datei-Endung
///
/// Unbekannte Endungen (und Pfade ohne `.`) werden als Binärdaten
/// ausgeliefert.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = match path.rfind('.') {
        Some(index) => &path[index + 1..],
        None => "",
    };

    match extension {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_of_nested_path() {
        assert_eq!(file_name_of("/download/uc1/lorem.txt"), "lorem.txt");
    }

    #[test]
    fn test_file_name_of_trailing_slash_is_empty() {
        assert_eq!(file_name_of("/download/uc2/"), "");
    }

    #[test]
    fn test_file_name_of_without_slash() {
        assert_eq!(file_name_of("lorem.txt"), "lorem.txt");
    }

    #[test]
    fn test_content_type_for_html() {
        assert_eq!(content_type_for("/index.html"), "text/html; charset=utf-8");
    }

    #[test]
    fn test_content_type_for_unknown_extension() {
        assert_eq!(content_type_for("/testData/pattern.bin"), "application/octet-stream");
    }

    #[test]
    fn test_content_type_for_path_without_extension() {
        assert_eq!(content_type_for("/README"), "application/octet-stream");
    }
}
