// WiFi Tasks - Verbindet mit WLAN und überwacht den Link
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice};

use esp_core::{LinkEvent, LinkTracker};

use crate::config::{LINK_POLL_INTERVAL_MS, WIFI_PASSWORD, WIFI_RETRY_DELAY_SECS, WIFI_SSID};

/// WiFi Connection Task
///
/// Managed die WiFi-Verbindung:
/// - Verbindet mit dem konfigurierten Access Point (Station Mode)
/// - Wartet auf Disconnect-Events und reconnected automatisch
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            info!("WiFi: Configuring and starting...");

            // Station Mode mit SSID/Passwort aus config.rs
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            info!("WiFi: Started successfully");
        }

        // Connect to AP
        info!("WiFi: Connecting to '{}'...", WIFI_SSID);
        match controller.connect_async().await {
            Ok(_) => {
                info!("WiFi: Connected successfully!");
            }
            Err(e) => {
                error!("WiFi: Connection failed: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }
        }

        // Wait for disconnect
        info!("WiFi: Waiting for disconnect event...");
        controller
            .wait_for_event(esp_radio::wifi::WifiEvent::StaDisconnected)
            .await;
        warn!("WiFi: Disconnected from AP, will retry...");

        Timer::after(Duration::from_secs(2)).await;
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete und managed den TCP/IP Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Link Monitor Task
///
/// Pollt den Link-Status und loggt jede Transition genau einmal:
/// - Connect: IP-Adresse, Gateway und DNS (sobald DHCP fertig ist)
/// - Disconnect: eine einzelne Meldung
///
/// Die Flanken-Erkennung selbst ist pure Logik (esp-core `LinkTracker`)
/// und wird auf dem Host getestet.
#[embassy_executor::task]
pub async fn link_monitor_task(stack: &'static Stack<'static>) {
    let mut tracker = LinkTracker::new();

    loop {
        // "Verbunden" heißt hier: Link up UND IPv4-Konfiguration vom DHCP
        let link_up = stack.is_link_up() && stack.config_v4().is_some();

        match tracker.update(link_up) {
            Some(LinkEvent::Connected) => {
                if let Some(config) = stack.config_v4() {
                    info!("WiFi connected: {}", Debug2Format(&config.address.address()));
                    info!("  Gateway: {}", Debug2Format(&config.gateway));
                    info!("  DNS:     {}", Debug2Format(&config.dns_servers));
                }
            }
            Some(LinkEvent::Disconnected) => {
                info!("WiFi disconnected.");
            }
            None => {}
        }

        Timer::after(Duration::from_millis(LINK_POLL_INTERVAL_MS)).await;
    }
}
