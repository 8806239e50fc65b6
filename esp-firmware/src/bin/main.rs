// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, DhcpConfig, Stack, StackResources};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use esp_webserver_test::config::{EXTRA_HEAP_SIZE, NETWORK_HOSTNAME, WIFI_HEAP_SIZE};
use esp_webserver_test::tasks::deferred;
use esp_webserver_test::tasks::{
    connection_task, http_server_task, link_monitor_task, mdns_responder_task, net_task,
};
use esp_webserver_test::web::{ASSETS, TEST_DATA};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point - Variante mit Wildcard-Downloads und deferred uc2
///
/// Initialisiert Hardware und WiFi, spawnt die Tasks und bedient danach
/// im Main-Loop den deferred Download-Slot.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // DHCP mit Netzwerk-Hostname (Option 12)
    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Some(NETWORK_HOSTNAME.try_into().expect("Hostname too long"));

    // Static resources für embassy-net
    // 8 Sockets: 4x HTTP-Listener + mDNS (UDP) + DHCP + Reserve
    static RESOURCES: static_cell::StaticCell<StackResources<8>> = static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(dhcp_config),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Spawn WiFi Tasks
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(link_monitor_task(stack)).unwrap();

    // Spawn HTTP Server Tasks (4x für concurrent connections)
    // Jede Task-Instanz kann eine Connection gleichzeitig handeln
    for task_id in 0..4 {
        spawner.spawn(http_server_task(task_id, stack)).unwrap();
    }

    // Spawn mDNS Responder Task (für webservertest.local Hostname)
    spawner.spawn(mdns_responder_task(stack)).unwrap();

    // Eingebettete Dateien statt Flash-Dateisystem
    info!(
        "Static assets: {} files, {} kb",
        ASSETS.count(),
        ASSETS.total_bytes() / 1024
    );
    info!(
        "Test data: {} files, {} kb",
        TEST_DATA.count(),
        TEST_DATA.total_bytes() / 1024
    );
    info!("System is up.");

    // Main-Loop: bedient den deferred Download-Slot (uc2)
    loop {
        deferred::service_next().await;
    }
}
