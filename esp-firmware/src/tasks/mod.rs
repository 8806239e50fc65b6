// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// HTTP-Task und Main-Loop kommunizieren über den deferred Download-Slot.

pub mod deferred;
pub mod http;
pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::{http_server_basic_task, http_server_task};
pub use mdns::mdns_responder_task;
pub use wifi::{connection_task, link_monitor_task, net_task};
