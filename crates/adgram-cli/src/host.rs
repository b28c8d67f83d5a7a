//! One-way outbound channel to the embedding host application.
//!
//! When `ADGRAM_HOST_EVENTS` is set, glue commands emit a single JSON line
//! per completed action for external automation to consume. The sync engine
//! never depends on this channel.

use tracing::debug;

pub fn emit(action: &str, data: serde_json::Value) {
    if std::env::var("ADGRAM_HOST_EVENTS").is_err() {
        debug!("Host events disabled, dropping '{action}'");
        return;
    }

    let payload = serde_json::json!({
        "source": "adgram",
        "action": action,
        "data": data,
    });
    println!("{payload}");
}
