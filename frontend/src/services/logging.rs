use log::Level;

/// Route `log` records to the browser console
pub fn init() {
    wasm_logger::init(wasm_logger::Config::new(default_level()));
}

/// Max level for this build: chatty in debug builds, info otherwise
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}
