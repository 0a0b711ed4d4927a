//! WASM entry point
//!
//! This is the binary Trunk compiles. It installs the panic hook and hands
//! over to [`ppl_ui::run`].

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = ppl_ui::run() {
        web_sys::console::error_1(&format!("ppl-ui failed to start: {e}").into());
    }
}
