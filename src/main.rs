//! # Hole ESP Demo Entry Point
//!
//! Calls into the library's `run()` to scan a generated world and tessellate the
//! holes it finds.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! HOLE_ESP_CONFIG='{"show": "Double", "display": "Outline"}' cargo run
//! ```

fn main() {
    hole_esp::run();
}
