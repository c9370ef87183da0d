//! Entry point for the WASM application

pub fn main() {
    distance_matrix_frontend::start();
}
