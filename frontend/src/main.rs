//! Entry point for the WASM application

pub fn main() {
    pdf_upload::mount();
}
