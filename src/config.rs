//! Where the inquiry submission endpoint lives.

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001" // local dev server
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // same-origin in production
}
