#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Link placed in acknowledgement emails sent from the contact form.
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://www.trivex.com"
}
