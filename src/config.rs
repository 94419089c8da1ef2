#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:3001/lead"  // Local relay stub when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "https://formsubmit.co/ajax/hello@copycapture.studio"  // Production relay
}
