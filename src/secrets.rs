/// Secrets the villa site needs, in the order they are reported
pub const REQUIRED_SECRETS: &[&str] = &[
    "VITE_SUPABASE_URL",
    "VITE_SUPABASE_ANON_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
    "VITE_GUESTY_API_KEY",
    "VITE_GUESTY_BASE_URL",
    "GUESTY_CLIENT_ID",
    "GUESTY_CLIENT_SECRET",
    "GUESTY_API_KEY",
    "GUESTY_LISTING_ID",
];

/// Owned copy of [`REQUIRED_SECRETS`], for callers that build their own list
pub fn default_names() -> Vec<String> {
    REQUIRED_SECRETS.iter().map(|name| name.to_string()).collect()
}
