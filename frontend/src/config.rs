/// Height of the sticky tab bar. Scroll math treats this band as covered.
pub const HEADER_OFFSET: f64 = 72.0;

pub const RESERVATION_TABLE: &str = "dasoni-reservations";

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321")  // Local supabase stack
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}
