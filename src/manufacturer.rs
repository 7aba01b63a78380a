// Hebrew manufacturer names -> lowercase English slugs
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::warn;

const HEBREW_TO_ENGLISH: &[(&str, &str)] = &[
    ("פורד", "ford"),
    ("טויוטה", "toyota"),
    ("הונדה", "honda"),
    ("ניסאן", "nissan"),
    ("ניסן", "nissan"),
    ("מיצובישי", "mitsubishi"),
    ("מיצובישי-פוג'ו", "mitsubishi"),
    ("מרצדס", "mercedes-benz"),
    ("מרצדס-בנץ", "mercedes-benz"),
    ("BMW", "bmw"),
    ("אאודי", "audi"),
    ("פולקסווגן", "volkswagen"),
    ("יונדאי", "hyundai"),
    ("קיה", "kia"),
    ("מזדה", "mazda"),
    ("סובארו", "subaru"),
    ("לקסוס", "lexus"),
    ("אינפיניטי", "infiniti"),
    ("וולוו", "volvo"),
    ("פיאט", "fiat"),
    ("אלפא רומיאו", "alfa-romeo"),
    ("פיג'ו", "peugeot"),
    ("רנו", "renault"),
    ("סיטרואן", "citroen"),
    ("סקודה", "skoda"),
    ("סיאט", "seat"),
    ("לנד רובר", "land-rover"),
    ("ג'יפ", "jeep"),
    ("דודג'", "dodge"),
    ("שברולט", "chevrolet"),
    ("קדילאק", "cadillac"),
    ("לינקולן", "lincoln"),
    ("פורשה", "porsche"),
    ("מיני", "mini"),
    ("יגואר", "jaguar"),
    ("בנטלי", "bentley"),
    ("רולס רויס", "rolls-royce"),
    ("מזראטי", "maserati"),
    ("למבורגיני", "lamborghini"),
    ("פרארי", "ferrari"),
    ("אופל", "opel"),
    ("דאציה", "dacia"),
];

static MANUFACTURER_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HEBREW_TO_ENGLISH.iter().copied().collect());

// Only feeds the "unmapped" warning; never read for control flow.
static LOGGED_UNMAPPED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Resolves a manufacturer display name to the slug the tire-spec API expects.
///
/// Returns `None` for empty input. Unknown Hebrew names fall back to the
/// lowercased input and are logged once per process.
pub fn to_english(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if name.is_ascii() {
        return Some(name.to_lowercase());
    }

    if let Some(slug) = MANUFACTURER_MAP.get(name) {
        return Some(slug.to_lowercase());
    }

    log_unmapped(name);
    Some(name.to_lowercase())
}

fn log_unmapped(name: &str) {
    let mut seen = match LOGGED_UNMAPPED.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if seen.insert(name.to_string()) {
        warn!(manufacturer = %name, "No English mapping for manufacturer");
    }
}
