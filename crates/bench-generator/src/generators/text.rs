//! Text value generators backed by fixed word pools.
//!
//! All pools are ASCII so byte-length truncation never splits a character.

use super::{numeric, pick};
use bench_core::ranges::{
    IP_OCTET_MAX, IP_OCTET_MIN, MESSAGE_MAX_LEN, PAGE_TITLE_MAX_LEN, PROPERTY_NUMBER_MAX,
    PROPERTY_NUMBER_MIN,
};
use bench_core::PropertyValue;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace", "Guido",
    "Hedy", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Sophie", "Tim", "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Berners-Lee", "Dijkstra", "Hamilton", "Hopper", "Kernighan", "Knuth", "Lamarr",
    "Liskov", "Lovelace", "Matsumoto", "Perlman", "Ritchie", "Rossum", "Shannon", "Thompson",
    "Torvalds", "Turing", "Wilson", "Wirth",
];

const HOSTS: &[&str] = &[
    "example.com",
    "shop.example.com",
    "docs.example.org",
    "blog.example.net",
    "app.example.io",
];

const PATH_SEGMENTS: &[&str] = &[
    "products", "pricing", "checkout", "cart", "account", "settings", "search", "blog", "help",
    "about", "news", "signup",
];

const WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "minim",
    "veniam",
    "quis",
    "nostrud",
];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
];

const TIMEZONES: &[&str] = &[
    "UTC",
    "Europe/London",
    "Europe/Berlin",
    "Europe/Paris",
    "America/New_York",
    "America/Los_Angeles",
    "America/Sao_Paulo",
    "Asia/Tokyo",
    "Asia/Shanghai",
    "Australia/Sydney",
];

const CITIES: &[&str] = &[
    "London",
    "Berlin",
    "Paris",
    "Madrid",
    "New York",
    "San Francisco",
    "Sao Paulo",
    "Tokyo",
    "Shanghai",
    "Sydney",
];

const COUNTRY_CODES: &[&str] = &["GB", "DE", "FR", "ES", "US", "BR", "JP", "CN", "AU", "CA"];

const PROPERTY_KEYS: &[&str] = &[
    "plan",
    "campaign",
    "variant",
    "experiment",
    "cart_value",
    "items",
    "coupon",
    "is_trial",
    "source",
    "medium",
];

/// Random "First Last" name.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Deterministic name for the `index`-th record.
pub fn sequential_name(index: usize) -> String {
    format!("user_{index}")
}

/// Random `https://` URL.
pub fn url<R: Rng>(rng: &mut R) -> String {
    format!(
        "https://{}/{}/{}",
        pick(rng, HOSTS),
        pick(rng, PATH_SEGMENTS),
        pick(rng, PATH_SEGMENTS)
    )
}

/// Capitalized title of 1..=8 words, at most `PAGE_TITLE_MAX_LEN` bytes.
pub fn page_title<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(1..=8);
    let title = words(rng, count);
    let mut chars = title.chars();
    let mut title = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    title.truncate(PAGE_TITLE_MAX_LEN);
    title
}

/// Free text of 0..=60 words, at most `MESSAGE_MAX_LEN` bytes.
pub fn message<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(0..=60);
    let mut text = words(rng, count);
    text.truncate(MESSAGE_MAX_LEN);
    text
}

fn words<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| *pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn user_agent<R: Rng>(rng: &mut R) -> String {
    pick(rng, USER_AGENTS).to_string()
}

/// Dotted IPv4 address with every octet in `1..=254`.
pub fn ip_address<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = std::array::from_fn(|_| {
        numeric::int_range(rng, IP_OCTET_MIN, IP_OCTET_MAX)
    });
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

pub fn timezone<R: Rng>(rng: &mut R) -> String {
    pick(rng, TIMEZONES).to_string()
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn country_code<R: Rng>(rng: &mut R) -> String {
    pick(rng, COUNTRY_CODES).to_string()
}

/// Distinct key for the event properties map.
pub fn property_key<R: Rng>(rng: &mut R) -> String {
    pick(rng, PROPERTY_KEYS).to_string()
}

/// Random scalar: string, number or bool with equal probability.
pub fn property_value<R: Rng>(rng: &mut R) -> PropertyValue {
    match rng.random_range(0..3) {
        0 => PropertyValue::Text(words(rng, 2)),
        1 => PropertyValue::Number(numeric::float_range(
            rng,
            PROPERTY_NUMBER_MIN,
            PROPERTY_NUMBER_MAX,
            2,
        )),
        _ => PropertyValue::Bool(rng.random_bool(0.5)),
    }
}

/// Number of distinct property keys available.
pub fn property_key_pool_len() -> usize {
    PROPERTY_KEYS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = full_name(&mut rng);
        assert!(name.contains(' '));
        assert!(name.len() >= 5);
    }

    #[test]
    fn test_sequential_name() {
        assert_eq!(sequential_name(0), "user_0");
        assert_eq!(sequential_name(12), "user_12");
    }

    #[test]
    fn test_ip_address_octets() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let ip = ip_address(&mut rng);
            let octets: Vec<u8> = ip.split('.').map(|o| o.parse().unwrap()).collect();
            assert_eq!(octets.len(), 4);
            assert!(octets.iter().all(|o| (1..=254).contains(o)));
        }
    }

    #[test]
    fn test_text_lengths() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let title = page_title(&mut rng);
            assert!(!title.is_empty() && title.len() <= PAGE_TITLE_MAX_LEN);
            assert!(title.chars().next().unwrap().is_ascii_uppercase());
            assert!(message(&mut rng).len() <= MESSAGE_MAX_LEN);
        }
    }

    #[test]
    fn test_url_scheme() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(url(&mut rng).starts_with("https://"));
    }

    #[test]
    fn test_country_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = country_code(&mut rng);
        assert_eq!(code.len(), 2);
        assert!(code.chars().all(|c| c.is_ascii_uppercase()));
    }
}
