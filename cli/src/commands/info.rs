use roster_common::config::Config;

use crate::terminal::print;

pub fn info(cfg: &Config) {
    let details: [(&str, String); 4] = [
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
        ("Method", "GET".to_string()),
        ("Endpoint", cfg.endpoint_url()),
        ("Format", "JSON { employees: [{ name, profile }] }".to_string()),
    ];

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in &details {
        print::aligned_line(key, value, key_width);
    }
}
