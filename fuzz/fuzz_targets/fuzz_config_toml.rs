#![no_main]

use std::path::Path;

use fpsync::config::parse_with_warnings;
use fpsync::SyncDefaults;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and planning must never panic
        if let Ok((config, _)) = parse_with_warnings(content, Path::new("fpsyncrc.toml")) {
            let _ = config.plan(&SyncDefaults::new("server", "/home/me").with_excludes("~/.x"));
        }
    }
});
