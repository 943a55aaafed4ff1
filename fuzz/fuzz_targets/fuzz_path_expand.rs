#![no_main]

use fpsync::domain::ports::StaticEnv;
use fpsync::domain::services::{join, PathResolver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (base, segment) = data;
    let resolver = PathResolver::new(
        StaticEnv::new()
            .with_home("/home/me")
            .with_var("HOME", "/home/me"),
    );

    let expanded = resolver.expand(base);
    let joined = join(&expanded, segment);

    if !segment.is_empty() && !base.is_empty() {
        assert_eq!(joined.ends_with('/'), segment.ends_with('/'));
    }
});
