#![no_main]

use std::path::Path;

use fpsync::domain::value_objects::ExcludePatterns;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (content, item) = data;
    if let Ok(patterns) =
        ExcludePatterns::from_content(Path::new("/home/me"), Path::new("/home/me/.x"), content)
    {
        let _ = patterns.excludes_item(item);
    }
});
