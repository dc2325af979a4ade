#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut router = hashroute::Router::new();

    for (pattern, item) in data.0 {
        if router.insert(pattern, item).is_err() {
            return;
        }
    }

    let _ = router.at(&data.1);
    let _ = hashroute::fragment::Query::parse(&data.1);
});
