#![no_main]
use libfuzzer_sys::fuzz_target;

use argclass::classify::shape::{is_dash_prefixed, is_option};
use argclass::classify;

fuzz_target!(|data: &[u8]| {
    // Split the input on NUL into tokens, the way argv arrives from the OS.
    let text = String::from_utf8_lossy(data);
    let tokens: Vec<&str> = text.split('\0').collect();

    // `split` always yields at least one token, so EmptyInput cannot occur and
    // any Err is a broken invariant.
    let result = match classify(&tokens) {
        Ok(r) => r,
        Err(e) => panic!("classify failed on {:?}: {}", tokens, e),
    };

    for tok in tokens.iter().filter(|t| is_dash_prefixed(t)) {
        let as_option = result.options().contains_key(tok);
        let as_error = result.errors().iter().any(|e| e == tok);
        assert!(as_option ^ as_error, "{:?} placed in options={} errors={}", tok, as_option, as_error);
        assert_eq!(as_option, is_option(tok));
    }

    let bare = tokens.iter().filter(|t| !is_dash_prefixed(t)).count();
    assert!(result.commands().len() <= bare);
});
