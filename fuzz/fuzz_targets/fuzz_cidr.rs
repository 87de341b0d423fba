#![no_main]

use iotsim::domain::value_objects::Cidr;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Anything that parses must display back to something that parses the same
        if let Ok(cidr) = raw.parse::<Cidr>() {
            let again: Cidr = cidr.to_string().parse().unwrap();
            assert_eq!(cidr, again);
        }
    }
});
