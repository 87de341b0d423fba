#![no_main]

use std::path::Path;

use iotsim::infrastructure::DeferredIdentityProvisioner;
use iotsim::{emit, StackAssembler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((settings, _)) = iotsim::config::parse_with_warnings(content, Path::new("fuzz.toml"))
    else {
        return;
    };
    // A config that validates must always derive a plan
    if let Ok((config, _)) = settings.validate() {
        let plan = StackAssembler::new(DeferredIdentityProvisioner::new())
            .assemble(&config)
            .and_then(|topology| emit(&topology))
            .and_then(|graph| graph.into_plan());
        assert!(plan.is_ok(), "valid config failed to derive: {:?}", plan.err());
    }
});
