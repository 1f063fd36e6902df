//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use casper_standards;

fn main() {
    // Compilation itself is driven by odra-build; the binary only links the crate
}
