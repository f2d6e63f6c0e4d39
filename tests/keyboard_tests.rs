// Host-side tests for the reserved-key predicate.
// The main crate is wasm-only, so we include the module directly; the DOM
// wiring it contains compiles on the host but is never called here.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod painter {
        include!("../src/core/painter.rs");
    }
    pub mod population {
        include!("../src/core/population.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub use scene::Scene;
}

mod keyboard {
    include!("../src/events/keyboard.rs");
}

use keyboard::is_reserved_key;

#[test]
fn function_keys_for_browser_tools_are_reserved() {
    assert!(is_reserved_key("F5", false, false));
    assert!(is_reserved_key("F12", false, false));
}

#[test]
fn modifier_combos_are_reserved_regardless_of_key() {
    assert!(is_reserved_key("r", true, false)); // ctrl+R reload
    assert!(is_reserved_key("c", true, false));
    assert!(is_reserved_key("r", false, true)); // cmd+R reload
    assert!(is_reserved_key("ArrowUp", true, true));
}

#[test]
fn ordinary_creative_input_is_not_reserved() {
    for key in ["a", "Z", " ", "Enter", "ArrowLeft", "5", "?", "F1"] {
        assert!(!is_reserved_key(key, false, false), "{key} should feed the art");
    }
}
