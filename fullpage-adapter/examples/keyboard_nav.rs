use fullpage::{NavigatorOptions, Slide};
use fullpage_adapter::{Controller, KeyCode, dispatch_code};

fn main() {
    // Example: keyboard-driven navigation, both typed and from DOM code strings.
    let mut c = Controller::new(
        NavigatorOptions::new().with_initial_heights(Some((3200, 800))),
    );
    for i in 0..4u64 {
        c.navigator_mut().register_slide(i, Slide::new(i * 800, 800));
    }

    let mut now_ms = 0u64;
    for key in [KeyCode::ArrowDown, KeyCode::PageDown, KeyCode::End, KeyCode::Home] {
        now_ms += 600;
        let handled = c.on_key(key, now_ms);
        println!(
            "{key:?}: handled={handled} index={} translate_y={}",
            c.navigator().current_index(),
            c.navigator().translate_y()
        );
    }

    // Raw DOM-style codes work too; unknown codes are left to the host.
    now_ms += 600;
    let handled = dispatch_code(c.navigator_mut(), "ArrowRight", now_ms);
    println!("ArrowRight (code): handled={handled}");
    let handled = dispatch_code(c.navigator_mut(), "KeyQ", now_ms);
    println!("KeyQ (code): handled={handled}");
}
