// Example: observing slide changes through the on_change callback.
use fullpage::{Navigator, NavigatorOptions, Slide, SlideKey};

fn main() {
    let mut nav: Navigator<SlideKey> = Navigator::new(
        NavigatorOptions::new()
            .with_initial_heights(Some((1600, 800)))
            .with_on_change(Some(|nav: &Navigator<SlideKey>, prev, next| {
                if prev != next {
                    println!("slide {prev} -> {next} (translate_y={})", nav.translate_y());
                }
            })),
    );

    nav.register_slide(0, Slide::new(0, 800));
    nav.register_slide(1, Slide::new(800, 800));

    nav.goto(1, 0);
    nav.previous(1000);

    // Batched updates collapse into a single notification.
    nav.batch_update(|n| {
        n.set_heights(2000, 900);
        n.goto(1, 2000);
    });
}
