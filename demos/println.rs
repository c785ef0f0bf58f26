//! Regular output scrolls above the bar while it stays on the last row.

use rand::Rng;
use std::time::Duration;
use tailbar::{ProgressBar, Style};

const NUM_IMAGES: usize = 124;

fn main() -> tailbar::Result<()> {
    println!("Starting bar...");

    let style = Style::default().with_label("Images").with_empty('-');
    let mut bar = ProgressBar::with_style(NUM_IMAGES, style)?;
    let mut rng = rand::thread_rng();

    for i in 0..NUM_IMAGES {
        std::thread::sleep(Duration::from_millis(25));

        // Simulate our download failing.
        if rng.gen_ratio(1, 20) {
            println!("Image #{:03}: Downloading failed.", i);
        }

        bar.inc_and_draw(1)?;
    }

    // No `clear` here: dropping the bar gives the last row back.
    drop(bar);
    println!("Complete!");

    Ok(())
}
