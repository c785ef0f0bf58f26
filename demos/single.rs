use std::time::Duration;
use tailbar::ProgressBar;

fn main() -> tailbar::Result<()> {
    println!("Starting bar...");

    let mut bar = ProgressBar::new(50)?;

    for n in 0..=50 {
        bar.update(n)?;
        std::thread::sleep(Duration::from_millis(60));
    }

    bar.clear()?;
    println!("Complete!");

    Ok(())
}
