use tailbar::{Error, Geometry, ProgressBar, Style};

const TERM: Geometry = Geometry {
    rows: 5,
    columns: 41,
};

fn text(bar: &ProgressBar<Vec<u8>>) -> String {
    String::from_utf8_lossy(bar.get_ref()).into_owned()
}

#[test]
fn typical_loop() {
    let total = 8;
    let mut bar = ProgressBar::with_output(total, Style::default(), TERM, Vec::new()).unwrap();
    assert_eq!(20, bar.bar_width());

    for i in 0..total {
        bar.update(i + 1).unwrap();
    }

    assert!(bar.is_done());
    assert_eq!("Progress: [100%]####################|", bar.line());

    bar.clear().unwrap();
    let out = text(&bar);
    assert!(out.starts_with("\n\x1B7\x1B[0;4r\x1B8\x1B[1A"));
    assert!(out.contains("\x1B7\x1B[5;0fProgress: [ 12%]##                  |\x1B8"));
    assert!(out.contains("\x1B7\x1B[5;0fProgress: [ 50%]##########          |\x1B8"));
    assert!(out.ends_with("\x1B7\x1B[0;5r\x1B[5;0f\x1B[0K\x1B8"));
}

#[test]
fn labels_shift_the_bar() {
    let style = Style::default().with_label("Up").with_empty('.');
    assert_eq!(10, style.prefix_width());

    let mut bar = ProgressBar::with_output(3, style, TERM, Vec::new()).unwrap();
    assert_eq!(26, bar.bar_width());

    bar.update(1).unwrap();
    assert_eq!(
        format!("Up: [ 33%]{}{}|", "#".repeat(8), ".".repeat(18)),
        bar.line()
    );
}

#[test]
fn errors_read_well() {
    let narrow = Geometry {
        rows: 5,
        columns: 10,
    };
    let e = ProgressBar::with_output(3, Style::default(), narrow, Vec::new())
        .err()
        .unwrap();
    assert_eq!(
        "terminal is 10 columns wide but at least 21 are needed",
        e.to_string()
    );

    let e = ProgressBar::with_output(0, Style::default(), TERM, Vec::new())
        .err()
        .unwrap();
    assert_eq!("progress total must be greater than zero", e.to_string());
}

#[test]
fn cleared_bar_is_inert() {
    let mut bar = ProgressBar::with_output(3, Style::default(), TERM, Vec::new()).unwrap();
    bar.update(2).unwrap();
    bar.clear().unwrap();

    assert!(bar.is_cleared());
    assert_eq!(Geometry::default(), bar.geometry());
    assert!(matches!(bar.inc_and_draw(1), Err(Error::Cleared)));
}
