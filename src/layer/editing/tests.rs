use crate::error::CanvasError;
use crate::layer::Layer;
use crate::loc::Location;

fn lines(layer: &Layer) -> Vec<String> {
    layer.rows().iter().map(ToString::to_string).collect()
}

/// A layer holding `text`, one line per row, grown to fit.
fn layer_of(text: &[&str]) -> Layer {
    let mut layer = Layer::default();
    for (y, line) in text.iter().enumerate() {
        layer.insert_str(line, Location::new(0, y)).unwrap();
    }
    layer
}

// --- insert_str ---

#[test]
fn insert_into_big_enough_layer() {
    let mut layer = Layer::new(6, 1, ' ');
    layer.insert_str("fooey", Location::new(1, 0)).unwrap();
    assert_eq!(lines(&layer), vec![" fooey"]);
}

#[test]
fn insert_exact_fit_does_not_grow() {
    let mut layer = Layer::new(6, 2, '.');
    layer.insert_str("fooey", Location::new(1, 1)).unwrap();
    assert_eq!(layer.size_x(), 6);
    assert_eq!(layer.size_y(), 2);
    assert_eq!(lines(&layer), vec!["......", ".fooey"]);
}

#[test]
fn insert_grows_in_x() {
    let mut layer = Layer::new(4, 1, ' ');
    layer.insert_str("fooey", Location::new(1, 0)).unwrap();
    assert_eq!(lines(&layer), vec![" fooey"]);
}

#[test]
fn insert_grows_in_y() {
    let mut layer = Layer::new(4, 1, ' ');
    layer.insert_str("fooey", Location::new(1, 1)).unwrap();
    assert_eq!(lines(&layer), vec!["      ", " fooey"]);
}

#[test]
fn insert_into_empty_layer() {
    let mut layer = Layer::default();
    layer.insert_str("fooey", Location::new(1, 0)).unwrap();
    assert_eq!(layer.rows()[0].as_slice(), &[' ', 'f', 'o', 'o', 'e', 'y']);
}

#[test]
fn insert_overwrites_existing_cells() {
    let mut layer = layer_of(&["abcdef"]);
    layer.insert_str("XY", Location::new(2, 0)).unwrap();
    assert_eq!(lines(&layer), vec!["abXYef"]);
}

#[test]
fn insert_grows_minimally() {
    let mut layer = Layer::new(3, 1, ' ');
    layer.insert_str("abcd", Location::new(1, 2)).unwrap();
    assert_eq!(layer.size_x(), 5);
    assert_eq!(layer.size_y(), 3);
}

#[test]
fn insert_empty_string_only_ensures_row() {
    let mut layer = Layer::new(2, 1, ' ');
    layer.insert_str("", Location::new(0, 2)).unwrap();
    assert_eq!(lines(&layer), vec!["  ", "  ", "  "]);
}

#[test]
fn insert_off_screen_leaves_grid_unchanged() {
    let mut layer = layer_of(&["abc"]).with_max_width(4);
    let before = layer.clone();
    let err = layer.insert_str("xyz", Location::new(2, 1)).unwrap_err();
    assert_eq!(
        err,
        CanvasError::OffScreen {
            columns: 5,
            max_width: 4
        }
    );
    assert_eq!(layer, before);
}

#[test]
fn insert_counts_chars_not_bytes() {
    let mut layer = Layer::default();
    layer.insert_str("héllo", Location::ORIGIN).unwrap();
    assert_eq!(layer.size_x(), 5);
    assert_eq!(layer[Location::new(1, 0)], 'é');
}

// --- merge ---

#[test]
fn merge_paints_only_non_default_cells() {
    let mut base = layer_of(&["abc"]);
    let mut overlay = Layer::new(3, 0, ' ');
    overlay.insert_str("d", Location::new(1, 0)).unwrap();
    assert_eq!(lines(&overlay), vec![" d"]);

    base.merge(&overlay, Location::ORIGIN).unwrap();
    assert_eq!(lines(&base), vec!["adc"]);
}

#[test]
fn merge_at_offset_grows_base() {
    let mut base = layer_of(&["abc"]);
    let mut overlay = Layer::new(2, 0, ' ');
    overlay.insert_str("d", Location::new(1, 0)).unwrap();
    overlay.insert_str("ef", Location::new(0, 1)).unwrap();

    base.merge(&overlay, Location::new(1, 0)).unwrap();
    assert_eq!(lines(&base), vec!["abd", " ef"]);
}

#[test]
fn merge_of_all_default_layer_is_noop() {
    let mut base = layer_of(&["abc", "def"]);
    let before = base.clone();
    let blank = Layer::new(3, 2, '#');
    base.merge(&blank, Location::ORIGIN).unwrap();
    assert_eq!(base, before);
}

#[test]
fn merge_transparency_uses_source_default() {
    let mut base = Layer::new(3, 1, '.');
    let mut overlay = Layer::new(3, 1, '#');
    overlay.insert_str("x", Location::new(2, 0)).unwrap();
    base.merge(&overlay, Location::ORIGIN).unwrap();
    assert_eq!(lines(&base), vec!["..x"]);
}

#[test]
fn merge_paints_grown_fill_of_custom_default_source() {
    // Growth fills with the generic space, which is opaque for a
    // layer whose own default is something else.
    let mut base = layer_of(&["abc"]);
    let mut overlay = Layer::new(1, 1, '#');
    overlay.add_col(1);
    base.merge(&overlay, Location::ORIGIN).unwrap();
    assert_eq!(lines(&base), vec!["a c"]);
}

#[test]
fn merge_off_screen_leaves_grid_unchanged() {
    let mut base = layer_of(&["abc"]);
    let before = base.clone();
    let overlay = layer_of(&["xyz"]);
    assert!(matches!(
        base.merge(&overlay, Location::new(78, 3)),
        Err(CanvasError::OffScreen { columns: 81, .. })
    ));
    assert_eq!(base, before);
}

#[test]
fn merge_empty_layer_below_grid_adds_rows() {
    let mut base = layer_of(&["abc"]);
    base.merge(&Layer::default(), Location::new(0, 3)).unwrap();
    assert_eq!(lines(&base), vec!["abc", "   ", "   "]);
}

#[test]
fn merge_clone_into_itself() {
    let mut base = layer_of(&["ab"]);
    let copy = base.clone();
    base.merge(&copy, Location::new(2, 1)).unwrap();
    assert_eq!(lines(&base), vec!["ab  ", "  ab"]);
}
