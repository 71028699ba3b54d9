use super::*;

#[test]
fn base_joins_origin_and_path() {
    let location = PageLocation::new("https://x", "/y");
    assert_eq!(location.base(), "https://x/y");
}

#[test]
fn base_keeps_trailing_slash_of_root_path() {
    let location = PageLocation::new("http://localhost:3000", "/");
    assert_eq!(location.base(), "http://localhost:3000/");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_is_none_outside_browser() {
    assert_eq!(current(), None);
}
